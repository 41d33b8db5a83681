// src/cli/doctor.rs — `hackjudge doctor`: configuration and endpoint checks

use crate::infra::config::Config;
use crate::infra::paths;
use crate::provider::ollama::OllamaGenerator;

pub async fn run_doctor(config: &Config) -> anyhow::Result<()> {
    println!("hackjudge doctor v{}", env!("CARGO_PKG_VERSION"));
    println!();

    let config_path = paths::config_file_path();
    match config_path {
        Some(ref p) if p.exists() => println!("  Config:   {}", p.display()),
        Some(ref p) => println!("  Config:   {} (not found, using defaults)", p.display()),
        None => println!("  Config:   no home directory, using defaults"),
    }
    println!("  Endpoint: {}", config.inference.endpoint);
    println!("  Model:    {}", config.inference.model);
    match config.inference.timeout() {
        Some(t) => println!("  Timeout:  {} ms", t.as_millis()),
        None => println!("  Timeout:  none"),
    }
    println!("  Mode:     {:?}", config.evaluation.mode);
    println!();

    eprint!("  Checking endpoint... ");
    let generator = OllamaGenerator::from_config(&config.inference);
    let models = match generator.probe().await {
        Ok(models) => {
            eprintln!("ok ({} model(s) installed)", models.len());
            models
        }
        Err(e) => {
            eprintln!("FAILED");
            eprintln!("    {}", e);
            anyhow::bail!("inference endpoint unreachable");
        }
    };

    eprint!("  Checking model... ");
    if OllamaGenerator::has_model(&models, &config.inference.model) {
        eprintln!("ok");
        Ok(())
    } else {
        eprintln!("MISSING");
        eprintln!("    Run `ollama pull {}`", config.inference.model);
        anyhow::bail!("model '{}' is not installed", config.inference.model)
    }
}
