// src/main.rs — HackJudge entry point

use clap::Parser;

use hackjudge::cli::{Cli, Commands};
use hackjudge::core::types::KNOWN_THEMES;
use hackjudge::infra::config::Config;
use hackjudge::infra::logger;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Respects RUST_LOG
    logger::init_logging(logger::level_for_verbosity(cli.verbose));

    if let Err(e) = run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Falls back to defaults if no config.toml
    let mut config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    match cli.command {
        Commands::Evaluate(ref args) => {
            hackjudge::cli::evaluate::run_evaluate(args, &config).await
        }
        Commands::Themes => {
            for theme in KNOWN_THEMES {
                println!("{}", theme);
            }
            Ok(())
        }
        Commands::Doctor => hackjudge::cli::doctor::run_doctor(&config).await,
    }
}
