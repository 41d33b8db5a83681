// src/lib.rs — Library root for HackJudge

pub mod cli;
pub mod core;
pub mod evaluator;
pub mod infra;
pub mod provider;
