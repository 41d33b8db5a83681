// src/core/mod.rs — Submission lifecycle

pub mod controller;
pub mod state;
pub mod types;
