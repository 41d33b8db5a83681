// src/evaluator/mod.rs — Prompt construction and model-output coercion

pub mod extract;
pub mod normalize;
pub mod prompt;
