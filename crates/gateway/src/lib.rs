//! The Solace gateway: HTTP shell, CLI, and the per-request response
//! pipeline (annotate → prompt → LLM → reply | fallback).

pub mod api;
pub mod bootstrap;
pub mod cli;
pub mod runtime;
pub mod state;
