//! Shared domain types for the Solace gateway: the conversation data
//! model, the configuration tree, and the common error type.

pub mod config;
pub mod convo;
pub mod error;

pub use error::{Error, Result};
