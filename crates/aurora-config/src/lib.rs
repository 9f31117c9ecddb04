//! Configuration for the Aurora LOD demo.
//!
//! Runtime-configurable settings persist to disk as RON files, with CLI
//! overrides via clap and forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, SceneConfig};
pub use error::ConfigError;
