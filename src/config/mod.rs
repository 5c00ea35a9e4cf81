pub mod chat;
#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use chat::ChatConfig;
#[cfg(feature = "cli")]
pub use cli::{BenchCliConfig, ChatCliConfig, CliConfig};
pub use toml_config::{BenchmarkFile, BenchmarkSettings};
