pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{BenchCliConfig, ChatCliConfig, CliConfig};

pub use adapters::chat::ChatClient;
pub use config::ChatConfig;
pub use crate::core::benchmark::{BenchmarkHarness, Comparison};
pub use crate::core::primality::{
    is_prime, is_prime_f64, is_prime_naive, is_prime_u64, isqrt, Implementation,
};
pub use utils::error::{PrimeError, Result};
