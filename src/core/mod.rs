pub mod benchmark;
pub mod primality;

pub use crate::domain::model::{ChatMessage, Mismatch, Timing};
pub use crate::domain::ports::ChatApi;
pub use crate::utils::error::Result;
