use crate::core::primality::Implementation;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Wall-clock time one implementation took over the whole input set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub implementation: Implementation,
    pub elapsed: Duration,
}

impl Timing {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// An input on which the two compared implementations disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub input: i64,
    pub baseline: bool,
    pub candidate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}
