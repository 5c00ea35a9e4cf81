use crate::config::toml_config::{BenchmarkFile, BenchmarkSettings};
use crate::core::primality::Implementation;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "prime-check")]
#[command(about = "Check whether a number is prime")]
pub struct CliConfig {
    #[arg(long, allow_negative_numbers = true, help = "Check this number instead of prompting")]
    pub number: Option<i64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "benchmark")]
#[command(about = "Compare the naive and optimized primality checks")]
pub struct BenchCliConfig {
    #[arg(long, help = "TOML file with iterations, numbers, baseline and candidate")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub iterations: Option<usize>,

    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub numbers: Vec<i64>,

    #[arg(long, value_enum)]
    pub baseline: Option<Implementation>,

    #[arg(long, value_enum)]
    pub candidate: Option<Implementation>,

    #[arg(long, help = "Print the report and logs as JSON")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl BenchCliConfig {
    /// Loads the config file (if any) and lets command-line flags override it.
    pub fn resolve(&self) -> Result<BenchmarkSettings> {
        let file = match &self.config {
            Some(path) => BenchmarkFile::from_file(path)?,
            None => BenchmarkFile::default(),
        };

        let mut settings = file.into_settings();
        if let Some(iterations) = self.iterations {
            settings.iterations = iterations;
        }
        if !self.numbers.is_empty() {
            settings.numbers = self.numbers.clone();
        }
        if let Some(baseline) = self.baseline {
            settings.baseline = baseline;
        }
        if let Some(candidate) = self.candidate {
            settings.candidate = candidate;
        }
        Ok(settings)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "chat_check")]
#[command(about = "Verify the chat-completion API key and endpoint")]
pub struct ChatCliConfig {
    #[arg(long, help = "Read OPENAI_* settings from this file instead of ./.env")]
    pub env_file: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::benchmark::DEFAULT_ITERATIONS;

    #[test]
    fn test_parse_negative_number() {
        let config = CliConfig::parse_from(["prime-check", "--number", "-7"]);
        assert_eq!(config.number, Some(-7));
        assert!(!config.verbose);
    }

    #[test]
    fn test_bench_flags_override_defaults() {
        let config = BenchCliConfig::parse_from([
            "benchmark",
            "--iterations",
            "5",
            "--numbers",
            "2,3,4",
            "--baseline",
            "optimized",
            "--candidate",
            "naive",
        ]);
        let settings = config.resolve().unwrap();

        assert_eq!(settings.iterations, 5);
        assert_eq!(settings.numbers, vec![2, 3, 4]);
        assert_eq!(settings.baseline, Implementation::Optimized);
        assert_eq!(settings.candidate, Implementation::Naive);
    }

    #[test]
    fn test_bench_negative_numbers_in_list() {
        let config = BenchCliConfig::parse_from(["benchmark", "--numbers", "-3,5"]);
        assert_eq!(config.numbers, vec![-3, 5]);

        let settings = config.resolve().unwrap();
        assert_eq!(settings.numbers, vec![-3, 5]);
    }

    #[test]
    fn test_chat_env_file_flag() {
        let config = ChatCliConfig::parse_from(["chat_check", "--env-file", "secrets.env"]);
        assert_eq!(config.env_file, Some(PathBuf::from("secrets.env")));
        assert!(ChatCliConfig::parse_from(["chat_check"]).env_file.is_none());
    }

    #[test]
    fn test_bench_without_flags_uses_defaults() {
        let config = BenchCliConfig::parse_from(["benchmark"]);
        let settings = config.resolve().unwrap();

        assert_eq!(settings.iterations, DEFAULT_ITERATIONS);
        assert_eq!(settings.baseline, Implementation::Naive);
        assert_eq!(settings.candidate, Implementation::Optimized);
        assert!(!config.json);
    }
}
