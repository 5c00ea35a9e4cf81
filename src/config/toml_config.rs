use crate::core::benchmark::{BenchmarkHarness, DEFAULT_ITERATIONS, DEFAULT_TEST_NUMBERS};
use crate::core::primality::Implementation;
use crate::utils::error::{PrimeError, Result};
use crate::utils::validation::{validate_non_empty_list, validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Benchmark settings as written in a TOML file. Every key is optional.
///
/// ```toml
/// iterations = ${BENCH_ITERATIONS}
/// numbers = [2, 3, 97, 999983]
/// baseline = "naive"
/// candidate = "optimized"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BenchmarkFile {
    pub iterations: Option<usize>,
    pub numbers: Option<Vec<i64>>,
    pub baseline: Option<Implementation>,
    pub candidate: Option<Implementation>,
}

impl BenchmarkFile {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PrimeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PrimeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BENCH_ITERATIONS})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PrimeError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn into_settings(self) -> BenchmarkSettings {
        let defaults = BenchmarkSettings::default();
        BenchmarkSettings {
            iterations: self.iterations.unwrap_or(defaults.iterations),
            numbers: self.numbers.unwrap_or(defaults.numbers),
            baseline: self.baseline.unwrap_or(defaults.baseline),
            candidate: self.candidate.unwrap_or(defaults.candidate),
        }
    }
}

/// Fully resolved benchmark settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkSettings {
    pub iterations: usize,
    pub numbers: Vec<i64>,
    pub baseline: Implementation,
    pub candidate: Implementation,
}

impl Default for BenchmarkSettings {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            numbers: DEFAULT_TEST_NUMBERS.to_vec(),
            baseline: Implementation::Naive,
            candidate: Implementation::Optimized,
        }
    }
}

impl BenchmarkSettings {
    pub fn harness(&self) -> Result<BenchmarkHarness> {
        self.validate()?;
        BenchmarkHarness::new(self.numbers.clone(), self.iterations)
    }
}

impl Validate for BenchmarkSettings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("iterations", self.iterations, 1)?;
        validate_non_empty_list("numbers", &self.numbers)?;
        if self.baseline == self.candidate {
            tracing::warn!(
                "Baseline and candidate are both '{}'; the speedup will be close to 1",
                self.baseline
            );
        }
        Ok(())
    }
}
