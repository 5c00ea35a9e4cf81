use crate::core::benchmark::Comparison;
use crate::core::primality::Implementation;
use crate::domain::model::{Mismatch, Timing};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

const BANNER_WIDTH: usize = 60;

#[derive(Debug, Clone, Serialize)]
pub struct TimingReport {
    pub implementation: Implementation,
    pub seconds: f64,
}

impl From<&Timing> for TimingReport {
    fn from(timing: &Timing) -> Self {
        Self {
            implementation: timing.implementation,
            seconds: timing.seconds(),
        }
    }
}

/// Serializable summary of one comparison run.
///
/// An infinite speedup (candidate measured at zero) serializes as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkReport {
    pub generated_at: DateTime<Utc>,
    pub iterations: usize,
    pub input_count: usize,
    pub baseline: TimingReport,
    pub candidate: TimingReport,
    pub speedup: f64,
    pub improvement_percent: f64,
    pub consistent: bool,
    pub mismatches: Vec<Mismatch>,
}

impl BenchmarkReport {
    pub fn from_comparison(comparison: &Comparison) -> Self {
        Self {
            generated_at: Utc::now(),
            iterations: comparison.iterations,
            input_count: comparison.input_count,
            baseline: TimingReport::from(&comparison.baseline),
            candidate: TimingReport::from(&comparison.candidate),
            speedup: comparison.speedup(),
            improvement_percent: comparison.improvement_percent(),
            consistent: comparison.is_consistent(),
            mismatches: comparison.mismatches.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Console rendering: timings, speedup, then the correctness check.
pub fn render_text(comparison: &Comparison) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let baseline = comparison.baseline.implementation;
    let candidate = comparison.candidate.implementation;

    let mut lines = vec![
        banner.clone(),
        "Prime Number Checker Performance Benchmark".to_string(),
        banner.clone(),
        format!(
            "Testing {} numbers, {} iterations each",
            comparison.input_count, comparison.iterations
        ),
        String::new(),
        format!(
            "{} implementation: {:.4} seconds",
            capitalize(baseline.name()),
            comparison.baseline.seconds()
        ),
        format!(
            "{} implementation: {:.4} seconds",
            capitalize(candidate.name()),
            comparison.candidate.seconds()
        ),
        String::new(),
        banner.clone(),
        format!("Speedup: {:.2}x faster", comparison.speedup()),
        format!("Improvement: {:.1}% faster", comparison.improvement_percent()),
        banner,
        String::new(),
        "Verifying correctness...".to_string(),
    ];

    if comparison.is_consistent() {
        lines.push("✓ All results match - optimization is correct!".to_string());
    } else {
        lines.extend(comparison.mismatches.iter().map(|m| {
            format!(
                "ERROR: Mismatch for {}: {}={}, {}={}",
                m.input, baseline, m.baseline, candidate, m.candidate
            )
        }));
    }

    lines.join("\n")
}
