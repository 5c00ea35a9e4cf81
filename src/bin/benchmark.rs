use clap::Parser;
use prime_check::app::report::{render_text, BenchmarkReport};
use prime_check::utils::logger;
use prime_check::{BenchCliConfig, PrimeError};

fn run(config: &BenchCliConfig) -> Result<bool, PrimeError> {
    let settings = config.resolve()?;
    let harness = settings.harness()?;

    tracing::info!(
        "Benchmarking {} vs {}: {} numbers x {} iterations",
        settings.baseline,
        settings.candidate,
        harness.numbers().len(),
        harness.iterations()
    );

    let comparison = harness.compare(settings.baseline, settings.candidate);

    if config.json {
        println!("{}", BenchmarkReport::from_comparison(&comparison).to_json()?);
    } else {
        println!("{}", render_text(&comparison));
    }

    if let Err(e) = comparison.ensure_consistent() {
        tracing::error!(
            "❌ {} of {} inputs disagree, first: {}",
            comparison.mismatches.len(),
            comparison.input_count,
            e
        );
        return Ok(false);
    }
    tracing::info!("✅ Speedup {:.2}x", comparison.speedup());
    Ok(true)
}

fn main() {
    let config = BenchCliConfig::parse();

    if config.json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("Benchmark config: {:?}", config);

    match run(&config) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            tracing::error!(
                "❌ Benchmark failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code().max(1));
        }
    }
}
