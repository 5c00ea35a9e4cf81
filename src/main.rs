use clap::Parser;
use prime_check::app::interactive::{
    format_result, format_unexpected_error, run_session, SessionOutcome,
};
use prime_check::utils::logger;
use prime_check::{is_prime, CliConfig, PrimeError};
use tokio::io::BufReader;

async fn run(config: &CliConfig) -> Result<(), PrimeError> {
    if let Some(number) = config.number {
        println!("{}", format_result(number, is_prime(number)));
        return Ok(());
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Unable to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    match run_session(stdin, &mut stdout, shutdown).await? {
        SessionOutcome::Checked { number, is_prime } => {
            tracing::debug!("Session finished: {} prime={}", number, is_prime);
        }
        SessionOutcome::Interrupted => tracing::debug!("Session interrupted"),
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let exit_code = match run(&config).await {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(
                "❌ prime-check failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("{}", format_unexpected_error(&e));
            e.severity().exit_code()
        }
    };

    // a pending stdin read would otherwise keep the runtime alive after Ctrl-C
    std::process::exit(exit_code);
}
