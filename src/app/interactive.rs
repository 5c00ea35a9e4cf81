use crate::core::primality::is_prime;
use crate::utils::error::{PrimeError, Result};
use std::future::Future;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const PROMPT: &str = "Enter a number to check: ";
pub const FAREWELL: &str = "\n\nProgram interrupted by user. Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Checked { number: i64, is_prime: bool },
    /// Shutdown signal or end of input before a valid number arrived.
    Interrupted,
}

/// Parses a line of user input as a signed integer, ignoring surrounding whitespace.
pub fn parse_number(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|e| PrimeError::InvalidInput {
            input: trimmed.to_string(),
            reason: e.to_string(),
        })
}

pub fn format_result(number: i64, is_prime: bool) -> String {
    if is_prime {
        format!("{} is a prime number.", number)
    } else {
        format!("{} is not a prime number.", number)
    }
}

/// What the binary prints when a session fails for a reason other than bad input.
pub fn format_unexpected_error(error: &PrimeError) -> String {
    format!(
        "\nAn unexpected error occurred: {}\n💡 {}",
        error.user_friendly_message(),
        error.recovery_suggestion()
    )
}

async fn write_line<W>(writer: &mut W, text: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

/// Prompts until one valid integer is read, then reports whether it is prime.
///
/// Invalid lines are answered with an error and a fresh prompt. If `shutdown`
/// resolves while waiting for input, or the input ends, a farewell is written
/// and [`SessionOutcome::Interrupted`] is returned.
pub async fn run_session<R, W, S>(reader: R, writer: &mut W, shutdown: S) -> Result<SessionOutcome>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    let mut lines = reader.lines();

    loop {
        writer.write_all(PROMPT.as_bytes()).await?;
        writer.flush().await?;

        let line = tokio::select! {
            _ = &mut shutdown => None,
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            tracing::debug!("Input closed or interrupted");
            write_line(writer, FAREWELL).await?;
            return Ok(SessionOutcome::Interrupted);
        };

        match parse_number(&line) {
            Ok(number) => {
                let is_prime = is_prime(number);
                tracing::debug!("Checked {}: prime={}", number, is_prime);
                write_line(writer, &format_result(number, is_prime)).await?;
                return Ok(SessionOutcome::Checked { number, is_prime });
            }
            Err(e) => {
                tracing::debug!("Rejected input: {}", e);
                let message = format!(
                    "Error: '{}' is not a valid integer. Please try again.",
                    line.trim()
                );
                write_line(writer, &message).await?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("17").unwrap(), 17);
        assert_eq!(parse_number("  -5 \n").unwrap(), -5);
        assert_eq!(parse_number("+7").unwrap(), 7);
        assert!(parse_number("").is_err());
        assert!(parse_number("7.5").is_err());
        assert!(parse_number("99999999999999999999").is_err());

        match parse_number(" abc ") {
            Err(PrimeError::InvalidInput { input, .. }) => assert_eq!(input, "abc"),
            other => panic!("expected invalid input, got {:?}", other),
        }
    }

    #[test]
    fn test_format_unexpected_error() {
        let io = PrimeError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "stdout closed",
        ));
        let message = format_unexpected_error(&io);

        assert!(message.starts_with("\nAn unexpected error occurred: IO error: stdout closed"));
        assert!(message.ends_with("Check file permissions and available disk space."));
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(17, true), "17 is a prime number.");
        assert_eq!(format_result(15, false), "15 is not a prime number.");
    }
}
