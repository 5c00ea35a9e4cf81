use crate::utils::error::{PrimeError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PrimeError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PrimeError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PrimeError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(PrimeError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PrimeError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(PrimeError::InvalidConfigValue {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one value is required".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://api.openai.com/v1").is_ok());
        assert!(validate_url("base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "invalid-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("iterations", 5, 1).is_ok());
        assert!(validate_positive_number("iterations", 0, 1).is_err());
    }

    #[test]
    fn test_validate_strings_and_lists() {
        assert!(validate_non_empty_string("model", "gpt-3.5-turbo").is_ok());
        assert!(validate_non_empty_string("model", "   ").is_err());
        assert!(validate_non_empty_list("numbers", &[2, 3]).is_ok());
        assert!(validate_non_empty_list::<i64>("numbers", &[]).is_err());
    }
}
