use crate::utils::error::{IngestError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(IngestError::ConfigError {
            field: field_name.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(IngestError::ConfigError {
                field: field_name.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(IngestError::ConfigError {
            field: field_name.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(IngestError::ConfigError {
            field: field_name.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("endpoint", "https://example.com").is_ok());
        assert!(validate_url("endpoint", "http://example.com").is_ok());
        assert!(validate_url("endpoint", "").is_err());
        assert!(validate_url("endpoint", "not-a-url").is_err());
        assert!(validate_url("endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("owner", "user-1").is_ok());
        assert!(validate_non_empty_string("owner", "   ").is_err());
        assert!(validate_non_empty_string("owner", "").is_err());
    }
}
