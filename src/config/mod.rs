use crate::core::normalize::{split_tag_input, TAG_DELIMITERS};
use crate::domain::model::{RawManualInput, RawTabularSource};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "purchase-ingest")]
#[command(about = "Validate purchase records and upload them to storage")]
pub struct CliConfig {
    /// Storage endpoint the batch is POSTed to
    #[arg(long)]
    pub endpoint: String,

    /// API key forwarded to the storage endpoint
    #[arg(long)]
    pub api_key: Option<String>,

    /// Identity token stamped onto every record
    #[arg(long)]
    pub owner: String,

    /// CSV file with purchase rows
    #[arg(long)]
    pub file: Option<String>,

    /// Manual entry: quantity (positive integer)
    #[arg(long, default_value = "")]
    pub quantity: String,

    /// Manual entry: price (non-negative number)
    #[arg(long, default_value = "")]
    pub price: String,

    /// Manual entry: purchase date (ISO format)
    #[arg(long, default_value = "")]
    pub date: String,

    /// Manual entry: tags, separated by comma or space
    #[arg(long, default_value = "")]
    pub tags: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_non_empty_string("owner", &self.owner)?;
        Ok(())
    }
}

impl CliConfig {
    pub fn manual_input(&self) -> RawManualInput {
        RawManualInput {
            quantity: self.quantity.clone(),
            price: self.price.clone(),
            purchase_date: self.date.clone(),
            tags: split_tag_input(&self.tags, &TAG_DELIMITERS),
        }
    }

    /// Read the tabular source from disk. The media type is derived from the
    /// file extension; the upload gate does the actual acceptance check.
    pub fn tabular_source(&self) -> Result<Option<RawTabularSource>> {
        let Some(path) = &self.file else {
            return Ok(None);
        };
        let bytes = std::fs::read(path)?;
        let filename = std::path::Path::new(path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(path)
            .to_string();
        let media_type = if filename.to_lowercase().ends_with(".csv") {
            "text/csv"
        } else {
            "application/octet-stream"
        };
        Ok(Some(RawTabularSource {
            bytes,
            media_type: media_type.to_string(),
            filename,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig::parse_from([
            "purchase-ingest",
            "--endpoint",
            "https://example.com/rest/v1/Purchases",
            "--owner",
            "user-1",
        ])
    }

    #[test]
    fn test_validate_endpoint_and_owner() {
        assert!(config().validate().is_ok());

        let mut bad = config();
        bad.endpoint = "not-a-url".to_string();
        assert!(bad.validate().is_err());

        let mut bad = config();
        bad.owner = "  ".to_string();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_manual_input_splits_tags() {
        let mut config = config();
        config.quantity = "2".to_string();
        config.tags = "food, weekly food".to_string();

        let input = config.manual_input();
        assert_eq!(input.quantity, "2");
        assert_eq!(input.tags, vec!["food", "weekly"]);
    }
}
