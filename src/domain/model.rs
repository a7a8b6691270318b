use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque identity token supplied by the auth collaborator. The pipeline
/// never inspects it; it is stamped onto every record before submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Raw form fields exactly as the caller collected them. Tags arrive
/// already split into an insertion-ordered, deduplicated list.
#[derive(Debug, Clone, Default)]
pub struct RawManualInput {
    pub quantity: String,
    pub price: String,
    pub purchase_date: String,
    pub tags: Vec<String>,
}

impl RawManualInput {
    /// "Form filled" gate: quantity, price and purchase date only. Tags and
    /// product name never participate in this check.
    pub fn is_filled(&self) -> bool {
        !self.quantity.is_empty() && !self.price.is_empty() && !self.purchase_date.is_empty()
    }
}

/// An uploaded delimited-text file, captured before any parsing.
#[derive(Debug, Clone)]
pub struct RawTabularSource {
    pub bytes: Vec<u8>,
    pub media_type: String,
    pub filename: String,
}

/// One data row from the tabular source: raw cells paired with their header
/// names, in header-column order. The header row itself is never emitted.
#[derive(Debug, Clone)]
pub struct TabularRow {
    cells: Vec<(String, String)>,
}

impl TabularRow {
    pub fn new(cells: Vec<(String, String)>) -> Self {
        Self { cells }
    }

    pub fn get(&self, header: &str) -> &str {
        self.cells
            .iter()
            .find(|(name, _)| name == header)
            .map(|(_, cell)| cell.as_str())
            .unwrap_or("")
    }
}

/// A fully validated purchase entry. Only constructed once every field has
/// passed normalization; `quantity` may hold 0 solely between validation and
/// the coordinator's usability filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub product_name: String,
    pub quantity: u32,
    pub price: f64,
    pub purchase_date: String,
    pub tags: Vec<String>,
}

/// The unit actually submitted to storage: a canonical record stamped with
/// its owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRecord {
    pub owner_id: String,
    #[serde(flatten)]
    pub record: CanonicalRecord,
}

impl StoredRecord {
    pub fn new(owner: &OwnerId, record: CanonicalRecord) -> Self {
        Self {
            owner_id: owner.as_str().to_string(),
            record,
        }
    }
}

/// The logical field a validation failure refers to. `Header` covers the
/// whole-file gates (upload constraints, column check); `Submission` covers
/// call-level failures the reporter must surface (storage rejection,
/// nothing-to-submit, missing identity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Quantity,
    Price,
    PurchaseDate,
    Tags,
    ProductName,
    Header,
    Submission,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Quantity => "quantity",
            Field::Price => "price",
            Field::PurchaseDate => "purchase_date",
            Field::Tags => "tags",
            Field::ProductName => "product_name",
            Field::Header => "header",
            Field::Submission => "submission",
        };
        f.write_str(name)
    }
}

/// One user-facing rejection. Row indices are 1-based and exclude the header
/// row; `None` means the manual record or a call-level failure.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: String,
    pub source_row_index: Option<usize>,
}

impl ValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            source_row_index: None,
        }
    }

    pub fn at_row(mut self, row_index: usize) -> Self {
        self.source_row_index = Some(row_index);
        self
    }
}

/// Aggregate result of one ingestion call. Immutable after return.
/// `committed` is true only when a submission was attempted and succeeded;
/// every other path leaves `accepted_count` at 0.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestionOutcome {
    pub accepted_count: usize,
    pub rejected: Vec<ValidationError>,
    pub committed: bool,
}

impl IngestionOutcome {
    pub fn committed(accepted_count: usize, rejected: Vec<ValidationError>) -> Self {
        Self {
            accepted_count,
            rejected,
            committed: true,
        }
    }

    pub fn failed(rejected: Vec<ValidationError>) -> Self {
        Self {
            accepted_count: 0,
            rejected,
            committed: false,
        }
    }
}
