pub mod adapters;
#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::RestStore;
pub use crate::core::coordinator::IngestionCoordinator;
pub use crate::core::report::status_line;
pub use crate::domain::model::{
    CanonicalRecord, Field, IngestionOutcome, OwnerId, RawManualInput, RawTabularSource,
    StoredRecord, TabularRow, ValidationError,
};
pub use crate::domain::ports::PurchaseStore;
pub use crate::utils::error::{IngestError, Result};
