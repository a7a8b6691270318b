pub mod coordinator;
pub mod normalize;
pub mod record;
pub mod report;
pub mod tabular;

pub use crate::domain::model::{
    CanonicalRecord, Field, IngestionOutcome, OwnerId, RawManualInput, RawTabularSource,
    StoredRecord, TabularRow, ValidationError,
};
pub use crate::domain::ports::PurchaseStore;
pub use crate::utils::error::Result;
