use crate::domain::model::StoredRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Storage collaborator. One batch insert per ingestion call; whether the
/// batch is atomic or best-effort is the collaborator's business.
#[async_trait]
pub trait PurchaseStore: Send + Sync {
    async fn insert(&self, records: &[StoredRecord]) -> Result<()>;
}
