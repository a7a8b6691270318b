use crate::core::{record, tabular};
use crate::domain::model::{
    CanonicalRecord, Field, IngestionOutcome, OwnerId, RawManualInput, RawTabularSource,
    StoredRecord, ValidationError,
};
use crate::domain::ports::PurchaseStore;

/// Orchestrates one ingestion call: the optional manual record, the optional
/// tabular source, then a single batch submission. Each call owns a fresh
/// outcome; nothing is shared between calls.
pub struct IngestionCoordinator<S: PurchaseStore> {
    store: S,
}

impl<S: PurchaseStore> IngestionCoordinator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Phases run in fixed order. Manual validation failures abort the whole
    /// call; upload rejections, header mismatches and per-row failures only
    /// cost the records they concern. The batch is submitted once, manual
    /// record first, with no retry.
    pub async fn ingest(
        &self,
        owner: Option<&OwnerId>,
        manual: &RawManualInput,
        source: Option<&RawTabularSource>,
    ) -> IngestionOutcome {
        let Some(owner) = owner else {
            return IngestionOutcome::failed(vec![ValidationError::new(
                Field::Submission,
                "sign in to add purchases",
            )]);
        };

        let mut rejected: Vec<ValidationError> = Vec::new();
        let mut batch: Vec<CanonicalRecord> = Vec::new();

        if manual.is_filled() {
            match record::validate_manual(manual) {
                Ok(rec) => batch.push(rec),
                Err(errors) => {
                    tracing::debug!("manual record rejected on {} field(s)", errors.len());
                    return IngestionOutcome::failed(errors);
                }
            }
        }

        if let Some(source) = source {
            match Self::collect_tabular(source, &mut rejected) {
                Ok(records) => batch.extend(records),
                Err(error) => rejected.push(error),
            }
        }

        if batch.is_empty() {
            rejected.push(ValidationError::new(Field::Submission, "nothing to submit"));
            return IngestionOutcome::failed(rejected);
        }

        let records: Vec<StoredRecord> = batch
            .into_iter()
            .map(|rec| StoredRecord::new(owner, rec))
            .collect();

        tracing::info!("submitting {} record(s)", records.len());
        match self.store.insert(&records).await {
            Ok(()) => IngestionOutcome::committed(records.len(), rejected),
            Err(e) => {
                tracing::warn!("storage rejected the batch: {}", e);
                rejected.push(ValidationError::new(
                    Field::Submission,
                    format!("could not save records: {}", e),
                ));
                IngestionOutcome::failed(rejected)
            }
        }
    }

    /// Tabular phase: gate, parse, validate row-by-row. Validator rejections
    /// are recorded per row; rows that validate but fail the usability
    /// filter are skipped without an error entry, matching the two separate
    /// failure channels of the original design.
    fn collect_tabular(
        source: &RawTabularSource,
        rejected: &mut Vec<ValidationError>,
    ) -> Result<Vec<CanonicalRecord>, ValidationError> {
        tabular::check_source(source)?;
        let rows = tabular::parse(source)?;

        let mut records = Vec::new();
        for (index, row) in rows.iter().enumerate() {
            let row_index = index + 1;
            match record::validate_row(row, row_index) {
                Ok(rec) if is_usable(&rec) => records.push(rec),
                Ok(_) => tracing::debug!("row {} skipped by usability filter", row_index),
                Err(error) => rejected.push(error),
            }
        }
        Ok(records)
    }
}

/// Post-validation filter for tabular records: only rows with a product
/// name, a positive quantity, a non-negative price and a purchase date are
/// worth committing.
fn is_usable(record: &CanonicalRecord) -> bool {
    !record.product_name.is_empty()
        && record.quantity > 0
        && record.price >= 0.0
        && !record.purchase_date.is_empty()
}
