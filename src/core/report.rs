use crate::domain::model::IngestionOutcome;

/// One user-facing status line per outcome. Pure: calling it twice on the
/// same outcome yields the same string.
pub fn status_line(outcome: &IngestionOutcome) -> String {
    if outcome.committed {
        return format!("Successfully added {} records!", outcome.accepted_count);
    }
    match outcome.rejected.first() {
        Some(error) => match error.source_row_index {
            Some(index) => format!("row {}: {}", index, error.message),
            None => error.message.clone(),
        },
        None => "no records were added".to_string(),
    }
}
