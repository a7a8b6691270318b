use crate::core::normalize;
use crate::domain::model::{CanonicalRecord, RawManualInput, TabularRow, ValidationError};

/// Validate the manual form record. Does not short-circuit: every failing
/// field contributes its own error so the caller can surface all of them.
/// The form collects no product name, so the record carries an empty string.
pub fn validate_manual(input: &RawManualInput) -> Result<CanonicalRecord, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let quantity = match normalize::normalize_quantity(&input.quantity) {
        Ok(q) => q.unwrap_or(0),
        Err(e) => {
            errors.push(e);
            0
        }
    };
    let price = match normalize::normalize_price(&input.price) {
        Ok(p) => p,
        Err(e) => {
            errors.push(e);
            0.0
        }
    };
    let purchase_date = match normalize::normalize_purchase_date(&input.purchase_date) {
        Ok(d) => d,
        Err(e) => {
            errors.push(e);
            String::new()
        }
    };
    let tags = normalize::normalize_tag_list(&input.tags);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(CanonicalRecord {
        product_name: String::new(),
        quantity,
        price,
        purchase_date,
        tags,
    })
}

/// Validate one tabular row as an all-or-nothing unit: the first failing
/// cell rejects the whole row with a row-indexed error. An empty quantity
/// cell resolves to 0 and is left to the coordinator's usability filter.
pub fn validate_row(row: &TabularRow, row_index: usize) -> Result<CanonicalRecord, ValidationError> {
    let product_name =
        normalize::normalize_product_name(row.get("product_name")).map_err(|e| e.at_row(row_index))?;
    let quantity = normalize::normalize_quantity(row.get("quantity"))
        .map_err(|e| e.at_row(row_index))?
        .unwrap_or(0);
    let price = normalize::normalize_price(row.get("price")).map_err(|e| e.at_row(row_index))?;
    let purchase_date =
        normalize::normalize_purchase_date(row.get("purchase_date")).map_err(|e| e.at_row(row_index))?;
    let tags = normalize::normalize_tag_cell(row.get("tags"));

    Ok(CanonicalRecord {
        product_name,
        quantity,
        price,
        purchase_date,
        tags,
    })
}
