use crate::domain::model::{Field, ValidationError};

/// Delimiters that end a tag while typing: Enter, comma or space.
pub const TAG_DELIMITERS: [char; 3] = ['\n', ',', ' '];

/// Quantity is optional. A present value must be an unsigned integer literal
/// that survives a stringify round-trip (rejects "3.0", "07", "+7" and any
/// surrounding whitespace) and must be greater than zero.
pub fn normalize_quantity(raw: &str) -> Result<Option<u32>, ValidationError> {
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<u32>() {
        Ok(value) if value.to_string() == raw && value > 0 => Ok(Some(value)),
        _ => Err(ValidationError::new(
            Field::Quantity,
            "quantity must be a positive integer",
        )),
    }
}

/// Price is required: a finite, non-negative decimal number.
pub fn normalize_price(raw: &str) -> Result<f64, ValidationError> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ValidationError::new(
            Field::Price,
            "price must be a non-negative number",
        )),
    }
}

/// Purchase date is required but passed through as-is: the form already
/// constrains it to ISO format and storage accepts the string verbatim.
pub fn normalize_purchase_date(raw: &str) -> Result<String, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::new(
            Field::PurchaseDate,
            "purchase date required",
        ));
    }
    Ok(raw.to_string())
}

/// Manual tags arrive already split; trim each entry, drop empties and
/// deduplicate preserving first occurrence. Never fails.
pub fn normalize_tag_list(raw: &[String]) -> Vec<String> {
    let mut tags = Vec::new();
    for tag in raw {
        push_unique(&mut tags, tag.trim());
    }
    tags
}

/// Tabular tag cells arrive brace-wrapped: `{groceries,weekly}`. Strip the
/// braces, split on comma, trim; `{}` or an absent cell yields the empty set.
pub fn normalize_tag_cell(raw: &str) -> Vec<String> {
    let inner = raw.trim();
    let inner = inner.strip_prefix('{').unwrap_or(inner);
    let inner = inner.strip_suffix('}').unwrap_or(inner);

    let mut tags = Vec::new();
    for piece in inner.split(',') {
        push_unique(&mut tags, piece.trim());
    }
    tags
}

/// Product name is required for tabular rows. The manual form does not
/// collect one, so manual records carry an empty string and skip this check.
pub fn normalize_product_name(raw: &str) -> Result<String, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::new(
            Field::ProductName,
            "product name required",
        ));
    }
    Ok(raw.trim().to_string())
}

/// Pure replacement for the keypress-driven tag splitter: breaks free text
/// on any of the given delimiters into an insertion-ordered set.
pub fn split_tag_input(text: &str, delimiters: &[char]) -> Vec<String> {
    let mut tags = Vec::new();
    for piece in text.split(|c| delimiters.contains(&c)) {
        push_unique(&mut tags, piece.trim());
    }
    tags
}

fn push_unique(tags: &mut Vec<String>, tag: &str) {
    if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
        tags.push(tag.to_string());
    }
}
