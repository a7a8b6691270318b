use crate::domain::model::{Field, RawTabularSource, TabularRow, ValidationError};

/// Column names the upload must carry, exact spelling, case-sensitive.
/// Order is irrelevant and extra columns are tolerated.
pub const EXPECTED_HEADER: [&str; 5] =
    ["product_name", "quantity", "price", "purchase_date", "tags"];

/// Upload size ceiling: 2 MiB.
pub const MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

/// Upload gate, checked before any byte is parsed. A rejected file never
/// reaches the row parser.
pub fn check_source(source: &RawTabularSource) -> Result<(), ValidationError> {
    let is_csv =
        source.media_type == "text/csv" || source.filename.to_lowercase().ends_with(".csv");
    if !is_csv {
        return Err(ValidationError::new(Field::Header, "file must be a CSV"));
    }
    if source.bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ValidationError::new(
            Field::Header,
            "file exceeds the 2 MiB upload limit",
        ));
    }
    Ok(())
}

/// Decode the upload into data rows. The header row is verified by
/// set-containment against [`EXPECTED_HEADER`] before any row is emitted;
/// a mismatch aborts with a single header-level error. Rows are keyed by
/// the header's column order, missing trailing cells default to the empty
/// string, and blank lines are skipped by the CSV reader.
pub fn parse(source: &RawTabularSource) -> Result<Vec<TabularRow>, ValidationError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source.bytes.as_slice());

    let headers = reader
        .headers()
        .map_err(|e| {
            ValidationError::new(Field::Header, format!("file could not be parsed: {}", e))
        })?
        .clone();

    let missing: Vec<&str> = EXPECTED_HEADER
        .iter()
        .filter(|expected| !headers.iter().any(|h| h == **expected))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::new(
            Field::Header,
            format!("file header is missing required column(s): {}", missing.join(", ")),
        ));
    }

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            ValidationError::new(Field::Header, format!("file could not be parsed: {}", e))
                .at_row(index + 1)
        })?;
        let cells = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), record.get(i).unwrap_or("").to_string()))
            .collect();
        rows.push(TabularRow::new(cells));
    }

    tracing::debug!("parsed {} data rows from {}", rows.len(), source.filename);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_source(body: &str) -> RawTabularSource {
        RawTabularSource {
            bytes: body.as_bytes().to_vec(),
            media_type: "text/csv".to_string(),
            filename: "purchases.csv".to_string(),
        }
    }

    #[test]
    fn test_check_source_accepts_csv_suffix_without_media_type() {
        let source = RawTabularSource {
            bytes: vec![],
            media_type: "application/octet-stream".to_string(),
            filename: "Purchases.CSV".to_string(),
        };
        assert!(check_source(&source).is_ok());
    }

    #[test]
    fn test_check_source_rejects_wrong_type() {
        let source = RawTabularSource {
            bytes: vec![],
            media_type: "application/pdf".to_string(),
            filename: "purchases.pdf".to_string(),
        };
        let err = check_source(&source).unwrap_err();
        assert_eq!(err.field, Field::Header);
        assert_eq!(err.message, "file must be a CSV");
    }

    #[test]
    fn test_check_source_rejects_oversize() {
        let source = RawTabularSource {
            bytes: vec![b'a'; 3 * 1024 * 1024],
            media_type: "text/csv".to_string(),
            filename: "purchases.csv".to_string(),
        };
        let err = check_source(&source).unwrap_err();
        assert_eq!(err.message, "file exceeds the 2 MiB upload limit");
    }

    #[test]
    fn test_parse_keys_rows_by_header() {
        let source = csv_source(
            "product_name,quantity,price,purchase_date,tags\n\
             Bread,2,1.20,2024-03-01,\"{food,bakery}\"\n\
             Milk,1,0.99,2024-03-02,{}\n",
        );
        let rows = parse(&source).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("product_name"), "Bread");
        assert_eq!(rows[0].get("tags"), "{food,bakery}");
        assert_eq!(rows[1].get("price"), "0.99");
    }

    #[test]
    fn test_parse_tolerates_extra_columns_and_any_order() {
        let source = csv_source(
            "tags,price,product_name,purchase_date,quantity,note\n\
             {},1.00,Eggs,2024-03-01,6,left over column\n",
        );
        let rows = parse(&source).unwrap();
        assert_eq!(rows[0].get("product_name"), "Eggs");
        assert_eq!(rows[0].get("quantity"), "6");
    }

    #[test]
    fn test_parse_missing_column_fails_fast() {
        let source = csv_source(
            "product_name,quantity,price,purchase_date\n\
             Bread,2,1.20,2024-03-01\n",
        );
        let err = parse(&source).unwrap_err();
        assert_eq!(err.field, Field::Header);
        assert!(err.message.contains("tags"));
        assert!(err.source_row_index.is_none());
    }

    #[test]
    fn test_parse_missing_trailing_cells_default_empty() {
        let source = csv_source(
            "product_name,quantity,price,purchase_date,tags\n\
             Bread,2,1.20\n",
        );
        let rows = parse(&source).unwrap();
        assert_eq!(rows[0].get("purchase_date"), "");
        assert_eq!(rows[0].get("tags"), "");
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let source = csv_source(
            "product_name,quantity,price,purchase_date,tags\n\
             \n\
             Bread,2,1.20,2024-03-01,{}\n\
             \n",
        );
        let rows = parse(&source).unwrap();
        assert_eq!(rows.len(), 1);
    }
}
