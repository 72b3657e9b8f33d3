use crate::core::schema::HeaderStyle;
use crate::domain::model::OutputRow;
use crate::utils::error::{EtlError, Result};

/// Renders rows as CSV under the chosen header labels.
///
/// Fields are quoted only when they contain the delimiter, a quote or a line
/// break; records end with `\n`.
pub fn render_csv(rows: &[OutputRow], style: HeaderStyle) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(style.labels())?;
    for row in rows {
        writer.write_record(row.values())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
        message: format!("rendered CSV is not valid UTF-8: {}", e),
    })
}

/// Renders the first `limit` rows as a JSON array of objects keyed by display labels.
///
/// Keys keep template column order.
pub fn preview_json(rows: &[OutputRow], limit: usize) -> Result<String> {
    let labels = HeaderStyle::Display.labels();

    let preview: Vec<serde_json::Value> = rows
        .iter()
        .take(limit)
        .map(|row| {
            let object: serde_json::Map<String, serde_json::Value> = labels
                .iter()
                .zip(row.values())
                .map(|(label, value)| (label.clone(), serde_json::Value::String(value.clone())))
                .collect();
            serde_json::Value::Object(object)
        })
        .collect();

    Ok(serde_json::to_string_pretty(&preview)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::{columns, COLUMN_COUNT, TEMPLATE_HEADERS};

    fn row_with(values: &[(usize, &str)]) -> OutputRow {
        let mut row = OutputRow::new();
        for (position, value) in values {
            row.set(*position, *value);
        }
        row
    }

    #[test]
    fn test_export_header_repeats_labels_verbatim() {
        let csv_output = render_csv(&[], HeaderStyle::Export).unwrap();
        let header = csv_output.lines().next().unwrap();

        assert!(header.starts_with("First Name,Middle Name,Last Name,"));
        assert_eq!(header.matches("Is Primary? (mark Y)").count(), 4);
        assert_eq!(header.matches("Address line one").count(), 3);
        assert!(header.contains("Label,,Tags,Source,Notes"));
        assert!(!header.contains(".1"));
    }

    #[test]
    fn test_display_header_is_disambiguated() {
        let csv_output = render_csv(&[], HeaderStyle::Display).unwrap();
        let header = csv_output.lines().next().unwrap();

        assert!(header.contains("Is Primary? (mark Y).3"));
        assert!(header.contains("Label.2"));
    }

    #[test]
    fn test_every_line_has_full_width() {
        let rows = vec![
            row_with(&[(columns::FIRST_NAME, "Jane"), (columns::LAST_NAME, "Doe")]),
            row_with(&[(columns::NOTES, "said \"call me\", maybe")]),
        ];
        let csv_output = render_csv(&rows, HeaderStyle::Export).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(csv_output.as_bytes());
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(records.len(), 3);
        for record in &records {
            assert_eq!(record.len(), COLUMN_COUNT);
        }
        assert_eq!(records[0].iter().collect::<Vec<_>>(), TEMPLATE_HEADERS.to_vec());
        assert_eq!(&records[2][columns::NOTES], "said \"call me\", maybe");
    }

    #[test]
    fn test_output_uses_unix_line_endings() {
        let csv_output = render_csv(&[OutputRow::new()], HeaderStyle::Export).unwrap();
        assert!(!csv_output.contains('\r'));
        assert_eq!(csv_output.lines().count(), 2);
        assert!(csv_output.ends_with('\n'));
    }

    #[test]
    fn test_preview_json_keys_follow_display_labels() {
        let rows = vec![
            row_with(&[(columns::FIRST_NAME, "Ann")]),
            row_with(&[(columns::FIRST_NAME, "Bob")]),
            row_with(&[(columns::FIRST_NAME, "Cy")]),
        ];
        let preview = preview_json(&rows, 2).unwrap();
        let parsed: Vec<serde_json::Map<String, serde_json::Value>> =
            serde_json::from_str(&preview).unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].len(), COLUMN_COUNT);
        assert_eq!(parsed[1]["First Name"], "Bob");
        assert!(parsed[0].contains_key("Primary? (mark Y).2"));
        assert_eq!(parsed[0].keys().next().map(String::as_str), Some("First Name"));
    }
}
