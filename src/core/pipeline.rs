use crate::core::mapper::{RecordMapper, REQUIRED_FIELDS};
use crate::core::render::{preview_json, render_csv};
use crate::core::schema::HeaderStyle;
use crate::core::{ConfigProvider, Pipeline, Record, Storage, TransformResult};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::validate_required_columns;
use std::collections::HashMap;
use std::path::Path;

/// Converts one lead export into one import file.
pub struct ContactPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ContactPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn mapper(&self) -> RecordMapper {
        RecordMapper::new(self.config.tags(), self.config.source_label())
    }

    fn output_file(&self) -> String {
        Path::new(self.config.output_path())
            .join(self.config.output_filename())
            .to_string_lossy()
            .into_owned()
    }
}

/// Cell texts read as missing values, matched exactly (case and whitespace included).
pub const NULL_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn cell_value(cell: Option<&str>) -> serde_json::Value {
    match cell {
        Some(text) if !text.is_empty() && !NULL_TOKENS.contains(&text) => {
            serde_json::Value::String(text.to_string())
        }
        _ => serde_json::Value::Null,
    }
}

/// Parses delimited text into records, preserving row order.
///
/// The header row is checked for the required columns before any data row is
/// read. Empty cells and [`NULL_TOKENS`] become nulls; short rows are padded
/// with nulls.
pub fn parse_records(data: &[u8], delimiter: u8) -> Result<Vec<Record>> {
    let malformed = |e: csv::Error| EtlError::MalformedInput {
        message: e.to_string(),
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(data);

    let headers: Vec<String> = reader
        .headers()
        .map_err(malformed)?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.is_empty() {
        return Err(EtlError::MalformedInput {
            message: "input has no header row".to_string(),
        });
    }

    validate_required_columns(&headers, &REQUIRED_FIELDS)?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(malformed)?;

        if row.len() > headers.len() {
            return Err(EtlError::MalformedInput {
                message: format!(
                    "data row {} has {} fields but the header declares {}",
                    index + 1,
                    row.len(),
                    headers.len()
                ),
            });
        }

        let mut data = HashMap::with_capacity(headers.len());
        for (position, name) in headers.iter().enumerate() {
            data.entry(name.clone())
                .or_insert_with(|| cell_value(row.get(position)));
        }
        records.push(Record { data });
    }

    Ok(records)
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ContactPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        tracing::debug!("Reading lead export from: {}", self.config.input_file());
        let data = self.storage.read_file(self.config.input_file()).await?;
        tracing::debug!("Read {} bytes", data.len());

        parse_records(&data, self.config.input_delimiter())
    }

    async fn transform(&self, data: Vec<Record>) -> Result<TransformResult> {
        let mapper = self.mapper();
        let rows: Vec<_> = data.iter().map(|record| mapper.map(record)).collect();

        let csv_output = render_csv(&rows, HeaderStyle::Export)?;

        let preview = match self.config.preview_rows() {
            0 => None,
            limit => Some(preview_json(&rows, limit)?),
        };

        Ok(TransformResult {
            rows,
            csv_output,
            preview,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output_file = self.output_file();

        tracing::debug!(
            "Writing {} rows ({} bytes) to {}",
            result.rows.len(),
            result.csv_output.len(),
            output_file
        );
        self.storage
            .write_file(&output_file, result.csv_output.as_bytes())
            .await?;

        Ok(output_file)
    }
}
