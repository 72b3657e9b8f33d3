use crate::core::Pipeline;
use crate::utils::error::Result;

/// What one conversion run produced.
#[derive(Debug, Clone)]
pub struct EtlOutcome {
    pub output_path: String,
    pub records_read: usize,
    pub rows_written: usize,
    pub preview: Option<String>,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<EtlOutcome> {
        tracing::info!("Starting conversion");

        let records = self.pipeline.extract().await?;
        let records_read = records.len();
        tracing::info!("Extracted {} records", records_read);

        let mut result = self.pipeline.transform(records).await?;
        let rows_written = result.rows.len();
        tracing::info!("Mapped {} rows", rows_written);

        let preview = result.preview.take();
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(EtlOutcome {
            output_path,
            records_read,
            rows_written,
            preview,
        })
    }
}
