use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting record processing...");

        // Extract
        let raw_data = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", raw_data.len());

        // Transform
        let transformed_result = self.pipeline.transform(raw_data).await?;
        tracing::info!(
            "Kept {} of {} records",
            transformed_result.processed_records.len(),
            transformed_result.input_count
        );

        // Load
        let output_path = self.pipeline.load(transformed_result).await?;
        tracing::debug!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
