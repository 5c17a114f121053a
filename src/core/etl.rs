use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 依序執行 extract → transform → load，任一階段失敗即中止
    pub async fn run(&self) -> Result<String> {
        tracing::debug!("🚀 Starting PubMed ETL process");

        tracing::debug!("Extracting data...");
        let batch = self.pipeline.extract().await?;
        tracing::debug!(
            "Extracted {} ids, {} summary entries",
            batch.ids.len(),
            batch.records.len()
        );

        tracing::debug!("Transforming data...");
        let rows = self.pipeline.transform(batch).await?;

        tracing::debug!("Loading {} rows...", rows.len());
        let output_path = self.pipeline.load(rows).await?;
        tracing::debug!("📁 Output saved to: {}", output_path);

        Ok(output_path)
    }
}
