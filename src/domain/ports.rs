use crate::domain::model::{ExtractedRow, SummaryBatch};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn query(&self) -> &str;
    fn max_results(&self) -> usize;
    fn output_file(&self) -> &str;
    fn esearch_url(&self) -> &str;
    fn esummary_url(&self) -> &str;
    fn debug(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SummaryBatch>;
    async fn transform(&self, batch: SummaryBatch) -> Result<Vec<ExtractedRow>>;
    async fn load(&self, rows: Vec<ExtractedRow>) -> Result<String>;
}
