use crate::adapters::http::EutilsClient;
use crate::core::writer::render_csv;
use crate::core::{ConfigProvider, ExtractedRow, Pipeline, Storage, SummaryBatch};
use crate::domain::model::NOT_AVAILABLE;
use crate::domain::services::extract_rows;
use crate::utils::error::Result;

/// search → summary → extract → CSV, driven by a [`ConfigProvider`].
pub struct PubMedPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: EutilsClient,
}

impl<S: Storage, C: ConfigProvider> PubMedPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        let client = EutilsClient::new(config.esearch_url(), config.esummary_url())?;
        Ok(Self {
            storage,
            config,
            client,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for PubMedPipeline<S, C> {
    async fn extract(&self) -> Result<SummaryBatch> {
        let query = self.config.query();
        if self.config.debug() {
            println!("Fetching papers for query: {}", query);
        }

        let ids = self.client.search(query, self.config.max_results()).await?;
        tracing::debug!("🔍 PubMed search returned {} ids", ids.len());
        tracing::debug!("PMIDs: {:?}", ids);

        let records = self.client.fetch_summaries(&ids).await?;
        tracing::debug!("Received {} summary entries", records.len());

        Ok(SummaryBatch { ids, records })
    }

    async fn transform(&self, batch: SummaryBatch) -> Result<Vec<ExtractedRow>> {
        let rows = extract_rows(&batch.records);

        let with_company = rows
            .iter()
            .filter(|row| row.non_academic_authors != NOT_AVAILABLE)
            .count();
        tracing::debug!(
            "Extracted {} rows ({} with company-affiliated authors)",
            rows.len(),
            with_company
        );

        if self.config.debug() {
            // 與欄位順序一致的陣列格式
            let records: Vec<[&str; 6]> = rows.iter().map(ExtractedRow::as_record).collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }

        Ok(rows)
    }

    async fn load(&self, rows: Vec<ExtractedRow>) -> Result<String> {
        let output_file = self.config.output_file();
        let csv_data = render_csv(&rows)?;

        tracing::debug!("Writing CSV ({} bytes) to storage", csv_data.len());
        self.storage.write_file(output_file, &csv_data).await?;

        tracing::debug!("CSV file saved successfully");
        Ok(output_file.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::EtlError;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                EtlError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        query: String,
        output_file: String,
        esearch_url: String,
        esummary_url: String,
    }

    impl MockConfig {
        fn new(server: &MockServer, query: &str) -> Self {
            Self {
                query: query.to_string(),
                output_file: "results.csv".to_string(),
                esearch_url: server.url("/esearch.fcgi"),
                esummary_url: server.url("/esummary.fcgi"),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn query(&self) -> &str {
            &self.query
        }

        fn max_results(&self) -> usize {
            10
        }

        fn output_file(&self) -> &str {
            &self.output_file
        }

        fn esearch_url(&self) -> &str {
            &self.esearch_url
        }

        fn esummary_url(&self) -> &str {
            &self.esummary_url
        }

        fn debug(&self) -> bool {
            false
        }
    }

    fn read_rows(bytes: &[u8]) -> Vec<Vec<String>> {
        csv::Reader::from_reader(bytes)
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect()
    }

    #[tokio::test]
    async fn test_extract_and_transform_scenario() {
        let server = MockServer::start_async().await;

        let search_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/esearch.fcgi")
                    .query_param("term", "cancer immunotherapy");
                then.status(200)
                    .json_body(json!({"esearchresult": {"idlist": ["1", "2"]}}));
            })
            .await;

        let summary_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/esummary.fcgi").query_param("id", "1,2");
                then.status(200).json_body(json!({
                    "result": {
                        "uids": ["1", "2"],
                        "1": {
                            "title": "Title one",
                            "pubdate": "2024 Jan",
                            "authors": [{"name": "Smith A", "affiliation": "XYZ Biotech Inc."}]
                        },
                        "2": {"title": "Title two", "pubdate": "2023 Dec"}
                    }
                }));
            })
            .await;

        let storage = MockStorage::new();
        let config = MockConfig::new(&server, "cancer immunotherapy");
        let pipeline = PubMedPipeline::new(storage, config).unwrap();

        let batch = pipeline.extract().await.unwrap();
        search_mock.assert_async().await;
        summary_mock.assert_async().await;
        assert_eq!(batch.ids, vec!["1", "2"]);

        let mut rows = pipeline.transform(batch).await.unwrap();
        rows.sort_by(|a, b| a.pubmed_id.cmp(&b.pubmed_id));

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].as_record(),
            ["1", "Title one", "2024 Jan", "Smith A", "XYZ Biotech Inc.", "N/A"]
        );
        assert_eq!(
            rows[1].as_record(),
            ["2", "Title two", "2023 Dec", "N/A", "N/A", "N/A"]
        );
    }

    #[tokio::test]
    async fn test_zero_ids_skips_summary_and_writes_header_only() {
        let server = MockServer::start_async().await;

        server
            .mock_async(|when, then| {
                when.method(GET).path("/esearch.fcgi");
                then.status(200)
                    .json_body(json!({"esearchresult": {"count": "0", "idlist": []}}));
            })
            .await;

        let summary_mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/esummary.fcgi");
                then.status(200).json_body(json!({"result": {}}));
            })
            .await;

        let storage = MockStorage::new();
        let config = MockConfig::new(&server, "no such topic");
        let pipeline = PubMedPipeline::new(storage.clone(), config).unwrap();

        let batch = pipeline.extract().await.unwrap();
        let rows = pipeline.transform(batch).await.unwrap();
        let output = pipeline.load(rows).await.unwrap();

        summary_mock.assert_hits_async(0).await;
        assert_eq!(output, "results.csv");

        let bytes = storage.get_file("results.csv").await.unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("PubMedID,Title,Publication Date"));
    }

    #[tokio::test]
    async fn test_search_failure_propagates_upstream_error() {
        let server = MockServer::start_async().await;

        server
            .mock_async(|when, then| {
                when.method(GET).path("/esearch.fcgi");
                then.status(502);
            })
            .await;

        let storage = MockStorage::new();
        let config = MockConfig::new(&server, "cancer");
        let pipeline = PubMedPipeline::new(storage.clone(), config).unwrap();

        let err = pipeline.extract().await.unwrap_err();

        assert!(matches!(err, EtlError::UpstreamError { status: 502, .. }));
        assert!(storage.get_file("results.csv").await.is_none());
    }

    #[tokio::test]
    async fn test_load_writes_rows_to_configured_file() {
        let server = MockServer::start_async().await;
        let storage = MockStorage::new();
        let mut config = MockConfig::new(&server, "unused");
        config.output_file = "out/papers.csv".to_string();
        let pipeline = PubMedPipeline::new(storage.clone(), config).unwrap();

        let rows = vec![ExtractedRow {
            pubmed_id: "38000001".to_string(),
            title: "A study".to_string(),
            publication_date: "2024".to_string(),
            non_academic_authors: "Lee K".to_string(),
            company_affiliations: "Genentech Biotech".to_string(),
            corresponding_email: "N/A".to_string(),
        }];

        let output = pipeline.load(rows).await.unwrap();
        assert_eq!(output, "out/papers.csv");

        let bytes = storage.read_file("out/papers.csv").await.unwrap();
        let data = read_rows(&bytes);
        assert_eq!(
            data,
            vec![vec!["38000001", "A study", "2024", "Lee K", "Genentech Biotech", "N/A"]]
        );
    }
}
