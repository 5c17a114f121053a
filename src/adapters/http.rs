use crate::utils::error::{EtlError, Result};
use reqwest::{Client, Response};
use serde_json::{Map, Value};

/// NCBI E-utilities client covering the esearch and esummary endpoints.
#[derive(Debug, Clone)]
pub struct EutilsClient {
    client: Client,
    esearch_url: String,
    esummary_url: String,
}

impl EutilsClient {
    pub fn new(esearch_url: impl Into<String>, esummary_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            esearch_url: esearch_url.into(),
            esummary_url: esummary_url.into(),
        })
    }

    async fn get_json(&self, endpoint: &str, url: &str, params: &[(&str, String)]) -> Result<Value> {
        tracing::debug!("Making {} request to: {}", endpoint, url);
        let response: Response = self.client.get(url).query(params).send().await?;

        let status = response.status();
        tracing::debug!("{} response status: {}", endpoint, status);

        // 非 2xx 直接視為致命錯誤，不重試
        if !status.is_success() {
            return Err(EtlError::UpstreamError {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    /// 以關鍵字搜尋 PubMed，回傳依相關性排序的 PMID
    pub async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>> {
        let params = [
            ("db", "pubmed".to_string()),
            ("term", query.to_string()),
            ("retmode", "json".to_string()),
            ("retmax", max_results.to_string()),
        ];

        let body = self.get_json("esearch", &self.esearch_url, &params).await?;

        let ids: Vec<String> = body
            .get("esearchresult")
            .and_then(|v| v.get("idlist"))
            .and_then(|v| v.as_array())
            .map(|list| {
                list.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        Ok(ids)
    }

    /// 批次取得摘要；沒有 id 時不發出請求
    pub async fn fetch_summaries(&self, ids: &[String]) -> Result<Map<String, Value>> {
        if ids.is_empty() {
            return Ok(Map::new());
        }

        let params = [
            ("db", "pubmed".to_string()),
            ("id", ids.join(",")),
            ("retmode", "json".to_string()),
        ];

        let body = self.get_json("esummary", &self.esummary_url, &params).await?;

        match body {
            Value::Object(mut obj) => match obj.remove("result") {
                Some(Value::Object(result)) => Ok(result),
                _ => Ok(Map::new()),
            },
            _ => Ok(Map::new()),
        }
    }
}
