use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ESEARCH_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";
pub const DEFAULT_ESUMMARY_URL: &str =
    "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esummary.fcgi";

/// esearch 單次 retmax 上限
pub const MAX_RESULTS_LIMIT: usize = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pubmed-etl")]
#[command(about = "Fetch research papers from PubMed and list pharma/biotech-affiliated authors")]
pub struct CliConfig {
    /// Search query for PubMed
    #[arg(short, long)]
    pub query: String,

    /// Output CSV filename
    #[arg(short = 'f', long = "file", default_value = "results.csv")]
    pub output_file: String,

    /// Enable debug mode
    #[arg(short, long)]
    pub debug: bool,

    /// Maximum number of PubMed ids to fetch
    #[arg(short = 'n', long, default_value_t = 10)]
    pub max_results: usize,

    #[arg(long, default_value = DEFAULT_ESEARCH_URL, hide = true)]
    pub esearch_url: String,

    #[arg(long, default_value = DEFAULT_ESUMMARY_URL, hide = true)]
    pub esummary_url: String,
}

impl CliConfig {
    /// 以預設端點建立設定，主要供測試與程式呼叫使用
    pub fn new(query: impl Into<String>, output_file: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            output_file: output_file.into(),
            debug: false,
            max_results: 10,
            esearch_url: DEFAULT_ESEARCH_URL.to_string(),
            esummary_url: DEFAULT_ESUMMARY_URL.to_string(),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn query(&self) -> &str {
        &self.query
    }

    fn max_results(&self) -> usize {
        self.max_results
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
        self.debug
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_range("max_results", self.max_results, 1, MAX_RESULTS_LIMIT)?;
        validate_url("esearch_url", &self.esearch_url)?;
        validate_url("esummary_url", &self.esummary_url)?;
        Ok(())
    }
}
