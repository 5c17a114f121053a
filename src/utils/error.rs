use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("{endpoint} request failed with HTTP status {status}")]
    UpstreamError { endpoint: String, status: u16 },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Upstream,
    Network,
    Storage,
    Data,
    Configuration,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::UpstreamError { .. } => ErrorCategory::Upstream,
            EtlError::ApiError(_) => ErrorCategory::Network,
            EtlError::IoError(_) => ErrorCategory::Storage,
            EtlError::CsvError(_) | EtlError::SerializationError(_) => ErrorCategory::Data,
            EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 設定錯誤回傳 2（與 clap 用法錯誤一致），其他一律為 1
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            _ => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::UpstreamError { endpoint, status } => {
                format!("Error fetching data from PubMed ({endpoint} returned HTTP {status})")
            }
            EtlError::ApiError(e) => format!("Could not reach PubMed: {e}"),
            EtlError::IoError(e) => format!("Could not write results: {e}"),
            EtlError::CsvError(e) => format!("Could not encode results as CSV: {e}"),
            EtlError::SerializationError(e) => format!("Could not encode results as JSON: {e}"),
            EtlError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid option '{field}': {reason}")
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Upstream => "Check the query syntax and try again later",
            ErrorCategory::Network => "Check your network connection and the E-utilities endpoint",
            ErrorCategory::Storage => "Check that the output path is writable",
            ErrorCategory::Data => "Re-run with --debug to inspect the extracted rows",
            ErrorCategory::Configuration => "Run with --help to see valid options",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
