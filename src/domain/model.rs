use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 缺少或空白欄位的預設值
pub const NOT_AVAILABLE: &str = "N/A";

/// esummary 結果中列出 PMID 的保留鍵，不是論文記錄
pub const RESERVED_UIDS_KEY: &str = "uids";

/// Search ids plus the raw `result` object returned by esummary.
#[derive(Debug, Clone, Default)]
pub struct SummaryBatch {
    pub ids: Vec<String>,
    pub records: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRow {
    #[serde(rename = "PubMedID")]
    pub pubmed_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_email: String,
}

impl ExtractedRow {
    pub const HEADERS: [&'static str; 6] = [
        "PubMedID",
        "Title",
        "Publication Date",
        "Non-academic Author(s)",
        "Company Affiliation(s)",
        "Corresponding Author Email",
    ];

    /// 依表頭順序取得欄位值
    pub fn as_record(&self) -> [&str; 6] {
        [
            self.pubmed_id.as_str(),
            self.title.as_str(),
            self.publication_date.as_str(),
            self.non_academic_authors.as_str(),
            self.company_affiliations.as_str(),
            self.corresponding_email.as_str(),
        ]
    }
}
