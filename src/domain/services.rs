use crate::domain::model::{ExtractedRow, NOT_AVAILABLE, RESERVED_UIDS_KEY};
use regex::{Regex, RegexBuilder};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::OnceLock;

/// 判定為業界（非學術）單位的關鍵字
pub const COMPANY_KEYWORDS: &[&str] = &["pharma", "biotech"];

fn company_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let alternation = COMPANY_KEYWORDS
            .iter()
            .map(|keyword| regex::escape(keyword))
            .collect::<Vec<_>>()
            .join("|");
        RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()
            .expect("company keyword pattern is built from escaped literals")
    })
}

/// Case-insensitive substring match against [`COMPANY_KEYWORDS`].
pub fn is_company_affiliation(affiliation: &str) -> bool {
    company_pattern().is_match(affiliation)
}

fn text_or_default<'a>(record: &'a Value, field: &str, default: &'a str) -> &'a str {
    record
        .get(field)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
}

fn join_or_default(values: &[&str]) -> String {
    if values.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        values.join("; ")
    }
}

/// Builds one row from a single esummary record.
pub fn extract_row(pubmed_id: &str, record: &Value) -> ExtractedRow {
    let mut authors = Vec::new();
    let mut affiliations = Vec::new();

    let author_list = record
        .get("authors")
        .and_then(|v| v.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default();

    for author in author_list {
        // 沒有 affiliation 字串的作者一律略過
        let Some(affiliation) = author.get("affiliation").and_then(|v| v.as_str()) else {
            continue;
        };

        if is_company_affiliation(affiliation) {
            authors.push(text_or_default(author, "name", "Unknown"));
            affiliations.push(affiliation);
        }
    }

    ExtractedRow {
        pubmed_id: pubmed_id.to_string(),
        title: text_or_default(record, "title", NOT_AVAILABLE).to_string(),
        publication_date: text_or_default(record, "pubdate", NOT_AVAILABLE).to_string(),
        non_academic_authors: join_or_default(&authors),
        company_affiliations: join_or_default(&affiliations),
        // PubMed 的 esummary 不提供 email，實務上永遠是 N/A
        corresponding_email: text_or_default(record, "email", NOT_AVAILABLE).to_string(),
    }
}

/// Converts the esummary `result` object into rows, skipping the `uids` listing.
///
/// Ids listed under `uids` come first in that order; any other keys follow in
/// map order.
pub fn extract_rows(records: &Map<String, Value>) -> Vec<ExtractedRow> {
    // uid -> 相關性排序位置；重複的 uid 以第一次出現為準
    let mut positions: HashMap<&str, usize> = HashMap::new();
    if let Some(uids) = records.get(RESERVED_UIDS_KEY).and_then(|v| v.as_array()) {
        for (index, uid) in uids.iter().filter_map(|v| v.as_str()).enumerate() {
            positions.entry(uid).or_insert(index);
        }
    }

    let mut keys: Vec<&str> = records
        .keys()
        .map(String::as_str)
        .filter(|key| *key != RESERVED_UIDS_KEY)
        .collect();
    keys.sort_by_key(|key| positions.get(key).copied().unwrap_or(usize::MAX));

    keys.into_iter()
        .map(|key| extract_row(key, &records[key]))
        .collect()
}
