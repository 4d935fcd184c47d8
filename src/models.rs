//! Typed payloads exchanged with the dataset endpoints

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Pagination cursor for paged listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub current_page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Cursor for page `current_page` (1-based) of `page_size` records
    pub fn new(current_page: u32, page_size: u32) -> Self {
        Self {
            current_page,
            page_size,
        }
    }
}

/// One page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub total: u64,
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    #[serde(default)]
    pub current: u32,
    #[serde(default)]
    pub size: u32,
}

impl<T> Page<T> {
    /// Whether more pages follow this one
    pub fn has_next(&self) -> bool {
        u64::from(self.current) * u64::from(self.size) < self.total
    }
}

/// A knowledge-base dataset as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    /// `"0"` for a general dataset, `"1"` for a web-sourced one
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Web-source settings (`source_url`, `selector`) for web datasets
    #[serde(default)]
    pub meta: Option<Value>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub document_count: Option<u64>,
    #[serde(default)]
    pub char_length: Option<u64>,
    #[serde(default)]
    pub application_mapping_count: Option<u64>,
    #[serde(default)]
    pub create_time: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
}

impl Dataset {
    /// Whether the dataset was created from a web source
    pub fn is_web(&self) -> bool {
        self.kind.as_deref() == Some("1")
    }

    /// Source URL of a web dataset
    pub fn source_url(&self) -> Option<&str> {
        self.meta.as_ref()?.get("source_url")?.as_str()
    }
}

/// A question attached to a paragraph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct Problem {
    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[builder(into)]
    pub content: String,
}

/// A chunk of document text, optionally titled, with its questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct Paragraph {
    #[builder(into)]
    pub content: String,
    #[builder(into, default)]
    #[serde(default)]
    pub title: String,
    #[builder(default)]
    #[serde(default)]
    pub problem_list: Vec<Problem>,
}

/// A named document split into ordered paragraphs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
pub struct Document {
    #[builder(into)]
    pub name: String,
    #[builder(default)]
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

/// Body of `POST /dataset`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateDatasetRequest {
    pub name: String,
    pub desc: String,
    pub documents: Vec<Document>,
}

/// Body of `POST /dataset/web`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateWebDatasetRequest {
    pub name: String,
    pub desc: String,
    pub source_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

/// Body of `PUT /dataset/{id}`; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateDatasetRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id_list: Option<Vec<String>>,
}

/// Query of the paged listing
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Query of `GET /dataset/{id}/hit_test`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitTestQuery {
    pub query_text: String,
    pub top_number: u32,
    pub similarity: f64,
}

/// A paragraph matched by a hit test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitTestRecord {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub similarity: f64,
    #[serde(default)]
    pub comprehensive_score: Option<f64>,
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub document_name: Option<String>,
    #[serde(default)]
    pub dataset_id: Option<String>,
    #[serde(default)]
    pub dataset_name: Option<String>,
    #[serde(default)]
    pub hit_num: Option<u64>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// An application that can bind a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// How a web dataset is re-ingested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncType {
    /// Replace existing documents with the freshly scraped ones
    Replace,
    /// Keep existing documents and add what is missing
    Complete,
}

impl SyncType {
    /// Value sent as the `sync_type` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncType::Replace => "replace",
            SyncType::Complete => "complete",
        }
    }
}

impl fmt::Display for SyncType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
