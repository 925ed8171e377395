use serde::{Deserialize, Serialize};

/// Kind of a single search term.
///
/// Serialized snake_case: `"text"` and `"base64_image"` (not `base64-image`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    Text,
    Base64Image,
}

/// One typed search term sent to the backend.
///
/// Wire shape: `{"type": ..., "value": ..., "embedding_model": ...}`.
/// Field names are snake_case like the rest of the request body, while the
/// response (`SearchResponse`) uses camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(rename = "type")]
    pub query_type: QueryType,
    pub value: String,
    pub embedding_model: String,
}

impl SearchQuery {
    pub fn text(value: impl Into<String>, embedding_model: impl Into<String>) -> Self {
        Self {
            query_type: QueryType::Text,
            value: value.into(),
            embedding_model: embedding_model.into(),
        }
    }

    pub fn image(base64_payload: impl Into<String>, embedding_model: impl Into<String>) -> Self {
        Self {
            query_type: QueryType::Base64Image,
            value: base64_payload.into(),
            embedding_model: embedding_model.into(),
        }
    }
}

/// Body of `POST /api/search`: `{"queries": [...], "page": 1, "page_size": 10}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub queries: Vec<SearchQuery>,
    pub page: u32,
    pub page_size: u32,
}
