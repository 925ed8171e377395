use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a result, unique within one result page
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultId(String);

impl ResultId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResultId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResultId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A matching video (or video segment)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: ResultId,
    pub media_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<f64>,
    #[serde(default)]
    pub segment_start: Option<f64>,
    #[serde(default)]
    pub segment_end: Option<f64>,
    /// 0.0 to 1.0
    pub relevance_score: f64,
    #[serde(default)]
    pub match_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SearchResult {
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(self.id.as_str())
    }

    /// Where playback starts when this result is selected
    pub fn start_position(&self) -> f64 {
        self.segment_start.unwrap_or(0.0)
    }
}

/// Pagination metadata, taken verbatim from the last response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_results: u64,
    #[serde(default)]
    pub has_more: bool,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 0,
            total_results: 0,
            has_more: false,
        }
    }
}

impl Pagination {
    /// `current_page <= total_pages` whenever there are pages at all
    pub fn is_consistent(&self) -> bool {
        self.current_page >= 1 && (self.total_pages == 0 || self.current_page <= self.total_pages)
    }

    pub fn contains(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// Success body of `POST /api/search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_parses_with_optional_fields_missing() {
        let body = r#"{
            "results": [
                {
                    "id": "vid-1",
                    "mediaUrl": "/media/vid-1.mp4",
                    "relevanceScore": 0.87,
                    "segmentStart": 12.5,
                    "segmentEnd": 20.0,
                    "createdAt": "2025-03-01T10:00:00Z"
                }
            ],
            "pagination": { "currentPage": 1, "totalPages": 3, "totalResults": 25, "hasMore": true }
        }"#;

        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let result = &response.results[0];
        assert_eq!(result.id, ResultId::new("vid-1"));
        assert_eq!(result.title, None);
        assert_eq!(result.start_position(), 12.5);
        assert_eq!(result.display_title(), "vid-1");
        assert_eq!(response.pagination.total_pages, 3);
        assert_eq!(response.pagination.total_results, 25);
        assert!(response.pagination.has_more);
    }

    #[test]
    fn test_has_more_defaults_to_false() {
        let pagination: Pagination =
            serde_json::from_str(r#"{"currentPage":1,"totalPages":0,"totalResults":0}"#).unwrap();
        assert!(!pagination.has_more);
        assert_eq!(pagination, Pagination::default());
    }

    #[test]
    fn test_pagination_bounds() {
        let pagination = Pagination {
            current_page: 2,
            total_pages: 3,
            total_results: 25,
            has_more: true,
        };
        assert!(pagination.is_consistent());
        assert!(!pagination.contains(0));
        assert!(pagination.contains(3));
        assert!(!pagination.contains(4));
        assert!(pagination.has_previous());
        assert!(pagination.has_next());

        let broken = Pagination { current_page: 5, ..pagination };
        assert!(!broken.is_consistent());
    }
}
