//! Structured logging module for the video search interface
//!
//! Provides consistent, contextual logging across the application.
//! Uses tracing structured fields so browser and server logs read alike.

use crate::domain::models::ResultId;
use crate::shared::errors::SearchError;

/// Log operations for the different flows
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    QueryBuild,
    Search,
    Pagination,
    Playback,
    Upload,
    Proxy,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::QueryBuild => "query_build",
            LogOperation::Search => "search",
            LogOperation::Pagination => "pagination",
            LogOperation::Playback => "playback",
            LogOperation::Upload => "upload",
            LogOperation::Proxy => "proxy",
        }
    }
}

/// Log rejected query (nothing to search for)
pub fn log_query_rejected(error: &SearchError) {
    tracing::debug!(
        operation = LogOperation::QueryBuild.as_str(),
        error = %error,
        "Search not issued"
    );
}

/// Log request issued to the search service
pub fn log_request_issued(operation: LogOperation, sequence: u64, page: u32, query_count: usize) {
    tracing::info!(
        operation = operation.as_str(),
        sequence = sequence,
        page = page,
        query_count = query_count,
        "Search request issued"
    );
}

/// Log applied result page
pub fn log_results_applied(operation: LogOperation, sequence: u64, page: u32, result_count: usize) {
    tracing::info!(
        operation = operation.as_str(),
        sequence = sequence,
        page = page,
        result_count = result_count,
        "Search results applied"
    );
}

/// Log failed request
pub fn log_request_failed(operation: LogOperation, sequence: u64, error: &SearchError) {
    tracing::error!(
        operation = operation.as_str(),
        sequence = sequence,
        error = %error,
        detail = error.detail(),
        "Search request failed"
    );
}

/// Log response dropped because a newer request was issued
pub fn log_stale_response(sequence: u64, latest: u64) {
    tracing::debug!(
        operation = LogOperation::Search.as_str(),
        sequence = sequence,
        latest_sequence = latest,
        "Discarded superseded response"
    );
}

/// Log pagination metadata that breaks `current_page <= total_pages`
pub fn log_inconsistent_pagination(current_page: u32, total_pages: u32) {
    tracing::warn!(
        operation = LogOperation::Pagination.as_str(),
        current_page = current_page,
        total_pages = total_pages,
        "Server returned inconsistent pagination"
    );
}

/// Log playback failure (never shown to the user)
pub fn log_playback_failure(result_id: &ResultId, error: &str) {
    tracing::warn!(
        operation = LogOperation::Playback.as_str(),
        result_id = %result_id,
        error = error,
        "Media playback failed"
    );
}

/// Log play interrupted by our own pause
pub fn log_playback_interrupted(result_id: &ResultId) {
    tracing::trace!(
        operation = LogOperation::Playback.as_str(),
        result_id = %result_id,
        "Play request interrupted by pause"
    );
}

/// Log upload batch outcome
pub fn log_upload_batch(accepted: usize, rejected: usize) {
    tracing::info!(
        operation = LogOperation::Upload.as_str(),
        accepted = accepted,
        rejected = rejected,
        "Image batch selected"
    );
}

/// Log upload batch conversion failure
pub fn log_upload_failed(error: &SearchError) {
    tracing::error!(
        operation = LogOperation::Upload.as_str(),
        error = %error,
        "Image batch discarded"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::QueryBuild.as_str(), "query_build");
        assert_eq!(LogOperation::Search.as_str(), "search");
        assert_eq!(LogOperation::Pagination.as_str(), "pagination");
        assert_eq!(LogOperation::Playback.as_str(), "playback");
        assert_eq!(LogOperation::Upload.as_str(), "upload");
        assert_eq!(LogOperation::Proxy.as_str(), "proxy");
    }
}
