//! HTTP client for the search endpoint
//!
//! The browser build sends requests with gloo-net, native builds with
//! reqwest. Both report a non-success status as `SearchError::Api` carrying
//! the response body verbatim.

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::domain::models::{SearchRequest, SearchResponse};
use crate::domain::services::{Completion, PendingRequest};
use crate::shared::errors::{Result, SearchError};

/// Anything that can answer a search request
#[async_trait(?Send)]
pub trait SearchTransport {
    async fn send(&self, request: &SearchRequest) -> Result<SearchResponse>;
}

/// Send a pending request and package the answer for `SearchSession::apply`
pub async fn dispatch<T: SearchTransport + ?Sized>(transport: &T, pending: PendingRequest) -> Completion {
    let outcome = transport.send(&pending.request).await;
    pending.complete(outcome)
}

fn decode_response(body: &str) -> Result<SearchResponse> {
    serde_json::from_str(body).map_err(|e| SearchError::Decode(e.to_string()))
}

// Centralized search HTTP requests
#[derive(Debug, Clone, PartialEq)]
pub struct HttpSearchClient {
    url: String,
}

impl HttpSearchClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.search_url())
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl SearchTransport for HttpSearchClient {
    async fn send(&self, request: &SearchRequest) -> Result<SearchResponse> {
        use gloo_net::http::Request;

        let response = Request::post(&self.url)
            .json(request)
            .map_err(|e| SearchError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(SearchError::Api(body));
        }

        decode_response(&body)
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl SearchTransport for HttpSearchClient {
    async fn send(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let response = reqwest::Client::new()
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(SearchError::Api(body));
        }

        decode_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Pagination;
    use crate::domain::services::{ApplyOutcome, SearchSession};
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Records every request and replays canned answers in order
    #[derive(Default)]
    struct ScriptedTransport {
        sent: RefCell<Vec<SearchRequest>>,
        answers: RefCell<VecDeque<Result<SearchResponse>>>,
    }

    impl ScriptedTransport {
        fn answering(answers: Vec<Result<SearchResponse>>) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                answers: RefCell::new(answers.into()),
            }
        }
    }

    #[async_trait(?Send)]
    impl SearchTransport for ScriptedTransport {
        async fn send(&self, request: &SearchRequest) -> Result<SearchResponse> {
            self.sent.borrow_mut().push(request.clone());
            self.answers
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(SearchError::Transport("no scripted answer".to_string())))
        }
    }

    fn page(current_page: u32, total_pages: u32) -> SearchResponse {
        SearchResponse {
            results: vec![],
            pagination: Pagination {
                current_page,
                total_pages,
                total_results: u64::from(total_pages) * 10,
                has_more: current_page < total_pages,
            },
        }
    }

    #[test]
    fn test_decode_response_error() {
        assert!(matches!(decode_response("not json"), Err(SearchError::Decode(_))));
    }

    #[test]
    fn test_client_url_from_config() {
        let client = HttpSearchClient::from_config(&AppConfig::default());
        assert_eq!(client, HttpSearchClient::new("/api/search"));
    }

    #[tokio::test]
    async fn test_search_then_pages_send_identical_queries() {
        let transport = ScriptedTransport::answering(vec![Ok(page(1, 3)), Ok(page(2, 3)), Ok(page(1, 3))]);
        let mut session = SearchSession::default();

        let pending = session.begin_search("sunset beach", 1).unwrap();
        session.apply(dispatch(&transport, pending).await);

        let pending = session.go_to_page(2).unwrap();
        session.apply(dispatch(&transport, pending).await);

        let pending = session.go_to_page(1).unwrap();
        session.apply(dispatch(&transport, pending).await);

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[0].queries, sent[1].queries);
        assert_eq!(sent[1].queries, sent[2].queries);
        let pages: Vec<u32> = sent.iter().map(|r| r.page).collect();
        assert_eq!(pages, vec![1, 2, 1]);
        assert_eq!(session.pagination().current_page, 1);
    }

    /// Same steps as the search button: build, send if allowed, apply
    async fn run_search(session: &mut SearchSession, transport: &ScriptedTransport, text: &str) {
        if let Ok(pending) = session.begin_search(text, 1) {
            session.apply(dispatch(transport, pending).await);
        }
    }

    #[tokio::test]
    async fn test_validation_error_sends_nothing() {
        let transport = ScriptedTransport::answering(vec![Ok(page(1, 1))]);
        let mut session = SearchSession::default();

        run_search(&mut session, &transport, "   ").await;
        assert!(transport.sent.borrow().is_empty());
        assert_eq!(session.error(), Some(&SearchError::Validation));
        assert!(!session.has_searched());

        run_search(&mut session, &transport, "harbour at night").await;
        assert_eq!(transport.sent.borrow().len(), 1);
        assert_eq!(session.error(), None);
    }

    #[tokio::test]
    async fn test_api_error_body_surfaces_verbatim() {
        let transport = ScriptedTransport::answering(vec![Err(SearchError::Api("model not loaded".to_string()))]);
        let mut session = SearchSession::default();

        let pending = session.begin_search("cats", 1).unwrap();
        let outcome = session.apply(dispatch(&transport, pending).await);

        assert_eq!(outcome, ApplyOutcome::Applied(vec![]));
        assert_eq!(session.error().map(ToString::to_string), Some("model not loaded".to_string()));
        assert!(!session.is_loading());
    }
}
