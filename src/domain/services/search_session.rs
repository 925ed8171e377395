//! Search and pagination state
//!
//! `SearchSession` owns everything the search page shows: results,
//! pagination, loading/error/notice slots, the captured query list, the
//! attached images and the per-result UI map. Network I/O happens outside; the session hands out
//! `PendingRequest`s and takes back `Completion`s.
//!
//! Every request carries a sequence number. Only the completion of the most
//! recently issued request is applied, so overlapping searches cannot
//! overwrite newer results and `loading` never drops early.

use crate::config::AppConfig;
use crate::domain::models::{Pagination, ResultId, SearchQuery, SearchRequest, SearchResponse, SearchResult};
use crate::domain::services::query_builder::{BatchOutcome, build_queries};
use crate::domain::services::result_ui::{MediaCommand, PlaybackFailure, ResultUi, Section};
use crate::domain::services::upload_tray::UploadTray;
use crate::shared::errors::{Notice, SearchError};
use crate::shared::logging::{self, LogOperation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Fresh search built from the current input
    Search,
    /// Page change replaying the captured queries
    Page,
}

impl RequestKind {
    fn operation(self) -> LogOperation {
        match self {
            RequestKind::Search => LogOperation::Search,
            RequestKind::Page => LogOperation::Pagination,
        }
    }
}

/// A request the caller must send
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub sequence: u64,
    pub kind: RequestKind,
    pub request: SearchRequest,
}

/// The answer to a `PendingRequest`
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub sequence: u64,
    pub kind: RequestKind,
    pub outcome: Result<SearchResponse, SearchError>,
}

impl PendingRequest {
    pub fn complete(self, outcome: Result<SearchResponse, SearchError>) -> Completion {
        Completion {
            sequence: self.sequence,
            kind: self.kind,
            outcome,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    /// State updated; run these media commands
    Applied(Vec<MediaCommand>),
    /// A newer request was issued meanwhile, nothing changed
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchSession {
    results: Vec<SearchResult>,
    pagination: Pagination,
    loading: bool,
    has_searched: bool,
    error: Option<SearchError>,
    notice: Option<Notice>,
    last_queries: Vec<SearchQuery>,
    latest_sequence: u64,
    result_ui: ResultUi,
    uploads: UploadTray,
    page_size: u32,
    embedding_model: String,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl SearchSession {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            results: Vec::new(),
            pagination: Pagination::default(),
            loading: false,
            has_searched: false,
            error: None,
            notice: None,
            last_queries: Vec::new(),
            latest_sequence: 0,
            result_ui: ResultUi::default(),
            uploads: UploadTray::default(),
            page_size: config.page_size,
            embedding_model: config.embedding_model.clone(),
        }
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn error(&self) -> Option<&SearchError> {
        self.error.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn result_ui(&self) -> &ResultUi {
        &self.result_ui
    }

    pub fn uploads(&self) -> &UploadTray {
        &self.uploads
    }

    /// Clear the search and upload message slots.
    ///
    /// Every user action (search, page change, upload) starts with this.
    pub fn clear_messages(&mut self) {
        self.error = None;
        self.notice = None;
        self.uploads.clear_messages();
    }

    /// Start a search for `page` from `text` and the attached images.
    ///
    /// On empty input the validation error is stored and returned, and no
    /// request is produced.
    pub fn begin_search(&mut self, text: &str, page: u32) -> Result<PendingRequest, SearchError> {
        self.clear_messages();

        let queries = match build_queries(text, self.uploads.images(), &self.embedding_model) {
            Ok(queries) => queries,
            Err(error) => {
                logging::log_query_rejected(&error);
                self.error = Some(error.clone());
                return Err(error);
            }
        };

        self.has_searched = true;
        self.last_queries = queries;
        Ok(self.issue(RequestKind::Search, page.max(1)))
    }

    /// Request another page of the last search.
    ///
    /// `None` (and no state change) when `page` is out of range or a
    /// request is already loading.
    pub fn go_to_page(&mut self, page: u32) -> Option<PendingRequest> {
        if self.loading || !self.pagination.contains(page) || self.last_queries.is_empty() {
            return None;
        }

        self.clear_messages();
        Some(self.issue(RequestKind::Page, page))
    }

    /// A file selection is about to be converted
    pub fn begin_upload(&mut self) {
        self.clear_messages();
        self.uploads.start_batch();
    }

    pub fn finish_upload(&mut self, outcome: BatchOutcome) {
        self.uploads.finish_batch(outcome);
    }

    pub fn remove_image(&mut self, id: &str) {
        self.uploads.remove(id);
    }

    pub fn clear_images(&mut self) {
        self.uploads.clear();
    }

    fn issue(&mut self, kind: RequestKind, page: u32) -> PendingRequest {
        self.latest_sequence += 1;
        self.loading = true;

        logging::log_request_issued(kind.operation(), self.latest_sequence, page, self.last_queries.len());

        PendingRequest {
            sequence: self.latest_sequence,
            kind,
            request: SearchRequest {
                queries: self.last_queries.clone(),
                page,
                page_size: self.page_size,
            },
        }
    }

    /// Apply the response to a previously issued request.
    pub fn apply(&mut self, completion: Completion) -> ApplyOutcome {
        if completion.sequence != self.latest_sequence {
            logging::log_stale_response(completion.sequence, self.latest_sequence);
            return ApplyOutcome::Stale;
        }

        self.loading = false;
        let operation = completion.kind.operation();

        match (completion.kind, completion.outcome) {
            (kind, Ok(response)) => {
                if !response.pagination.is_consistent() {
                    logging::log_inconsistent_pagination(
                        response.pagination.current_page,
                        response.pagination.total_pages,
                    );
                }
                logging::log_results_applied(
                    operation,
                    completion.sequence,
                    response.pagination.current_page,
                    response.results.len(),
                );

                self.results = response.results;
                self.pagination = response.pagination;
                self.error = None;
                if kind == RequestKind::Search && self.results.is_empty() {
                    self.notice = Some(Notice::NoResults);
                }

                ApplyOutcome::Applied(self.result_ui.reset_playback())
            }
            (RequestKind::Search, Err(error)) => {
                logging::log_request_failed(operation, completion.sequence, &error);
                self.error = Some(error);
                self.results.clear();
                self.pagination = Pagination::default();
                ApplyOutcome::Applied(self.result_ui.reset_playback())
            }
            (RequestKind::Page, Err(error)) => {
                logging::log_request_failed(operation, completion.sequence, &error);
                self.error = Some(SearchError::PageFetch(error.to_string()));
                ApplyOutcome::Applied(Vec::new())
            }
        }
    }

    pub fn find_result(&self, id: &ResultId) -> Option<&SearchResult> {
        self.results.iter().find(|result| &result.id == id)
    }

    /// Play/pause click on a result of the current page
    pub fn toggle_playback(&mut self, id: &ResultId) -> Vec<MediaCommand> {
        let Some(start) = self.find_result(id).map(SearchResult::start_position) else {
            return Vec::new();
        };
        self.result_ui.click(id, start)
    }

    pub fn on_media_event(&mut self, id: &ResultId, playing: bool) {
        self.result_ui.on_media_event(id, playing);
    }

    pub fn on_play_failed(&mut self, id: &ResultId, failure: PlaybackFailure) {
        self.result_ui.on_play_failed(id, failure);
    }

    pub fn toggle_section(&mut self, id: &ResultId, section: Section) -> bool {
        self.result_ui.toggle(id, section)
    }
}
