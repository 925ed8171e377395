// Business logic services
// Framework-agnostic, 100% testable

pub mod query_builder;
pub mod result_ui;
pub mod search_session;
pub mod upload_tray;

pub use query_builder::{BatchOutcome, FileCandidate, build_queries, process_batch};
pub use result_ui::{MediaCommand, PlaybackFailure, PlaybackPhase, ResultUi, ResultUiState, Section};
pub use search_session::{ApplyOutcome, Completion, PendingRequest, RequestKind, SearchSession};
pub use upload_tray::UploadTray;
