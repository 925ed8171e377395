use thiserror::Error;

/// Hard errors surfaced by the search interface.
///
/// Playback failures are not here: they are logged, never shown
/// (see `PlaybackFailure`). Every variant carries plain strings so the error can live inside UI
/// state (signals need `Clone`, tests need `PartialEq`).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("Please enter a search term or upload files")]
    Validation,

    #[error("Failed to process uploaded files: {0}")]
    FileProcessing(String),

    /// Non-success HTTP response, body kept verbatim.
    #[error("{0}")]
    Api(String),

    #[error("An error occurred while fetching more results")]
    PageFetch(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Invalid response from search service: {0}")]
    Decode(String),
}

impl SearchError {
    /// Detail to log alongside the user-facing message.
    pub fn detail(&self) -> &str {
        match self {
            SearchError::Validation => "empty query",
            SearchError::FileProcessing(detail)
            | SearchError::Api(detail)
            | SearchError::PageFetch(detail)
            | SearchError::Transport(detail)
            | SearchError::Decode(detail) => detail,
        }
    }
}

/// Non-fatal messages, rendered apart from hard errors.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    NoResults,
    UnsupportedFiles(Vec<String>),
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::NoResults => write!(f, "No results found. Try a different search."),
            Notice::UnsupportedFiles(names) => write!(
                f,
                "Only JPEG and PNG images are supported. Skipped: {}",
                names.join(", ")
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
