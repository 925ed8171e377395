// Custom Dioxus hooks
pub mod use_search;

pub use use_search::{use_search, SearchState};
