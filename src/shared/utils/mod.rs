// Utility functions
// Formatting, validation, helpers

pub mod format;

pub use format::{format_created_at, format_segment, format_timestamp, page_window, relevance_percent};
