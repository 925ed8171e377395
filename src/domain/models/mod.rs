// Domain models (search entities)
// Pure Rust, no framework dependencies

pub mod query;
pub mod result;
pub mod image;

pub use query::{QueryType, SearchQuery, SearchRequest};
pub use result::{Pagination, ResultId, SearchResponse, SearchResult};
pub use image::*;
