pub mod routes;
pub mod search;

pub use routes::{App, Route};
pub use search::SearchPage;
