/// Forwarding of `/api/search` to the search backend
pub mod search_proxy;

pub use search_proxy::{search_proxy_handler, SearchProxyState};
