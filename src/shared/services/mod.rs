// Shared services
// Search transport, media control and file input, used by the hooks
pub mod search_client;
pub mod media;
pub mod file_input;

pub use search_client::{HttpSearchClient, SearchTransport, dispatch};
pub use media::{media_element_id, run_media_commands};
pub use file_input::add_files_from_input;
