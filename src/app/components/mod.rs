pub mod button;
pub mod common;
pub mod image_upload;
pub mod pagination;
pub mod result_card;
pub mod search_bar;

pub use button::{Button, ButtonVariant};
pub use common::{EmptyState, ErrorMessage, LoadingText, NoticeMessage};
pub use image_upload::{ImagePreviewGrid, ImagePreviewItem};
pub use pagination::PaginationControls;
pub use result_card::ResultCard;
pub use search_bar::{SearchBar, IMAGE_INPUT_ID};
