use serde::{Deserialize, Serialize};

/// Media types accepted as image queries
pub const SUPPORTED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// Value of the file input's `accept` attribute
pub const FILE_INPUT_ACCEPT: &str = ".jpg,.jpeg,.png";

pub fn is_supported_image_type(media_type: &str) -> bool {
    SUPPORTED_IMAGE_TYPES.contains(&media_type)
}

/// An image selected by the user, converted to base64 for querying
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub id: String,
    pub filename: String,
    pub media_type: String,
    /// Raw base64, without any `data:` prefix
    pub base64_payload: String,
}

impl UploadedImage {
    pub fn new(filename: String, media_type: String, base64_payload: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            filename,
            media_type,
            base64_payload: strip_data_url_prefix(&base64_payload).to_string(),
        }
    }

    /// Data URL for local preview rendering
    pub fn preview_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.base64_payload)
    }
}

/// Drop a leading `data:<mime>;base64,` if present
pub fn strip_data_url_prefix(payload: &str) -> &str {
    if payload.starts_with("data:") {
        if let Some(index) = payload.find(";base64,") {
            return &payload[index + ";base64,".len()..];
        }
    }
    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_types() {
        assert!(is_supported_image_type("image/jpeg"));
        assert!(is_supported_image_type("image/png"));
        assert!(!is_supported_image_type("image/gif"));
        assert!(!is_supported_image_type("image/webp"));
        assert!(!is_supported_image_type(""));
    }

    #[test]
    fn test_strip_data_url_prefix() {
        assert_eq!(strip_data_url_prefix("data:image/png;base64,AAAA"), "AAAA");
        assert_eq!(strip_data_url_prefix("AAAA"), "AAAA");
        assert_eq!(strip_data_url_prefix("data:text/plain,hello"), "data:text/plain,hello");
    }

    #[test]
    fn test_preview_url_reprefixes_payload() {
        let image = UploadedImage::new(
            "cat.png".to_string(),
            "image/png".to_string(),
            "data:image/png;base64,iVBORw0KGgo=".to_string(),
        );
        assert_eq!(image.base64_payload, "iVBORw0KGgo=");
        assert_eq!(image.preview_url(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = UploadedImage::new("a.jpg".into(), "image/jpeg".into(), "AA==".into());
        let b = UploadedImage::new("a.jpg".into(), "image/jpeg".into(), "AA==".into());
        assert_ne!(a.id, b.id);
    }
}
