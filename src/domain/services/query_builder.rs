//! Query building and image intake
//!
//! Turns the search box text and the uploaded images into the ordered
//! query list, and converts freshly selected files into base64 images.

use std::future::Future;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use futures::future::try_join_all;

use crate::domain::models::{SearchQuery, UploadedImage, is_supported_image_type};
use crate::shared::errors::{Result, SearchError};

/// Text query first (if any), then one query per image in upload order.
pub fn build_queries(
    text: &str,
    images: &[UploadedImage],
    embedding_model: &str,
) -> Result<Vec<SearchQuery>> {
    let mut queries = Vec::with_capacity(images.len() + 1);

    let trimmed = text.trim();
    if !trimmed.is_empty() {
        queries.push(SearchQuery::text(trimmed, embedding_model));
    }

    queries.extend(
        images
            .iter()
            .map(|image| SearchQuery::image(image.base64_payload.clone(), embedding_model)),
    );

    if queries.is_empty() {
        return Err(SearchError::Validation);
    }

    Ok(queries)
}

/// A file picked by the user, before conversion
#[derive(Debug, Clone, PartialEq)]
pub struct FileCandidate<F> {
    pub filename: String,
    pub media_type: String,
    pub handle: F,
}

/// Result of processing one file selection
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    /// All converted images, or the first conversion failure
    pub converted: Result<Vec<UploadedImage>>,
    /// Names of files skipped for their media type
    pub rejected: Vec<String>,
}

/// Filter a selection by media type, then convert every accepted file.
///
/// Conversions run concurrently. One failure discards the whole batch;
/// rejected files never abort the batch.
pub async fn process_batch<F, R, Fut>(candidates: Vec<FileCandidate<F>>, read: R) -> BatchOutcome
where
    R: Fn(F) -> Fut,
    Fut: Future<Output = std::result::Result<Vec<u8>, String>>,
{
    let (accepted, rejected): (Vec<_>, Vec<_>) = candidates
        .into_iter()
        .partition(|candidate| is_supported_image_type(&candidate.media_type));

    let rejected: Vec<String> = rejected.into_iter().map(|c| c.filename).collect();

    let conversions = accepted.into_iter().map(|candidate| {
        let bytes = read(candidate.handle);
        let filename = candidate.filename;
        let media_type = candidate.media_type;
        async move {
            let bytes = bytes
                .await
                .map_err(|e| SearchError::FileProcessing(format!("{}: {}", filename, e)))?;
            Ok::<_, SearchError>(UploadedImage::new(filename, media_type, STANDARD.encode(bytes)))
        }
    });

    BatchOutcome {
        converted: try_join_all(conversions).await,
        rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::QueryType;
    use futures::executor::block_on;

    fn image(payload: &str) -> UploadedImage {
        UploadedImage::new("img.jpg".to_string(), "image/jpeg".to_string(), payload.to_string())
    }

    fn candidate(name: &str, media_type: &str, bytes: &[u8]) -> FileCandidate<Vec<u8>> {
        FileCandidate {
            filename: name.to_string(),
            media_type: media_type.to_string(),
            handle: bytes.to_vec(),
        }
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(build_queries("", &[], "multimodal"), Err(SearchError::Validation));
        assert_eq!(build_queries("   \t", &[], "multimodal"), Err(SearchError::Validation));
    }

    #[test]
    fn test_text_is_trimmed() {
        let queries = build_queries("  sunset beach ", &[], "multimodal").unwrap();
        assert_eq!(queries, vec![SearchQuery::text("sunset beach", "multimodal")]);
    }

    #[test]
    fn test_image_only_query() {
        let queries = build_queries("", &[image("AAAA")], "multimodal").unwrap();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].query_type, QueryType::Base64Image);
        assert_eq!(queries[0].value, "AAAA");
        assert_eq!(queries[0].embedding_model, "multimodal");
    }

    #[test]
    fn test_text_comes_before_images_in_upload_order() {
        let queries = build_queries("dog", &[image("first"), image("second")], "multimodal").unwrap();
        let values: Vec<&str> = queries.iter().map(|q| q.value.as_str()).collect();
        assert_eq!(values, vec!["dog", "first", "second"]);
        assert_eq!(queries[0].query_type, QueryType::Text);
    }

    #[test]
    fn test_batch_skips_unsupported_types() {
        let outcome = block_on(process_batch(
            vec![
                candidate("a.png", "image/png", b"png-bytes"),
                candidate("b.gif", "image/gif", b"gif-bytes"),
                candidate("c.jpg", "image/jpeg", b"jpg-bytes"),
            ],
            |bytes: Vec<u8>| async move { Ok(bytes) },
        ));

        assert_eq!(outcome.rejected, vec!["b.gif".to_string()]);
        let images = outcome.converted.unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].filename, "a.png");
        assert_eq!(images[0].base64_payload, STANDARD.encode(b"png-bytes"));
        assert_eq!(images[1].media_type, "image/jpeg");
    }

    #[test]
    fn test_batch_fails_as_a_whole() {
        let outcome = block_on(process_batch(
            vec![
                candidate("ok.png", "image/png", b"fine"),
                candidate("broken.jpg", "image/jpeg", b""),
            ],
            |bytes: Vec<u8>| async move {
                if bytes.is_empty() {
                    Err("read error".to_string())
                } else {
                    Ok(bytes)
                }
            },
        ));

        match outcome.converted {
            Err(SearchError::FileProcessing(detail)) => assert!(detail.contains("broken.jpg")),
            other => panic!("expected FileProcessing, got {:?}", other),
        }
    }

    #[test]
    fn test_batch_of_only_rejected_files() {
        let outcome = block_on(process_batch(
            vec![candidate("clip.mp4", "video/mp4", b"x")],
            |bytes: Vec<u8>| async move { Ok(bytes) },
        ));
        assert_eq!(outcome.converted, Ok(vec![]));
        assert_eq!(outcome.rejected, vec!["clip.mp4".to_string()]);
    }
}
