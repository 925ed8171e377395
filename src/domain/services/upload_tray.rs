//! Images attached to the next search, plus the upload message slots

use crate::domain::models::UploadedImage;
use crate::domain::services::query_builder::BatchOutcome;
use crate::shared::errors::{Notice, SearchError};
use crate::shared::logging;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadTray {
    images: Vec<UploadedImage>,
    error: Option<SearchError>,
    notice: Option<Notice>,
    processing: bool,
}

impl UploadTray {
    /// Converted images, in upload order
    pub fn images(&self) -> &[UploadedImage] {
        &self.images
    }

    pub fn error(&self) -> Option<&SearchError> {
        self.error.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn clear_messages(&mut self) {
        self.error = None;
        self.notice = None;
    }

    pub fn remove(&mut self, id: &str) {
        self.images.retain(|img| img.id != id);
    }

    /// Drop every image and the upload messages
    pub fn clear(&mut self) {
        self.images.clear();
        self.clear_messages();
    }

    pub(crate) fn start_batch(&mut self) {
        self.clear_messages();
        self.processing = true;
    }

    /// Fold a processed batch in.
    ///
    /// A failed batch adds nothing; earlier images stay.
    pub(crate) fn finish_batch(&mut self, outcome: BatchOutcome) {
        let BatchOutcome { converted, rejected } = outcome;
        self.processing = false;

        let accepted = converted.as_ref().map(Vec::len).unwrap_or(0);
        logging::log_upload_batch(accepted, rejected.len());

        if !rejected.is_empty() {
            self.notice = Some(Notice::UnsupportedFiles(rejected));
        }

        match converted {
            Ok(images) => self.images.extend(images),
            Err(error) => {
                logging::log_upload_failed(&error);
                self.error = Some(error);
            }
        }
    }
}
