//! Drop zone and preview state for the upload tab.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Drop-zone border while a file is dragged over it.
pub const DROP_HOVER_BORDER: &str = "#6366f1";
/// Drop-zone border at rest.
pub const DROP_IDLE_BORDER: &str = "rgba(255, 255, 255, 0.1)";

/// Whether a MIME type names an image. Anything else is ignored on upload.
#[must_use]
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    /// `data:` URL of the accepted image, once read.
    pub preview: Option<String>,
    /// A drag is currently hovering the drop zone.
    pub drag_hover: bool,
}

impl UploadState {
    /// The drop zone is shown until a preview exists.
    #[must_use]
    pub fn shows_drop_zone(&self) -> bool {
        self.preview.is_none()
    }

    #[must_use]
    pub fn drop_zone_border(&self) -> &'static str {
        if self.drag_hover { DROP_HOVER_BORDER } else { DROP_IDLE_BORDER }
    }

    /// Decide whether a file of type `mime` should be read at all. A rejected
    /// file leaves the state exactly as it was.
    #[must_use]
    pub fn admit(&self, mime: &str) -> bool {
        is_image_mime(mime)
    }

    /// Swap the drop zone for the preview.
    pub fn accept(&mut self, data_url: String) {
        self.preview = Some(data_url);
        self.drag_hover = false;
    }
}
