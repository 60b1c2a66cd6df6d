// SPDX-License-Identifier: MPL-2.0
//! Preview factory producing iced image handles.

use crate::error::Error;
use crate::intake::{PreviewFactory, PreviewId, SelectedFile};
use crate::media::{self, ImageData};

/// Decodes selected files into in-memory image handles.
#[derive(Debug, Default)]
pub struct ImagePreviews {
    last_error: Option<&'static str>,
    live: usize,
}

impl ImagePreviews {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// i18n key describing the last creation failure, cleared on success.
    #[must_use]
    pub fn last_error_key(&self) -> Option<&'static str> {
        self.last_error
    }

    /// Number of handles created and not yet released.
    #[must_use]
    pub fn live(&self) -> usize {
        self.live
    }
}

impl PreviewFactory for ImagePreviews {
    type Resource = ImageData;
    type Error = Error;

    fn create(&mut self, file: &SelectedFile) -> Result<ImageData, Error> {
        if !file.is_image() {
            self.last_error = Some("notification-preview-error-decode");
            return Err(Error::Decode(format!(
                "{} has no image preview",
                file.media_type()
            )));
        }

        match media::decode(file.bytes(), file.is_svg()) {
            Ok(data) => {
                self.last_error = None;
                self.live += 1;
                log::debug!(
                    "preview: decoded {} at {}x{}",
                    file.name(),
                    data.width,
                    data.height
                );
                Ok(data)
            }
            Err(err) => {
                self.last_error = Some(err.i18n_key());
                Err(err)
            }
        }
    }

    fn release(&mut self, id: PreviewId, resource: ImageData) {
        self.live = self.live.saturating_sub(1);
        log::debug!(
            "preview: released {id} ({}x{})",
            resource.width,
            resource.height
        );
        // Dropping the last clone of the handle frees the pixel data; the
        // renderer evicts its texture on the next frame.
        drop(resource);
    }
}
