// SPDX-License-Identifier: MPL-2.0
//! Decoding of selected file content into preview images.
//!
//! Raster formats go through `image`, SVG is rasterized with `resvg`. Large
//! images are scaled down so a preview never holds more than
//! [`PREVIEW_MAX_EDGE`] pixels along either side.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{GenericImageView, ImageError};
use resvg::usvg;

/// Longest side of a preview, in pixels.
pub const PREVIEW_MAX_EDGE: u32 = 1600;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Decodes `bytes` into a preview image.
///
/// # Errors
///
/// Returns [`Error::Svg`] when SVG parsing or rasterization fails, and
/// [`Error::Decode`] when raster content is invalid or unsupported.
pub fn decode(bytes: &[u8], is_svg: bool) -> Result<ImageData> {
    if bytes.is_empty() {
        return Err(Error::Decode("empty content".into()));
    }
    if is_svg {
        decode_svg(bytes)
    } else {
        decode_raster(bytes)
    }
}

fn decode_raster(bytes: &[u8]) -> Result<ImageData> {
    let mut img = image_rs::load_from_memory(bytes)?;

    let (width, height) = img.dimensions();
    if width > PREVIEW_MAX_EDGE || height > PREVIEW_MAX_EDGE {
        img = img.thumbnail(PREVIEW_MAX_EDGE, PREVIEW_MAX_EDGE);
    }

    let (width, height) = img.dimensions();
    Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
}

fn decode_svg(bytes: &[u8]) -> Result<ImageData> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let size = tree.size();
    if size.width() <= 0.0 || size.height() <= 0.0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let scale = (PREVIEW_MAX_EDGE as f32 / size.width().max(size.height())).min(1.0);
    let target = size
        .to_int_size()
        .scale_by(scale)
        .ok_or_else(|| Error::Svg("SVG has empty dimensions".into()))?;

    let mut pixmap = tiny_skia::Pixmap::new(target.width(), target.height())
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    Ok(ImageData::from_rgba(
        target.width(),
        target.height(),
        pixmap.take(),
    ))
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}
