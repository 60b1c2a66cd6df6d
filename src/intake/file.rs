// SPDX-License-Identifier: MPL-2.0
//! Raw and accepted file representations.
//!
//! A [`RawFile`] is whatever a drop or pick delivered. It is probed into a
//! [`Candidate`] (metadata only) for the acceptance check, and only then read
//! into a [`SelectedFile`].

use super::validator::RejectReason;
use image_rs::ImageFormat;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Type string used when nothing better is known.
pub const OCTET_STREAM: &str = "application/octet-stream";

const SVG_MEDIA_TYPE: &str = "image/svg+xml";

/// A file reference as delivered by a drop or a pick, before validation.
#[derive(Clone, PartialEq, Eq)]
pub enum RawFile {
    /// A file on disk (window drops and native dialogs).
    Path(PathBuf),
    /// Content already in memory, with its display name.
    Memory { name: String, data: Arc<[u8]> },
}

impl RawFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        RawFile::Path(path.into())
    }

    pub fn from_bytes(name: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        RawFile::Memory {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Name shown to the user: the file name for paths, the given name otherwise.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            RawFile::Path(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned()),
            RawFile::Memory { name, .. } => name.clone(),
        }
    }

    /// Collects metadata without reading the content.
    pub(crate) fn probe(&self) -> Result<Candidate, RejectReason> {
        let name = self.display_name();
        let size = match self {
            RawFile::Path(path) => {
                let metadata = fs::metadata(path).map_err(RejectReason::unreadable)?;
                if !metadata.is_file() {
                    return Err(RejectReason::Unreadable {
                        reason: "not a regular file".to_string(),
                    });
                }
                metadata.len()
            }
            RawFile::Memory { data, .. } => data.len() as u64,
        };

        Ok(Candidate {
            media_type: media_type_for(&name),
            extension: extension_of(&name),
            name,
            size,
        })
    }

    /// Reads the full content.
    pub(crate) fn read(&self) -> Result<Arc<[u8]>, RejectReason> {
        match self {
            RawFile::Path(path) => fs::read(path)
                .map(Arc::from)
                .map_err(RejectReason::unreadable),
            RawFile::Memory { data, .. } => Ok(Arc::clone(data)),
        }
    }

    fn source_path(&self) -> Option<PathBuf> {
        match self {
            RawFile::Path(path) => Some(path.clone()),
            RawFile::Memory { .. } => None,
        }
    }
}

impl fmt::Debug for RawFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawFile::Path(path) => f.debug_tuple("Path").field(path).finish(),
            RawFile::Memory { name, data } => f
                .debug_struct("Memory")
                .field("name", name)
                .field("len", &data.len())
                .finish(),
        }
    }
}

impl From<PathBuf> for RawFile {
    fn from(path: PathBuf) -> Self {
        RawFile::Path(path)
    }
}

/// Metadata probe evaluated by acceptance rules before any content is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    name: String,
    media_type: String,
    extension: Option<String>,
    size: u64,
}

impl Candidate {
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        Self {
            media_type: media_type_for(&name),
            extension: extension_of(&name),
            name,
            size,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type string guessed from the extension.
    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Lowercased extension, without the dot.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }
}

/// The accepted, normalized file held by an intake widget.
///
/// Cloning is cheap: the content is shared and never mutated. A new
/// selection always produces a new `SelectedFile`.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    media_type: String,
    content: Arc<[u8]>,
    source: Option<PathBuf>,
}

impl SelectedFile {
    /// Builds the selected file from a raw file and its already-read content.
    ///
    /// When the extension gives no type, the content signature is sniffed.
    pub(crate) fn from_parts(raw: &RawFile, candidate: Candidate, content: Arc<[u8]>) -> Self {
        let media_type = if candidate.media_type == OCTET_STREAM {
            image_rs::guess_format(&content)
                .map(|format| format.to_mime_type().to_string())
                .unwrap_or(candidate.media_type)
        } else {
            candidate.media_type
        };

        Self {
            name: candidate.name,
            media_type,
            content,
            source: raw.source_path(),
        }
    }

    /// Display name (file name for dropped or picked files).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type string, e.g. `image/png`.
    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Raw content.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.content
    }

    /// Shared handle to the raw content.
    #[must_use]
    pub fn content(&self) -> Arc<[u8]> {
        Arc::clone(&self.content)
    }

    /// Content size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Path the file was read from, if it came from disk.
    #[must_use]
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    #[must_use]
    pub fn is_svg(&self) -> bool {
        self.media_type == SVG_MEDIA_TYPE
    }

    #[must_use]
    pub fn is_image(&self) -> bool {
        self.media_type.starts_with("image/")
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("len", &self.content.len())
            .finish()
    }
}

/// Guesses a type string from a file name's extension.
#[must_use]
pub fn media_type_for(name: &str) -> String {
    match extension_of(name) {
        Some(ext) if ext == "svg" => SVG_MEDIA_TYPE.to_string(),
        Some(ext) => ImageFormat::from_extension(&ext)
            .map(|format| format.to_mime_type().to_string())
            .unwrap_or_else(|| OCTET_STREAM.to_string()),
        None => OCTET_STREAM.to_string(),
    }
}

fn extension_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}
