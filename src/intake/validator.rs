// SPDX-License-Identifier: MPL-2.0
//! Acceptance rules and normalization of raw selections.
//!
//! [`evaluate`] turns the payload of a drop or pick into a [`Verdict`]:
//! - no file: [`Verdict::Empty`], declined silently
//! - first file rejected by the rules or unreadable: [`Verdict::Rejected`]
//! - otherwise: [`Verdict::Accepted`] with the normalized [`SelectedFile`]
//!
//! Only the first file of a payload is ever considered.

use super::file::{Candidate, RawFile, SelectedFile};
use crate::domain::intake::MaxFileSize;
use std::fmt;

/// Why a candidate file was turned away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Extension is not in the allowed list.
    UnsupportedType { media_type: String },
    /// File is larger than the configured limit.
    TooLarge { size: u64, limit: u64 },
    /// Metadata or content could not be read.
    Unreadable { reason: String },
    /// A custom predicate said no.
    NotAccepted,
}

impl RejectReason {
    pub(crate) fn unreadable(err: std::io::Error) -> Self {
        RejectReason::Unreadable {
            reason: err.to_string(),
        }
    }

    /// Returns the i18n message key for this rejection.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            RejectReason::UnsupportedType { .. } => "notification-rejected-type",
            RejectReason::TooLarge { .. } => "notification-rejected-too-large",
            RejectReason::Unreadable { .. } => "notification-rejected-unreadable",
            RejectReason::NotAccepted => "notification-rejected-other",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::UnsupportedType { media_type } => {
                write!(f, "unsupported file type: {}", media_type)
            }
            RejectReason::TooLarge { size, limit } => {
                write!(f, "file too large: {} bytes (limit {} bytes)", size, limit)
            }
            RejectReason::Unreadable { reason } => write!(f, "unreadable file: {}", reason),
            RejectReason::NotAccepted => write!(f, "file not accepted"),
        }
    }
}

/// Pluggable acceptance predicate, evaluated before a [`SelectedFile`] exists.
pub trait AcceptFile {
    /// Checks a candidate.
    ///
    /// # Errors
    ///
    /// Returns the reason the candidate is refused.
    fn check(&self, candidate: &Candidate) -> Result<(), RejectReason>;
}

impl<F> AcceptFile for F
where
    F: Fn(&Candidate) -> bool,
{
    fn check(&self, candidate: &Candidate) -> Result<(), RejectReason> {
        if self(candidate) {
            Ok(())
        } else {
            Err(RejectReason::NotAccepted)
        }
    }
}

/// Accepts every readable file. This is the default behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl AcceptFile for AcceptAll {
    fn check(&self, _candidate: &Candidate) -> Result<(), RejectReason> {
        Ok(())
    }
}

/// Extensions accepted by [`AcceptRules::images`].
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "ico", "svg",
];

/// Extension allow-list plus optional size limit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptRules {
    extensions: Option<Vec<String>>,
    max_size: Option<MaxFileSize>,
}

impl AcceptRules {
    /// Rules that accept everything, to be narrowed with the builder methods.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Common image formats, no size limit.
    #[must_use]
    pub fn images() -> Self {
        Self::new().with_extensions(IMAGE_EXTENSIONS.iter().copied())
    }

    /// Restricts accepted files to the given extensions (case-insensitive,
    /// with or without a leading dot).
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = Some(
            extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        );
        self
    }

    #[must_use]
    pub fn with_max_size(mut self, limit: MaxFileSize) -> Self {
        self.max_size = Some(limit);
        self
    }

    #[must_use]
    pub fn max_size(&self) -> Option<MaxFileSize> {
        self.max_size
    }
}

impl AcceptFile for AcceptRules {
    fn check(&self, candidate: &Candidate) -> Result<(), RejectReason> {
        if let Some(allowed) = &self.extensions {
            let known = candidate
                .extension()
                .is_some_and(|ext| allowed.iter().any(|a| a == ext));
            if !known {
                return Err(RejectReason::UnsupportedType {
                    media_type: candidate.media_type().to_string(),
                });
            }
        }

        if let Some(limit) = self.max_size {
            if !limit.allows(candidate.size()) {
                return Err(RejectReason::TooLarge {
                    size: candidate.size(),
                    limit: limit.bytes(),
                });
            }
        }

        Ok(())
    }
}

/// Result of evaluating one drop or pick payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Empty,
    Rejected(RejectReason),
    Accepted(SelectedFile),
}

/// Evaluates a payload with first-file-wins semantics.
pub fn evaluate(files: Vec<RawFile>, accept: &dyn AcceptFile) -> Verdict {
    let Some(raw) = files.into_iter().next() else {
        return Verdict::Empty;
    };

    match normalize(&raw, accept) {
        Ok(file) => Verdict::Accepted(file),
        Err(reason) => Verdict::Rejected(reason),
    }
}

fn normalize(raw: &RawFile, accept: &dyn AcceptFile) -> Result<SelectedFile, RejectReason> {
    let candidate = raw.probe()?;
    accept.check(&candidate)?;
    let content = raw.read()?;
    Ok(SelectedFile::from_parts(raw, candidate, content))
}
