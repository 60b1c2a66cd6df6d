// SPDX-License-Identifier: MPL-2.0
//! Intake newtypes.
//!
//! Type-safe wrappers for intake limits, always within valid ranges.

// =============================================================================
// Max File Size Bounds
// =============================================================================

/// File size limit bounds, in megabytes (1 to 512 MB).
pub mod max_file_size_bounds {
    /// Minimum limit in megabytes.
    pub const MIN_MB: u32 = 1;
    /// Maximum limit in megabytes.
    pub const MAX_MB: u32 = 512;
    /// Default limit in megabytes.
    pub const DEFAULT_MB: u32 = 25;
}

const BYTES_PER_MB: u64 = 1024 * 1024;

// =============================================================================
// MaxFileSize
// =============================================================================

/// Largest file, in megabytes, that an intake rule set accepts.
///
/// Values outside the supported range are clamped on construction.
///
/// ```ignore
/// let limit = MaxFileSize::new(10);
/// assert_eq!(limit.bytes(), 10 * 1024 * 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxFileSize(u32);

impl MaxFileSize {
    /// Creates a new limit, clamping to the valid range.
    #[must_use]
    pub fn new(megabytes: u32) -> Self {
        Self(megabytes.clamp(max_file_size_bounds::MIN_MB, max_file_size_bounds::MAX_MB))
    }

    /// Returns the limit in megabytes.
    #[must_use]
    pub fn megabytes(self) -> u32 {
        self.0
    }

    /// Returns the limit in bytes.
    #[must_use]
    pub fn bytes(self) -> u64 {
        u64::from(self.0) * BYTES_PER_MB
    }

    /// Returns true if `size` (in bytes) fits under this limit.
    #[must_use]
    pub fn allows(self, size: u64) -> bool {
        size <= self.bytes()
    }
}

impl Default for MaxFileSize {
    fn default() -> Self {
        Self(max_file_size_bounds::DEFAULT_MB)
    }
}

// =============================================================================
// Tests
// =============================================================================
