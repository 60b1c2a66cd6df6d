// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for intake activity.
//!
//! Intake widgets report what they do through a [`DiagnosticsHandle`]. The
//! host owns the [`DiagnosticsCollector`], which keeps the most recent events
//! in a memory-bounded [`CircularBuffer`] and can summarise or export them.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped [`DiagnosticEventKind`]
//! - [`SessionSummary`]: Per-kind counts over the whole session

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle, SessionSummary};
pub use events::{DiagnosticEvent, DiagnosticEventKind};
