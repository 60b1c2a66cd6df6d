// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for intake events.
//!
//! Widgets hold a cheap [`DiagnosticsHandle`]; the host owns the
//! [`DiagnosticsCollector`], drains it after every drop zone message and
//! summarises the session at shutdown.
//!
//! The summary counts every event ever drained. Only the event list is
//! bounded by the circular buffer.

use std::fmt;
use std::time::Instant;

use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::Serialize;

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind};

/// Handle for sending diagnostic events to the collector.
///
/// Sending never blocks. Events are queued until the collector drains them
/// and silently discarded once the collector is gone.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    pub fn log(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Per-kind event counts for the whole session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub state_changes: usize,
    pub pickers_opened: usize,
    pub pickers_cancelled: usize,
    pub rejections: usize,
    pub previews_created: usize,
    pub previews_released: usize,
    pub preview_failures: usize,
    pub selections: usize,
}

impl SessionSummary {
    /// Previews created but not yet released.
    #[must_use]
    pub fn live_previews(&self) -> usize {
        self.previews_created.saturating_sub(self.previews_released)
    }

    fn record(&mut self, kind: &DiagnosticEventKind) {
        match kind {
            DiagnosticEventKind::StateChanged { .. } => self.state_changes += 1,
            DiagnosticEventKind::PickerOpened => self.pickers_opened += 1,
            DiagnosticEventKind::PickerCancelled => self.pickers_cancelled += 1,
            DiagnosticEventKind::FileRejected { .. } => self.rejections += 1,
            DiagnosticEventKind::PreviewCreated { .. } => self.previews_created += 1,
            DiagnosticEventKind::PreviewReleased { .. } => self.previews_released += 1,
            DiagnosticEventKind::PreviewFailed { .. } => self.preview_failures += 1,
            DiagnosticEventKind::SelectionNotified { .. } => self.selections += 1,
        }
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} selection(s), {} rejection(s), previews {}/{} created/released, {} preview failure(s)",
            self.selections,
            self.rejections,
            self.previews_created,
            self.previews_released,
            self.preview_failures
        )
    }
}

#[derive(Serialize)]
struct ExportedEvent<'a> {
    offset_ms: u64,
    #[serde(flatten)]
    kind: &'a DiagnosticEventKind,
}

#[derive(Serialize)]
struct ExportedSession<'a> {
    summary: SessionSummary,
    events: Vec<ExportedEvent<'a>>,
}

/// Central store for diagnostic events, bounded by a circular buffer.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    totals: SessionSummary,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    started_at: Instant,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = unbounded();

        Self {
            buffer: CircularBuffer::new(capacity),
            totals: SessionSummary::default(),
            event_rx,
            event_tx,
            started_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves all pending events from the channel into the buffer, counting
    /// each one in the session totals.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.totals.record(&event.kind);
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Forgets the stored events. Session totals are kept.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        self.totals
    }

    /// Exports the summary and stored events as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    #[allow(clippy::cast_possible_truncation)] // Session length in ms fits in u64
    pub fn export_json(&self) -> serde_json::Result<String> {
        let events = self
            .buffer
            .iter()
            .map(|event| ExportedEvent {
                offset_ms: event
                    .timestamp
                    .saturating_duration_since(self.started_at)
                    .as_millis() as u64,
                kind: &event.kind,
            })
            .collect();

        serde_json::to_string_pretty(&ExportedSession {
            summary: self.summary(),
            events,
        })
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish()
    }
}
