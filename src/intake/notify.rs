// SPDX-License-Identifier: MPL-2.0
//! Selection notification contract.
//!
//! The host supplies one sink when the widget is built. The widget keeps it
//! for its whole lifetime and calls it exactly once per accepted selection.

use super::file::SelectedFile;

/// Receiver of accepted selections.
pub trait SelectionSink {
    fn on_selection(&mut self, file: SelectedFile);
}

impl<F> SelectionSink for F
where
    F: FnMut(SelectedFile),
{
    fn on_selection(&mut self, file: SelectedFile) {
        self(file);
    }
}

/// Sink that maps each selection to a host message and queues it.
///
/// The mapping is a plain function pointer fixed at construction, so the
/// host cannot accidentally rebind it on every render.
#[derive(Debug)]
pub struct Outbox<M> {
    map: fn(SelectedFile) -> M,
    pending: Vec<M>,
}

impl<M> Outbox<M> {
    #[must_use]
    pub fn new(map: fn(SelectedFile) -> M) -> Self {
        Self {
            map,
            pending: Vec::new(),
        }
    }

    /// Takes the queued host messages, oldest first.
    pub fn drain(&mut self) -> Vec<M> {
        std::mem::take(&mut self.pending)
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl<M> SelectionSink for Outbox<M> {
    fn on_selection(&mut self, file: SelectedFile) {
        self.pending.push((self.map)(file));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::file::RawFile;
    use crate::intake::validator::{evaluate, AcceptAll, Verdict};

    #[derive(Debug, PartialEq)]
    enum HostMessage {
        Picked(String),
    }

    fn picked(file: SelectedFile) -> HostMessage {
        HostMessage::Picked(file.name().to_string())
    }

    fn file(name: &str) -> SelectedFile {
        match evaluate(vec![RawFile::from_bytes(name, vec![7u8])], &AcceptAll) {
            Verdict::Accepted(file) => file,
            other => panic!("expected Accepted, got {other:?}"),
        }
    }

    #[test]
    fn outbox_maps_and_queues_in_order() {
        let mut outbox = Outbox::new(picked);
        outbox.on_selection(file("a.png"));
        outbox.on_selection(file("b.png"));

        assert_eq!(outbox.pending(), 2);
        assert_eq!(
            outbox.drain(),
            vec![
                HostMessage::Picked("a.png".into()),
                HostMessage::Picked("b.png".into())
            ]
        );
        assert_eq!(outbox.pending(), 0);
    }

    #[test]
    fn closures_are_sinks() {
        let mut names = Vec::new();
        {
            let mut sink = |f: SelectedFile| names.push(f.name().to_string());
            sink.on_selection(file("x.jpg"));
        }
        assert_eq!(names, vec!["x.jpg"]);
    }
}
