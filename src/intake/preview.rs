// SPDX-License-Identifier: MPL-2.0
//! Preview lifecycle: at most one live render resource per widget.
//!
//! [`PreviewSlot`] owns a [`PreviewFactory`] and the current handle. Replacing
//! the preview always releases the old handle before the new one is
//! created, and dropping the slot releases whatever is still live.

use super::file::SelectedFile;
use std::fmt;

/// Identifier of one created preview. Strictly increasing per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PreviewId(u64);

impl PreviewId {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PreviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "preview#{}", self.0)
    }
}

/// Creates and releases render-only resources for selected files.
pub trait PreviewFactory {
    /// Render resource, e.g. a GPU image handle.
    type Resource;
    /// Creation failure.
    type Error: fmt::Display;

    /// Builds a preview resource for `file`.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be rendered.
    fn create(&mut self, file: &SelectedFile) -> Result<Self::Resource, Self::Error>;

    /// Gives a resource back. Called exactly once per successful `create`.
    fn release(&mut self, id: PreviewId, resource: Self::Resource);
}

/// A live preview resource with its identifier.
#[derive(Debug)]
pub struct PreviewHandle<R> {
    id: PreviewId,
    resource: R,
}

impl<R> PreviewHandle<R> {
    #[must_use]
    pub fn id(&self) -> PreviewId {
        self.id
    }

    #[must_use]
    pub fn resource(&self) -> &R {
        &self.resource
    }
}

/// Owner of the single live preview of a widget.
pub struct PreviewSlot<F: PreviewFactory> {
    factory: F,
    current: Option<PreviewHandle<F::Resource>>,
    next_id: u64,
}

impl<F: PreviewFactory> PreviewSlot<F> {
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            current: None,
            next_id: 0,
        }
    }

    /// Releases the current preview (if any), then creates one for `file`.
    ///
    /// On failure the slot is left empty; the old preview is gone either way.
    ///
    /// # Errors
    ///
    /// Returns the factory error when the new preview cannot be created.
    pub fn replace(&mut self, file: &SelectedFile) -> Result<PreviewId, F::Error> {
        self.release();

        let resource = self.factory.create(file)?;
        self.next_id += 1;
        let id = PreviewId(self.next_id);
        self.current = Some(PreviewHandle { id, resource });
        Ok(id)
    }

    /// Releases the current preview. Returns its id if one was live.
    pub fn release(&mut self) -> Option<PreviewId> {
        let handle = self.current.take()?;
        let id = handle.id;
        self.factory.release(id, handle.resource);
        Some(id)
    }

    #[must_use]
    pub fn current(&self) -> Option<&PreviewHandle<F::Resource>> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn factory(&self) -> &F {
        &self.factory
    }
}

impl<F: PreviewFactory> Drop for PreviewSlot<F> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<F: PreviewFactory> fmt::Debug for PreviewSlot<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewSlot")
            .field("current", &self.current.as_ref().map(|h| h.id))
            .field("created", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::file::RawFile;
    use crate::intake::validator::{evaluate, AcceptAll, Verdict};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Ledger {
        log: Vec<String>,
        live: usize,
    }

    struct Recording {
        ledger: Rc<RefCell<Ledger>>,
        fail_on: Option<&'static str>,
    }

    impl PreviewFactory for Recording {
        type Resource = String;
        type Error = String;

        fn create(&mut self, file: &SelectedFile) -> Result<String, String> {
            if self.fail_on == Some(file.name()) {
                return Err("broken".to_string());
            }
            let mut ledger = self.ledger.borrow_mut();
            assert_eq!(ledger.live, 0, "created while another preview was live");
            ledger.live += 1;
            ledger.log.push(format!("create {}", file.name()));
            Ok(file.name().to_string())
        }

        fn release(&mut self, _id: PreviewId, resource: String) {
            let mut ledger = self.ledger.borrow_mut();
            ledger.live -= 1;
            ledger.log.push(format!("release {resource}"));
        }
    }

    fn file(name: &str) -> SelectedFile {
        match evaluate(vec![RawFile::from_bytes(name, vec![0u8])], &AcceptAll) {
            Verdict::Accepted(file) => file,
            other => panic!("expected Accepted, got {other:?}"),
        }
    }

    fn slot(fail_on: Option<&'static str>) -> (PreviewSlot<Recording>, Rc<RefCell<Ledger>>) {
        let ledger = Rc::new(RefCell::new(Ledger::default()));
        let factory = Recording {
            ledger: Rc::clone(&ledger),
            fail_on,
        };
        (PreviewSlot::new(factory), ledger)
    }

    #[test]
    fn replace_releases_before_creating() {
        let (mut slot, ledger) = slot(None);
        let first = slot.replace(&file("a.png")).expect("first preview");
        let second = slot.replace(&file("b.png")).expect("second preview");

        assert!(second > first);
        assert_eq!(
            ledger.borrow().log,
            vec!["create a.png", "release a.png", "create b.png"]
        );
        assert_eq!(slot.current().map(PreviewHandle::id), Some(second));
    }

    #[test]
    fn failed_creation_leaves_slot_empty() {
        let (mut slot, ledger) = slot(Some("bad.png"));
        slot.replace(&file("a.png")).expect("first preview");
        assert!(slot.replace(&file("bad.png")).is_err());

        assert!(!slot.is_live());
        assert_eq!(ledger.borrow().live, 0);
    }

    #[test]
    fn drop_releases_live_preview() {
        let (mut slot, ledger) = slot(None);
        slot.replace(&file("a.png")).expect("preview");
        drop(slot);

        assert_eq!(ledger.borrow().live, 0);
        assert_eq!(ledger.borrow().log.last().map(String::as_str), Some("release a.png"));
    }

    #[test]
    fn release_twice_is_a_no_op() {
        let (mut slot, ledger) = slot(None);
        slot.replace(&file("a.png")).expect("preview");
        assert!(slot.release().is_some());
        assert!(slot.release().is_none());
        drop(slot);
        assert_eq!(ledger.borrow().log.len(), 2);
    }
}
