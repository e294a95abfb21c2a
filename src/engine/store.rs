use std::path::Path;

use crate::{
    action::taxonomy::Action,
    document::model::Document,
    engine::{
        fingerprint::Fingerprint,
        transition::{Outcome, transition},
    },
    foundation::error::SchemeResult,
};

/// Single-owner holder of the current document.
///
/// Every change goes through [`SchemeStore::dispatch`], which replaces the held document with the
/// transition result. Earlier snapshots handed out by [`SchemeStore::snapshot`] stay valid and
/// unchanged.
#[derive(Clone, Debug)]
pub struct SchemeStore {
    current: Document,
    saved: Fingerprint,
    revision: u64,
}

impl SchemeStore {
    /// Wrap a document; it counts as saved.
    pub fn new(document: Document) -> Self {
        let saved = document.fingerprint();
        Self {
            current: document,
            saved,
            revision: 0,
        }
    }

    /// Load a document from disk into a fresh store.
    pub fn open(path: impl AsRef<Path>) -> SchemeResult<Self> {
        Ok(Self::new(Document::from_path(path)?))
    }

    /// Borrow the current document.
    pub fn current(&self) -> &Document {
        &self.current
    }

    /// Cheap copy of the current document that later dispatches do not affect.
    pub fn snapshot(&self) -> Document {
        self.current.clone()
    }

    /// Number of applied (non no-op) transitions since the store was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply one action.
    #[tracing::instrument(level = "debug", skip_all, fields(revision = self.revision))]
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        let next = transition(&self.current, action);
        if next.outcome == Outcome::Applied {
            self.current = next.document;
            self.revision += 1;
        }
        next.outcome
    }

    /// Apply actions in order; returns how many were applied.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) -> usize {
        actions
            .into_iter()
            .map(|a| self.dispatch(a))
            .filter(|o| *o == Outcome::Applied)
            .count()
    }

    /// Whether the content differs from what was last saved or loaded.
    pub fn is_dirty(&self) -> bool {
        self.current.fingerprint() != self.saved
    }

    /// Record the current content as saved without writing it anywhere.
    pub fn mark_saved(&mut self) {
        self.saved = self.current.fingerprint();
    }

    /// Write the current document and mark it saved.
    ///
    /// An invalid document is rejected before anything is written and the store stays dirty.
    pub fn save(&mut self, path: impl AsRef<Path>) -> SchemeResult<()> {
        self.current.save(path)?;
        self.mark_saved();
        tracing::info!(revision = self.revision, "scheme saved");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/store.rs"]
mod tests;
