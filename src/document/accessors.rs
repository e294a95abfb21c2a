//! Read-only projections of a [`Document`].
//!
//! Consumers that only display one sub-tree depend on these instead of the whole document.

use crate::{
    document::{
        encoder::EncoderConfig,
        glyph::{Character, Glyph},
        model::{Analysis, Data, Degenerator, Document, ElementConfig, Info},
    },
    foundation::core::{ElementIndex, Feature, Priority, SieveName},
};
use std::collections::BTreeMap;

impl Document {
    /// Schema version the document was created with.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Template the document was derived from, if any.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Current metadata.
    pub fn info(&self) -> &Info {
        &self.info
    }

    /// Current glyph data.
    pub fn data(&self) -> &Data {
        &self.data
    }

    /// Shape element configuration.
    pub fn form(&self) -> &ElementConfig {
        &self.form
    }

    /// Pronunciation element configuration.
    pub fn pronunciation(&self) -> &ElementConfig {
        &self.pronunciation
    }

    /// Element configuration selected by `index`.
    pub fn element(&self, index: ElementIndex) -> &ElementConfig {
        match index {
            ElementIndex::Form => &self.form,
            ElementIndex::Pronunciation => &self.pronunciation,
        }
    }

    /// Current encoder graph.
    pub fn encoder(&self) -> &EncoderConfig {
        &self.encoder
    }
}

impl Data {
    /// Glyph definition for `key`.
    pub fn glyph(&self, key: &str) -> Option<&Glyph> {
        self.form.get(key)
    }

    /// Repertoire entry for `key`.
    pub fn character(&self, key: &str) -> Option<&Character> {
        self.repertoire.get(key)
    }

    /// Classifier rank of `feature`.
    pub fn rank(&self, feature: &str) -> Option<u32> {
        self.classifier.get(feature).copied()
    }
}

impl ElementConfig {
    /// Root selection pipeline, `None` until first written.
    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_deref()
    }

    /// Code assigned to `key`.
    pub fn code(&self, key: &str) -> Option<&str> {
        self.mapping.get(key).map(String::as_str)
    }

    /// Key that `key` is grouped with.
    pub fn group(&self, key: &str) -> Option<&str> {
        self.grouping.get(key).map(String::as_str)
    }
}

impl Analysis {
    /// Feature degenerator.
    pub fn degenerator(&self) -> Option<&Degenerator> {
        self.degenerator.as_ref()
    }

    /// Selector chain, in priority order.
    pub fn selector(&self) -> Option<&[SieveName]> {
        self.selector.as_deref()
    }

    /// Strong roots.
    pub fn strong(&self) -> Option<&[String]> {
        self.strong.as_deref()
    }

    /// Weak roots.
    pub fn weak(&self) -> Option<&[String]> {
        self.weak.as_deref()
    }

    /// Strong or weak roots, by variant.
    pub fn priority(&self, variant: Priority) -> Option<&[String]> {
        match variant {
            Priority::Strong => self.strong(),
            Priority::Weak => self.weak(),
        }
    }

    /// Per-character overrides.
    pub fn customize(&self) -> Option<&BTreeMap<String, Vec<String>>> {
        self.customize.as_ref()
    }
}

impl Degenerator {
    /// Feature folding table.
    pub fn feature(&self) -> Option<&BTreeMap<Feature, Feature>> {
        self.feature.as_ref()
    }

    /// Whether folding across crossing strokes is disabled.
    pub fn no_cross(&self) -> bool {
        self.no_cross
    }

    /// Canonical class of `feature`: one lookup, never chained, so cycles in the table are
    /// harmless.
    pub fn fold<'a>(&'a self, feature: &'a Feature) -> &'a Feature {
        self.feature
            .as_ref()
            .and_then(|table| table.get(feature))
            .unwrap_or(feature)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/accessors.rs"]
mod tests;
