//! Structural validation of a scheme document.
//!
//! Run on both load and save so a scheme on disk is always schema-valid. Every problem is
//! collected with a `$.path` before the result is returned.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::{
    document::model::{Document, ElementConfig},
    foundation::{
        core::ElementIndex,
        error::{SchemeError, SchemeResult},
    },
};

/// JSONPath-style location inside a document, rendered as it is built.
#[derive(Clone, Debug)]
struct Location(String);

impl Location {
    fn root() -> Self {
        Self("$".to_string())
    }

    fn field(&self, name: &str) -> Self {
        Self(format!("{}.{name}", self.0))
    }

    fn key(&self, key: &str) -> Self {
        Self(format!("{}[\"{key}\"]", self.0))
    }

    fn index(&self, i: usize) -> Self {
        Self(format!("{}[{i}]", self.0))
    }
}

/// Every problem found in one validation run, in discovery order.
#[derive(Debug, Default)]
pub(crate) struct Problems(pub(crate) Vec<String>);

impl Problems {
    fn report(&mut self, at: &Location, message: impl fmt::Display) {
        self.0.push(format!("{}: {message}", at.0));
    }
}

impl fmt::Display for Problems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("\n"))
    }
}

impl Document {
    /// Validate structural invariants (alphabet, code lengths, compound arity and references,
    /// encoder graph links).
    pub fn validate(&self) -> SchemeResult<()> {
        validate_document(self)
            .map_err(|e| SchemeError::validation(format!("schema validation failed: {e}")))
    }
}

pub(crate) fn validate_document(doc: &Document) -> Result<(), Problems> {
    let mut problems = Problems::default();
    let root = Location::root();

    if doc.version.trim().is_empty() {
        problems.report(&root.field("version"), "version must be non-empty");
    }

    validate_glyphs(doc, &root.field("data").field("form"), &mut problems);
    for index in [ElementIndex::Form, ElementIndex::Pronunciation] {
        validate_element(
            doc.element(index),
            &root.field(index.as_str()),
            &mut problems,
        );
    }
    validate_encoder(doc, &root.field("encoder"), &mut problems);

    if problems.0.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}

fn validate_glyphs(doc: &Document, at: &Location, problems: &mut Problems) {
    let form = &doc.data.form;
    for (key, glyph) in form.iter() {
        let at = at.key(key);
        if glyph.char().is_none() {
            problems.report(
                &at,
                format_args!("unicode {:#x} is not a valid scalar value", glyph.unicode),
            );
        }
        let Some(compounds) = &glyph.compound else {
            continue;
        };
        for (i, compound) in compounds.iter().enumerate() {
            let at = at.field("compound").index(i);
            let arity = compound.operator.arity();
            if compound.operand_list.len() != arity {
                problems.report(
                    &at,
                    format_args!(
                        "operator {} takes {arity} operands, got {}",
                        compound.operator.symbol(),
                        compound.operand_list.len()
                    ),
                );
            }
            for operand in compound
                .operand_list
                .iter()
                .filter(|o| !form.contains_key(*o))
            {
                problems.report(
                    &at,
                    format_args!("operand '{operand}' is not defined in data.form"),
                );
            }
        }
    }
}

fn validate_element(element: &ElementConfig, at: &Location, problems: &mut Problems) {
    let mut symbols = BTreeSet::new();
    for symbol in element.alphabet.chars() {
        if !symbols.insert(symbol) {
            problems.report(
                &at.field("alphabet"),
                format_args!("symbol '{symbol}' appears more than once"),
            );
        }
    }

    let max = element.max_code_length as usize;
    if max == 0 {
        problems.report(&at.field("mapping_type"), "max code length must be >= 1");
    }

    for (key, code) in element.mapping.iter() {
        let at = at.field("mapping").key(key);
        if code.is_empty() {
            problems.report(&at, "code must be non-empty");
        }
        if let Some(bad) = code.chars().find(|c| !symbols.contains(c)) {
            problems.report(
                &at,
                format_args!("code '{code}' uses '{bad}' which is not in the alphabet"),
            );
        }
        if max > 0 && code.chars().count() > max {
            problems.report(
                &at,
                format_args!("code '{code}' is longer than max code length {max}"),
            );
        }
    }
}

fn validate_encoder(doc: &Document, at: &Location, problems: &mut Problems) {
    let encoder = &doc.encoder;
    let mut ids = HashSet::<&str>::new();
    for (i, node) in encoder.nodes.iter().enumerate() {
        if !ids.insert(node.id.as_str()) {
            problems.report(
                &at.field("nodes").index(i),
                format_args!("duplicate node id '{}'", node.id),
            );
        }
    }
    for (i, edge) in encoder.edges.iter().enumerate() {
        for end in [&edge.source, &edge.target] {
            if !ids.contains(end.as_str()) {
                problems.report(
                    &at.field("edges").index(i),
                    format_args!("edge references unknown node '{end}'"),
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/validate.rs"]
mod tests;
