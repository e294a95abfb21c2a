//! `hanzi-scheme` holds the configuration document of a Chinese input-method scheme and the
//! pure transition function that edits it.
//!
//! The public API is action-oriented:
//!
//! - Load and validate a [`Document`]
//! - Build [`Action`]s, directly or through [`DataContext`] / [`DesignContext`]
//! - Fold them with [`apply`] (or hold the document in a [`SchemeStore`])
//!
//! Documents are immutable values. Every transition returns a new document that shares all
//! untouched sub-trees with its input.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

pub(crate) mod action;
pub(crate) mod document;
pub(crate) mod engine;

pub use crate::foundation::core::{DataCategory, ElementIndex, Feature, Operator, Priority, SieveName};
pub use crate::foundation::error::{SchemeError, SchemeResult};

pub use crate::document::encoder::{EncoderConfig, EncoderEdge, EncoderNode, ROOT_NODE_ID};
pub use crate::document::glyph::{
    Character, Component, ComponentShape, Compound, Curve, Glyph, Stroke,
};
pub use crate::document::io::Format;
pub use crate::document::model::{
    Analysis, DEFAULT_ALPHABET, Data, Degenerator, Document, ElementConfig, Info, SCHEME_VERSION,
};

pub use crate::action::builders::{DataContext, DataValue, DesignContext};
pub use crate::action::taxonomy::{
    Action, DataAction, ElementAction, MapEdit, SelectorEdit, SetEdit,
};

pub use crate::engine::fingerprint::Fingerprint;
pub use crate::engine::store::SchemeStore;
pub use crate::engine::transition::{Outcome, Transition, apply, apply_all, transition};
