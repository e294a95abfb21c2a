//! The transition function: the only code that produces a modified [`Document`].
//!
//! Transitions are pure. The input document is never mutated; sub-trees on the edited path are
//! cloned through [`Arc::make_mut`] and all other sub-trees stay shared with the input.

use std::{collections::BTreeMap, sync::Arc};

use crate::{
    action::taxonomy::{Action, DataAction, ElementAction, MapEdit, SelectorEdit, SetEdit},
    document::model::{Data, Document, ElementConfig},
    engine::lazy::{materialize, materialize_shared},
    foundation::core::{ElementIndex, Priority},
};

/// Whether a transition changed anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The action was applied.
    Applied,
    /// A removal matched nothing; the returned document is the input.
    NoOp,
}

/// Result of [`transition`].
#[derive(Clone, Debug)]
pub struct Transition {
    /// The next document.
    pub document: Document,
    /// What happened.
    pub outcome: Outcome,
}

/// Apply `action` to `document` and return the next document.
pub fn apply(document: &Document, action: Action) -> Document {
    transition(document, action).document
}

/// Apply a batch of actions in order.
pub fn apply_all(document: &Document, actions: impl IntoIterator<Item = Action>) -> Document {
    actions
        .into_iter()
        .fold(document.clone(), |doc, action| apply(&doc, action))
}

/// Apply `action` and report whether it changed anything.
///
/// A [`Outcome::NoOp`] transition hands back the input document itself, so nothing is
/// materialized as a side effect of removing something that was never there.
#[tracing::instrument(level = "debug", skip_all, fields(action = %action.kind()))]
pub fn transition(document: &Document, action: Action) -> Transition {
    let mut next = document.clone();
    let outcome = match action {
        Action::Load(doc) => {
            return Transition {
                document: *doc,
                outcome: Outcome::Applied,
            };
        }
        Action::Info(info) => {
            next.info = Arc::new(info);
            Outcome::Applied
        }
        Action::Encoder(encoder) => {
            next.encoder = Arc::new(encoder);
            Outcome::Applied
        }
        Action::Data(edit) => apply_data(Arc::make_mut(&mut next.data), edit),
        Action::Element { index, action } => {
            apply_element(Arc::make_mut(element_slot(&mut next, index)), action)
        }
    };

    if outcome == Outcome::NoOp {
        tracing::trace!("removal matched nothing");
        return Transition {
            document: document.clone(),
            outcome,
        };
    }
    Transition {
        document: next,
        outcome,
    }
}

fn element_slot(doc: &mut Document, index: ElementIndex) -> &mut Arc<ElementConfig> {
    match index {
        ElementIndex::Form => &mut doc.form,
        ElementIndex::Pronunciation => &mut doc.pronunciation,
    }
}

fn apply_data(data: &mut Data, edit: DataAction) -> Outcome {
    match edit {
        DataAction::Form(edit) => edit_shared_map(&mut data.form, edit),
        DataAction::Repertoire(edit) => edit_shared_map(&mut data.repertoire, edit),
        DataAction::Classifier(edit) => edit_shared_map(&mut data.classifier, edit),
    }
}

fn apply_element(element: &mut ElementConfig, action: ElementAction) -> Outcome {
    match action {
        ElementAction::SetAlphabet(alphabet) => {
            element.alphabet = alphabet;
            Outcome::Applied
        }
        ElementAction::SetMaxCodeLength(len) => {
            element.max_code_length = len;
            Outcome::Applied
        }
        ElementAction::Mapping(edit) => edit_shared_map(&mut element.mapping, edit),
        ElementAction::Grouping(edit) => edit_shared_map(&mut element.grouping, edit),
        ElementAction::Degenerator(edit) => {
            let analysis = materialize_shared(&mut element.analysis);
            let degenerator = materialize(&mut analysis.degenerator);
            edit_map(materialize(&mut degenerator.feature), edit)
        }
        ElementAction::DegeneratorToggleNoCross => {
            let analysis = materialize_shared(&mut element.analysis);
            let degenerator = materialize(&mut analysis.degenerator);
            degenerator.no_cross = !degenerator.no_cross;
            Outcome::Applied
        }
        ElementAction::Selector(edit) => {
            let selector = materialize(&mut materialize_shared(&mut element.analysis).selector);
            match edit {
                SelectorEdit::Add(sieve) => {
                    selector.push(sieve);
                    Outcome::Applied
                }
                SelectorEdit::Remove(sieve) => remove_all(selector, &sieve),
                SelectorEdit::Replace(chain) => {
                    *selector = chain;
                    Outcome::Applied
                }
            }
        }
        ElementAction::StrongWeak { variant, edit } => {
            let analysis = materialize_shared(&mut element.analysis);
            let list = materialize(match variant {
                Priority::Strong => &mut analysis.strong,
                Priority::Weak => &mut analysis.weak,
            });
            match edit {
                SetEdit::Add(root) => {
                    list.push(root);
                    Outcome::Applied
                }
                SetEdit::Remove(root) => remove_all(list, &root),
            }
        }
        ElementAction::Customize(edit) => {
            let analysis = materialize_shared(&mut element.analysis);
            edit_map(materialize(&mut analysis.customize), edit)
        }
    }
}

// Removal of an absent key returns before the map is unshared.
fn edit_shared_map<K: Ord + Clone, V: Clone>(
    map: &mut Arc<BTreeMap<K, V>>,
    edit: MapEdit<K, V>,
) -> Outcome {
    if let MapEdit::Remove { key } = &edit
        && !map.contains_key(key)
    {
        return Outcome::NoOp;
    }
    edit_map(Arc::make_mut(map), edit)
}

fn edit_map<K: Ord, V>(map: &mut BTreeMap<K, V>, edit: MapEdit<K, V>) -> Outcome {
    match edit {
        MapEdit::Add { key, value } => {
            map.insert(key, value);
            Outcome::Applied
        }
        MapEdit::Remove { key } => match map.remove(&key) {
            Some(_) => Outcome::Applied,
            None => Outcome::NoOp,
        },
    }
}

fn remove_all<T: PartialEq>(list: &mut Vec<T>, value: &T) -> Outcome {
    let before = list.len();
    list.retain(|x| x != value);
    if list.len() == before {
        Outcome::NoOp
    } else {
        Outcome::Applied
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/transition.rs"]
mod tests;
