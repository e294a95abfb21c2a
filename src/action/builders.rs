//! Convenience constructors that close over ambient view state.
//!
//! These live at the boundary: the engine never sees a context, only the fully resolved
//! [`Action`] these produce.

use crate::{
    action::taxonomy::{Action, DataAction, ElementAction, MapEdit},
    document::glyph::{Character, Glyph},
    foundation::{
        core::{DataCategory, ElementIndex, Feature},
        error::{SchemeError, SchemeResult},
    },
};

/// Value for one of the `data` mappings.
#[derive(Clone, Debug, PartialEq)]
pub enum DataValue {
    /// A `data.form` glyph.
    Form(Glyph),
    /// A `data.repertoire` character.
    Repertoire(Character),
    /// A `data.classifier` rank.
    Classifier(u32),
}

impl DataValue {
    /// Category this value belongs to.
    pub fn category(&self) -> DataCategory {
        match self {
            Self::Form(_) => DataCategory::Form,
            Self::Repertoire(_) => DataCategory::Repertoire,
            Self::Classifier(_) => DataCategory::Classifier,
        }
    }
}

/// The data category currently being edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DataContext {
    category: DataCategory,
}

impl DataContext {
    /// Context for an explicit category.
    pub fn new(category: DataCategory) -> Self {
        Self { category }
    }

    /// Derive the category from a route such as `/<scheme>/data/repertoire`.
    ///
    /// The category is the fourth `/`-separated segment (the first is empty).
    pub fn from_route(path: &str) -> SchemeResult<Self> {
        let segment = path.split('/').nth(3).ok_or_else(|| {
            SchemeError::validation(format!("route '{path}' does not name a data category"))
        })?;
        Ok(Self::new(segment.parse()?))
    }

    /// Category in scope.
    pub fn category(&self) -> DataCategory {
        self.category
    }

    /// Add (or overwrite) `key` in the category in scope.
    pub fn make_add(&self, key: impl Into<String>, value: DataValue) -> SchemeResult<Action> {
        let key = key.into();
        let edit = match (self.category, value) {
            (DataCategory::Form, DataValue::Form(value)) => {
                DataAction::Form(MapEdit::Add { key, value })
            }
            (DataCategory::Repertoire, DataValue::Repertoire(value)) => {
                DataAction::Repertoire(MapEdit::Add { key, value })
            }
            (DataCategory::Classifier, DataValue::Classifier(value)) => {
                DataAction::Classifier(MapEdit::Add {
                    key: Feature::new(key),
                    value,
                })
            }
            (category, value) => {
                return Err(SchemeError::validation(format!(
                    "cannot add a {} value while editing {category}",
                    value.category()
                )));
            }
        };
        Ok(Action::Data(edit))
    }

    /// Remove `key` from the category in scope.
    pub fn make_remove(&self, key: impl Into<String>) -> Action {
        let key = key.into();
        Action::Data(match self.category {
            DataCategory::Form => DataAction::Form(MapEdit::Remove { key }),
            DataCategory::Repertoire => DataAction::Repertoire(MapEdit::Remove { key }),
            DataCategory::Classifier => DataAction::Classifier(MapEdit::Remove {
                key: Feature::new(key),
            }),
        })
    }
}

/// The element configuration currently being designed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DesignContext {
    index: ElementIndex,
}

impl Default for DesignContext {
    fn default() -> Self {
        Self {
            index: ElementIndex::Form,
        }
    }
}

impl DesignContext {
    /// Context for an explicit element.
    pub fn new(index: ElementIndex) -> Self {
        Self { index }
    }

    /// Wrap an element edit for the element in scope.
    pub fn make(&self, action: ElementAction) -> Action {
        Action::Element {
            index: self.index,
            action,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/action/builders.rs"]
mod tests;
