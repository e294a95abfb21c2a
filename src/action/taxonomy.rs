use crate::{
    document::{
        encoder::EncoderConfig,
        glyph::{Character, Glyph},
        model::{Document, Info},
    },
    foundation::core::{DataCategory, ElementIndex, Feature, Priority, SieveName},
};

/// A discrete edit request. The transition engine is the only consumer.
///
/// Actions serialize externally tagged in `snake_case`, e.g.
/// `{"element": {"index": "form", "action": {"selector": {"add": "根少优先"}}}}`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Replace the whole document.
    Load(Box<Document>),
    /// Replace `info`.
    Info(Info),
    /// Edit one of the `data` mappings.
    Data(DataAction),
    /// Edit the element configuration selected by `index`.
    Element {
        /// Target element.
        index: ElementIndex,
        /// Edit to apply.
        action: ElementAction,
    },
    /// Replace `encoder`.
    Encoder(EncoderConfig),
}

/// Insert-or-overwrite, or delete, one entry of a keyed mapping.
///
/// `Add` always carries its value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapEdit<K, V> {
    /// Set `key` to `value`, replacing any previous value.
    Add {
        /// Entry key.
        key: K,
        /// Entry value.
        value: V,
    },
    /// Delete `key` if present.
    Remove {
        /// Entry key.
        key: K,
    },
}

impl<K, V> MapEdit<K, V> {
    /// Key the edit touches.
    pub fn key(&self) -> &K {
        match self {
            Self::Add { key, .. } | Self::Remove { key } => key,
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Remove { .. } => "remove",
        }
    }
}

/// Append to, or remove every equal entry from, an unordered list.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetEdit<V> {
    /// Append (no deduplication).
    Add(V),
    /// Remove all equal entries.
    Remove(V),
}

/// Edit of the ordered selector chain.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorEdit {
    /// Append a sieve; duplicates are kept.
    Add(SieveName),
    /// Remove every occurrence of a sieve.
    Remove(SieveName),
    /// Replace the whole chain.
    Replace(Vec<SieveName>),
}

/// Edit of one `data` mapping; the variant fixes both category and value type.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataAction {
    /// `data.form`.
    Form(MapEdit<String, Glyph>),
    /// `data.repertoire`.
    Repertoire(MapEdit<String, Character>),
    /// `data.classifier`.
    Classifier(MapEdit<Feature, u32>),
}

impl DataAction {
    /// Category the edit targets.
    pub fn category(&self) -> DataCategory {
        match self {
            Self::Form(_) => DataCategory::Form,
            Self::Repertoire(_) => DataCategory::Repertoire,
            Self::Classifier(_) => DataCategory::Classifier,
        }
    }
}

/// Edit of one element configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementAction {
    /// Replace the alphabet.
    SetAlphabet(String),
    /// Replace the maximum code length.
    SetMaxCodeLength(u32),
    /// Edit the key to code mapping.
    Mapping(MapEdit<String, String>),
    /// Edit the key grouping.
    Grouping(MapEdit<String, String>),
    /// Edit the feature degenerator.
    Degenerator(MapEdit<Feature, Feature>),
    /// Flip `degenerator.no_cross`.
    DegeneratorToggleNoCross,
    /// Edit the selector chain.
    Selector(SelectorEdit),
    /// Edit the strong or weak root list.
    StrongWeak {
        /// Which list.
        variant: Priority,
        /// Edit to apply.
        edit: SetEdit<String>,
    },
    /// Edit per-character overrides.
    Customize(MapEdit<String, Vec<String>>),
}

impl Action {
    /// Short stable label used in logs, e.g. `element/form/selector/replace`.
    pub fn kind(&self) -> String {
        match self {
            Self::Load(_) => "load".to_string(),
            Self::Info(_) => "info".to_string(),
            Self::Encoder(_) => "encoder".to_string(),
            Self::Data(data) => {
                let verb = match data {
                    DataAction::Form(e) => e.verb(),
                    DataAction::Repertoire(e) => e.verb(),
                    DataAction::Classifier(e) => e.verb(),
                };
                format!("data/{}/{verb}", data.category())
            }
            Self::Element { index, action } => {
                let tail = match action {
                    ElementAction::SetAlphabet(_) => "alphabet".to_string(),
                    ElementAction::SetMaxCodeLength(_) => "max_code_length".to_string(),
                    ElementAction::Mapping(e) => format!("mapping/{}", e.verb()),
                    ElementAction::Grouping(e) => format!("grouping/{}", e.verb()),
                    ElementAction::Degenerator(e) => format!("degenerator/{}", e.verb()),
                    ElementAction::DegeneratorToggleNoCross => "degenerator/no_cross".to_string(),
                    ElementAction::Selector(SelectorEdit::Add(_)) => "selector/add".to_string(),
                    ElementAction::Selector(SelectorEdit::Remove(_)) => {
                        "selector/remove".to_string()
                    }
                    ElementAction::Selector(SelectorEdit::Replace(_)) => {
                        "selector/replace".to_string()
                    }
                    ElementAction::StrongWeak { variant, edit } => {
                        let verb = match edit {
                            SetEdit::Add(_) => "add",
                            SetEdit::Remove(_) => "remove",
                        };
                        format!("{}/{verb}", variant.as_str())
                    }
                    ElementAction::Customize(e) => format!("customize/{}", e.verb()),
                };
                format!("element/{index}/{tail}")
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/action/taxonomy.rs"]
mod tests;
