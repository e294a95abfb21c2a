use std::{collections::BTreeMap, sync::Arc};

use crate::{
    document::{
        encoder::EncoderConfig,
        glyph::{Character, Glyph},
    },
    foundation::core::{Feature, SieveName},
};

/// Schema version written into freshly created documents.
pub const SCHEME_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Alphabet used when a scheme does not declare one.
pub const DEFAULT_ALPHABET: &str = "qwertyuiopasdfghjklzxcvbnm";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A complete scheme: metadata, glyph data, element rules and the encoder graph.
///
/// Sub-documents live behind [`Arc`] so a transition clones only the path it edits; every other
/// sub-tree is shared with the previous document. `version` and `source` are fixed at creation
/// and only change when a whole new document is loaded.
///
/// Read through the accessor methods; write through [`crate::apply`].
pub struct Document {
    pub(crate) version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) source: Option<String>,
    #[serde(default)]
    pub(crate) info: Arc<Info>,
    #[serde(default)]
    pub(crate) data: Arc<Data>,
    #[serde(default)]
    pub(crate) form: Arc<ElementConfig>,
    #[serde(default)]
    pub(crate) pronunciation: Arc<ElementConfig>,
    #[serde(default)]
    pub(crate) encoder: Arc<EncoderConfig>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            version: SCHEME_VERSION.to_string(),
            source: None,
            info: Arc::default(),
            data: Arc::default(),
            form: Arc::default(),
            pronunciation: Arc::default(),
            encoder: Arc::default(),
        }
    }
}

impl Document {
    /// Fresh document derived from a named template (an example scheme id, a file name).
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::default()
        }
    }

    /// Fresh document with the given metadata and glyph data.
    pub fn with_contents(info: Info, data: Data) -> Self {
        Self {
            info: Arc::new(info),
            data: Arc::new(data),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Free-form scheme metadata.
pub struct Info {
    /// Scheme name.
    #[serde(default)]
    pub name: String,
    /// Author credit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Scheme's own version string (unrelated to the document schema version).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Glyph data: three independently keyed mappings.
pub struct Data {
    /// Component/compound glyph definitions keyed by character.
    #[serde(default)]
    pub form: Arc<BTreeMap<String, Glyph>>,
    /// Character to component-shape list.
    #[serde(default)]
    pub repertoire: Arc<BTreeMap<String, Character>>,
    /// Stroke feature to numeric rank.
    #[serde(default)]
    pub classifier: Arc<BTreeMap<Feature, u32>>,
}

const DEFAULT_CLASSIFIER: [(&str, u32); 30] = [
    ("横", 1),
    ("提", 1),
    ("竖", 2),
    ("竖钩", 2),
    ("撇", 3),
    ("点", 4),
    ("捺", 4),
    ("横钩", 5),
    ("横撇", 5),
    ("横折", 5),
    ("横折钩", 5),
    ("横折提", 5),
    ("横折折", 5),
    ("横折折折", 5),
    ("横折折折钩", 5),
    ("横折折撇", 5),
    ("横折弯", 5),
    ("横折弯钩", 5),
    ("横撇弯钩", 5),
    ("横斜钩", 5),
    ("竖提", 5),
    ("竖折", 5),
    ("竖弯", 5),
    ("竖弯钩", 5),
    ("竖折撇", 5),
    ("竖折折", 5),
    ("竖折折钩", 5),
    ("撇点", 5),
    ("撇折", 5),
    ("弯钩", 5),
];

impl Data {
    /// Empty glyph data with the standard five-class stroke classifier
    /// (横 1, 竖 2, 撇 3, 点 4, 折 5).
    pub fn with_default_classifier() -> Self {
        let classifier = DEFAULT_CLASSIFIER
            .iter()
            .map(|&(feature, rank)| (Feature::new(feature), rank))
            .collect();
        Self {
            classifier: Arc::new(classifier),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Rules that turn elements (roots, or pronunciation parts) into codes.
pub struct ElementConfig {
    /// Legal output symbols.
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
    /// Upper bound on generated code length.
    #[serde(rename = "mapping_type", default = "default_max_code_length")]
    pub max_code_length: u32,
    /// Element key to code.
    #[serde(default)]
    pub mapping: Arc<BTreeMap<String, String>>,
    /// Element key to the key it is grouped with.
    #[serde(default)]
    pub grouping: Arc<BTreeMap<String, String>>,
    /// Root selection pipeline; absent until first edited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Arc<Analysis>>,
}

fn default_alphabet() -> String {
    DEFAULT_ALPHABET.to_string()
}

fn default_max_code_length() -> u32 {
    1
}

impl Default for ElementConfig {
    fn default() -> Self {
        Self {
            alphabet: default_alphabet(),
            max_code_length: default_max_code_length(),
            mapping: Arc::default(),
            grouping: Arc::default(),
            analysis: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Root selection pipeline. Every stage is optional and materialized on first write.
pub struct Analysis {
    /// Feature folding applied before roots are compared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degenerator: Option<Degenerator>,
    /// Ordered tie-break chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<Vec<SieveName>>,
    /// Roots preferred by the priority pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strong: Option<Vec<String>>,
    /// Roots avoided by the priority pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weak: Option<Vec<String>>,
    /// Per-character explicit root lists bypassing automatic selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customize: Option<BTreeMap<String, Vec<String>>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Many-to-one folding of stroke features into coarser classes.
pub struct Degenerator {
    /// Feature to canonical feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature: Option<BTreeMap<Feature, Feature>>,
    /// Do not fold across crossing strokes.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub no_cross: bool,
}
