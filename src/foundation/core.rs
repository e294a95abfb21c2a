use std::{borrow::Borrow, fmt, str::FromStr};

use crate::foundation::error::{SchemeError, SchemeResult};

/// Which element sub-document an edit targets.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ElementIndex {
    /// Shape-based elements (roots and components).
    Form,
    /// Pronunciation-based elements (initials, finals, tones).
    Pronunciation,
}

impl ElementIndex {
    /// Stable lowercase label, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Pronunciation => "pronunciation",
        }
    }
}

impl fmt::Display for ElementIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementIndex {
    type Err = SchemeError;

    fn from_str(s: &str) -> SchemeResult<Self> {
        match s.trim() {
            "form" => Ok(Self::Form),
            "pronunciation" => Ok(Self::Pronunciation),
            other => Err(SchemeError::validation(format!(
                "unknown element index '{other}'"
            ))),
        }
    }
}

/// The three independently keyed mappings of the `data` sub-document.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DataCategory {
    /// Component and compound glyph definitions.
    Form,
    /// Character to component-shape lists.
    Repertoire,
    /// Stroke feature to numeric rank.
    Classifier,
}

impl DataCategory {
    /// Stable lowercase label, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Repertoire => "repertoire",
            Self::Classifier => "classifier",
        }
    }
}

impl fmt::Display for DataCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataCategory {
    type Err = SchemeError;

    fn from_str(s: &str) -> SchemeResult<Self> {
        match s.trim() {
            "form" => Ok(Self::Form),
            "repertoire" => Ok(Self::Repertoire),
            "classifier" => Ok(Self::Classifier),
            other => Err(SchemeError::validation(format!(
                "unknown data category '{other}'"
            ))),
        }
    }
}

/// Priority class of a root, independent of the selector chain.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Preferred roots.
    Strong,
    /// Dispreferred roots.
    Weak,
}

impl Priority {
    /// Stable lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Weak => "weak",
        }
    }
}

/// Named stroke feature such as `横` or `竖弯钩`.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Feature(String);

impl Feature {
    /// Wrap a feature label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Borrow the label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Feature {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Feature {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ranking rule of the root selector. Order in the selector chain is the tie-break priority.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum SieveName {
    /// Fewer roots wins.
    #[serde(rename = "根少优先")]
    Length,
    /// Prefer attaching roots over crossing ones.
    #[serde(rename = "能连不交")]
    Crossing,
    /// Prefer separated roots over attached ones.
    #[serde(rename = "能散不连")]
    Attaching,
    /// Larger leading root wins.
    #[serde(rename = "取大优先")]
    Bias,
    /// Roots must follow stroke order.
    #[serde(rename = "全符笔顺")]
    Order,
    /// Avoid roots that are look-alikes of other roots.
    #[serde(rename = "非形近根")]
    Similar,
    /// More strong roots wins.
    #[serde(rename = "多强字根")]
    Strong,
    /// Fewer weak roots wins.
    #[serde(rename = "少弱字根")]
    Weak,
}

impl SieveName {
    /// Every sieve, in declaration order.
    pub const ALL: [SieveName; 8] = [
        Self::Length,
        Self::Crossing,
        Self::Attaching,
        Self::Bias,
        Self::Order,
        Self::Similar,
        Self::Strong,
        Self::Weak,
    ];

    /// The chain used by most published shape schemes.
    pub fn default_chain() -> Vec<SieveName> {
        vec![Self::Length, Self::Crossing, Self::Attaching, Self::Bias]
    }

    /// Label as it appears in scheme files.
    pub fn label(self) -> &'static str {
        match self {
            Self::Length => "根少优先",
            Self::Crossing => "能连不交",
            Self::Attaching => "能散不连",
            Self::Bias => "取大优先",
            Self::Order => "全符笔顺",
            Self::Similar => "非形近根",
            Self::Strong => "多强字根",
            Self::Weak => "少弱字根",
        }
    }
}

impl fmt::Display for SieveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SieveName {
    type Err = SchemeError;

    fn from_str(s: &str) -> SchemeResult<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|sieve| sieve.label() == s)
            .ok_or_else(|| SchemeError::validation(format!("unknown sieve '{s}'")))
    }
}

/// Ideographic description operator joining the operands of a compound.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Operator {
    /// Left to right.
    #[serde(rename = "⿰")]
    LeftRight,
    /// Above to below.
    #[serde(rename = "⿱")]
    AboveBelow,
    /// Left to middle and right.
    #[serde(rename = "⿲")]
    LeftMiddleRight,
    /// Above to middle and below.
    #[serde(rename = "⿳")]
    AboveMiddleBelow,
    /// Full surround.
    #[serde(rename = "⿴")]
    Surround,
    /// Surround from above.
    #[serde(rename = "⿵")]
    SurroundFromAbove,
    /// Surround from below.
    #[serde(rename = "⿶")]
    SurroundFromBelow,
    /// Surround from left.
    #[serde(rename = "⿷")]
    SurroundFromLeft,
    /// Surround from upper left.
    #[serde(rename = "⿸")]
    SurroundFromUpperLeft,
    /// Surround from upper right.
    #[serde(rename = "⿹")]
    SurroundFromUpperRight,
    /// Surround from lower left.
    #[serde(rename = "⿺")]
    SurroundFromLowerLeft,
    /// Overlaid.
    #[serde(rename = "⿻")]
    Overlaid,
}

impl Operator {
    /// Number of operands the operator takes.
    pub fn arity(self) -> usize {
        match self {
            Self::LeftMiddleRight | Self::AboveMiddleBelow => 3,
            _ => 2,
        }
    }

    /// The description character itself.
    pub fn symbol(self) -> char {
        match self {
            Self::LeftRight => '⿰',
            Self::AboveBelow => '⿱',
            Self::LeftMiddleRight => '⿲',
            Self::AboveMiddleBelow => '⿳',
            Self::Surround => '⿴',
            Self::SurroundFromAbove => '⿵',
            Self::SurroundFromBelow => '⿶',
            Self::SurroundFromLeft => '⿷',
            Self::SurroundFromUpperLeft => '⿸',
            Self::SurroundFromUpperRight => '⿹',
            Self::SurroundFromLowerLeft => '⿺',
            Self::Overlaid => '⿻',
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
