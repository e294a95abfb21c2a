//! Glyph data supplied by the geometry subsystem.
//!
//! The engine stores these values in `data.form` / `data.repertoire` and never interprets the
//! curve geometry.

use crate::foundation::core::{Feature, Operator};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One drawing command of a stroke outline.
pub struct Curve {
    /// Drawing command (`h`, `v`, `c`, `z`, ...).
    pub command: String,
    /// Command parameters.
    #[serde(rename = "parameterList")]
    pub parameter_list: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A single stroke with its feature label.
pub struct Stroke {
    /// Stroke feature, folded by the degenerator before root comparison.
    pub feature: Feature,
    /// Pen-down point.
    pub start: [f64; 2],
    /// Outline commands after `start`.
    #[serde(rename = "curveList")]
    pub curve_list: Vec<Curve>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One rendering of a component: its strokes plus the source it was traced from.
pub struct ComponentShape {
    /// Ordered strokes.
    pub glyph: Vec<Stroke>,
    /// Reference (font or source glyph) for the drawing.
    #[serde(default)]
    pub reference: String,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Stroke-level definition of a component.
pub struct Component {
    /// Alternative shapes of the component.
    pub shape: Vec<ComponentShape>,
}

impl Component {
    /// Stroke count of the primary shape.
    pub fn stroke_count(&self) -> usize {
        self.shape.first().map_or(0, |s| s.glyph.len())
    }

    /// Features of the primary shape, in stroke order.
    pub fn features(&self) -> impl Iterator<Item = &Feature> {
        self.shape
            .first()
            .into_iter()
            .flat_map(|s| s.glyph.iter().map(|stroke| &stroke.feature))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A compound built from other glyphs with an ideographic description operator.
pub struct Compound {
    /// Structure operator.
    pub operator: Operator,
    /// Operand glyph keys.
    #[serde(rename = "operandList")]
    pub operand_list: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A glyph definition in `data.form`: a component, a compound, or both.
pub struct Glyph {
    /// Unicode scalar value of the character.
    pub unicode: u32,
    /// Optional display name for private-use glyphs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Stroke definition when the glyph is a component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<Component>,
    /// Decompositions when the glyph is a compound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compound: Option<Vec<Compound>>,
}

impl Glyph {
    /// Glyph backed by strokes.
    pub fn component(unicode: u32, component: Component) -> Self {
        Self {
            unicode,
            name: None,
            component: Some(component),
            compound: None,
        }
    }

    /// Glyph backed by a single decomposition.
    pub fn compound(unicode: u32, operator: Operator, operands: Vec<String>) -> Self {
        Self {
            unicode,
            name: None,
            component: None,
            compound: Some(vec![Compound {
                operator,
                operand_list: operands,
            }]),
        }
    }

    /// The character this glyph draws, if `unicode` is a valid scalar.
    pub fn char(&self) -> Option<char> {
        char::from_u32(self.unicode)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A repertoire entry: the component shapes a character is drawn with.
pub struct Character {
    /// Component shapes.
    pub shape: Vec<Component>,
}
