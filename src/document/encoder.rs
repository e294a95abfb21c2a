use std::collections::{BTreeMap, BTreeSet};

use crate::foundation::error::{SchemeError, SchemeResult};

/// Id of the entry node of every encoder graph.
pub const ROOT_NODE_ID: &str = "0";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Code-generation graph consumed by the encoder stage.
///
/// The transition engine only ever replaces this value wholesale. Conditions on edges and any
/// fields this crate does not know about are carried through untouched.
pub struct EncoderConfig {
    /// Named stages.
    #[serde(default)]
    pub nodes: Vec<EncoderNode>,
    /// Directed links between stages.
    #[serde(default)]
    pub edges: Vec<EncoderEdge>,
    /// Unrecognised fields, preserved on round-trip.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One stage of the encoder graph.
pub struct EncoderNode {
    /// Numeric string id, unique within the graph.
    pub id: String,
    /// Stage label (an element name such as `字根 1`).
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Directed edge between two stages.
pub struct EncoderEdge {
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
    /// Opaque guard conditions evaluated by the encoder.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<serde_json::Value>,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            nodes: vec![EncoderNode {
                id: ROOT_NODE_ID.to_string(),
                label: "start".to_string(),
            }],
            edges: Vec::new(),
            extra: BTreeMap::new(),
        }
    }
}

impl EncoderConfig {
    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&EncoderNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Return a copy of the graph with a new node labelled `label` linked under `parent`.
    ///
    /// The new node takes the smallest unused numeric id; nodes stay sorted by id.
    pub fn with_child(&self, parent: &str, label: impl Into<String>) -> SchemeResult<Self> {
        if self.node(parent).is_none() {
            return Err(SchemeError::validation(format!(
                "encoder node '{parent}' does not exist"
            )));
        }
        let used: BTreeSet<u32> = self
            .nodes
            .iter()
            .filter_map(|n| n.id.parse::<u32>().ok())
            .collect();
        let id = (0u32..)
            .find(|candidate| !used.contains(candidate))
            .ok_or_else(|| SchemeError::validation("encoder node ids exhausted"))?
            .to_string();

        let mut next = self.clone();
        next.nodes.push(EncoderNode {
            id: id.clone(),
            label: label.into(),
        });
        next.nodes.sort_by(|a, b| node_order(a).cmp(&node_order(b)));
        next.edges.push(EncoderEdge {
            source: parent.to_string(),
            target: id,
            conditions: Vec::new(),
        });
        Ok(next)
    }

    /// Return a copy of the graph with `label` replaced on node `id`.
    pub fn with_label(&self, id: &str, label: impl Into<String>) -> SchemeResult<Self> {
        let mut next = self.clone();
        let node = next
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| SchemeError::validation(format!("encoder node '{id}' does not exist")))?;
        node.label = label.into();
        Ok(next)
    }

    /// Return a copy of the graph without node `id` and every edge touching it.
    pub fn without_node(&self, id: &str) -> SchemeResult<Self> {
        if id == ROOT_NODE_ID {
            return Err(SchemeError::validation("the root encoder node cannot be removed"));
        }
        if self.node(id).is_none() {
            return Err(SchemeError::validation(format!(
                "encoder node '{id}' does not exist"
            )));
        }
        let mut next = self.clone();
        next.nodes.retain(|n| n.id != id);
        next.edges.retain(|e| e.source != id && e.target != id);
        Ok(next)
    }
}

// Numeric ids first in numeric order, anything else after in lexical order.
fn node_order(node: &EncoderNode) -> (u32, &str) {
    (node.id.parse::<u32>().unwrap_or(u32::MAX), node.id.as_str())
}

#[cfg(test)]
#[path = "../../tests/unit/document/encoder.rs"]
mod tests;
