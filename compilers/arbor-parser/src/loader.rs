use arbor_protocol::NodeId;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::TreeParseError;
use crate::node::{NodeKind, NodeRecord, NodeTable};

/// Written by the producer for nodes created without features.
const NO_FEATURES: &str = "None";

/// A node as it appears in the serialized document.
///
/// The producer writes single-letter keys (`a` id, `b` kind, `c` label,
/// `d` features); the descriptive names are accepted too.
#[derive(Debug, Deserialize)]
struct RawNode {
    #[serde(alias = "a")]
    id: RawId,
    #[serde(alias = "b", alias = "type")]
    kind: String,
    #[serde(alias = "c")]
    label: Option<String>,
    #[serde(alias = "d")]
    features: Option<RawFeatures>,
    #[serde(default)]
    children: Vec<RawNode>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    fn resolve(&self) -> Result<NodeId, TreeParseError> {
        match self {
            RawId::Number(n) => u32::try_from(*n)
                .map(NodeId)
                .map_err(|_| TreeParseError::InvalidId(n.to_string())),
            RawId::Text(s) => s
                .trim()
                .parse::<u32>()
                .map(NodeId)
                .map_err(|_| TreeParseError::InvalidId(s.clone())),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawFeatures {
    Text(String),
    Map(Map<String, Value>),
}

impl RawFeatures {
    fn into_text(self) -> Option<String> {
        match self {
            RawFeatures::Text(text) if text.trim() == NO_FEATURES => None,
            RawFeatures::Text(text) => Some(text),
            RawFeatures::Map(map) => Some(Value::Object(map).to_string()),
        }
    }
}

/// Flattens a serialized tree into a node table.
pub fn load_tree(document: &str) -> Result<NodeTable, TreeParseError> {
    let root: RawNode = serde_json::from_str(document)?;

    let mut table = NodeTable::new();
    visit(root, None, &mut table)?;

    debug!(nodes = table.len(), "loaded parse tree");
    Ok(table)
}

// Pre-order: a node is recorded before its children, in listed order.
fn visit(node: RawNode, parent: Option<NodeId>, table: &mut NodeTable) -> Result<(), TreeParseError> {
    let id = node.id.resolve()?;

    table.insert(NodeRecord {
        id,
        parent,
        kind: NodeKind::from_code(&node.kind),
        label: node.label,
        features: node.features.and_then(RawFeatures::into_text),
    })?;

    for child in node.children {
        visit(child, Some(id), table)?;
    }
    Ok(())
}
