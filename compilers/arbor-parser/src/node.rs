use std::collections::BTreeMap;
use std::fmt;

use arbor_protocol::NodeId;

use crate::error::{FeatureError, TreeParseError};
use crate::features::{decode_optional, Features};

/// The syntactic role a producer assigned to a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Clause,
    Subject,
    Object,
    Complement,
    Verb,
    Specifier,
    Noun,
    Preposition,
    PrepositionalComplement,
    Modifier,
    FiniteVerb,
    Adverbial,
    /// Unrecognised code, kept verbatim
    Other(String),
}

impl NodeKind {
    pub fn from_code(code: &str) -> Self {
        match code {
            "clause" => NodeKind::Clause,
            "subj" => NodeKind::Subject,
            "obj" => NodeKind::Object,
            "complement" => NodeKind::Complement,
            "verb" => NodeKind::Verb,
            "spec" => NodeKind::Specifier,
            // The producer spells it "noum"
            "noum" | "noun" => NodeKind::Noun,
            "prep" => NodeKind::Preposition,
            "ppcompl" => NodeKind::PrepositionalComplement,
            "modifier" => NodeKind::Modifier,
            "v" => NodeKind::FiniteVerb,
            "adv" => NodeKind::Adverbial,
            other => NodeKind::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            NodeKind::Clause => "clause",
            NodeKind::Subject => "subj",
            NodeKind::Object => "obj",
            NodeKind::Complement => "complement",
            NodeKind::Verb => "verb",
            NodeKind::Specifier => "spec",
            NodeKind::Noun => "noum",
            NodeKind::Preposition => "prep",
            NodeKind::PrepositionalComplement => "ppcompl",
            NodeKind::Modifier => "modifier",
            NodeKind::FiniteVerb => "v",
            NodeKind::Adverbial => "adv",
            NodeKind::Other(code) => code,
        }
    }
}

impl From<&str> for NodeKind {
    fn from(code: &str) -> Self {
        NodeKind::from_code(code)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One parse-tree node, flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub kind: NodeKind,
    /// Literal word carried by leaf nodes
    pub label: Option<String>,
    /// Raw feature string, decoded on demand
    pub features: Option<String>,
}

impl NodeRecord {
    pub fn new(id: u32, parent: Option<NodeId>, kind: impl Into<NodeKind>) -> Self {
        Self {
            id: NodeId(id),
            parent,
            kind: kind.into(),
            label: None,
            features: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_features(mut self, features: impl Into<String>) -> Self {
        self.features = Some(features.into());
        self
    }

    /// Labelled nodes attach to an existing constituent instead of creating one.
    pub fn is_leaf(&self) -> bool {
        self.label.is_some()
    }

    pub fn decode_features(&self) -> Result<Features, FeatureError> {
        decode_optional(self.features.as_deref())
    }
}

/// Node records keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct NodeTable {
    nodes: BTreeMap<NodeId, NodeRecord>,
    root: Option<NodeId>,
}

impl NodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from already flattened records.
    pub fn from_records<I>(records: I) -> Result<Self, TreeParseError>
    where
        I: IntoIterator<Item = NodeRecord>,
    {
        let mut table = Self::new();
        for record in records {
            table.insert(record)?;
        }
        Ok(table)
    }

    /// Rejects duplicate identifiers and a second parentless node.
    pub fn insert(&mut self, record: NodeRecord) -> Result<(), TreeParseError> {
        if self.nodes.contains_key(&record.id) {
            return Err(TreeParseError::DuplicateId(record.id));
        }
        if record.parent.is_none() {
            if let Some(root) = self.root {
                return Err(TreeParseError::MultipleRoots(root, record.id));
            }
            self.root = Some(record.id);
        }
        self.nodes.insert(record.id, record);
        Ok(())
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeRecord> {
        self.nodes.get(&id)
    }

    pub fn root(&self) -> Option<&NodeRecord> {
        self.root.and_then(|id| self.nodes.get(&id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes() {
        assert_eq!(NodeKind::from_code("noum"), NodeKind::Noun);
        assert_eq!(NodeKind::from_code("noun"), NodeKind::Noun);
        assert_eq!(NodeKind::from_code("v"), NodeKind::FiniteVerb);
        assert_eq!(NodeKind::Noun.code(), "noum");

        let unknown = NodeKind::from_code("interjection");
        assert_eq!(unknown, NodeKind::Other("interjection".to_string()));
        assert_eq!(unknown.to_string(), "interjection");
    }

    #[test]
    fn test_duplicate_id() {
        let result = NodeTable::from_records([
            NodeRecord::new(1, None, "clause"),
            NodeRecord::new(2, Some(NodeId(1)), "subj"),
            NodeRecord::new(2, Some(NodeId(1)), "obj"),
        ]);

        assert!(matches!(result, Err(TreeParseError::DuplicateId(NodeId(2)))));
    }

    #[test]
    fn test_single_root() {
        let result = NodeTable::from_records([
            NodeRecord::new(1, None, "clause"),
            NodeRecord::new(2, None, "clause"),
        ]);

        assert!(matches!(result, Err(TreeParseError::MultipleRoots(NodeId(1), NodeId(2)))));
    }

    #[test]
    fn test_node_features() {
        let noun = NodeRecord::new(4, Some(NodeId(3)), "noum")
            .with_label("cosa")
            .with_features("{'number': 'pl'}");
        assert!(noun.is_leaf());
        assert_eq!(noun.decode_features().unwrap().get("number"), Some("pl"));

        let bare = NodeRecord::new(3, Some(NodeId(1)), "obj");
        assert!(!bare.is_leaf());
        assert!(bare.decode_features().unwrap().is_empty());
    }
}
