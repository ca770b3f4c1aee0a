use std::fmt;

use arbor_parser::FeatureError;
use arbor_protocol::NodeId;
use thiserror::Error;

/// The constituent partitions a parent lookup can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstituentKind {
    NounPhrase,
    VerbPhrase,
    PrepositionalPhrase,
}

impl fmt::Display for ConstituentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstituentKind::NounPhrase => write!(f, "noun phrase"),
            ConstituentKind::VerbPhrase => write!(f, "verb phrase"),
            ConstituentKind::PrepositionalPhrase => write!(f, "prepositional phrase"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    /// The tree and the attachment rules disagree about a node's parent.
    #[error("node {node} attaches to a {expected}, but parent {parent:?} registered none")]
    UnresolvedParent {
        node: NodeId,
        parent: Option<NodeId>,
        expected: ConstituentKind,
    },

    #[error(transparent)]
    Features(#[from] FeatureError),
}
