use arbor_protocol::NodeId;
use thiserror::Error;

/// A feature string that is present but cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    #[error("malformed feature string {raw:?}: nothing left after stripping quotes and braces")]
    Empty { raw: String },

    #[error("malformed feature string {raw:?}: pair {pair:?} has no ':'")]
    MissingSeparator { raw: String, pair: String },
}

/// The serialized tree cannot be turned into a node table.
#[derive(Debug, Error)]
pub enum TreeParseError {
    #[error("malformed tree document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("node identifier {0:?} is not a non-negative 32-bit integer")]
    InvalidId(String),

    #[error("node {0} appears more than once")]
    DuplicateId(NodeId),

    #[error("nodes {0} and {1} both lack a parent")]
    MultipleRoots(NodeId, NodeId),
}
