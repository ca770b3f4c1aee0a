pub mod error;
pub mod features;
pub mod loader;
pub mod node;

pub use error::{FeatureError, TreeParseError};
pub use features::{decode, decode_optional, Features};
pub use loader::load_tree;
pub use node::{NodeKind, NodeRecord, NodeTable};
