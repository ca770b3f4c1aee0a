pub mod assembler;
pub mod config;
pub mod error;
pub mod registry;

pub use assembler::{apply_noun_features, assemble, Assembler, FIRST_NODE};
pub use config::{AssemblerConfig, GenderNumberPolicy};
pub use error::{AssemblyError, ConstituentKind};
pub use registry::{Constituent, PrepositionalDraft, Registry, Slot};
