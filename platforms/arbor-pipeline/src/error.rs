use arbor_assembler::AssemblyError;
use arbor_parser::{FeatureError, TreeParseError};
use arbor_surface::RealizeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Why a single tree could not be turned into a sentence.
///
/// Every variant aborts that tree only.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    TreeParse(#[from] TreeParseError),

    #[error(transparent)]
    MalformedFeatureString(#[from] FeatureError),

    /// Always holds [`AssemblyError::UnresolvedParent`].
    #[error(transparent)]
    UnresolvedParent(AssemblyError),

    #[error("realization unavailable: {0}")]
    RealizationUnavailable(#[from] RealizeError),
}

impl From<AssemblyError> for PipelineError {
    fn from(e: AssemblyError) -> Self {
        match e {
            AssemblyError::Features(e) => PipelineError::MalformedFeatureString(e),
            unresolved => PipelineError::UnresolvedParent(unresolved),
        }
    }
}
