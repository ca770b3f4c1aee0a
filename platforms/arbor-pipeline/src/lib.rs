pub mod driver;
pub mod error;

use arbor_assembler::{assemble, AssemblerConfig};
use arbor_parser::load_tree;
use arbor_protocol::Clause;
use arbor_surface::{LinearRealizer, Realizer};
use tracing::debug;

pub use driver::{apply_clause_features, realize, GERUND};
pub use error::{PipelineError, Result};

/// Tree document -> node table -> clause -> surface sentence.
#[derive(Debug, Clone)]
pub struct Pipeline<R = LinearRealizer> {
    realizer: R,
    config: AssemblerConfig,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(LinearRealizer, AssemblerConfig::default())
    }
}

impl<R: Realizer> Pipeline<R> {
    pub fn new(realizer: R, config: AssemblerConfig) -> Self {
        Self { realizer, config }
    }

    /// The clause as the realizer will see it, clause-level features applied.
    pub fn build_clause(&self, document: &str) -> Result<Clause> {
        let table = load_tree(document)?;
        let mut clause = assemble(&table, &self.config)?;
        apply_clause_features(&mut clause, &table)?;
        Ok(clause)
    }

    pub fn build_sentence(&self, document: &str) -> Result<String> {
        let table = load_tree(document)?;
        let clause = assemble(&table, &self.config)?;
        let sentence = realize(&self.realizer, clause, &table)?;

        debug!(%sentence, "realized sentence");
        Ok(sentence)
    }
}

/// Realizes one serialized tree with the default pipeline.
pub fn build_sentence(document: &str) -> Result<String> {
    Pipeline::default().build_sentence(document)
}
