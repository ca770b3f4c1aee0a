use arbor_parser::{FeatureError, NodeTable};
use arbor_protocol::{Clause, NodeId};
use arbor_surface::Realizer;
use tracing::debug;

use crate::error::Result;

/// Clause-level tense code that switches on progressive aspect.
pub const GERUND: &str = "ger";

/// Applies the root node's clause-level features.
///
/// Only a gerund tense has an effect: progressive on, perfect off. A missing
/// root, feature string or tense leaves the clause untouched.
pub fn apply_clause_features(clause: &mut Clause, table: &NodeTable) -> std::result::Result<(), FeatureError> {
    let Some(root) = table.get(NodeId::ROOT) else {
        return Ok(());
    };

    if root.decode_features()?.get("tense") == Some(GERUND) {
        debug!("gerund clause, forcing progressive aspect");
        clause.make_progressive();
    }
    Ok(())
}

/// Finishes the clause and hands it to the realizer; its output is returned as is.
pub fn realize<R: Realizer + ?Sized>(realizer: &R, mut clause: Clause, table: &NodeTable) -> Result<String> {
    apply_clause_features(&mut clause, table)?;
    Ok(realizer.realize(&clause)?)
}
