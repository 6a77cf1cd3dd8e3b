//! Schema validation orchestration and shared helpers.

pub mod naming;
pub mod relation;

use crate::{error::ErrorTree, node::Schema};

/// Run full schema validation in a staged, deterministic order.
pub(crate) fn validate_schema(schema: &Schema) -> Result<(), ErrorTree> {
    let mut errors = ErrorTree::new();

    // Phase 1: names (local, structural).
    naming::validate_naming(schema, &mut errors);

    // Phase 2: cross-type invariants that need a full schema view.
    relation::validate_relations(schema, &mut errors);

    errors.result()
}
