//! Structural validation with optional automatic repair.
//!
//! ```text
//! Environment ──referables()──► rules::check_node ──► Vec<ValidationRecord>
//!                                                          │
//!                                     auto_fix(env, &records) ◄┘
//! ```
//!
//! Violations never abort the walk; every finding becomes a record and the
//! caller decides what to do with it.

mod diagnostics;
mod fix;
mod options;
mod rules;

pub use diagnostics::{AutoFix, RecordCollector, Severity, ValidationRecord, codes};
pub use fix::auto_fix;
pub use options::ValidationOptions;

use tracing::debug;

use crate::env::Environment;

/// Validate every reachable Referable with default options.
pub fn validate(env: &Environment) -> Vec<ValidationRecord> {
    validate_with(env, &ValidationOptions::default())
}

/// Validate every reachable Referable: shells, then submodels with their
/// element trees, then concept descriptions.
pub fn validate_with(env: &Environment, options: &ValidationOptions) -> Vec<ValidationRecord> {
    let mut out = RecordCollector::new();
    let mut siblings = rules::SiblingIdShorts::new(env);
    for id in env.referables() {
        if let Some(node) = env.get(id) {
            rules::check_node(&mut siblings, id, node, options, &mut out);
        }
    }
    debug!(
        "[VALIDATE] {} records, violations: {}",
        out.records().len(),
        out.has_violations()
    );
    out.into_records()
}
