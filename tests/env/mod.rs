//! Environment layer tests
//!
//! - Reference resolution (exact and partial)
//! - Add/Insert/Remove through the child-collection protocol
//! - Identifiable renames
//! - Walking and model reference construction

pub mod tests_editing;
pub mod tests_resolution;
pub mod tests_walk;
