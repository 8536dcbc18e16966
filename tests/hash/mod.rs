//! Hash layer tests
//!
//! - Determinism
//! - Shallowness (children never reach the hash)
//! - Sensitivity to own scalar attributes

pub mod tests_content_hash;
