//! Validation layer tests
//!
//! - Rule coverage across all root collections
//! - Auto-fix application and re-validation

pub mod tests_auto_fix;
