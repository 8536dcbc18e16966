//! Model layer tests
//!
//! - Key matching across match modes
//! - Reference matching and rendering
//! - Variant tag factory
//! - Modeling kind parsing

pub mod tests_factory;
pub mod tests_key_matching;
