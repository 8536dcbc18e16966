//! # aas-base
//!
//! Core library for the Asset Administration Shell meta-model: typed
//! references, element trees, reference resolution, content hashing and
//! structural validation.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! validate  → Structural rules, validation records, auto-fix
//!   ↓
//! hash      → Shallow SHA-256 content fingerprints
//!   ↓
//! env       → Arena Environment, editing, walking, Resolver
//!   ↓
//! model     → Key/Reference, Referable/Identifiable, element variants,
//!             child-collection protocol, variant tag factory
//!   ↓
//! base      → Primitives (Identifier, language strings, change diary)
//! ```
//!
//! Serialization formats are not part of this crate; an adapter consumes
//! [`model::variant_tag`], [`model::create_by_tag`] and the Key-kind
//! vocabulary in [`base::constants`].

// ============================================================================
// MODULES (dependency order: base → model → env → hash → validate)
// ============================================================================

/// Foundation types: Identifier, LangStringSet, Diary, constants
pub mod base;

/// Meta-model: keys, references, referables, elements, roots
pub mod model;

/// Environment: arena ownership, editing, resolution
pub mod env;

/// Shallow content hashing
pub mod hash;

/// Structural validation and auto-fix
pub mod validate;

// Re-export commonly needed items
pub use base::{Identifier, LangStringSet};
pub use env::{Environment, ModelError, SharedEnvironment};
pub use hash::{ContentHash, compute_hash};
pub use model::{
    ElementKind, Key, KeyKind, MatchMode, Node, NodeId, Placement, Reference, SubmodelElement,
};
pub use validate::{Severity, ValidationOptions, ValidationRecord, auto_fix, validate};
