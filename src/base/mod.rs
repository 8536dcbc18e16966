//! Foundation types for the meta-model.
//!
//! This module provides leaf value types used throughout the crate:
//! - [`Identifier`] - Globally unique ids of Identifiables
//! - [`LangString`], [`LangStringSet`] - Multi-language text
//! - [`Diary`], [`DiaryEntry`] - Append-only change diary of a Referable
//! - idShort comparison helpers
//! - Domain constants (Key kinds, sentinel values)
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod diary;
mod identifier;
mod lang;
pub mod text;

pub use diary::{Change, Diary, DiaryEntry};
pub use identifier::Identifier;
pub use lang::{LangString, LangStringSet};
