//! Referable and Identifiable: the base attributes of every node.

use smol_str::SmolStr;

use super::container::NodeId;
use crate::base::constants::modeling_kinds;
use crate::base::{Diary, Identifier, LangStringSet};

/// Attributes shared by every node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Referable {
    /// Container-local name, used for path resolution.
    pub id_short: SmolStr,
    pub category: Option<SmolStr>,
    pub description: Option<LangStringSet>,
    /// Non-owning back link, set when the node is attached to a collection.
    pub parent: Option<NodeId>,
    pub diary: Diary,
}

impl Referable {
    pub fn new(id_short: impl Into<SmolStr>) -> Self {
        Self {
            id_short: id_short.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<SmolStr>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: LangStringSet) -> Self {
        self.description = Some(description);
        self
    }
}

/// Version metadata of an Identifiable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AdministrativeInformation {
    pub version: Option<SmolStr>,
    pub revision: Option<SmolStr>,
}

impl AdministrativeInformation {
    pub fn new(version: impl Into<SmolStr>, revision: impl Into<SmolStr>) -> Self {
        Self {
            version: Some(version.into()),
            revision: Some(revision.into()),
        }
    }
}

/// A Referable with a globally unique id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Identifiable {
    pub referable: Referable,
    pub id: Identifier,
    pub administration: Option<AdministrativeInformation>,
}

impl Identifiable {
    pub fn new(id: impl Into<Identifier>, id_short: impl Into<SmolStr>) -> Self {
        Self {
            referable: Referable::new(id_short),
            id: id.into(),
            administration: None,
        }
    }
}

// ============================================================================
// MODELING KIND
// ============================================================================

/// Instance vs. Template flag.
///
/// Stored as the raw string the model was built with, so that the
/// validator can report values outside the vocabulary or in the wrong
/// casing instead of losing them at construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModelingKind(SmolStr);

impl Default for ModelingKind {
    fn default() -> Self {
        Self::instance()
    }
}

impl ModelingKind {
    pub fn instance() -> Self {
        Self(SmolStr::new_static(modeling_kinds::INSTANCE))
    }

    pub fn template() -> Self {
        Self(SmolStr::new_static(modeling_kinds::TEMPLATE))
    }

    /// Keep an arbitrary raw value.
    pub fn from_raw(raw: impl Into<SmolStr>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical spelling if the raw value names a known kind in any
    /// casing.
    pub fn canonical(&self) -> Option<&'static str> {
        [modeling_kinds::INSTANCE, modeling_kinds::TEMPLATE]
            .into_iter()
            .find(|k| k.eq_ignore_ascii_case(self.0.trim()))
    }

    pub fn is_template(&self) -> bool {
        self.canonical() == Some(modeling_kinds::TEMPLATE)
    }

    pub fn is_instance(&self) -> bool {
        self.canonical() == Some(modeling_kinds::INSTANCE)
    }
}
