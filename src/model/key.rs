//! Keys: typed path segments of a [`Reference`](super::Reference).

use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::constants::key_kinds;

// ============================================================================
// KEY KIND
// ============================================================================

/// The kind of entity a [`Key`] points at.
///
/// Keys are accepted with any kind string; kinds outside the known
/// vocabulary are kept as [`KeyKind::Unknown`] and only rejected by the
/// validator.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyKind {
    AssetAdministrationShell,
    AccessPermissionRule,
    AnnotatedRelationshipElement,
    Asset,
    AssetInformation,
    BasicEvent,
    Blob,
    Capability,
    ConceptDescription,
    ConceptDictionary,
    DataElement,
    Entity,
    Event,
    File,
    FragmentReference,
    GlobalReference,
    MultiLanguageProperty,
    Operation,
    Property,
    Range,
    ReferenceElement,
    RelationshipElement,
    Submodel,
    SubmodelElement,
    SubmodelElementCollection,
    SubmodelRef,
    View,
    /// A kind string outside the known vocabulary, kept verbatim.
    Unknown(SmolStr),
}

impl KeyKind {
    /// Parse a kind name. Matching is exact; anything else becomes `Unknown`.
    pub fn parse(name: &str) -> Self {
        match name {
            key_kinds::ASSET_ADMINISTRATION_SHELL => Self::AssetAdministrationShell,
            key_kinds::ACCESS_PERMISSION_RULE => Self::AccessPermissionRule,
            key_kinds::ANNOTATED_RELATIONSHIP_ELEMENT => Self::AnnotatedRelationshipElement,
            key_kinds::ASSET => Self::Asset,
            key_kinds::ASSET_INFORMATION => Self::AssetInformation,
            key_kinds::BASIC_EVENT => Self::BasicEvent,
            key_kinds::BLOB => Self::Blob,
            key_kinds::CAPABILITY => Self::Capability,
            key_kinds::CONCEPT_DESCRIPTION => Self::ConceptDescription,
            key_kinds::CONCEPT_DICTIONARY => Self::ConceptDictionary,
            key_kinds::DATA_ELEMENT => Self::DataElement,
            key_kinds::ENTITY => Self::Entity,
            key_kinds::EVENT => Self::Event,
            key_kinds::FILE => Self::File,
            key_kinds::FRAGMENT_REFERENCE => Self::FragmentReference,
            key_kinds::GLOBAL_REFERENCE => Self::GlobalReference,
            key_kinds::MULTI_LANGUAGE_PROPERTY => Self::MultiLanguageProperty,
            key_kinds::OPERATION => Self::Operation,
            key_kinds::PROPERTY => Self::Property,
            key_kinds::RANGE => Self::Range,
            key_kinds::REFERENCE_ELEMENT => Self::ReferenceElement,
            key_kinds::RELATIONSHIP_ELEMENT => Self::RelationshipElement,
            key_kinds::SUBMODEL => Self::Submodel,
            key_kinds::SUBMODEL_ELEMENT => Self::SubmodelElement,
            key_kinds::SUBMODEL_ELEMENT_COLLECTION => Self::SubmodelElementCollection,
            key_kinds::SUBMODEL_REF => Self::SubmodelRef,
            key_kinds::VIEW => Self::View,
            other => Self::Unknown(SmolStr::new(other)),
        }
    }

    /// The canonical name of this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::AssetAdministrationShell => key_kinds::ASSET_ADMINISTRATION_SHELL,
            Self::AccessPermissionRule => key_kinds::ACCESS_PERMISSION_RULE,
            Self::AnnotatedRelationshipElement => key_kinds::ANNOTATED_RELATIONSHIP_ELEMENT,
            Self::Asset => key_kinds::ASSET,
            Self::AssetInformation => key_kinds::ASSET_INFORMATION,
            Self::BasicEvent => key_kinds::BASIC_EVENT,
            Self::Blob => key_kinds::BLOB,
            Self::Capability => key_kinds::CAPABILITY,
            Self::ConceptDescription => key_kinds::CONCEPT_DESCRIPTION,
            Self::ConceptDictionary => key_kinds::CONCEPT_DICTIONARY,
            Self::DataElement => key_kinds::DATA_ELEMENT,
            Self::Entity => key_kinds::ENTITY,
            Self::Event => key_kinds::EVENT,
            Self::File => key_kinds::FILE,
            Self::FragmentReference => key_kinds::FRAGMENT_REFERENCE,
            Self::GlobalReference => key_kinds::GLOBAL_REFERENCE,
            Self::MultiLanguageProperty => key_kinds::MULTI_LANGUAGE_PROPERTY,
            Self::Operation => key_kinds::OPERATION,
            Self::Property => key_kinds::PROPERTY,
            Self::Range => key_kinds::RANGE,
            Self::ReferenceElement => key_kinds::REFERENCE_ELEMENT,
            Self::RelationshipElement => key_kinds::RELATIONSHIP_ELEMENT,
            Self::Submodel => key_kinds::SUBMODEL,
            Self::SubmodelElement => key_kinds::SUBMODEL_ELEMENT,
            Self::SubmodelElementCollection => key_kinds::SUBMODEL_ELEMENT_COLLECTION,
            Self::SubmodelRef => key_kinds::SUBMODEL_REF,
            Self::View => key_kinds::VIEW,
            Self::Unknown(name) => name.as_str(),
        }
    }

    /// Returns true if this kind belongs to the known vocabulary.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }

    /// Returns true if this kind names a Submodel, directly or through
    /// its reference alias.
    pub fn is_submodel(&self) -> bool {
        matches!(self, Self::Submodel | Self::SubmodelRef)
    }
}

impl std::fmt::Display for KeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for KeyKind {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

// ============================================================================
// MATCH MODE
// ============================================================================

/// How strictly two keys must agree to match.
///
/// The modes are ordered by relaxation: anything matching under `Strict`
/// also matches under `Relaxed`, and anything matching under `Relaxed`
/// also matches under `Identification`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Kind and value must be exactly equal.
    #[default]
    Strict,
    /// Kind equal, or either side is `GlobalReference`; value equal.
    Relaxed,
    /// Value equal, kind ignored.
    Identification,
}

// ============================================================================
// KEY
// ============================================================================

/// A typed path segment: `{kind, value}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Key {
    pub kind: KeyKind,
    pub value: Arc<str>,
}

impl Key {
    pub fn new(kind: impl Into<KeyKind>, value: impl Into<Arc<str>>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// A `GlobalReference` key.
    pub fn global(value: impl Into<Arc<str>>) -> Self {
        Self::new(KeyKind::GlobalReference, value)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Match this key against another under the given mode.
    pub fn matches(&self, other: &Key, mode: MatchMode) -> bool {
        if self.value != other.value {
            return false;
        }
        match mode {
            MatchMode::Strict => self.kind == other.kind,
            MatchMode::Relaxed => {
                self.kind == other.kind
                    || self.kind == KeyKind::GlobalReference
                    || other.kind == KeyKind::GlobalReference
            }
            MatchMode::Identification => true,
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}){}", self.kind, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_kind_roundtrip_over_vocabulary() {
        for name in key_kinds::ALL {
            let kind = KeyKind::parse(name);
            assert!(kind.is_known(), "{name} should be known");
            assert_eq!(kind.as_str(), *name);
        }
    }

    #[test]
    fn test_unknown_kind_is_kept_verbatim() {
        let kind = KeyKind::parse("Widget");
        assert!(!kind.is_known());
        assert_eq!(kind.as_str(), "Widget");
    }

    #[test]
    fn test_kind_parsing_is_case_sensitive() {
        assert!(!KeyKind::parse("submodel").is_known());
    }

    #[test]
    fn test_key_display() {
        let key = Key::new(KeyKind::Submodel, "urn:sm:1");
        assert_eq!(key.to_string(), "(Submodel)urn:sm:1");
    }

    #[test]
    fn test_value_mismatch_fails_every_mode() {
        let a = Key::new(KeyKind::Property, "a");
        let b = Key::new(KeyKind::Property, "b");
        for mode in [MatchMode::Strict, MatchMode::Relaxed, MatchMode::Identification] {
            assert!(!a.matches(&b, mode));
        }
    }
}
