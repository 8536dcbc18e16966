//! References: ordered key sequences identifying an entity.

use super::key::{Key, KeyKind, MatchMode};
use crate::base::Identifier;

/// Which flavor of reference this is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// A single externally meaningful identity (e.g. a semantic id).
    #[default]
    Global,
    /// A path into the local containment hierarchy. The first key selects
    /// a root collection, the rest are idShort segments.
    Model,
}

/// An ordered list of keys. The empty reference is the valid
/// "no reference" state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reference {
    pub kind: ReferenceKind,
    pub keys: Vec<Key>,
}

impl Reference {
    /// An empty reference.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A global reference with a single `GlobalReference` key.
    pub fn global(value: &str) -> Self {
        Self {
            kind: ReferenceKind::Global,
            keys: vec![Key::global(value)],
        }
    }

    /// A model reference built from the given keys.
    pub fn model(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            kind: ReferenceKind::Model,
            keys: keys.into_iter().collect(),
        }
    }

    /// A model reference pointing at a single Identifiable.
    pub fn to_identifiable(kind: KeyKind, id: &Identifier) -> Self {
        Self::model([Key::new(kind, id.as_str())])
    }

    pub fn with_key(mut self, key: Key) -> Self {
        self.keys.push(key);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn first(&self) -> Option<&Key> {
        self.keys.first()
    }

    pub fn last(&self) -> Option<&Key> {
        self.keys.last()
    }

    /// Element-wise match; both references must have the same length.
    ///
    /// Two empty references match each other.
    pub fn matches(&self, other: &Reference, mode: MatchMode) -> bool {
        self.keys.len() == other.keys.len()
            && self
                .keys
                .iter()
                .zip(&other.keys)
                .all(|(a, b)| a.matches(b, mode))
    }

    /// Match against a single key. Only defined for references with
    /// exactly one key; multi-key references are never identity references.
    pub fn matches_exactly_one_key(&self, key: &Key, mode: MatchMode) -> bool {
        match self.keys.as_slice() {
            [only] => only.matches(key, mode),
            _ => false,
        }
    }

    /// Whether this is a one-key reference whose value is `id`.
    pub fn refers_to_id(&self, id: &Identifier) -> bool {
        self.matches_exactly_one_key(&Key::global(id.as_str()), MatchMode::Identification)
    }

    /// The submodel id this reference names when held in a shell's
    /// submodel list.
    ///
    /// A one-key reference names its key's value whatever the kind; a
    /// longer reference names its last key, which must be a `Submodel` or
    /// `SubmodelRef` key.
    pub fn submodel_id(&self) -> Option<&str> {
        match self.keys.as_slice() {
            [only] => Some(only.value()),
            [.., last] if last.kind.is_submodel() => Some(last.value()),
            _ => None,
        }
    }

    /// Point the key picked by [`Reference::submodel_id`] at `new`.
    pub(crate) fn set_submodel_id(&mut self, new: &str) -> bool {
        if self.submodel_id().is_none() {
            return false;
        }
        match self.keys.last_mut() {
            Some(key) => {
                key.value = new.into();
                true
            }
            None => false,
        }
    }

    /// Replace the value of every key equal to `old` with `new`.
    /// Returns the number of keys rewritten.
    pub(crate) fn rewrite_value(&mut self, old: &str, new: &str) -> usize {
        let mut count = 0;
        for key in &mut self.keys {
            if &*key.value == old {
                key.value = new.into();
                count += 1;
            }
        }
        count
    }
}

impl std::fmt::Display for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

// ============================================================================
// SEMANTIC ID
// ============================================================================

/// A global reference linking an element to a ConceptDescription.
///
/// Matched against concept descriptions by id value only, never by
/// full key equality.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SemanticId(pub Reference);

impl SemanticId {
    pub fn new(reference: Reference) -> Self {
        Self(reference)
    }

    /// A semantic id with a single `GlobalReference` key.
    pub fn global(value: &str) -> Self {
        Self(Reference::global(value))
    }

    pub fn reference(&self) -> &Reference {
        &self.0
    }

    pub fn keys(&self) -> &[Key] {
        &self.0.keys
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this semantic id denotes the Identifiable with `id`.
    pub fn refers_to(&self, id: &Identifier) -> bool {
        self.0.refers_to_id(id)
    }

    /// Whether two semantic ids denote the same concept.
    pub fn same_concept(&self, other: &SemanticId) -> bool {
        self.0.matches(&other.0, MatchMode::Identification)
    }
}

impl From<Reference> for SemanticId {
    fn from(reference: Reference) -> Self {
        Self(reference)
    }
}

impl std::fmt::Display for SemanticId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
