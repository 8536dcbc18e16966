//! Asset Administration Shells and their asset information.

use smol_str::SmolStr;

use super::key::KeyKind;
use super::reference::Reference;
use super::referable::Identifiable;
use crate::base::Identifier;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Type,
    #[default]
    Instance,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Type => "Type",
            Self::Instance => "Instance",
        }
    }
}

/// The asset a shell describes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetInformation {
    pub asset_kind: AssetKind,
    pub global_asset_id: Option<Identifier>,
}

impl AssetInformation {
    pub fn new(asset_kind: AssetKind, global_asset_id: impl Into<Identifier>) -> Self {
        Self {
            asset_kind,
            global_asset_id: Some(global_asset_id.into()),
        }
    }
}

/// Named group of references to concept descriptions.
///
/// Dictionaries are addressable by idShort in a wire encoding but are not
/// resolvable roots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConceptDictionary {
    pub id_short: SmolStr,
    pub concept_descriptions: Vec<Reference>,
}

/// The Identifiable root describing one digital twin.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdministrationShell {
    pub identifiable: Identifiable,
    pub derived_from: Option<Reference>,
    pub asset_information: AssetInformation,
    /// References to submodels, resolved lazily through the environment.
    pub submodel_refs: Vec<Reference>,
    pub concept_dictionaries: Vec<ConceptDictionary>,
    pub data_specifications: Vec<Reference>,
}

impl AdministrationShell {
    pub fn new(id: impl Into<Identifier>, id_short: impl Into<SmolStr>) -> Self {
        Self {
            identifiable: Identifiable::new(id, id_short),
            ..Self::default()
        }
    }

    pub fn with_asset(mut self, asset_information: AssetInformation) -> Self {
        self.asset_information = asset_information;
        self
    }

    pub fn id(&self) -> &Identifier {
        &self.identifiable.id
    }

    /// Append a model reference to the submodel with `id`, unless an
    /// equivalent reference is already present.
    pub fn add_submodel_ref(&mut self, id: &Identifier) -> bool {
        if self.has_submodel_ref(id) {
            return false;
        }
        self.submodel_refs
            .push(Reference::to_identifiable(KeyKind::Submodel, id));
        true
    }

    /// Whether one of the submodel references names `id`.
    pub fn has_submodel_ref(&self, id: &Identifier) -> bool {
        self.submodel_ref_for(id).is_some()
    }

    /// The submodel reference naming `id`, see [`Reference::submodel_id`].
    pub fn submodel_ref_for(&self, id: &Identifier) -> Option<&Reference> {
        self.submodel_refs
            .iter()
            .find(|r| r.submodel_id() == Some(id.as_str()))
    }

    /// Whether this shell describes the asset with `asset_id`.
    pub fn describes_asset(&self, asset_id: &str) -> bool {
        self.asset_information
            .global_asset_id
            .as_ref()
            .is_some_and(|id| id.as_str() == asset_id)
    }
}
