//! Domain constants shared by the resolver, the validator and wire adapters.

/// Canonical Key kind names.
///
/// These are the exact strings a wire encoding uses for `Key.type`.
pub mod key_kinds {
    pub const ASSET_ADMINISTRATION_SHELL: &str = "AssetAdministrationShell";
    pub const ACCESS_PERMISSION_RULE: &str = "AccessPermissionRule";
    pub const ANNOTATED_RELATIONSHIP_ELEMENT: &str = "AnnotatedRelationshipElement";
    pub const ASSET: &str = "Asset";
    pub const ASSET_INFORMATION: &str = "AssetInformation";
    pub const BASIC_EVENT: &str = "BasicEvent";
    pub const BLOB: &str = "Blob";
    pub const CAPABILITY: &str = "Capability";
    pub const CONCEPT_DESCRIPTION: &str = "ConceptDescription";
    pub const CONCEPT_DICTIONARY: &str = "ConceptDictionary";
    pub const DATA_ELEMENT: &str = "DataElement";
    pub const ENTITY: &str = "Entity";
    pub const EVENT: &str = "Event";
    pub const FILE: &str = "File";
    pub const FRAGMENT_REFERENCE: &str = "FragmentReference";
    pub const GLOBAL_REFERENCE: &str = "GlobalReference";
    pub const MULTI_LANGUAGE_PROPERTY: &str = "MultiLanguageProperty";
    pub const OPERATION: &str = "Operation";
    pub const PROPERTY: &str = "Property";
    pub const RANGE: &str = "Range";
    pub const REFERENCE_ELEMENT: &str = "ReferenceElement";
    pub const RELATIONSHIP_ELEMENT: &str = "RelationshipElement";
    pub const SUBMODEL: &str = "Submodel";
    pub const SUBMODEL_ELEMENT: &str = "SubmodelElement";
    pub const SUBMODEL_ELEMENT_COLLECTION: &str = "SubmodelElementCollection";
    pub const SUBMODEL_REF: &str = "SubmodelRef";
    pub const VIEW: &str = "View";

    /// Every recognized Key kind, in vocabulary order.
    pub const ALL: &[&str] = &[
        ASSET_ADMINISTRATION_SHELL,
        ACCESS_PERMISSION_RULE,
        ANNOTATED_RELATIONSHIP_ELEMENT,
        ASSET,
        ASSET_INFORMATION,
        BASIC_EVENT,
        BLOB,
        CAPABILITY,
        CONCEPT_DESCRIPTION,
        CONCEPT_DICTIONARY,
        DATA_ELEMENT,
        ENTITY,
        EVENT,
        FILE,
        FRAGMENT_REFERENCE,
        GLOBAL_REFERENCE,
        MULTI_LANGUAGE_PROPERTY,
        OPERATION,
        PROPERTY,
        RANGE,
        REFERENCE_ELEMENT,
        RELATIONSHIP_ELEMENT,
        SUBMODEL,
        SUBMODEL_ELEMENT,
        SUBMODEL_ELEMENT_COLLECTION,
        SUBMODEL_REF,
        VIEW,
    ];
}

/// Canonical spelling of the two modeling kinds.
pub mod modeling_kinds {
    pub const INSTANCE: &str = "Instance";
    pub const TEMPLATE: &str = "Template";
}

/// idShort assigned by the validator's auto-fix when an idShort is blank.
pub const PLACEHOLDER_ID_SHORT: &str = "PLACEHOLDER";

/// Prefix of identifiers produced by [`Identifier::generate`](super::Identifier::generate).
pub const GENERATED_ID_PREFIX: &str = "urn:uuid:";
