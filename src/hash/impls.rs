//! Per-type hashable field lists.
//!
//! Field order is base before derived: Referable, then Identifiable, then
//! the type's own attributes. Child lists and the parent handle are never
//! written, which makes every hash shallow.

use super::writer::{HashWriter, Hashable};
use crate::base::{Identifier, LangStringSet};
use crate::model::{
    AdministrationShell, AdministrativeInformation, AssetInformation, AssetKind,
    ConceptDescription, ConceptDictionary, DataSpecificationContent, DataSpecificationIec61360,
    ElementValue, EmbeddedDataSpecification, EntityType, Identifiable, Key, ModelingKind, Node,
    Qualifier, Referable, Reference, ReferenceKind, SemanticId, Submodel, SubmodelElement,
};

// ── Leaf values ─────────────────────────────────────────────────────

impl Hashable for str {
    fn hash_into(&self, w: &mut HashWriter) {
        w.str(self);
    }
}

impl Hashable for Identifier {
    fn hash_into(&self, w: &mut HashWriter) {
        w.str(self.as_str());
    }
}

impl Hashable for LangStringSet {
    fn hash_into(&self, w: &mut HashWriter) {
        w.count(self.len());
        for (language, text) in self.iter() {
            w.str(language).str(text);
        }
    }
}

impl Hashable for Key {
    fn hash_into(&self, w: &mut HashWriter) {
        w.str(self.kind.as_str()).str(self.value());
    }
}

impl Hashable for Reference {
    fn hash_into(&self, w: &mut HashWriter) {
        let kind = match self.kind {
            ReferenceKind::Global => 0,
            ReferenceKind::Model => 1,
        };
        w.u8(kind).seq(&self.keys);
    }
}

impl Hashable for SemanticId {
    fn hash_into(&self, w: &mut HashWriter) {
        self.reference().hash_into(w);
    }
}

impl Hashable for ModelingKind {
    fn hash_into(&self, w: &mut HashWriter) {
        w.str(self.as_str());
    }
}

impl Hashable for Qualifier {
    fn hash_into(&self, w: &mut HashWriter) {
        w.str(&self.qualifier_type)
            .str(&self.value_type)
            .opt_str(self.value.as_deref())
            .opt(self.value_id.as_ref())
            .opt(self.semantic_id.as_ref());
    }
}

// ── Referable / Identifiable ────────────────────────────────────────

impl Hashable for Referable {
    fn hash_into(&self, w: &mut HashWriter) {
        w.str(&self.id_short)
            .opt_str(self.category.as_deref())
            .opt(self.description.as_ref());
    }
}

impl Hashable for AdministrativeInformation {
    fn hash_into(&self, w: &mut HashWriter) {
        w.opt_str(self.version.as_deref())
            .opt_str(self.revision.as_deref());
    }
}

impl Hashable for Identifiable {
    fn hash_into(&self, w: &mut HashWriter) {
        w.value(&self.referable)
            .value(&self.id)
            .opt(self.administration.as_ref());
    }
}

// ── Roots ───────────────────────────────────────────────────────────

impl Hashable for AssetInformation {
    fn hash_into(&self, w: &mut HashWriter) {
        let kind = match self.asset_kind {
            AssetKind::Type => 0,
            AssetKind::Instance => 1,
        };
        w.u8(kind).opt(self.global_asset_id.as_ref());
    }
}

impl Hashable for ConceptDictionary {
    fn hash_into(&self, w: &mut HashWriter) {
        w.str(&self.id_short).seq(&self.concept_descriptions);
    }
}

impl Hashable for AdministrationShell {
    fn hash_into(&self, w: &mut HashWriter) {
        w.value(&self.identifiable)
            .opt(self.derived_from.as_ref())
            .value(&self.asset_information)
            .seq(&self.submodel_refs)
            .seq(&self.concept_dictionaries)
            .seq(&self.data_specifications);
    }
}

impl Hashable for Submodel {
    fn hash_into(&self, w: &mut HashWriter) {
        // submodel_elements: skipped
        w.value(&self.identifiable)
            .value(&self.kind)
            .opt(self.semantic_id.as_ref())
            .seq(&self.qualifiers)
            .seq(&self.data_specifications);
    }
}

impl Hashable for DataSpecificationIec61360 {
    fn hash_into(&self, w: &mut HashWriter) {
        w.value(&self.preferred_name)
            .value(&self.short_name)
            .opt_str(self.unit.as_deref())
            .opt(self.unit_id.as_ref())
            .opt_str(self.source_of_definition.as_deref())
            .opt_str(self.symbol.as_deref())
            .opt_str(self.data_type.as_deref())
            .value(&self.definition)
            .opt_str(self.value_format.as_deref());
    }
}

impl Hashable for EmbeddedDataSpecification {
    fn hash_into(&self, w: &mut HashWriter) {
        w.value(&self.data_specification);
        match &self.content {
            DataSpecificationContent::Iec61360(content) => {
                w.u8(0).value(content);
            }
        }
    }
}

impl Hashable for ConceptDescription {
    fn hash_into(&self, w: &mut HashWriter) {
        w.value(&self.identifiable)
            .seq(&self.embedded_data_specifications)
            .seq(&self.is_case_of);
    }
}

// ── Elements ────────────────────────────────────────────────────────

impl Hashable for ElementValue {
    fn hash_into(&self, w: &mut HashWriter) {
        w.str(self.kind().tag());
        match self {
            Self::Property(p) => {
                w.str(&p.value_type)
                    .opt_str(p.value.as_deref())
                    .opt(p.value_id.as_ref());
            }
            Self::MultiLanguageProperty(p) => {
                w.value(&p.value).opt(p.value_id.as_ref());
            }
            Self::Range(r) => {
                w.str(&r.value_type)
                    .opt_str(r.min.as_deref())
                    .opt_str(r.max.as_deref());
            }
            Self::File(f) => {
                w.str(&f.mime_type).opt_str(f.value.as_deref());
            }
            Self::Blob(b) => {
                w.str(&b.mime_type).bytes(&b.value);
            }
            Self::ReferenceElement(r) => {
                w.opt(r.value.as_ref());
            }
            Self::RelationshipElement(r) => {
                w.value(&r.first).value(&r.second);
            }
            Self::AnnotatedRelationshipElement(r) => {
                // annotations: skipped
                w.value(&r.first).value(&r.second);
            }
            Self::Capability | Self::Operation(_) => {}
            Self::SubmodelElementCollection(c) => {
                w.bool(c.ordered).bool(c.allow_duplicates);
            }
            Self::Entity(e) => {
                let entity_type = match e.entity_type {
                    EntityType::CoManagedEntity => 0,
                    EntityType::SelfManagedEntity => 1,
                };
                w.u8(entity_type).opt(e.asset_ref.as_ref());
            }
            Self::BasicEvent(e) => {
                w.value(&e.observed);
            }
        }
    }
}

impl Hashable for SubmodelElement {
    fn hash_into(&self, w: &mut HashWriter) {
        w.value(&self.referable)
            .value(&self.kind)
            .opt(self.semantic_id.as_ref())
            .seq(&self.qualifiers)
            .seq(&self.data_specifications)
            .value(&self.value);
    }
}

impl Hashable for Node {
    fn hash_into(&self, w: &mut HashWriter) {
        match self {
            Self::Shell(s) => s.hash_into(w),
            Self::Submodel(s) => s.hash_into(w),
            Self::ConceptDescription(c) => c.hash_into(w),
            Self::Element(e) => e.hash_into(w),
        }
    }
}
