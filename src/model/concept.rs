//! Concept descriptions and their embedded data specifications.

use smol_str::SmolStr;

use super::reference::Reference;
use super::referable::Identifiable;
use crate::base::{Identifier, LangStringSet};

/// IEC 61360 content: the semantic definition of a property.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSpecificationIec61360 {
    pub preferred_name: LangStringSet,
    pub short_name: LangStringSet,
    pub unit: Option<SmolStr>,
    pub unit_id: Option<Reference>,
    pub source_of_definition: Option<String>,
    pub symbol: Option<SmolStr>,
    pub data_type: Option<SmolStr>,
    pub definition: LangStringSet,
    pub value_format: Option<SmolStr>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSpecificationContent {
    Iec61360(DataSpecificationIec61360),
}

/// A data specification template reference plus its content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbeddedDataSpecification {
    pub data_specification: Reference,
    pub content: DataSpecificationContent,
}

impl EmbeddedDataSpecification {
    /// Global id of the IEC 61360 data specification template.
    pub const IEC61360_TEMPLATE: &'static str =
        "http://admin-shell.io/DataSpecificationTemplates/DataSpecificationIEC61360/2/0";

    pub fn iec61360(content: DataSpecificationIec61360) -> Self {
        Self {
            data_specification: Reference::global(Self::IEC61360_TEMPLATE),
            content: DataSpecificationContent::Iec61360(content),
        }
    }
}

/// External semantic definition an element can point at via its semantic id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConceptDescription {
    pub identifiable: Identifiable,
    pub embedded_data_specifications: Vec<EmbeddedDataSpecification>,
    pub is_case_of: Vec<Reference>,
}

impl ConceptDescription {
    pub fn new(id: impl Into<Identifier>, id_short: impl Into<SmolStr>) -> Self {
        Self {
            identifiable: Identifiable::new(id, id_short),
            ..Self::default()
        }
    }

    pub fn with_iec61360(mut self, content: DataSpecificationIec61360) -> Self {
        self.embedded_data_specifications
            .push(EmbeddedDataSpecification::iec61360(content));
        self
    }

    pub fn id(&self) -> &Identifier {
        &self.identifiable.id
    }

    /// The IEC 61360 content block. Only the first one is meaningful;
    /// later duplicates are ignored.
    pub fn iec61360_content(&self) -> Option<&DataSpecificationIec61360> {
        self.embedded_data_specifications
            .iter()
            .map(|eds| match &eds.content {
                DataSpecificationContent::Iec61360(c) => c,
            })
            .next()
    }
}
