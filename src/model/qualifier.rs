use smol_str::SmolStr;

use super::reference::{Reference, SemanticId};

/// A typed constraint attached to a Submodel or SubmodelElement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Qualifier {
    /// Qualifier type, e.g. `"Multiplicity"`.
    pub qualifier_type: SmolStr,
    pub value_type: SmolStr,
    pub value: Option<String>,
    pub value_id: Option<Reference>,
    pub semantic_id: Option<SemanticId>,
}

impl Qualifier {
    pub fn new(qualifier_type: impl Into<SmolStr>, value: impl Into<String>) -> Self {
        Self {
            qualifier_type: qualifier_type.into(),
            value_type: SmolStr::new_static("string"),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn with_value_type(mut self, value_type: impl Into<SmolStr>) -> Self {
        self.value_type = value_type.into();
        self
    }
}
