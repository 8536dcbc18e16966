use smol_str::SmolStr;

use crate::base::constants::PLACEHOLDER_ID_SHORT;

/// Options controlling a validation pass.
#[derive(Debug, Clone)]
pub struct ValidationOptions {
    /// idShort assigned by the blank-idShort fix.
    pub placeholder_id_short: SmolStr,
    /// Check semanticId keys against the Key-kind vocabulary.
    pub check_semantic_id_keys: bool,
    /// Emit advisory hints for siblings sharing an idShort.
    pub report_duplicate_id_shorts: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            placeholder_id_short: SmolStr::new_static(PLACEHOLDER_ID_SHORT),
            check_semantic_id_keys: true,
            report_duplicate_id_shorts: true,
        }
    }
}

impl ValidationOptions {
    pub fn with_placeholder(mut self, id_short: impl Into<SmolStr>) -> Self {
        self.placeholder_id_short = id_short.into();
        self
    }
}
