//! Validation records: severity, source node, message and optional fix.

use std::sync::Arc;

use smol_str::SmolStr;

use crate::model::{KeyKind, ModelingKind, NodeId};

// ============================================================================
// RECORD TYPES
// ============================================================================

/// Severity level of a validation record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Hint,
    Warning,
    SpecViolation,
    SchemaViolation,
}

impl Severity {
    /// Returns true for the two violation levels.
    pub fn is_violation(&self) -> bool {
        matches!(self, Severity::SpecViolation | Severity::SchemaViolation)
    }
}

/// A repair that `auto_fix` can apply to a record's source node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AutoFix {
    /// Replace the idShort.
    SetIdShort(SmolStr),
    /// Replace the modeling kind.
    SetModelingKind(ModelingKind),
    /// Drop the description entirely.
    ClearDescription,
    /// Rewrite the kind of the semantic id key at `index`.
    SetSemanticKeyKind { index: usize, kind: KeyKind },
}

/// One finding of the validator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationRecord {
    pub severity: Severity,
    /// The node the finding is about.
    pub source: NodeId,
    pub code: &'static str,
    pub message: Arc<str>,
    pub fix: Option<AutoFix>,
}

impl ValidationRecord {
    pub fn new(
        severity: Severity,
        source: NodeId,
        code: &'static str,
        message: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            severity,
            source,
            code,
            message: message.into(),
            fix: None,
        }
    }

    /// Attach a fix.
    pub fn with_fix(mut self, fix: AutoFix) -> Self {
        self.fix = Some(fix);
        self
    }
}

impl std::fmt::Display for ValidationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}[{}] {}: {}", self.severity, self.code, self.source, self.message)
    }
}

// ============================================================================
// RECORD CODES
// ============================================================================

/// Stable codes for validation records.
///
/// - **V0001-V0099**: violations
/// - **W0001-W0099**: warnings
/// - **H0001-H0099**: hints
pub mod codes {
    /// idShort is empty or whitespace.
    pub const BLANK_ID_SHORT: &str = "V0001";
    /// Modeling kind is neither Template nor Instance.
    pub const INVALID_MODELING_KIND: &str = "V0002";
    /// Description present without any language string.
    pub const EMPTY_DESCRIPTION: &str = "V0003";
    /// semanticId uses a Key kind outside the vocabulary.
    pub const UNKNOWN_SEMANTIC_KEY_KIND: &str = "V0004";

    /// Modeling kind spelled with non-canonical casing.
    pub const MODELING_KIND_CASING: &str = "W0001";

    /// Sibling shares an idShort.
    pub const DUPLICATE_ID_SHORT: &str = "H0001";
}

// ============================================================================
// RECORD COLLECTOR
// ============================================================================

/// Collects records during a validation pass.
#[derive(Clone, Debug, Default)]
pub struct RecordCollector {
    records: Vec<ValidationRecord>,
}

impl RecordCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: ValidationRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ValidationRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ValidationRecord> {
        self.records
    }

    /// Number of records at exactly `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.records.iter().filter(|r| r.severity == severity).count()
    }

    pub fn has_violations(&self) -> bool {
        self.records.iter().any(|r| r.severity.is_violation())
    }
}
