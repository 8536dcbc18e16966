//! Structural rules applied to every reachable Referable.

use rustc_hash::FxHashMap;

use super::diagnostics::{AutoFix, RecordCollector, Severity, ValidationRecord, codes};
use super::options::ValidationOptions;
use crate::base::text::{fold_id_short, is_blank};
use crate::env::Environment;
use crate::model::{KeyKind, ModelingKind, Node, NodeId};

/// Per-container idShort counts, built the first time a child of that
/// container is checked and reused for its siblings.
pub(crate) struct SiblingIdShorts<'a> {
    env: &'a Environment,
    counts: FxHashMap<NodeId, FxHashMap<String, usize>>,
}

impl<'a> SiblingIdShorts<'a> {
    pub(crate) fn new(env: &'a Environment) -> Self {
        Self {
            env,
            counts: FxHashMap::default(),
        }
    }

    /// Whether more than one child of `container` uses `id_short`.
    fn is_shared(&mut self, container: NodeId, id_short: &str) -> bool {
        let env = self.env;
        let counts = self.counts.entry(container).or_insert_with(|| {
            let mut counts = FxHashMap::default();
            for child in env.children(container) {
                if let Some(n) = env.get(child) {
                    *counts.entry(fold_id_short(n.id_short())).or_insert(0) += 1;
                }
            }
            counts
        });
        counts.get(&fold_id_short(id_short)).is_some_and(|n| *n > 1)
    }
}

/// Run every rule against one node.
pub(crate) fn check_node(
    siblings: &mut SiblingIdShorts<'_>,
    id: NodeId,
    node: &Node,
    options: &ValidationOptions,
    out: &mut RecordCollector,
) {
    check_id_short(id, node, options, out);
    check_modeling_kind(id, node, out);
    check_description(id, node, out);
    if options.check_semantic_id_keys {
        check_semantic_id(id, node, out);
    }
    if options.report_duplicate_id_shorts {
        check_sibling_id_shorts(siblings, id, node, out);
    }
}

fn check_id_short(id: NodeId, node: &Node, options: &ValidationOptions, out: &mut RecordCollector) {
    if is_blank(node.id_short()) {
        out.add(
            ValidationRecord::new(
                Severity::SpecViolation,
                id,
                codes::BLANK_ID_SHORT,
                format!("{} has an empty idShort", node.key_kind()),
            )
            .with_fix(AutoFix::SetIdShort(options.placeholder_id_short.clone())),
        );
    }
}

fn check_modeling_kind(id: NodeId, node: &Node, out: &mut RecordCollector) {
    let Some(kind) = node.modeling_kind() else {
        return;
    };
    match kind.canonical() {
        None => out.add(
            ValidationRecord::new(
                Severity::SchemaViolation,
                id,
                codes::INVALID_MODELING_KIND,
                format!("'{}' is not a modeling kind (Template, Instance)", kind.as_str()),
            )
            .with_fix(AutoFix::SetModelingKind(ModelingKind::instance())),
        ),
        Some(canonical) if canonical != kind.as_str() => out.add(
            ValidationRecord::new(
                Severity::Warning,
                id,
                codes::MODELING_KIND_CASING,
                format!("modeling kind '{}' should be spelled '{}'", kind.as_str(), canonical),
            )
            .with_fix(AutoFix::SetModelingKind(ModelingKind::from_raw(canonical))),
        ),
        Some(_) => {}
    }
}

fn check_description(id: NodeId, node: &Node, out: &mut RecordCollector) {
    if node.referable().description.as_ref().is_some_and(|d| d.is_empty()) {
        out.add(
            ValidationRecord::new(
                Severity::SchemaViolation,
                id,
                codes::EMPTY_DESCRIPTION,
                "description has no language strings",
            )
            .with_fix(AutoFix::ClearDescription),
        );
    }
}

fn check_semantic_id(id: NodeId, node: &Node, out: &mut RecordCollector) {
    let Some(semantic_id) = node.semantic_id() else {
        return;
    };
    for (index, key) in semantic_id.keys().iter().enumerate() {
        if key.kind.is_known() {
            continue;
        }
        out.add(
            ValidationRecord::new(
                Severity::SchemaViolation,
                id,
                codes::UNKNOWN_SEMANTIC_KEY_KIND,
                format!("semanticId key {} uses unknown kind '{}'", index, key.kind),
            )
            .with_fix(AutoFix::SetSemanticKeyKind {
                index,
                kind: KeyKind::GlobalReference,
            }),
        );
    }
}

/// Advisory only: Add/Insert accept duplicates, so this never carries a fix.
fn check_sibling_id_shorts(
    siblings: &mut SiblingIdShorts<'_>,
    id: NodeId,
    node: &Node,
    out: &mut RecordCollector,
) {
    let Some(parent) = node.parent() else {
        return;
    };
    if is_blank(node.id_short()) || !siblings.is_shared(parent, node.id_short()) {
        return;
    }
    out.add(ValidationRecord::new(
        Severity::Hint,
        id,
        codes::DUPLICATE_ID_SHORT,
        format!("idShort '{}' is used by a sibling", node.id_short()),
    ));
}
