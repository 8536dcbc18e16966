//! Applying [`AutoFix`] repairs.

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use super::diagnostics::{AutoFix, ValidationRecord};
use crate::base::Change;
use crate::env::{Environment, ModelError};
use crate::model::NodeId;

impl AutoFix {
    /// Apply this fix to `source`.
    pub fn apply(&self, env: &mut Environment, source: NodeId) -> Result<(), ModelError> {
        let node = env.get_mut(source).ok_or(ModelError::UnknownNode(source))?;
        match self {
            AutoFix::SetIdShort(id_short) => {
                node.referable_mut().id_short = id_short.clone();
            }
            AutoFix::SetModelingKind(kind) => {
                let slot = node
                    .modeling_kind_mut()
                    .ok_or_else(|| ModelError::not_found(format!("modeling kind of {source}")))?;
                *slot = kind.clone();
            }
            AutoFix::ClearDescription => {
                node.referable_mut().description = None;
            }
            AutoFix::SetSemanticKeyKind { index, kind } => {
                let key = node
                    .semantic_id_mut()
                    .and_then(|sid| sid.0.keys.get_mut(*index))
                    .ok_or_else(|| {
                        ModelError::not_found(format!("semanticId key {index} of {source}"))
                    })?;
                key.kind = kind.clone();
            }
        }
        node.referable_mut().diary.record(Change::Modified);
        Ok(())
    }
}

/// Apply the fix of every record whose source is still reachable.
///
/// Reachability is recomputed once up front, so fixes aimed at nodes that
/// were detached since validation are skipped. A failing fix is logged and
/// the batch continues. Returns the number of fixes applied.
pub fn auto_fix(env: &mut Environment, records: &[ValidationRecord]) -> usize {
    let present: FxHashSet<NodeId> = env.referables().collect();
    let mut applied = 0;

    for record in records {
        let Some(fix) = &record.fix else {
            continue;
        };
        if !present.contains(&record.source) {
            debug!("[FIX] skip {}: {} no longer reachable", record.code, record.source);
            continue;
        }
        match fix.apply(env, record.source) {
            Ok(()) => {
                debug!("[FIX] {} applied to {}", record.code, record.source);
                applied += 1;
            }
            Err(err) => warn!("[FIX] {} on {} failed: {}", record.code, record.source, err),
        }
    }

    applied
}
