//! Lookups and reference resolution.
//!
//! [`Environment::find_referable`] walks a key list against the
//! environment:
//!
//! 1. The first key selects exactly one root collection by its kind
//!    (shells, asset information, submodels, concept descriptions). There
//!    is no branching search across collections.
//! 2. Under a shell, a `Submodel`/`SubmodelRef` key follows the shell's
//!    submodel references into the submodel collection.
//! 3. Every further key is matched by idShort (trimmed, case-insensitive)
//!    against the children of the current container, first match wins.
//!
//! When a key does not match, non-exact resolution returns the deepest
//! node reached so far; exact resolution returns `None`.

use super::Environment;
use crate::base::Identifier;
use crate::base::text::id_short_eq;
use crate::model::{Key, KeyKind, Node, NodeId, Reference, SemanticId};

/// Which roots were traversed on the way to a resolved node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RootInfo {
    pub shell: Option<NodeId>,
    /// Asset id the walk entered through, for `AssetInformation` roots.
    pub asset_id: Option<Identifier>,
    pub submodel: Option<NodeId>,
    /// Number of keys consumed to reach the innermost root.
    pub keys_consumed: usize,
}

/// A resolved node plus the roots the walk went through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub node: NodeId,
    pub root: RootInfo,
    /// True when non-exact resolution stopped before the last key.
    pub partial: bool,
}

impl Environment {
    // ── Identifiable lookups ────────────────────────────────────────

    /// Find a shell by id.
    pub fn find_shell(&self, id: &Identifier) -> Option<NodeId> {
        self.shells().find(|(_, s)| s.id() == id).map(|(n, _)| n)
    }

    /// Find a submodel by id.
    pub fn find_submodel(&self, id: &Identifier) -> Option<NodeId> {
        self.submodels().find(|(_, s)| s.id() == id).map(|(n, _)| n)
    }

    /// Find a concept description by id.
    pub fn find_concept_description(&self, id: &Identifier) -> Option<NodeId> {
        self.concept_descriptions()
            .find(|(_, c)| c.id() == id)
            .map(|(n, _)| n)
    }

    /// First shell whose idShort matches.
    pub fn find_shell_by_id_short(&self, id_short: &str) -> Option<NodeId> {
        self.first_by_id_short(&self.shells, id_short)
    }

    /// First submodel whose idShort matches.
    pub fn find_submodel_by_id_short(&self, id_short: &str) -> Option<NodeId> {
        self.first_by_id_short(&self.submodels, id_short)
    }

    /// First concept description whose idShort matches.
    pub fn find_concept_description_by_id_short(&self, id_short: &str) -> Option<NodeId> {
        self.first_by_id_short(&self.concept_descriptions, id_short)
    }

    /// First shell describing the asset with `asset_id`.
    pub fn find_shell_by_asset(&self, asset_id: &str) -> Option<NodeId> {
        self.shells()
            .find(|(_, s)| s.describes_asset(asset_id))
            .map(|(n, _)| n)
    }

    /// The concept description a semantic id points at. Matching is by id
    /// value only.
    pub fn find_concept_description_by_semantic_id(
        &self,
        semantic_id: &SemanticId,
    ) -> Option<NodeId> {
        self.concept_descriptions()
            .find(|(_, c)| semantic_id.refers_to(c.id()))
            .map(|(n, _)| n)
    }

    /// Resolve a submodel reference (as held by a shell) to the submodel.
    /// See [`Reference::submodel_id`] for the accepted shapes.
    pub fn find_submodel_by_ref(&self, reference: &Reference) -> Option<NodeId> {
        self.find_submodel(&Identifier::new(reference.submodel_id()?))
    }

    /// Submodels referenced by a shell, in reference order. Dangling
    /// references are skipped.
    pub fn submodels_of_shell(&self, shell: NodeId) -> Vec<NodeId> {
        match self.get(shell) {
            Some(Node::Shell(s)) => s
                .submodel_refs
                .iter()
                .filter_map(|r| self.find_submodel_by_ref(r))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// First child of `container` whose idShort matches.
    pub fn find_child_by_id_short(&self, container: NodeId, id_short: &str) -> Option<NodeId> {
        self.get(container)?
            .as_container()?
            .children()
            .find(|c| self.get(*c).is_some_and(|n| id_short_eq(n.id_short(), id_short)))
    }

    fn first_by_id_short(&self, ids: &[NodeId], id_short: &str) -> Option<NodeId> {
        ids.iter()
            .copied()
            .find(|id| self.get(*id).is_some_and(|n| id_short_eq(n.id_short(), id_short)))
    }

    // ── Reference resolution ────────────────────────────────────────

    /// Resolve a key list to a node.
    ///
    /// With `exact_match == false`, a key that does not match yields the
    /// deepest node resolved so far instead of `None`.
    pub fn find_referable(&self, keys: &[Key], exact_match: bool) -> Option<NodeId> {
        self.find_referable_with_root(keys, exact_match)
            .map(|r| r.node)
    }

    /// Resolve a reference's keys. See [`Environment::find_referable`].
    pub fn resolve(&self, reference: &Reference, exact_match: bool) -> Option<NodeId> {
        self.find_referable(&reference.keys, exact_match)
    }

    /// Like [`Environment::find_referable`], also reporting which roots
    /// were traversed.
    pub fn find_referable_with_root(
        &self,
        keys: &[Key],
        exact_match: bool,
    ) -> Option<Resolution> {
        let (first, rest) = keys.split_first()?;
        let mut root = RootInfo {
            keys_consumed: 1,
            ..RootInfo::default()
        };
        tracing::trace!("[RESOLVE] root key {first}, {} more", rest.len());

        match first.kind {
            KeyKind::AssetAdministrationShell => {
                let shell = self.find_shell(&Identifier::new(first.value.clone()))?;
                root.shell = Some(shell);
                self.resolve_under_shell(shell, rest, exact_match, root)
            }
            KeyKind::AssetInformation => {
                let shell = self.find_shell_by_asset(first.value())?;
                root.shell = Some(shell);
                root.asset_id = Some(Identifier::new(first.value.clone()));
                self.resolve_under_shell(shell, rest, exact_match, root)
            }
            KeyKind::Submodel | KeyKind::SubmodelRef => {
                let sm = self.find_submodel(&Identifier::new(first.value.clone()))?;
                root.submodel = Some(sm);
                self.descend(sm, rest, exact_match, root)
            }
            KeyKind::ConceptDescription => {
                if !rest.is_empty() {
                    tracing::trace!("[RESOLVE] concept descriptions own no children");
                    return None;
                }
                let cd = self.find_concept_description(&Identifier::new(first.value.clone()))?;
                Some(Resolution {
                    node: cd,
                    root,
                    partial: false,
                })
            }
            _ => {
                tracing::trace!("[RESOLVE] {} is not a resolvable root", first.kind);
                None
            }
        }
    }

    fn resolve_under_shell(
        &self,
        shell: NodeId,
        keys: &[Key],
        exact_match: bool,
        mut root: RootInfo,
    ) -> Option<Resolution> {
        let Some((next, rest)) = keys.split_first() else {
            return Some(Resolution {
                node: shell,
                root,
                partial: false,
            });
        };

        let submodel = next
            .kind
            .is_submodel()
            .then(|| self.shell_submodel(shell, next.value()))
            .flatten();

        match submodel {
            Some(sm) => {
                root.submodel = Some(sm);
                root.keys_consumed += 1;
                self.descend(sm, rest, exact_match, root)
            }
            None if exact_match => {
                tracing::trace!("[RESOLVE] {next} not reachable from shell {shell}");
                None
            }
            None => Some(Resolution {
                node: shell,
                root,
                partial: true,
            }),
        }
    }

    /// The submodel with id `value`, if `shell` references it.
    fn shell_submodel(&self, shell: NodeId, value: &str) -> Option<NodeId> {
        let reference = self
            .get(shell)?
            .as_shell()?
            .submodel_ref_for(&Identifier::new(value))?;
        self.find_submodel_by_ref(reference)
    }

    /// Walk idShort keys down from `start`.
    fn descend(
        &self,
        start: NodeId,
        keys: &[Key],
        exact_match: bool,
        root: RootInfo,
    ) -> Option<Resolution> {
        let mut current = start;
        for (i, key) in keys.iter().enumerate() {
            // A leaf reached with keys left over is a dead end, exact or not.
            self.get(current)?.as_container()?;

            match self.find_child_by_id_short(current, key.value()) {
                Some(child) => {
                    tracing::trace!("[RESOLVE] {key} -> {child}");
                    current = child;
                }
                None if exact_match => {
                    tracing::trace!("[RESOLVE] {key} not found under {current}");
                    return None;
                }
                None => {
                    tracing::trace!(
                        "[RESOLVE] {key} not found, stopping at {current} after {i} keys"
                    );
                    return Some(Resolution {
                        node: current,
                        root,
                        partial: true,
                    });
                }
            }
        }
        Some(Resolution {
            node: current,
            root,
            partial: false,
        })
    }
}
