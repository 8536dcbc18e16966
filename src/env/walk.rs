//! Generic traversal over the child-collection protocol.
//!
//! Every walk here uses an explicit work stack; the format imposes no depth
//! limit, so native recursion is avoided. Child lists are public fields, so
//! a walk yields each handle at most once even if a list points back up
//! the tree or two lists share a handle.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::Environment;
use crate::base::text::id_short_eq;
use crate::model::{Key, Node, NodeId, Reference};

/// Pre-order iterator over the nodes below a starting node.
pub struct Descendants<'a> {
    env: &'a Environment,
    stack: Vec<NodeId>,
    seen: FxHashSet<NodeId>,
}

impl<'a> Descendants<'a> {
    fn new(env: &'a Environment, stack: Vec<NodeId>, seen: FxHashSet<NodeId>) -> Self {
        Self { env, stack, seen }
    }
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        loop {
            let id = self.stack.pop()?;
            if !self.seen.insert(id) {
                tracing::trace!("[WALK] {id} already visited, skipping");
                continue;
            }
            if let Some(container) = self.env.get(id).and_then(Node::as_container) {
                let start = self.stack.len();
                self.stack.extend(container.children());
                self.stack[start..].reverse();
            }
            return Some(id);
        }
    }
}

impl Environment {
    /// Every node below `root` in pre-order, excluding `root` itself.
    pub fn descendants(&self, root: NodeId) -> Descendants<'_> {
        let mut stack = self.children(root);
        stack.reverse();
        let mut seen = FxHashSet::default();
        seen.insert(root);
        Descendants::new(self, stack, seen)
    }

    /// `root` followed by every node below it, in pre-order.
    pub fn subtree(&self, root: NodeId) -> Descendants<'_> {
        Descendants::new(self, vec![root], FxHashSet::default())
    }

    /// Every node reachable from the three root collections: shells, then
    /// each submodel with its element tree, then concept descriptions.
    pub fn referables(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.shells
            .iter()
            .copied()
            .chain(self.submodels.iter().flat_map(|sm| self.subtree(*sm)))
            .chain(self.concept_descriptions.iter().copied())
    }

    /// Whether `id` is a member of one of the three root collections.
    pub fn is_root(&self, id: NodeId) -> bool {
        self.shells.contains(&id)
            || self.submodels.contains(&id)
            || self.concept_descriptions.contains(&id)
    }

    /// The chain `[node, parent, ..., root]`, following parent links only
    /// while each parent still lists the child. `None` for detached nodes.
    pub fn ancestry(&self, node: NodeId) -> Option<Vec<NodeId>> {
        let mut chain = vec![node];
        let mut current = node;
        // Bounded by arena size; parent links cannot cycle.
        for _ in 0..=self.nodes.len() {
            if self.is_root(current) {
                return Some(chain);
            }
            let parent = self.get(current)?.parent()?;
            self.get(parent)?.as_container()?.placement_of(current)?;
            chain.push(parent);
            current = parent;
        }
        None
    }

    /// The Identifiable root a node is attached under.
    pub fn root_of(&self, node: NodeId) -> Option<NodeId> {
        self.ancestry(node)?.last().copied()
    }

    /// The model reference that resolves back to `node`:
    /// `[(RootKind)id, (ElementKind)idShort, ...]`.
    pub fn model_reference_of(&self, node: NodeId) -> Option<Reference> {
        let chain = self.ancestry(node)?;
        let mut keys = Vec::with_capacity(chain.len());
        for id in chain.iter().rev() {
            let n = self.get(*id)?;
            let key = match n.identifiable() {
                Some(identifiable) => Key::new(n.key_kind(), identifiable.id.as_str()),
                None => Key::new(n.key_kind(), n.id_short()),
            };
            keys.push(key);
        }
        Some(Reference::model(keys))
    }

    /// Dotted idShort path from below the Identifiable root down to `node`,
    /// e.g. `Coll1.P1`. Empty for a root itself.
    pub fn id_short_path(&self, node: NodeId) -> Option<String> {
        let chain = self.ancestry(node)?;
        let segments: Vec<SmolStr> = chain
            .iter()
            .rev()
            .skip(1)
            .filter_map(|id| self.get(*id).map(|n| n.referable().id_short.clone()))
            .collect();
        Some(segments.join("."))
    }

    /// Advisory uniqueness check: true if no child of `container` other
    /// than `except` already uses `id_short`.
    ///
    /// Add/Insert never call this; duplicates are structurally allowed.
    pub fn check_id_short_is_unique(
        &self,
        container: NodeId,
        id_short: &str,
        except: Option<NodeId>,
    ) -> bool {
        !self.children(container).into_iter().any(|c| {
            Some(c) != except && self.get(c).is_some_and(|n| id_short_eq(n.id_short(), id_short))
        })
    }
}
