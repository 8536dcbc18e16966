//! The child-collection / placement protocol.
//!
//! Every node kind that owns children implements [`ChildCollection`].
//! The resolver, the hasher and the validator only ever talk to this
//! trait, so they never need to know which concrete kinds own children:
//!
//! ```text
//! Submodel ───────────────────┐
//! SubmodelElementCollection ──┤
//! AnnotatedRelationshipElement┼──► ChildCollection ──► resolver / walk / validator
//! Entity ─────────────────────┤
//! Operation (3 lists) ────────┘
//! ```

use super::element::ElementKind;

// ============================================================================
// HANDLES
// ============================================================================

/// Stable handle of a node in an [`Environment`](crate::env::Environment) arena.
///
/// Handles stay valid for the lifetime of the environment; detaching a node
/// from its collection does not free its slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Handle for arena slot `index`; `None` once the arena has outgrown
    /// the `u32` handle space.
    pub(crate) fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which of a container's child lists a child lives in.
///
/// Containers with a single list only use [`Placement::Default`];
/// an Operation distinguishes its three variable lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Placement {
    #[default]
    Default,
    Input,
    Output,
    InOutput,
}

// ============================================================================
// PROTOCOL
// ============================================================================

/// Uniform access to the ordered children of a node.
pub trait ChildCollection {
    /// All children in collection order. Every call starts a fresh
    /// traversal; there is no shared cursor.
    fn children(&self) -> Box<dyn Iterator<Item = NodeId> + '_>;

    /// Which list holds `child`, or `None` if it is not a child.
    fn placement_of(&self, child: NodeId) -> Option<Placement> {
        self.children()
            .any(|c| c == child)
            .then_some(Placement::Default)
    }

    /// Whether a child of `kind` may be placed at `placement`.
    fn accepts(&self, _kind: ElementKind, placement: Placement) -> bool {
        placement == Placement::Default
    }

    /// Insert a child handle into the list chosen by `placement`, at
    /// `index` or at the end. Callers check [`ChildCollection::accepts`]
    /// first and own the parent-link bookkeeping.
    fn insert_child(&mut self, child: NodeId, placement: Placement, index: Option<usize>);

    /// Remove a child handle from whichever list holds it.
    fn remove_child(&mut self, child: NodeId) -> bool;

    fn child_count(&self) -> usize {
        self.children().count()
    }
}

/// Insert into a single ordered list, clamping `index` to the list end.
pub(crate) fn insert_into(list: &mut Vec<NodeId>, child: NodeId, index: Option<usize>) {
    match index {
        Some(i) if i < list.len() => list.insert(i, child),
        _ => list.push(child),
    }
}

/// Remove the first occurrence of `child` from a list.
pub(crate) fn remove_from(list: &mut Vec<NodeId>, child: NodeId) -> bool {
    match list.iter().position(|c| *c == child) {
        Some(pos) => {
            list.remove(pos);
            true
        }
        None => false,
    }
}
