//! Mutation API for [`Environment`].
//!
//! Trees are built top-down: a node is created bare, then attached with
//! [`Environment::add_child`] / [`Environment::insert_child`], which set the
//! parent link and append to the right ordered list. idShort uniqueness is
//! never enforced here; see
//! [`Environment::check_id_short_is_unique`](super::Environment::check_id_short_is_unique).
//!
//! ## Example
//!
//! ```
//! use aas::env::Environment;
//! use aas::model::{Submodel, SubmodelElement};
//!
//! let mut env = Environment::new();
//! let sm = env.add_submodel(Submodel::new("urn:sm:1", "SM1")).unwrap();
//! let prop = env
//!     .add_element(sm, SubmodelElement::property("Temperature", "double", "42.5"))
//!     .unwrap();
//! assert_eq!(env.get(prop).unwrap().parent(), Some(sm));
//! ```

use smol_str::SmolStr;

use super::{Environment, ModelError};
use crate::base::{Change, Identifier};
use crate::model::{
    AdministrationShell, ConceptDescription, Node, NodeId, Placement, Submodel, SubmodelElement,
    variant_tag,
};

impl Environment {
    // ── Roots ───────────────────────────────────────────────────────

    /// Add a shell. Fails with `Duplicate` if a shell with the same id exists.
    pub fn add_shell(&mut self, shell: AdministrationShell) -> Result<NodeId, ModelError> {
        if self.find_shell(shell.id()).is_some() {
            tracing::warn!("rejecting duplicate shell id {}", shell.id());
            return Err(ModelError::duplicate("AssetAdministrationShell", shell.id().as_str()));
        }
        let id = self.attach_root(shell.into())?;
        self.shells.push(id);
        Ok(id)
    }

    /// Add a submodel. Fails with `Duplicate` if a submodel with the same
    /// id exists.
    pub fn add_submodel(&mut self, submodel: Submodel) -> Result<NodeId, ModelError> {
        if self.find_submodel(submodel.id()).is_some() {
            tracing::warn!("rejecting duplicate submodel id {}", submodel.id());
            return Err(ModelError::duplicate("Submodel", submodel.id().as_str()));
        }
        if !submodel.submodel_elements.is_empty() {
            return Err(ModelError::Prepopulated("Submodel"));
        }
        let id = self.attach_root(submodel.into())?;
        self.submodels.push(id);
        Ok(id)
    }

    /// Add a concept description. Fails with `Duplicate` if one with the
    /// same id exists.
    pub fn add_concept_description(
        &mut self,
        cd: ConceptDescription,
    ) -> Result<NodeId, ModelError> {
        if self.find_concept_description(cd.id()).is_some() {
            tracing::warn!("rejecting duplicate concept description id {}", cd.id());
            return Err(ModelError::duplicate("ConceptDescription", cd.id().as_str()));
        }
        let id = self.attach_root(cd.into())?;
        self.concept_descriptions.push(id);
        Ok(id)
    }

    /// Add a submodel and reference it from `shell`.
    pub fn add_submodel_to_shell(
        &mut self,
        shell: NodeId,
        submodel: Submodel,
    ) -> Result<NodeId, ModelError> {
        if !matches!(self.get(shell), Some(Node::Shell(_))) {
            return Err(ModelError::UnknownNode(shell));
        }
        let sm_id = submodel.id().clone();
        let id = self.add_submodel(submodel)?;
        if let Some(Node::Shell(s)) = self.get_mut(shell) {
            if s.add_submodel_ref(&sm_id) {
                s.identifiable.referable.diary.record(Change::Modified);
            }
        }
        Ok(id)
    }

    /// Detach a root Identifiable from its collection.
    ///
    /// Like [`Environment::remove_child`], the arena slot stays allocated.
    pub fn remove_root(&mut self, id: NodeId) -> bool {
        let removed = [
            &mut self.shells,
            &mut self.submodels,
            &mut self.concept_descriptions,
        ]
        .into_iter()
        .any(|list| crate::model::container::remove_from(list, id));
        if removed {
            if let Some(node) = self.get_mut(id) {
                node.referable_mut().diary.record(Change::Removed);
            }
            tracing::debug!("removed root {id}");
        }
        removed
    }

    fn attach_root(&mut self, mut node: Node) -> Result<NodeId, ModelError> {
        node.referable_mut().diary.record(Change::Created);
        let id = self.alloc(node)?;
        tracing::debug!("added root {id}");
        Ok(id)
    }

    // ── Children ────────────────────────────────────────────────────

    /// Append `element` to the default child list of `parent`.
    pub fn add_element(
        &mut self,
        parent: NodeId,
        element: SubmodelElement,
    ) -> Result<NodeId, ModelError> {
        self.add_child(parent, element, Placement::Default)
    }

    /// Append `element` to the list of `parent` chosen by `placement`,
    /// setting its parent link.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        element: SubmodelElement,
        placement: Placement,
    ) -> Result<NodeId, ModelError> {
        self.insert_child_at(parent, None, element, placement)
    }

    /// Insert `element` at `index` of the list of `parent` chosen by
    /// `placement`. An index past the end appends.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        element: SubmodelElement,
        placement: Placement,
    ) -> Result<NodeId, ModelError> {
        self.insert_child_at(parent, Some(index), element, placement)
    }

    fn insert_child_at(
        &mut self,
        parent: NodeId,
        index: Option<usize>,
        mut element: SubmodelElement,
        placement: Placement,
    ) -> Result<NodeId, ModelError> {
        let parent_node = self.get(parent).ok_or(ModelError::UnknownNode(parent))?;
        let parent_tag = variant_tag(parent_node);
        let container = parent_node.as_container().ok_or(ModelError::NotAContainer {
            tag: parent_tag,
        })?;
        let kind = element.element_kind();
        if !container.accepts(kind, placement) {
            return Err(ModelError::Rejected {
                parent: parent_tag,
                child: kind.tag(),
            });
        }
        if element
            .value
            .as_container()
            .is_some_and(|c| c.child_count() > 0)
        {
            return Err(ModelError::Prepopulated(kind.tag()));
        }

        element.referable.parent = Some(parent);
        element.referable.diary.record(Change::Created);
        let child = self.alloc(element.into())?;

        if let Some(node) = self.get_mut(parent) {
            if let Some(container) = node.as_container_mut() {
                container.insert_child(child, placement, index);
            }
            node.referable_mut().diary.record(Change::Modified);
        }
        tracing::debug!("added {} {child} under {parent_tag} {parent}", kind.tag());
        Ok(child)
    }

    /// Detach `child` from `parent`'s lists.
    ///
    /// The child's parent link is left as it was and its arena slot stays
    /// allocated; callers must not rely on `parent()` of a removed node.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        let removed = self
            .get_mut(parent)
            .and_then(Node::as_container_mut)
            .is_some_and(|c| c.remove_child(child));
        if removed {
            if let Some(node) = self.get_mut(parent) {
                node.referable_mut().diary.record(Change::Modified);
            }
            if let Some(node) = self.get_mut(child) {
                node.referable_mut().diary.record(Change::Removed);
            }
            tracing::debug!("removed {child} from {parent}");
        }
        removed
    }

    // ── Attributes ──────────────────────────────────────────────────

    /// Set the idShort of any node.
    pub fn set_id_short(
        &mut self,
        id: NodeId,
        id_short: impl Into<SmolStr>,
    ) -> Result<(), ModelError> {
        let node = self.get_mut(id).ok_or(ModelError::UnknownNode(id))?;
        let referable = node.referable_mut();
        referable.id_short = id_short.into();
        referable.diary.record(Change::Modified);
        Ok(())
    }

    /// Rename a concept description and rewrite every element semantic id
    /// that pointed at the old id.
    ///
    /// Returns the number of rewritten semantic ids. Fails with `Duplicate`
    /// (and changes nothing) if `new_id` is already taken.
    pub fn rename_concept_description(
        &mut self,
        old_id: &Identifier,
        new_id: impl Into<Identifier>,
    ) -> Result<usize, ModelError> {
        let new_id = new_id.into();
        if self.find_concept_description(&new_id).is_some() {
            return Err(ModelError::duplicate("ConceptDescription", new_id.as_str()));
        }
        let cd = self
            .find_concept_description(old_id)
            .ok_or_else(|| ModelError::not_found(old_id.as_str()))?;
        self.rename_identifiable(cd, &new_id);

        let referrers: Vec<NodeId> = self
            .referables()
            .filter(|id| {
                self.element(*id)
                    .and_then(|e| e.semantic_id.as_ref())
                    .is_some_and(|sid| sid.refers_to(old_id))
            })
            .collect();

        let mut rewritten = 0;
        for id in referrers {
            if let Some(element) = self.element_mut(id) {
                if let Some(sid) = element.semantic_id.as_mut() {
                    sid.0.rewrite_value(old_id.as_str(), new_id.as_str());
                    element.referable.diary.record(Change::Modified);
                    rewritten += 1;
                }
            }
        }
        tracing::debug!("renamed concept description {old_id} -> {new_id}, {rewritten} semantic ids");
        Ok(rewritten)
    }

    /// Rename a submodel and rewrite every shell reference that pointed at
    /// the old id.
    ///
    /// Returns the number of rewritten references. Fails with `Duplicate`
    /// (and changes nothing) if `new_id` is already taken.
    pub fn rename_submodel(
        &mut self,
        old_id: &Identifier,
        new_id: impl Into<Identifier>,
    ) -> Result<usize, ModelError> {
        let new_id = new_id.into();
        if self.find_submodel(&new_id).is_some() {
            return Err(ModelError::duplicate("Submodel", new_id.as_str()));
        }
        let sm = self
            .find_submodel(old_id)
            .ok_or_else(|| ModelError::not_found(old_id.as_str()))?;
        self.rename_identifiable(sm, &new_id);

        let mut rewritten = 0;
        let shells = self.shells.clone();
        for shell in shells {
            if let Some(Node::Shell(s)) = self.get_mut(shell) {
                let mut touched = false;
                for r in s
                    .submodel_refs
                    .iter_mut()
                    .filter(|r| r.submodel_id() == Some(old_id.as_str()))
                {
                    if r.set_submodel_id(new_id.as_str()) {
                        rewritten += 1;
                        touched = true;
                    }
                }
                if touched {
                    s.identifiable.referable.diary.record(Change::Modified);
                }
            }
        }
        tracing::debug!("renamed submodel {old_id} -> {new_id}, {rewritten} shell references");
        Ok(rewritten)
    }

    fn rename_identifiable(&mut self, id: NodeId, new_id: &Identifier) {
        if let Some(identifiable) = self.get_mut(id).and_then(Node::identifiable_mut) {
            identifiable.id = new_id.clone();
            identifiable.referable.diary.record(Change::Modified);
        }
    }
}
