//! # Scene Entity — One Slot per Component Kind
//!
//! The entity is a fixed arena: one `Option<Box<dyn SceneComponent>>` slot
//! per [`ComponentKind`], plus an insertion-order list for predictable UI
//! display. Lookup is an array index — no hashing, no traversal of live
//! object graphs.
//!
//! The entity itself is deliberately dumb storage. Lifecycle hooks,
//! dependency resolution, and notifications all live in the composer, which
//! is the only code that mutates the slots.

use crate::ecs::component::{SceneComponent, TypedComponent};
use crate::ecs::kind::ComponentKind;

/// The single composition root owning all attached components for a scene.
pub struct SceneEntity {
    slots: Vec<Option<Box<dyn SceneComponent>>>,
    order: Vec<ComponentKind>,
}

impl SceneEntity {
    /// An entity with every slot empty.
    pub fn new() -> Self {
        Self {
            slots: (0..ComponentKind::COUNT).map(|_| None).collect(),
            order: Vec::new(),
        }
    }

    /// Whether a component of the given kind is attached.
    pub fn has(&self, kind: ComponentKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    /// Number of attached components.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no components are attached.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Untyped lookup by kind. Pure read, no side effects.
    pub fn get(&self, kind: ComponentKind) -> Option<&dyn SceneComponent> {
        self.slots[kind.index()].as_deref()
    }

    /// Untyped mutable lookup by kind.
    pub fn get_mut(&mut self, kind: ComponentKind) -> Option<&mut (dyn SceneComponent + 'static)> {
        self.slots[kind.index()].as_deref_mut()
    }

    /// Typed lookup: `entity.component::<FrictionComponent>()`.
    pub fn component<T: TypedComponent>(&self) -> Option<&T> {
        self.get(T::KIND)?.as_any().downcast_ref::<T>()
    }

    /// Typed mutable lookup.
    pub fn component_mut<T: TypedComponent>(&mut self) -> Option<&mut T> {
        self.get_mut(T::KIND)?.as_any_mut().downcast_mut::<T>()
    }

    /// Attached kinds in insertion order (replacements re-append).
    ///
    /// Returned as a snapshot so callers can mutate while iterating.
    pub fn kinds(&self) -> Vec<ComponentKind> {
        self.order.clone()
    }

    /// Kinds ordered for display: priority components first, then the rest,
    /// each group in insertion order.
    pub fn kinds_for_display(&self) -> Vec<ComponentKind> {
        let mut kinds: Vec<ComponentKind> = self.order.iter().copied().filter(|k| k.priority()).collect();
        kinds.extend(self.order.iter().copied().filter(|k| !k.priority()));
        kinds
    }

    /// Whether every declared dependency of `kind` is currently attached.
    ///
    /// A kind with no declared dependencies is trivially compliant. Checked
    /// live on every call — nothing is cached, so a dependency attached
    /// later is picked up by the next check.
    pub fn check_compliance(&self, kind: ComponentKind) -> bool {
        kind.dependencies().iter().all(|dep| self.has(*dep))
    }

    /// The declared dependencies of `kind` that are currently missing.
    pub fn missing_dependencies(&self, kind: ComponentKind) -> Vec<ComponentKind> {
        kind.dependencies()
            .iter()
            .copied()
            .filter(|dep| !self.has(*dep))
            .collect()
    }

    /// Insert a component into its kind's slot, appending to the listing
    /// order. The caller (the composer) is responsible for detaching any
    /// previous occupant first.
    pub(crate) fn insert(&mut self, component: Box<dyn SceneComponent>) {
        let kind = component.kind();
        self.order.retain(|k| *k != kind);
        self.order.push(kind);
        self.slots[kind.index()] = Some(component);
    }

    /// Remove and return the component of the given kind, if attached.
    pub(crate) fn take(&mut self, kind: ComponentKind) -> Option<Box<dyn SceneComponent>> {
        let component = self.slots[kind.index()].take()?;
        self.order.retain(|k| *k != kind);
        Some(component)
    }
}

impl Default for SceneEntity {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{FrictionComponent, GravityComponent, PhysicsBodyComponent};

    #[test]
    fn insert_take_and_lookup() {
        let mut entity = SceneEntity::new();
        assert!(entity.is_empty());

        entity.insert(Box::new(GravityComponent::new()));
        entity.insert(Box::new(FrictionComponent::new()));
        assert_eq!(entity.len(), 2);
        assert!(entity.has(ComponentKind::Gravity));
        assert!(entity.component::<GravityComponent>().is_some());
        assert!(entity.component::<PhysicsBodyComponent>().is_none());

        let taken = entity.take(ComponentKind::Gravity).unwrap();
        assert_eq!(taken.kind(), ComponentKind::Gravity);
        assert!(!entity.has(ComponentKind::Gravity));
        assert!(entity.take(ComponentKind::Gravity).is_none());
    }

    #[test]
    fn insertion_order_survives_replacement() {
        let mut entity = SceneEntity::new();
        entity.insert(Box::new(GravityComponent::new()));
        entity.insert(Box::new(FrictionComponent::new()));

        // Replacing re-appends: gravity moves to the end of the listing.
        entity.insert(Box::new(GravityComponent::new()));
        assert_eq!(
            entity.kinds(),
            vec![ComponentKind::Friction, ComponentKind::Gravity]
        );
        assert_eq!(entity.len(), 2);
    }

    #[test]
    fn compliance_is_checked_live() {
        let mut entity = SceneEntity::new();
        entity.insert(Box::new(FrictionComponent::new()));
        assert!(!entity.check_compliance(ComponentKind::Friction));
        assert_eq!(
            entity.missing_dependencies(ComponentKind::Friction),
            vec![ComponentKind::PhysicsBody]
        );

        entity.insert(Box::new(PhysicsBodyComponent::new()));
        assert!(entity.check_compliance(ComponentKind::Friction));
        assert!(entity.missing_dependencies(ComponentKind::Friction).is_empty());

        // No declared dependencies: trivially compliant.
        assert!(entity.check_compliance(ComponentKind::Gravity));
    }
}
