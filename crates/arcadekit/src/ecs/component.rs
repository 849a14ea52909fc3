//! # Component Trait — Behavior Units with Lifecycle Hooks
//!
//! A [`SceneComponent`] is a unit of behavior and state that attaches to the
//! scene entity. The composer runs [`on_attach`](SceneComponent::on_attach)
//! exactly once per attachment and [`on_detach`](SceneComponent::on_detach)
//! exactly once per detachment (including the implicit detachment when a
//! same-kind component replaces it).
//!
//! ## Hooks get a context, not a back-reference
//!
//! Instead of holding a pointer to its owning entity, a component receives a
//! [`HookContext`] for the duration of each hook: sibling lookup plus mutable
//! scene access. The context borrows the entity *without* the component being
//! hooked, so a hook can freely inspect and mutate its co-components. Once
//! the hook returns the context is gone — a detached instance has no way to
//! reach its former siblings, so it is inert until re-attached.
//!
//! ## Effects
//!
//! Cross-component propagation is not done by calling siblings from inside a
//! hook. Hooks (and setters) return [`Effect`]s, which the composer drains in
//! order after the structural change lands. This keeps every step a flat
//! borrow and makes the propagation order explicit and testable.

use std::any::Any;

use crate::ecs::entity::SceneEntity;
use crate::ecs::kind::ComponentKind;
use crate::scene::Scene;

// ── Effects ─────────────────────────────────────────────────────────────

/// A follow-up propagation step queued by a hook or setter and processed by
/// the composer after the triggering change completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Destroy and recreate the physics body from the current scene frame
    /// (anchor or size moved, or the body type changed). Always followed by
    /// [`Effect::ReapplyFriction`] when a body component is present.
    RefreshPhysicsBody,
    /// Re-apply the friction coefficient to the current body. New bodies
    /// start at the engine default, which must be overwritten.
    ReapplyFriction,
}

/// Effects produced by one hook or setter invocation.
pub type Effects = Vec<Effect>;

// ── HookContext ─────────────────────────────────────────────────────────

/// Sibling lookup and scene access handed to lifecycle hooks.
///
/// Only exists while the composer is attaching or detaching a component;
/// lookups against it always reflect the live component set.
pub struct HookContext<'a> {
    pub(crate) entity: &'a mut SceneEntity,
    pub(crate) scene: &'a mut dyn Scene,
}

impl<'a> HookContext<'a> {
    /// Look up a sibling component by type. Returns `None` when absent.
    pub fn co_component<T: TypedComponent>(&self) -> Option<&T> {
        self.entity.component::<T>()
    }

    /// Mutable sibling lookup, e.g. to register an event subscription.
    pub fn co_component_mut<T: TypedComponent>(&mut self) -> Option<&mut T> {
        self.entity.component_mut::<T>()
    }

    /// The component set being attached to / detached from.
    pub fn entity(&self) -> &SceneEntity {
        self.entity
    }

    /// Mutable access to the external scene service.
    pub fn scene(&mut self) -> &mut dyn Scene {
        self.scene
    }
}

// ── SceneComponent ──────────────────────────────────────────────────────

/// An attachable unit of behavior and state.
///
/// Implementations are plain structs holding their own settings; all
/// cross-component and scene effects happen inside hooks or through the
/// composer's setters.
pub trait SceneComponent: Any {
    /// The kind identifying this component's slot on the entity.
    fn kind(&self) -> ComponentKind;

    /// Runs exactly once per attachment, after every declared dependency has
    /// been resolved and attached.
    fn on_attach(&mut self, _ctx: &mut HookContext<'_>) -> Effects {
        Effects::new()
    }

    /// Runs exactly once per detachment, while siblings are still reachable
    /// through the context.
    fn on_detach(&mut self, _ctx: &mut HookContext<'_>) -> Effects {
        Effects::new()
    }

    /// Serializable settings for composition snapshots. `Null` means the
    /// component carries no persistable state.
    fn settings(&self) -> serde_json::Value {
        serde_json::Value::Null
    }

    /// Restore settings captured by [`settings`](SceneComponent::settings).
    /// Called before attachment, so the attach hook applies restored state.
    fn apply_settings(&mut self, _settings: &serde_json::Value) {}

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Implemented by every concrete component type so the entity can offer
/// typed lookup (`entity.component::<FrictionComponent>()`).
pub trait TypedComponent: SceneComponent + Sized {
    const KIND: ComponentKind;
}
