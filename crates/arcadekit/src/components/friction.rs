//! Friction component: keeps the scene body's friction coefficient in sync
//! with the user's setting.
//!
//! Depends on the physics body component. The dependency is checked lazily on
//! every application — while the body component is absent this component is
//! inert, and it recovers by itself the next time an update runs after the
//! body component returns.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::ecs::component::{Effect, Effects, HookContext, SceneComponent, TypedComponent};
use crate::ecs::entity::SceneEntity;
use crate::ecs::kind::ComponentKind;
use crate::scene::Scene;

/// Valid range for the friction coefficient.
pub const FRICTION_RANGE: RangeInclusive<f32> = 0.0..=1.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FrictionSettings {
    friction: f32,
}

/// Controls the friction coefficient of the scene's physics body.
#[derive(Debug, Clone)]
pub struct FrictionComponent {
    friction: f32,
}

impl FrictionComponent {
    /// Defaults to the engine's usual 0.2.
    pub fn new() -> Self {
        Self { friction: 0.2 }
    }

    /// The stored coefficient.
    pub fn friction(&self) -> f32 {
        self.friction
    }

    /// Store a coefficient, clamped into [`FRICTION_RANGE`]. Returns the
    /// value actually stored.
    pub(crate) fn set_friction(&mut self, friction: f32) -> f32 {
        let clamped = friction.clamp(*FRICTION_RANGE.start(), *FRICTION_RANGE.end());
        if clamped != friction {
            log::warn!(
                "friction {} outside {:?}, clamped to {}",
                friction,
                FRICTION_RANGE,
                clamped
            );
        }
        self.friction = clamped;
        self.friction
    }

    /// Push the stored coefficient onto the scene body, if this component's
    /// declared dependencies are satisfied. Skips with a warning otherwise.
    pub(crate) fn apply(&self, entity: &SceneEntity, scene: &mut dyn Scene) {
        if !entity.check_compliance(ComponentKind::Friction) {
            let missing = entity.missing_dependencies(ComponentKind::Friction);
            log::warn!(
                "{} is missing {}, skipping friction update",
                ComponentKind::Friction,
                missing
                    .iter()
                    .map(|k| k.display_name())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            return;
        }
        scene.set_body_friction(self.friction);
    }
}

impl Default for FrictionComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneComponent for FrictionComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Friction
    }

    fn on_attach(&mut self, _ctx: &mut HookContext<'_>) -> Effects {
        vec![Effect::ReapplyFriction]
    }

    fn on_detach(&mut self, ctx: &mut HookContext<'_>) -> Effects {
        // Leave the body with no friction contribution from this component.
        self.friction = 0.0;
        self.apply(ctx.entity, ctx.scene);
        Effects::new()
    }

    fn settings(&self) -> serde_json::Value {
        serde_json::to_value(FrictionSettings {
            friction: self.friction,
        })
        .unwrap_or(serde_json::Value::Null)
    }

    fn apply_settings(&mut self, settings: &serde_json::Value) {
        if let Ok(s) = serde_json::from_value::<FrictionSettings>(settings.clone()) {
            self.set_friction(s.friction);
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

impl TypedComponent for FrictionComponent {
    const KIND: ComponentKind = ComponentKind::Friction;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::PhysicsBodyComponent;
    use crate::scene::MemoryScene;

    #[test]
    fn setter_clamps_to_valid_range() {
        let mut f = FrictionComponent::new();
        assert_eq!(f.set_friction(1.3), 1.0);
        assert_eq!(f.friction(), 1.0);
        assert_eq!(f.set_friction(-0.4), 0.0);
        assert_eq!(f.friction(), 0.0);
        assert_eq!(f.set_friction(0.4), 0.4);
    }

    #[test]
    fn apply_is_inert_without_body_component() {
        let mut scene = MemoryScene::new();
        let entity = SceneEntity::new();
        let f = FrictionComponent::new();
        // No body component, no body: nothing to do, nothing to crash.
        f.apply(&entity, &mut scene);
        assert!(scene.body().is_none());
    }

    #[test]
    fn apply_writes_through_when_compliant() {
        let mut scene = MemoryScene::new();
        let mut entity = SceneEntity::new();
        let body = PhysicsBodyComponent::new();
        body.refresh(&mut scene);
        entity.insert(Box::new(body));

        let mut f = FrictionComponent::new();
        f.set_friction(0.65);
        f.apply(&entity, &mut scene);
        assert_eq!(scene.body().unwrap().friction, 0.65);
    }
}
