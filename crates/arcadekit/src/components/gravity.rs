//! Gravity component: controls the scene's gravity vector.

use serde::{Deserialize, Serialize};

use crate::ecs::component::{Effects, HookContext, SceneComponent, TypedComponent};
use crate::ecs::kind::ComponentKind;
use crate::math::Vec2;
use crate::scene::Scene;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GravitySettings {
    x: f32,
    y: f32,
}

/// Controls the gravity applied to the scene's physics world.
#[derive(Debug, Clone)]
pub struct GravityComponent {
    gravity: Vec2,
}

impl GravityComponent {
    /// Defaults to earth-ish gravity, (0, -9.8).
    pub fn new() -> Self {
        Self {
            gravity: Vec2::new(0.0, -9.8),
        }
    }

    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    pub(crate) fn set_gravity(&mut self, gravity: Vec2, scene: &mut dyn Scene) {
        self.gravity = gravity;
        self.apply(scene);
    }

    pub(crate) fn apply(&self, scene: &mut dyn Scene) {
        scene.set_gravity(self.gravity);
    }
}

impl Default for GravityComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneComponent for GravityComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Gravity
    }

    fn on_attach(&mut self, ctx: &mut HookContext<'_>) -> Effects {
        self.apply(ctx.scene);
        Effects::new()
    }

    fn on_detach(&mut self, ctx: &mut HookContext<'_>) -> Effects {
        self.set_gravity(Vec2::ZERO, ctx.scene);
        Effects::new()
    }

    fn settings(&self) -> serde_json::Value {
        serde_json::to_value(GravitySettings {
            x: self.gravity.x,
            y: self.gravity.y,
        })
        .unwrap_or(serde_json::Value::Null)
    }

    fn apply_settings(&mut self, settings: &serde_json::Value) {
        if let Ok(s) = serde_json::from_value::<GravitySettings>(settings.clone()) {
            self.gravity = Vec2::new(s.x, s.y);
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

impl TypedComponent for GravityComponent {
    const KIND: ComponentKind = ComponentKind::Gravity;
}
