//! Anchor point component: where the scene's origin sits within its frame.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::ecs::component::{Effect, Effects, HookContext, SceneComponent, TypedComponent};
use crate::ecs::kind::ComponentKind;
use crate::math::Vec2;
use crate::scene::Scene;

/// Valid range for each anchor coordinate.
pub const ANCHOR_RANGE: RangeInclusive<f32> = 0.0..=1.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AnchorSettings {
    x: f32,
    y: f32,
}

/// Controls the scene's anchor point.
///
/// The anchor is normalized: (0, 0) is the bottom-left corner, (1, 1) the
/// top-right. Because the scene frame is anchor-relative, every accepted
/// anchor change forces a physics-body rebuild.
#[derive(Debug, Clone)]
pub struct AnchorPointComponent {
    anchor: Vec2,
}

impl AnchorPointComponent {
    /// Default anchor: bottom-center (0.5, 0.0).
    pub fn new() -> Self {
        Self {
            anchor: Vec2::new(0.5, 0.0),
        }
    }

    /// The stored anchor, kept in sync with the scene's actual anchor.
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Try to move the anchor. An in-range target is written to the scene
    /// and `true` is returned. An out-of-range target is rejected: the
    /// stored value resyncs from the scene's actual anchor and `false` is
    /// returned.
    pub(crate) fn apply(&mut self, target: Vec2, scene: &mut dyn Scene) -> bool {
        if ANCHOR_RANGE.contains(&target.x) && ANCHOR_RANGE.contains(&target.y) {
            self.anchor = target;
            scene.set_anchor(target);
            return true;
        }
        log::warn!(
            "anchor point ({}, {}) outside {:?}, keeping ({}, {})",
            target.x,
            target.y,
            ANCHOR_RANGE,
            scene.anchor().x,
            scene.anchor().y
        );
        self.anchor = scene.anchor();
        false
    }
}

impl Default for AnchorPointComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneComponent for AnchorPointComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::AnchorPoint
    }

    fn on_attach(&mut self, ctx: &mut HookContext<'_>) -> Effects {
        let target = self.anchor;
        self.apply(target, ctx.scene);
        vec![Effect::RefreshPhysicsBody]
    }

    fn on_detach(&mut self, ctx: &mut HookContext<'_>) -> Effects {
        // Hand the scene back its natural origin anchor.
        self.apply(Vec2::ZERO, ctx.scene);
        vec![Effect::RefreshPhysicsBody]
    }

    fn settings(&self) -> serde_json::Value {
        serde_json::to_value(AnchorSettings {
            x: self.anchor.x,
            y: self.anchor.y,
        })
        .unwrap_or(serde_json::Value::Null)
    }

    fn apply_settings(&mut self, settings: &serde_json::Value) {
        if let Ok(s) = serde_json::from_value::<AnchorSettings>(settings.clone()) {
            self.anchor = Vec2::new(s.x, s.y);
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

impl TypedComponent for AnchorPointComponent {
    const KIND: ComponentKind = ComponentKind::AnchorPoint;
}
