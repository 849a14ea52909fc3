//! Physics body component: attaches an edge-loop body to the scene and
//! rebuilds it whenever the frame or the selected type changes.

use serde::{Deserialize, Serialize};

use crate::ecs::component::{Effect, Effects, HookContext, SceneComponent, TypedComponent};
use crate::ecs::kind::ComponentKind;
use crate::scene::{BodySpec, Scene};

/// Stroke width used when the dynamic body's outline is rendered.
pub const OUTLINE_STROKE_WIDTH: f32 = 3.0;

/// Which physics body the scene carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyType {
    None,
    Static,
    Dynamic,
}

impl BodyType {
    /// All types, in the order the editor's picker presents them.
    pub const ALL: [BodyType; 3] = [BodyType::Dynamic, BodyType::Static, BodyType::None];

    /// Human-readable name for pickers.
    pub fn label(self) -> &'static str {
        match self {
            BodyType::None => "None",
            BodyType::Static => "Static",
            BodyType::Dynamic => "Dynamic",
        }
    }
}

impl std::fmt::Display for BodyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PhysicsBodySettings {
    body_type: BodyType,
    outline_visible: bool,
}

/// Manages the scene's physics body.
///
/// The body is an edge loop built from the current scene frame, either
/// attached to the scene itself (static) or carried by a dedicated node with
/// an optional visible outline (dynamic). Every transition tears down all
/// existing representations before constructing the new one; friction is
/// re-applied afterwards by the composer, since fresh bodies start at the
/// engine default coefficient.
///
/// Detaching tears the body down but keeps the selected type, so
/// re-attaching the same instance restores the prior selection.
#[derive(Debug, Clone)]
pub struct PhysicsBodyComponent {
    body_type: BodyType,
    outline_visible: bool,
}

impl PhysicsBodyComponent {
    /// Defaults to a static edge-loop body with no outline rendering.
    pub fn new() -> Self {
        Self {
            body_type: BodyType::Static,
            outline_visible: false,
        }
    }

    /// The currently selected body type.
    pub fn body_type(&self) -> BodyType {
        self.body_type
    }

    /// Whether the dynamic body's outline is rendered.
    pub fn outline_visible(&self) -> bool {
        self.outline_visible
    }

    pub(crate) fn set_body_type(&mut self, body_type: BodyType) {
        self.body_type = body_type;
    }

    pub(crate) fn set_outline_visible(&mut self, visible: bool) {
        self.outline_visible = visible;
    }

    fn outline_width(&self) -> f32 {
        if self.outline_visible {
            OUTLINE_STROKE_WIDTH
        } else {
            0.0
        }
    }

    /// Tear down every representation, then build the one for the selected
    /// type from the current scene frame. Safe to call with no body present.
    pub(crate) fn refresh(&self, scene: &mut dyn Scene) {
        scene.remove_all_bodies();
        match self.body_type {
            BodyType::None => {}
            BodyType::Static => {
                scene.set_body(BodySpec::static_edge_loop(scene.frame()));
            }
            BodyType::Dynamic => {
                scene.set_body(BodySpec::dynamic_node(scene.frame(), self.outline_width()));
            }
        }
    }

    /// Restroke the current outline without rebuilding the body.
    pub(crate) fn apply_outline(&self, scene: &mut dyn Scene) {
        scene.set_body_outline(self.outline_width());
    }
}

impl Default for PhysicsBodyComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneComponent for PhysicsBodyComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::PhysicsBody
    }

    fn on_attach(&mut self, ctx: &mut HookContext<'_>) -> Effects {
        self.refresh(ctx.scene);
        vec![Effect::ReapplyFriction]
    }

    fn on_detach(&mut self, ctx: &mut HookContext<'_>) -> Effects {
        // Bodies leave with the component; the stored type survives for
        // re-attachment.
        ctx.scene.remove_all_bodies();
        Effects::new()
    }

    fn settings(&self) -> serde_json::Value {
        serde_json::to_value(PhysicsBodySettings {
            body_type: self.body_type,
            outline_visible: self.outline_visible,
        })
        .unwrap_or(serde_json::Value::Null)
    }

    fn apply_settings(&mut self, settings: &serde_json::Value) {
        if let Ok(s) = serde_json::from_value::<PhysicsBodySettings>(settings.clone()) {
            self.body_type = s.body_type;
            self.outline_visible = s.outline_visible;
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

impl TypedComponent for PhysicsBodyComponent {
    const KIND: ComponentKind = ComponentKind::PhysicsBody;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{BodyRepresentation, MemoryScene, Scene};

    #[test]
    fn refresh_builds_selected_representation() {
        let mut scene = MemoryScene::new();
        let mut pb = PhysicsBodyComponent::new();

        pb.refresh(&mut scene);
        assert_eq!(
            scene.body().unwrap().representation,
            BodyRepresentation::StaticEdgeLoop
        );

        pb.set_body_type(BodyType::Dynamic);
        pb.refresh(&mut scene);
        assert_eq!(
            scene.body().unwrap().representation,
            BodyRepresentation::DynamicNode
        );

        pb.set_body_type(BodyType::None);
        pb.refresh(&mut scene);
        assert!(scene.body().is_none());
    }

    #[test]
    fn every_transition_is_a_teardown_and_rebuild() {
        let mut scene = MemoryScene::new();
        let mut pb = PhysicsBodyComponent::new();

        pb.refresh(&mut scene);
        let first = scene.body().unwrap().id;

        pb.set_body_type(BodyType::Static); // same type, still rebuilt
        pb.refresh(&mut scene);
        let second = scene.body().unwrap().id;
        assert_ne!(first, second);
    }

    #[test]
    fn outline_follows_visibility() {
        let mut scene = MemoryScene::new();
        let mut pb = PhysicsBodyComponent::new();
        pb.set_body_type(BodyType::Dynamic);
        pb.refresh(&mut scene);
        assert_eq!(scene.body().unwrap().outline_width, 0.0);

        pb.set_outline_visible(true);
        pb.apply_outline(&mut scene);
        assert_eq!(scene.body().unwrap().outline_width, OUTLINE_STROKE_WIDTH);
        // Restroking must not rebuild.
        assert_eq!(scene.bodies_created(), 1);
    }

    #[test]
    fn body_frame_matches_scene_frame() {
        let mut scene = MemoryScene::new();
        scene.set_anchor(crate::math::Vec2::new(0.5, 0.5));
        let pb = PhysicsBodyComponent::new();
        pb.refresh(&mut scene);
        assert_eq!(scene.body().unwrap().frame, scene.frame());
    }
}
