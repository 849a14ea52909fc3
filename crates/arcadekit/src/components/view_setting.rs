//! View setting component: scene size, view size, and scale mode.
//!
//! In the resize-to-fill scale mode the scene size is dynamic — it tracks
//! the hosting view's size. In every other mode the scene keeps whatever
//! size was explicitly set. Scene-size changes move the anchor-relative
//! frame, so they refresh the physics body.

use serde::{Deserialize, Serialize};

use crate::ecs::component::{Effect, Effects, HookContext, SceneComponent, TypedComponent};
use crate::ecs::kind::ComponentKind;
use crate::math::Vec2;
use crate::scene::{ScaleMode, Scene};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ViewSettings {
    scene_size: Vec2,
    view_size: Vec2,
    scale_mode: ScaleMode,
}

/// Controls the scene's size and how it maps onto the hosting view.
#[derive(Debug, Clone)]
pub struct ViewSettingComponent {
    scene_size: Vec2,
    view_size: Vec2,
    dynamic_scene_size: bool,
    scale_mode: ScaleMode,
}

impl ViewSettingComponent {
    /// Defaults: 1000×1000, resize-to-fill (dynamic scene size).
    pub fn new() -> Self {
        Self {
            scene_size: Vec2::new(1000.0, 1000.0),
            view_size: Vec2::new(1000.0, 1000.0),
            dynamic_scene_size: true,
            scale_mode: ScaleMode::ResizeFill,
        }
    }

    pub fn scene_size(&self) -> Vec2 {
        self.scene_size
    }

    pub fn view_size(&self) -> Vec2 {
        self.view_size
    }

    pub fn scale_mode(&self) -> ScaleMode {
        self.scale_mode
    }

    /// Whether the scene size currently tracks the view size.
    pub fn dynamic_scene_size(&self) -> bool {
        self.dynamic_scene_size
    }

    /// Record the hosting view's size (e.g. after a window resize).
    pub(crate) fn set_view_size(&mut self, size: Vec2) -> bool {
        if !valid_size(size) {
            log::warn!("view size ({}, {}) rejected", size.x, size.y);
            return false;
        }
        self.view_size = size;
        true
    }

    /// Explicitly set the scene size. Rejected while the scene size is
    /// dynamic (resize-to-fill owns it).
    pub(crate) fn set_scene_size(&mut self, size: Vec2) -> bool {
        if self.dynamic_scene_size {
            log::warn!("scene size is dynamic under {:?}, ignoring explicit size", self.scale_mode);
            return false;
        }
        if !valid_size(size) {
            log::warn!("scene size ({}, {}) rejected", size.x, size.y);
            return false;
        }
        self.scene_size = size;
        true
    }

    pub(crate) fn set_scale_mode(&mut self, mode: ScaleMode) {
        self.scale_mode = mode;
    }

    /// Recompute the dynamic flag, sync the scene size when dynamic, and
    /// push scale mode and size to the scene. Returns whether the scene's
    /// size actually changed (the caller refreshes the physics body then).
    pub(crate) fn apply(&mut self, scene: &mut dyn Scene) -> bool {
        self.dynamic_scene_size = self.scale_mode == ScaleMode::ResizeFill;
        scene.set_scale_mode(self.scale_mode);

        if self.dynamic_scene_size {
            self.scene_size = self.view_size;
        }

        let changed = scene.size() != self.scene_size;
        scene.set_size(self.scene_size);
        changed
    }
}

fn valid_size(size: Vec2) -> bool {
    size.x.is_finite() && size.y.is_finite() && size.x > 0.0 && size.y > 0.0
}

impl Default for ViewSettingComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneComponent for ViewSettingComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::ViewSetting
    }

    fn on_attach(&mut self, ctx: &mut HookContext<'_>) -> Effects {
        if self.apply(ctx.scene) {
            vec![Effect::RefreshPhysicsBody]
        } else {
            Effects::new()
        }
    }

    fn settings(&self) -> serde_json::Value {
        serde_json::to_value(ViewSettings {
            scene_size: self.scene_size,
            view_size: self.view_size,
            scale_mode: self.scale_mode,
        })
        .unwrap_or(serde_json::Value::Null)
    }

    fn apply_settings(&mut self, settings: &serde_json::Value) {
        if let Ok(s) = serde_json::from_value::<ViewSettings>(settings.clone()) {
            self.scene_size = s.scene_size;
            self.view_size = s.view_size;
            self.scale_mode = s.scale_mode;
            self.dynamic_scene_size = s.scale_mode == ScaleMode::ResizeFill;
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

impl TypedComponent for ViewSettingComponent {
    const KIND: ComponentKind = ComponentKind::ViewSetting;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::MemoryScene;

    #[test]
    fn resize_fill_slaves_scene_size_to_view() {
        let mut scene = MemoryScene::new();
        let mut view = ViewSettingComponent::new();

        assert!(view.set_view_size(Vec2::new(640.0, 480.0)));
        assert!(view.apply(&mut scene));
        assert_eq!(scene.size(), Vec2::new(640.0, 480.0));
        assert!(view.dynamic_scene_size());
    }

    #[test]
    fn fixed_modes_keep_explicit_size() {
        let mut scene = MemoryScene::new();
        let mut view = ViewSettingComponent::new();

        view.set_scale_mode(ScaleMode::AspectFit);
        view.apply(&mut scene);
        assert!(!view.dynamic_scene_size());

        assert!(view.set_scene_size(Vec2::new(800.0, 800.0)));
        view.apply(&mut scene);
        assert_eq!(scene.size(), Vec2::new(800.0, 800.0));

        // View resizes no longer move the scene size.
        view.set_view_size(Vec2::new(300.0, 300.0));
        assert!(!view.apply(&mut scene));
        assert_eq!(scene.size(), Vec2::new(800.0, 800.0));
    }

    #[test]
    fn explicit_size_rejected_while_dynamic() {
        let mut view = ViewSettingComponent::new();
        assert!(!view.set_scene_size(Vec2::new(500.0, 500.0)));
    }

    #[test]
    fn nonsense_sizes_rejected() {
        let mut view = ViewSettingComponent::new();
        assert!(!view.set_view_size(Vec2::new(0.0, 100.0)));
        assert!(!view.set_view_size(Vec2::new(f32::NAN, 100.0)));
    }
}
