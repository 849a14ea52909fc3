//! Side-panel editor UI for inspecting and mutating a composition.
//!
//! Feature-gated behind `#[cfg(feature = "editor")]`. Provides a component
//! list with an "Add Component" menu and a per-component inspector, both
//! built with egui. The panels are host-agnostic: they take an
//! [`egui::Context`], so any egui integration (winit, eframe, an engine
//! overlay) can embed them.
//!
//! All mutation goes through [`SceneComposer`] setters, never through direct
//! field pokes, so the propagation chains (anchor → body rebuild → friction)
//! run exactly as they do for programmatic callers.

mod components;
mod inspector;

use crate::composer::SceneComposer;
use crate::ecs::kind::ComponentKind;

/// Editor state carried across frames (panel selection).
pub struct EditorState {
    /// The component selected in the list panel.
    pub selected: Option<ComponentKind>,
}

impl EditorState {
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Build both panels for this frame.
    pub fn ui(&mut self, ctx: &egui::Context, composer: &mut SceneComposer) {
        self.selected = components::components_panel(ctx, composer, self.selected);
        inspector::inspector_panel(ctx, composer, self.selected);
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
