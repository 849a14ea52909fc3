//! Background color component: keeps the scene background in step with the
//! host's light/dark appearance.

use serde::{Deserialize, Serialize};

use crate::ecs::component::{Effects, HookContext, SceneComponent, TypedComponent};
use crate::ecs::kind::ComponentKind;
use crate::scene::{Color, Scene};

/// Host appearance the background follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    /// The window-background color for this scheme.
    pub fn background_color(self) -> Color {
        match self {
            ColorScheme::Light => Color::rgb(0.93, 0.93, 0.93),
            ColorScheme::Dark => Color::rgb(0.12, 0.12, 0.13),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BackgroundSettings {
    scheme: ColorScheme,
}

/// Makes the scene background follow the light/dark color scheme.
#[derive(Debug, Clone)]
pub struct BackgroundColorComponent {
    scheme: ColorScheme,
}

impl BackgroundColorComponent {
    pub fn new() -> Self {
        Self {
            scheme: ColorScheme::Light,
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub(crate) fn set_scheme(&mut self, scheme: ColorScheme, scene: &mut dyn Scene) {
        self.scheme = scheme;
        self.apply(scene);
    }

    pub(crate) fn apply(&self, scene: &mut dyn Scene) {
        scene.set_background(self.scheme.background_color());
    }
}

impl Default for BackgroundColorComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneComponent for BackgroundColorComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::BackgroundColor
    }

    fn on_attach(&mut self, ctx: &mut HookContext<'_>) -> Effects {
        self.apply(ctx.scene);
        Effects::new()
    }

    fn settings(&self) -> serde_json::Value {
        serde_json::to_value(BackgroundSettings {
            scheme: self.scheme,
        })
        .unwrap_or(serde_json::Value::Null)
    }

    fn apply_settings(&mut self, settings: &serde_json::Value) {
        if let Ok(s) = serde_json::from_value::<BackgroundSettings>(settings.clone()) {
            self.scheme = s.scheme;
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

impl TypedComponent for BackgroundColorComponent {
    const KIND: ComponentKind = ComponentKind::BackgroundColor;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::MemoryScene;

    #[test]
    fn scheme_drives_background() {
        let mut scene = MemoryScene::new();
        let mut bg = BackgroundColorComponent::new();
        bg.set_scheme(ColorScheme::Dark, &mut scene);
        assert_eq!(scene.background(), ColorScheme::Dark.background_color());
    }
}
