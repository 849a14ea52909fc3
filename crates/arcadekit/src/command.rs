//! # Commands — Every Mutation as an Explicit Message
//!
//! Hosts that prefer message passing over direct method calls (an undo
//! stack, a scripting bridge, a replay log) drive the composer through
//! [`Command`] values. Each command is processed synchronously by
//! [`SceneComposer::apply`] and maps onto exactly one composer method, so
//! the ordering guarantees are identical to calling the methods directly.

use crate::components::{
    BodyType, ColorScheme, MouseEvent, PointerEvent, TouchEvent,
};
use crate::composer::SceneComposer;
use crate::ecs::kind::ComponentKind;
use crate::math::Vec2;
use crate::scene::ScaleMode;

/// A single mutation of the composition or the scene state it drives.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddComponent(ComponentKind),
    RemoveComponent(ComponentKind),
    SetAnchor(Vec2),
    SetFriction(f32),
    SetGravity(Vec2),
    SetBodyType(BodyType),
    SetBodyOutline(bool),
    SetViewSize(Vec2),
    SetSceneSize(Vec2),
    SetScaleMode(ScaleMode),
    SetColorScheme(ColorScheme),
    SetPaused(bool),
    Mouse(MouseEvent),
    Touch(TouchEvent),
    Pointer(PointerEvent),
}

impl SceneComposer {
    /// Process one command. Returns whether it took effect: a rejected
    /// value, a missing target component, or an undeliverable event all
    /// yield `false` (and never an error).
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::AddComponent(kind) => self.add_component(kind),
            Command::RemoveComponent(kind) => self.remove_component(kind).is_some(),
            Command::SetAnchor(anchor) => self.set_anchor_point(anchor),
            Command::SetFriction(friction) => self.set_friction(friction).is_some(),
            Command::SetGravity(gravity) => self.set_gravity(gravity),
            Command::SetBodyType(body_type) => self.set_body_type(body_type),
            Command::SetBodyOutline(visible) => self.set_body_outline_visible(visible),
            Command::SetViewSize(size) => self.set_view_size(size),
            Command::SetSceneSize(size) => self.set_scene_size(size),
            Command::SetScaleMode(mode) => self.set_scale_mode(mode),
            Command::SetColorScheme(scheme) => self.set_color_scheme(scheme),
            Command::SetPaused(paused) => {
                self.set_paused(paused);
                true
            }
            Command::Mouse(event) => self.mouse_event(event),
            Command::Touch(event) => self.touch_event(event),
            Command::Pointer(event) => self.pointer_event(event),
        }
    }
}
