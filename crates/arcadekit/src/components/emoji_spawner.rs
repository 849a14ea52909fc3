//! Emoji spawner component: drops a random emoji glyph into the scene on
//! every pointer press.
//!
//! Depends on the pointer input relay. On attach it registers an owned
//! subscription on the relay's "began" phase; the subscription is removed
//! again on detach, so a detached spawner never touches the scene.

use rand::Rng;

use crate::components::pointer::{PointerInputComponent, PointerPhase};
use crate::ecs::component::{Effects, HookContext, SceneComponent, TypedComponent};
use crate::ecs::kind::ComponentKind;
use crate::math::Vec2;
use crate::scene::{Node, Scene};

/// Glyphs the spawner picks from.
const EMOJI: &[&str] = &[
    "👾", "🕹", "🚀", "🎮", "📱", "⌚", "💿", "📀", "🧲", "🧿", "🎲", "🍁", "🍥", "🍄", "🧠",
    "👁", "😈", "👻", "💀", "👽", "🤖", "🃏", "👊", "💧", "☁", "🚗", "💣", "🧸", "🧩", "🎨",
    "🎸", "⚽", "🎱", "🍖", "🍑", "🍆", "🍩", "🍌", "⭐", "🌈", "🌸", "🌺", "🌼", "🍹", "🦊",
    "🐼", "🐱", "🐶", "❤", "🧡", "💛", "💚", "💙", "💜", "💔", "🔶", "🔷",
];

/// Default glyph size in points.
const DEFAULT_FONT_SIZE: f32 = 64.0;

/// Spawns emoji nodes on the scene wherever a pointer press lands.
#[derive(Debug, Clone)]
pub struct EmojiSpawnerComponent {
    font_size: f32,
}

impl EmojiSpawnerComponent {
    pub fn new() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
        }
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }
}

/// Build a random emoji node at the given position with a random launch
/// impulse, the way the spawner does on each press.
pub fn random_emoji_node(position: Vec2, font_size: f32) -> Node {
    let mut rng = rand::thread_rng();
    let text = EMOJI[rng.gen_range(0..EMOJI.len())].to_string();
    let adjustment = rng.gen_range(-40.0..=40.0);
    let impulse = Vec2::new(adjustment / 3.0, rng.gen_range(15.0..=25.0));

    Node {
        text,
        position,
        z: -10.0,
        font_size,
        impulse,
    }
}

impl Default for EmojiSpawnerComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneComponent for EmojiSpawnerComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::EmojiSpawner
    }

    fn on_attach(&mut self, ctx: &mut HookContext<'_>) -> Effects {
        let font_size = self.font_size;
        match ctx.co_component_mut::<PointerInputComponent>() {
            Some(relay) => {
                relay.subscribe_owned(
                    PointerPhase::Began,
                    ComponentKind::EmojiSpawner,
                    Box::new(move |event, scene| {
                        scene.add_node(random_emoji_node(event.position, font_size));
                    }),
                );
            }
            None => {
                log::warn!(
                    "{} is missing {}, spawning disabled",
                    ComponentKind::EmojiSpawner,
                    ComponentKind::PointerInput
                );
            }
        }
        Effects::new()
    }

    fn on_detach(&mut self, ctx: &mut HookContext<'_>) -> Effects {
        if let Some(relay) = ctx.co_component_mut::<PointerInputComponent>() {
            relay.clear_owner(ComponentKind::EmojiSpawner);
        }
        Effects::new()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

impl TypedComponent for EmojiSpawnerComponent {
    const KIND: ComponentKind = ComponentKind::EmojiSpawner;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_node_is_well_formed() {
        let node = random_emoji_node(Vec2::new(10.0, 20.0), 64.0);
        assert!(!node.text.is_empty());
        assert_eq!(node.position, Vec2::new(10.0, 20.0));
        assert_eq!(node.z, -10.0);
        assert!((15.0..=25.0).contains(&node.impulse.y));
        assert!((-40.0 / 3.0..=40.0 / 3.0).contains(&node.impulse.x));
    }
}
