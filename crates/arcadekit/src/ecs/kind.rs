//! The closed set of component kinds and their static metadata.
//!
//! Kinds are the composition system's currency: the entity stores at most one
//! component per kind, the catalog instantiates by kind, and dependency
//! declarations are lists of kinds. Keeping the set closed (an enum rather
//! than open registration) lets dependency resolution be a plain table lookup
//! with no runtime type machinery.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one component slot on the scene entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    ViewSetting,
    AnchorPoint,
    BackgroundColor,
    PhysicsBody,
    Friction,
    Gravity,
    PointerInput,
    MouseInput,
    TouchInput,
    EmojiSpawner,
}

impl ComponentKind {
    /// Every kind, in the order the editor's add-menu presents them.
    pub const ALL: [ComponentKind; 10] = [
        ComponentKind::ViewSetting,
        ComponentKind::AnchorPoint,
        ComponentKind::BackgroundColor,
        ComponentKind::PhysicsBody,
        ComponentKind::Friction,
        ComponentKind::Gravity,
        ComponentKind::PointerInput,
        ComponentKind::MouseInput,
        ComponentKind::TouchInput,
        ComponentKind::EmojiSpawner,
    ];

    pub(crate) const COUNT: usize = Self::ALL.len();

    /// Slot index inside the entity's component arena.
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// The kinds this kind declares as prerequisites.
    ///
    /// Declared as data, not enforced by the type system: a missing
    /// dependency degrades the dependent component instead of failing.
    pub fn dependencies(self) -> &'static [ComponentKind] {
        match self {
            ComponentKind::Friction => &[ComponentKind::PhysicsBody],
            ComponentKind::PointerInput => &[ComponentKind::MouseInput],
            ComponentKind::EmojiSpawner => &[ComponentKind::PointerInput],
            _ => &[],
        }
    }

    /// Whether the editor offers a remove affordance for this kind.
    ///
    /// A UI hint only — the composer will still replace or remove any kind
    /// programmatically.
    pub fn user_removable(self) -> bool {
        !matches!(
            self,
            ComponentKind::ViewSetting | ComponentKind::AnchorPoint
        )
    }

    /// Whether the editor lists this kind ahead of the others.
    pub fn priority(self) -> bool {
        matches!(
            self,
            ComponentKind::ViewSetting | ComponentKind::AnchorPoint
        )
    }

    /// Human-readable name shown in lists and menus.
    pub fn display_name(self) -> &'static str {
        match self {
            ComponentKind::ViewSetting => "View Setting",
            ComponentKind::AnchorPoint => "Anchor Point",
            ComponentKind::BackgroundColor => "Background Color",
            ComponentKind::PhysicsBody => "Physics Body",
            ComponentKind::Friction => "Friction",
            ComponentKind::Gravity => "Gravity",
            ComponentKind::PointerInput => "Pointer Input",
            ComponentKind::MouseInput => "Mouse Input",
            ComponentKind::TouchInput => "Touch Input",
            ComponentKind::EmojiSpawner => "Emoji Spawner",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
