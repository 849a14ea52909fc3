//! # ArcadeKit — Composition Core for a 2D Arcade Scene Editor
//!
//! A scene editor is a live physics-enabled scene plus a panel of toggleable
//! behaviors: anchor placement, gravity, friction, a physics body, view
//! sizing, background color, input relays, emoji spawning. This crate is the
//! engine underneath that panel — a component composition layer where
//! behaviors attach to a single scene entity, declare dependencies on each
//! other, and propagate changes without a per-frame update loop.
//!
//! Start with `use arcadekit::prelude::*`, build a
//! [`SceneComposer`](composer::SceneComposer) over a [`Scene`](scene::Scene)
//! implementation, and drive it with commands:
//!
//! ```ignore
//! use arcadekit::prelude::*;
//!
//! let mut composer = SceneComposer::new(Box::new(MemoryScene::new()));
//! composer.install_defaults();
//! composer.apply(Command::SetBodyType(BodyType::Dynamic));
//! composer.apply(Command::SetFriction(0.4));
//! ```

pub mod catalog;
pub mod command;
pub mod components;
pub mod composer;
pub mod ecs;
pub mod math;
pub mod prelude;
pub mod scene;
pub mod snapshot;

#[cfg(feature = "editor")]
pub mod editor;
