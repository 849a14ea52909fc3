//! # Built-in Components
//!
//! One module per behavior the editor can attach to the scene entity:
//!
//! - [`view_setting`] — scene size, view size, scale mode
//! - [`anchor_point`] — anchor placement (forces physics rebuilds)
//! - [`background`] — light/dark background color
//! - [`physics_body`] — none/static/dynamic edge-loop body state machine
//! - [`friction`] — friction coefficient, dependent on the physics body
//! - [`gravity`] — gravity vector
//! - [`pointer`] — mouse/touch device relays and the normalized pointer relay
//! - [`emoji_spawner`] — spawns emoji nodes on pointer presses

pub mod anchor_point;
pub mod background;
pub mod emoji_spawner;
pub mod friction;
pub mod gravity;
pub mod physics_body;
pub mod pointer;
pub mod view_setting;

pub use anchor_point::{ANCHOR_RANGE, AnchorPointComponent};
pub use background::{BackgroundColorComponent, ColorScheme};
pub use emoji_spawner::EmojiSpawnerComponent;
pub use friction::{FRICTION_RANGE, FrictionComponent};
pub use gravity::GravityComponent;
pub use physics_body::{BodyType, OUTLINE_STROKE_WIDTH, PhysicsBodyComponent};
pub use pointer::{
    MouseEvent, MouseInputComponent, MousePhase, PointerEvent, PointerInputComponent,
    PointerPhase, RelayCallback, SubscriptionId, TouchEvent, TouchInputComponent, TouchPhase,
};
pub use view_setting::ViewSettingComponent;
