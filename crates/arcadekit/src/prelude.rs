//! Convenience re-exports — `use arcadekit::prelude::*` for the common items.

pub use crate::catalog::{Catalog, CatalogEntry, ComponentFactory};
pub use crate::command::Command;
pub use crate::components::{
    ANCHOR_RANGE, AnchorPointComponent, BackgroundColorComponent, BodyType, ColorScheme,
    EmojiSpawnerComponent, FRICTION_RANGE, FrictionComponent, GravityComponent, MouseEvent,
    MouseInputComponent, MousePhase, PhysicsBodyComponent, PointerEvent, PointerInputComponent,
    PointerPhase, RelayCallback, SubscriptionId, TouchEvent, TouchInputComponent, TouchPhase,
    ViewSettingComponent,
};
pub use crate::composer::{CompositionChange, ObserverId, SceneComposer};
pub use crate::ecs::{
    ComponentKind, Effect, Effects, HookContext, SceneComponent, SceneEntity, TypedComponent,
};
pub use crate::math::{Rect, Vec2};
pub use crate::scene::{
    BodyId, BodyRepresentation, BodySpec, BodyState, Color, MemoryScene, Node, NodeId, ScaleMode,
    Scene,
};
pub use crate::snapshot::{
    CompositionSnapshot, load_composition, load_composition_from_file, save_composition,
    save_composition_to_file,
};

#[cfg(feature = "editor")]
pub use crate::editor::EditorState;
