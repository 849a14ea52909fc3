//! # Scene Service — The External World the Components Drive
//!
//! Components never talk to a renderer or a physics engine directly. They go
//! through the narrow [`Scene`] interface: anchor point, size and frame,
//! background color, gravity, a physics-body slot, visual nodes, and a pause
//! flag. Anything implementing [`Scene`] can host a composition — a real
//! render/physics backend, or the bundled [`MemoryScene`] used by tests,
//! examples, and headless tooling.
//!
//! ## Frame derivation
//!
//! The scene's frame is anchor-relative: the origin sits at
//! `-anchor * size`, so an anchor of (0.5, 0.0) centers the frame
//! horizontally and rests it on the bottom edge. Edge-loop physics bodies are
//! built from the frame, which is why an anchor change forces a body rebuild.
//!
//! ## Identity
//!
//! [`MemoryScene`] hands out monotonically increasing [`BodyId`]s and
//! [`NodeId`]s. A rebuilt body is a *new* body — callers can observe
//! destroy/recreate cycles by watching the id change.

use serde::{Deserialize, Serialize};

use crate::math::{Rect, Vec2};

// ── Scale mode ──────────────────────────────────────────────────────────

/// How the scene maps onto the hosting view.
///
/// Only [`ScaleMode::ResizeFill`] makes the scene size track the view size;
/// the other modes keep whatever size was explicitly set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleMode {
    ResizeFill,
    AspectFit,
    AspectFill,
    Fill,
}

impl ScaleMode {
    /// All modes, in the order the editor presents them.
    pub const ALL: [ScaleMode; 4] = [
        ScaleMode::ResizeFill,
        ScaleMode::AspectFit,
        ScaleMode::AspectFill,
        ScaleMode::Fill,
    ];

    /// Human-readable name for pickers.
    pub fn label(self) -> &'static str {
        match self {
            ScaleMode::ResizeFill => "Resize Fill",
            ScaleMode::AspectFit => "Aspect Fit",
            ScaleMode::AspectFill => "Aspect Fill",
            ScaleMode::Fill => "Fill",
        }
    }
}

// ── Color ───────────────────────────────────────────────────────────────

/// An RGBA color with components in 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

// ── Physics body ────────────────────────────────────────────────────────

/// Identity of a physics-body representation created by the scene.
///
/// Ids are never reused; a rebuild yields a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u64);

/// Which representation a body uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRepresentation {
    /// An edge loop attached directly to the scene.
    StaticEdgeLoop,
    /// An edge loop carried by a dedicated shape node (optionally stroked).
    DynamicNode,
}

/// Default friction coefficient a freshly created body starts with.
///
/// Mirrors the engine default; a friction component overwrites this right
/// after every rebuild.
pub const DEFAULT_BODY_FRICTION: f32 = 0.2;

/// Everything needed to create a body representation.
#[derive(Debug, Clone, Copy)]
pub struct BodySpec {
    pub representation: BodyRepresentation,
    /// Boundary the edge loop is built from (normally the scene frame).
    pub frame: Rect,
    /// Stroke width of the dynamic node's outline; 0.0 hides it.
    pub outline_width: f32,
}

impl BodySpec {
    /// An edge-loop body attached to the scene itself.
    pub fn static_edge_loop(frame: Rect) -> Self {
        Self {
            representation: BodyRepresentation::StaticEdgeLoop,
            frame,
            outline_width: 0.0,
        }
    }

    /// A node-carried edge-loop body with an optional visible outline.
    pub fn dynamic_node(frame: Rect, outline_width: f32) -> Self {
        Self {
            representation: BodyRepresentation::DynamicNode,
            frame,
            outline_width,
        }
    }
}

/// A live body representation held by the scene.
#[derive(Debug, Clone, Copy)]
pub struct BodyState {
    pub id: BodyId,
    pub representation: BodyRepresentation,
    pub frame: Rect,
    pub friction: f32,
    pub outline_width: f32,
}

// ── Visual nodes ────────────────────────────────────────────────────────

/// Identity of a visual node added to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// A text/glyph node placed in the scene (emoji spawns use these).
#[derive(Debug, Clone)]
pub struct Node {
    pub text: String,
    pub position: Vec2,
    pub z: f32,
    pub font_size: f32,
    /// Launch impulse applied when the node enters the scene.
    pub impulse: Vec2,
}

// ── Scene trait ─────────────────────────────────────────────────────────

/// The narrow interface the composition core drives.
///
/// All setters apply instantaneously and are idempotent — a host with an
/// animation layer may call them again once its transitions settle.
pub trait Scene {
    fn anchor(&self) -> Vec2;
    fn set_anchor(&mut self, anchor: Vec2);

    fn size(&self) -> Vec2;
    fn set_size(&mut self, size: Vec2);

    /// The scene's frame: origin at `-anchor * size`, extent `size`.
    fn frame(&self) -> Rect {
        let size = self.size();
        Rect {
            origin: -self.anchor() * size,
            size,
        }
    }

    fn scale_mode(&self) -> ScaleMode;
    fn set_scale_mode(&mut self, mode: ScaleMode);

    fn background(&self) -> Color;
    fn set_background(&mut self, color: Color);

    fn gravity(&self) -> Vec2;
    fn set_gravity(&mut self, gravity: Vec2);

    /// Replace the current body representation with a new one.
    fn set_body(&mut self, spec: BodySpec) -> BodyId;
    /// Tear down every body representation. Idempotent.
    fn remove_all_bodies(&mut self);
    fn body(&self) -> Option<&BodyState>;
    /// Overwrite the current body's friction coefficient, if any body exists.
    fn set_body_friction(&mut self, friction: f32);
    /// Restroke the current body's outline without rebuilding it.
    fn set_body_outline(&mut self, width: f32);

    fn add_node(&mut self, node: Node) -> NodeId;
    fn remove_node(&mut self, id: NodeId);
    fn node_count(&self) -> usize;

    fn is_paused(&self) -> bool;
    fn set_paused(&mut self, paused: bool);
}

// ── MemoryScene ─────────────────────────────────────────────────────────

/// A plain in-memory [`Scene`] with observable state.
///
/// Suitable as the backing store of a host renderer, and as the scene used
/// throughout the crate's tests and examples.
#[derive(Debug)]
pub struct MemoryScene {
    anchor: Vec2,
    size: Vec2,
    scale_mode: ScaleMode,
    background: Color,
    gravity: Vec2,
    body: Option<BodyState>,
    nodes: Vec<(NodeId, Node)>,
    paused: bool,
    next_body_id: u64,
    next_node_id: u64,
}

impl MemoryScene {
    /// A 1000×1000 scene with engine-default gravity, ready for composition.
    pub fn new() -> Self {
        Self {
            anchor: Vec2::ZERO,
            size: Vec2::new(1000.0, 1000.0),
            scale_mode: ScaleMode::ResizeFill,
            background: Color::WHITE,
            gravity: Vec2::new(0.0, -9.8),
            body: None,
            nodes: Vec::new(),
            paused: false,
            next_body_id: 0,
            next_node_id: 0,
        }
    }

    /// Total bodies ever created; the difference across an operation counts
    /// rebuilds.
    pub fn bodies_created(&self) -> u64 {
        self.next_body_id
    }

    /// Iterate the live visual nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().map(|(_, n)| n)
    }
}

impl Default for MemoryScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for MemoryScene {
    fn anchor(&self) -> Vec2 {
        self.anchor
    }

    fn set_anchor(&mut self, anchor: Vec2) {
        self.anchor = anchor;
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    fn scale_mode(&self) -> ScaleMode {
        self.scale_mode
    }

    fn set_scale_mode(&mut self, mode: ScaleMode) {
        self.scale_mode = mode;
    }

    fn background(&self) -> Color {
        self.background
    }

    fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    fn gravity(&self) -> Vec2 {
        self.gravity
    }

    fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    fn set_body(&mut self, spec: BodySpec) -> BodyId {
        let id = BodyId(self.next_body_id);
        self.next_body_id += 1;
        self.body = Some(BodyState {
            id,
            representation: spec.representation,
            frame: spec.frame,
            friction: DEFAULT_BODY_FRICTION,
            outline_width: spec.outline_width,
        });
        id
    }

    fn remove_all_bodies(&mut self) {
        self.body = None;
    }

    fn body(&self) -> Option<&BodyState> {
        self.body.as_ref()
    }

    fn set_body_friction(&mut self, friction: f32) {
        if let Some(body) = self.body.as_mut() {
            body.friction = friction;
        }
    }

    fn set_body_outline(&mut self, width: f32) {
        if let Some(body) = self.body.as_mut() {
            body.outline_width = width;
        }
    }

    fn add_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.push((id, node));
        id
    }

    fn remove_node(&mut self, id: NodeId) {
        self.nodes.retain(|(nid, _)| *nid != id);
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_tracks_anchor() {
        let mut scene = MemoryScene::new();
        scene.set_size(Vec2::new(800.0, 600.0));
        scene.set_anchor(Vec2::new(0.5, 0.0));

        let frame = scene.frame();
        assert_eq!(frame.origin, Vec2::new(-400.0, -0.0));
        assert_eq!(frame.size, Vec2::new(800.0, 600.0));

        scene.set_anchor(Vec2::new(0.0, 0.0));
        assert_eq!(scene.frame().origin, Vec2::new(-0.0, -0.0));
    }

    #[test]
    fn body_ids_increase_per_rebuild() {
        let mut scene = MemoryScene::new();
        let frame = scene.frame();

        let first = scene.set_body(BodySpec::static_edge_loop(frame));
        let second = scene.set_body(BodySpec::dynamic_node(frame, 3.0));
        assert_ne!(first, second);
        assert_eq!(scene.body().unwrap().id, second);
        assert_eq!(scene.bodies_created(), 2);
    }

    #[test]
    fn new_bodies_start_with_default_friction() {
        let mut scene = MemoryScene::new();
        scene.set_body(BodySpec::static_edge_loop(scene.frame()));
        assert_eq!(scene.body().unwrap().friction, DEFAULT_BODY_FRICTION);

        scene.set_body_friction(0.7);
        assert_eq!(scene.body().unwrap().friction, 0.7);

        // Rebuild resets to the engine default.
        scene.set_body(BodySpec::static_edge_loop(scene.frame()));
        assert_eq!(scene.body().unwrap().friction, DEFAULT_BODY_FRICTION);
    }

    #[test]
    fn remove_all_bodies_is_idempotent() {
        let mut scene = MemoryScene::new();
        scene.remove_all_bodies();
        scene.set_body(BodySpec::static_edge_loop(scene.frame()));
        scene.remove_all_bodies();
        scene.remove_all_bodies();
        assert!(scene.body().is_none());
    }

    #[test]
    fn nodes_add_and_remove() {
        let mut scene = MemoryScene::new();
        let id = scene.add_node(Node {
            text: "🚀".into(),
            position: Vec2::ZERO,
            z: -10.0,
            font_size: 64.0,
            impulse: Vec2::ZERO,
        });
        assert_eq!(scene.node_count(), 1);
        scene.remove_node(id);
        assert_eq!(scene.node_count(), 0);
    }
}
