//! Input relay components: device-level mouse/touch relays and the
//! device-agnostic pointer relay.
//!
//! Each relay keeps per-phase callback lists. Subscribers are invoked in
//! subscription order and receive the event plus mutable scene access, so a
//! callback can spawn nodes or otherwise poke the scene without reaching
//! back into the component set. A relay drops all of its subscribers when it
//! detaches; subscriptions tagged with an owning component kind are also
//! dropped when that owner detaches, keeping detached components inert.
//!
//! The pointer relay only reveals an event's position and phase; it does not
//! differentiate pointer counts, mouse buttons, or modifier keys. Raw device
//! events are normalized by the composer (mouse down → began, drag/move →
//! moved, up → ended) and routed through here whenever the declared device
//! relay is attached.

use crate::ecs::component::{Effects, HookContext, SceneComponent, TypedComponent};
use crate::ecs::kind::ComponentKind;
use crate::math::Vec2;
use crate::scene::Scene;

// ── Events ──────────────────────────────────────────────────────────────

/// Phase of a normalized pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// A touch or click has occurred.
    Began,
    /// A touch has moved or the mouse pointer has been dragged.
    Moved,
    /// A touch or mouse button has been lifted.
    Ended,
}

/// A device-agnostic pointer event carrying a single 2D position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Vec2,
}

/// Phase of a raw mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MousePhase {
    Down,
    Up,
    Moved,
    Dragged,
    Entered,
    Exited,
}

/// A raw mouse event in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseEvent {
    pub phase: MousePhase,
    pub position: Vec2,
}

/// Phase of a raw touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

/// A raw touch event in scene coordinates (first touch only).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub position: Vec2,
}

// ── Subscriptions ───────────────────────────────────────────────────────

/// Handle to one registered callback, usable for unsubscribing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback invoked by a relay: the event plus mutable scene access.
pub type RelayCallback<E> = Box<dyn FnMut(&E, &mut dyn Scene)>;

struct Subscriber<P, E> {
    id: SubscriptionId,
    phase: P,
    owner: Option<ComponentKind>,
    callback: RelayCallback<E>,
}

/// Phase-keyed callback list shared by all three relays.
struct SubscriberList<P, E> {
    next_id: u64,
    subscribers: Vec<Subscriber<P, E>>,
}

impl<P: PartialEq + Copy, E> SubscriberList<P, E> {
    fn new() -> Self {
        Self {
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    fn subscribe(
        &mut self,
        phase: P,
        owner: Option<ComponentKind>,
        callback: RelayCallback<E>,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            phase,
            owner,
            callback,
        });
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    fn clear_owner(&mut self, owner: ComponentKind) {
        self.subscribers.retain(|s| s.owner != Some(owner));
    }

    fn clear(&mut self) {
        self.subscribers.clear();
    }

    fn dispatch(&mut self, phase: P, event: &E, scene: &mut dyn Scene) {
        for sub in self.subscribers.iter_mut() {
            if sub.phase == phase {
                (sub.callback)(event, scene);
            }
        }
    }

    fn len(&self) -> usize {
        self.subscribers.len()
    }
}

// ── PointerInputComponent ───────────────────────────────────────────────

/// Device-agnostic relay for pointer-like input (touch or mouse), for other
/// components that depend on player input.
pub struct PointerInputComponent {
    subscribers: SubscriberList<PointerPhase, PointerEvent>,
}

impl PointerInputComponent {
    pub fn new() -> Self {
        Self {
            subscribers: SubscriberList::new(),
        }
    }

    /// Register a callback for one pointer phase.
    pub fn subscribe(
        &mut self,
        phase: PointerPhase,
        callback: RelayCallback<PointerEvent>,
    ) -> SubscriptionId {
        self.subscribers.subscribe(phase, None, callback)
    }

    /// Register a callback on behalf of another component; it is removed
    /// automatically when that component detaches.
    pub fn subscribe_owned(
        &mut self,
        phase: PointerPhase,
        owner: ComponentKind,
        callback: RelayCallback<PointerEvent>,
    ) -> SubscriptionId {
        self.subscribers.subscribe(phase, Some(owner), callback)
    }

    /// Remove a callback. Returns `false` if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub(crate) fn clear_owner(&mut self, owner: ComponentKind) {
        self.subscribers.clear_owner(owner);
    }

    /// Number of registered callbacks across all phases.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub(crate) fn dispatch(&mut self, event: PointerEvent, scene: &mut dyn Scene) {
        self.subscribers.dispatch(event.phase, &event, scene);
    }
}

impl Default for PointerInputComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneComponent for PointerInputComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::PointerInput
    }

    fn on_detach(&mut self, _ctx: &mut HookContext<'_>) -> Effects {
        self.subscribers.clear();
        Effects::new()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

impl TypedComponent for PointerInputComponent {
    const KIND: ComponentKind = ComponentKind::PointerInput;
}

// ── MouseInputComponent ─────────────────────────────────────────────────

/// Relay for raw mouse events delivered by the host.
pub struct MouseInputComponent {
    subscribers: SubscriberList<MousePhase, MouseEvent>,
}

impl MouseInputComponent {
    pub fn new() -> Self {
        Self {
            subscribers: SubscriberList::new(),
        }
    }

    pub fn subscribe(
        &mut self,
        phase: MousePhase,
        callback: RelayCallback<MouseEvent>,
    ) -> SubscriptionId {
        self.subscribers.subscribe(phase, None, callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub(crate) fn clear_owner(&mut self, owner: ComponentKind) {
        self.subscribers.clear_owner(owner);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub(crate) fn dispatch(&mut self, event: &MouseEvent, scene: &mut dyn Scene) {
        self.subscribers.dispatch(event.phase, event, scene);
    }
}

impl Default for MouseInputComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneComponent for MouseInputComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::MouseInput
    }

    fn on_detach(&mut self, _ctx: &mut HookContext<'_>) -> Effects {
        self.subscribers.clear();
        Effects::new()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

impl TypedComponent for MouseInputComponent {
    const KIND: ComponentKind = ComponentKind::MouseInput;
}

// ── TouchInputComponent ─────────────────────────────────────────────────

/// Relay for raw touch events delivered by the host.
pub struct TouchInputComponent {
    subscribers: SubscriberList<TouchPhase, TouchEvent>,
}

impl TouchInputComponent {
    pub fn new() -> Self {
        Self {
            subscribers: SubscriberList::new(),
        }
    }

    pub fn subscribe(
        &mut self,
        phase: TouchPhase,
        callback: RelayCallback<TouchEvent>,
    ) -> SubscriptionId {
        self.subscribers.subscribe(phase, None, callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub(crate) fn clear_owner(&mut self, owner: ComponentKind) {
        self.subscribers.clear_owner(owner);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub(crate) fn dispatch(&mut self, event: &TouchEvent, scene: &mut dyn Scene) {
        self.subscribers.dispatch(event.phase, event, scene);
    }
}

impl Default for TouchInputComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneComponent for TouchInputComponent {
    fn kind(&self) -> ComponentKind {
        ComponentKind::TouchInput
    }

    fn on_detach(&mut self, _ctx: &mut HookContext<'_>) -> Effects {
        self.subscribers.clear();
        Effects::new()
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

impl TypedComponent for TouchInputComponent {
    const KIND: ComponentKind = ComponentKind::TouchInput;
}

// ── Normalization ───────────────────────────────────────────────────────

/// Map a raw mouse event onto the pointer phases, if it has one.
pub(crate) fn normalize_mouse(event: &MouseEvent) -> Option<PointerEvent> {
    let phase = match event.phase {
        MousePhase::Down => PointerPhase::Began,
        MousePhase::Dragged | MousePhase::Moved => PointerPhase::Moved,
        MousePhase::Up => PointerPhase::Ended,
        MousePhase::Entered | MousePhase::Exited => return None,
    };
    Some(PointerEvent {
        phase,
        position: event.position,
    })
}

/// Map a raw touch event onto the pointer phases, if it has one.
pub(crate) fn normalize_touch(event: &TouchEvent) -> Option<PointerEvent> {
    let phase = match event.phase {
        TouchPhase::Began => PointerPhase::Began,
        TouchPhase::Moved => PointerPhase::Moved,
        TouchPhase::Ended => PointerPhase::Ended,
        TouchPhase::Cancelled => return None,
    };
    Some(PointerEvent {
        phase,
        position: event.position,
    })
}
