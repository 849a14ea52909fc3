//! # Scene Composer — Add, Remove, Resolve, Notify
//!
//! [`SceneComposer`] owns the scene entity, the external [`Scene`] service,
//! and the [`Catalog`], and is the only code that mutates the component set.
//! Every mutation runs synchronously on the calling thread and completes
//! before returning; there is no background work and no per-frame update
//! loop driving components.
//!
//! ## Dependency auto-attach
//!
//! Adding a component first resolves its declared dependency kinds
//! depth-first against the catalog: a kind that is already attached is
//! skipped, a missing kind found in the catalog is attached (recursively
//! resolving *its* dependencies), and a kind absent from the catalog is left
//! unsatisfied with a warning — the dependent component degrades instead of
//! failing. A stack of kinds currently being resolved keeps cyclic
//! declarations from looping.
//!
//! ## Ordering guarantee
//!
//! Within one add or remove call, dependency resolution — including all
//! cascaded attachments — finishes before the requested component's own
//! attach hook runs, and the single change notification fires last. An
//! observer therefore always sees a fully-resolved component set.
//!
//! ## Propagation
//!
//! Hooks and setters queue [`Effect`]s; the composer drains the queue after
//! the triggering change lands. The chains mirror how the pieces of scene
//! state derive from one another: anchor or size moved → rebuild the physics
//! body → re-apply friction (fresh bodies start at the engine default).

use std::collections::VecDeque;

use crate::catalog::Catalog;
use crate::components::pointer::{normalize_mouse, normalize_touch};
use crate::components::{
    AnchorPointComponent, BackgroundColorComponent, BodyType, ColorScheme, FrictionComponent,
    GravityComponent, MouseEvent, MouseInputComponent, PhysicsBodyComponent, PointerEvent,
    PointerInputComponent, PointerPhase, RelayCallback, SubscriptionId, TouchEvent,
    TouchInputComponent, ViewSettingComponent,
};
use crate::ecs::component::{Effect, Effects, HookContext, SceneComponent};
use crate::ecs::entity::SceneEntity;
use crate::ecs::kind::ComponentKind;
use crate::math::Vec2;
use crate::scene::{ScaleMode, Scene};

// ── Change notifications ────────────────────────────────────────────────

/// A structural change to the component set, delivered to observers after
/// the set is fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompositionChange {
    /// A component was attached. `auto_added` lists the dependency kinds the
    /// resolver attached first, in attachment order.
    Added {
        kind: ComponentKind,
        auto_added: Vec<ComponentKind>,
    },
    /// A component of an already-present kind was attached; the previous
    /// instance was torn down first.
    Replaced {
        kind: ComponentKind,
        auto_added: Vec<ComponentKind>,
    },
    /// A component was detached.
    Removed { kind: ComponentKind },
}

/// Handle to a registered observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&SceneEntity, &CompositionChange)>;

// ── SceneComposer ───────────────────────────────────────────────────────

/// Owns the composition: the entity, the scene service, the catalog, and the
/// observer list.
pub struct SceneComposer {
    entity: SceneEntity,
    scene: Box<dyn Scene>,
    catalog: Catalog,
    resolving: Vec<ComponentKind>,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
}

impl SceneComposer {
    /// A composer over the given scene with the standard catalog and an
    /// empty component set.
    pub fn new(scene: Box<dyn Scene>) -> Self {
        Self::with_catalog(scene, Catalog::standard())
    }

    /// A composer with a caller-supplied catalog.
    pub fn with_catalog(scene: Box<dyn Scene>, catalog: Catalog) -> Self {
        Self {
            entity: SceneEntity::new(),
            scene,
            catalog,
            resolving: Vec::new(),
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// Attach the standard editor composition: view setting, anchor point,
    /// background color, physics body, friction, gravity, and the emoji
    /// spawner (which pulls the input relays in as dependencies).
    pub fn install_defaults(&mut self) {
        for kind in [
            ComponentKind::ViewSetting,
            ComponentKind::AnchorPoint,
            ComponentKind::BackgroundColor,
            ComponentKind::PhysicsBody,
            ComponentKind::Friction,
            ComponentKind::Gravity,
            ComponentKind::EmojiSpawner,
        ] {
            self.add_component(kind);
        }
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// The component set, for listing and typed inspection.
    pub fn entity(&self) -> &SceneEntity {
        &self.entity
    }

    /// The external scene service (read side).
    pub fn scene(&self) -> &dyn Scene {
        self.scene.as_ref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Whether the component's declared dependencies are all attached.
    /// `None` when the kind itself is not attached.
    pub fn check_compliance(&self, kind: ComponentKind) -> Option<bool> {
        self.entity
            .has(kind)
            .then(|| self.entity.check_compliance(kind))
    }

    // ── Observation ─────────────────────────────────────────────────

    /// Register an observer called after every structural mutation.
    pub fn observe(
        &mut self,
        observer: impl FnMut(&SceneEntity, &CompositionChange) + 'static,
    ) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Drop an observer. Returns `false` if the id was already gone.
    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    fn notify(&mut self, change: CompositionChange) {
        let mut observers = std::mem::take(&mut self.observers);
        for (_, callback) in observers.iter_mut() {
            callback(&self.entity, &change);
        }
        observers.append(&mut self.observers);
        self.observers = observers;
    }

    // ── Add / remove ────────────────────────────────────────────────

    /// Instantiate a kind from the catalog and attach it (resolving declared
    /// dependencies first). Returns `false` when the catalog does not offer
    /// the kind.
    pub fn add_component(&mut self, kind: ComponentKind) -> bool {
        let Some(instance) = self.catalog.instantiate(kind) else {
            log::warn!("{kind} is not in the catalog");
            return false;
        };
        self.attach(instance);
        true
    }

    /// Attach a caller-constructed component instance, resolving its
    /// declared dependencies from the catalog first. An already-attached
    /// component of the same kind is torn down and replaced.
    pub fn attach(&mut self, component: Box<dyn SceneComponent>) {
        let kind = component.kind();
        let replaced = self.entity.has(kind);
        let mut auto_added = Vec::new();

        self.resolving.push(kind);
        self.resolve_dependencies(kind, &mut auto_added);
        self.install(component);
        self.resolving.pop();

        let change = if replaced {
            CompositionChange::Replaced { kind, auto_added }
        } else {
            CompositionChange::Added { kind, auto_added }
        };
        self.notify(change);
    }

    /// Detach a component, running its teardown hook first. Returns the
    /// detached instance so it can be re-attached later; `None` (a no-op)
    /// when the kind is not attached.
    pub fn remove_component(&mut self, kind: ComponentKind) -> Option<Box<dyn SceneComponent>> {
        let mut component = self.entity.take(kind)?;
        let effects = {
            let mut ctx = HookContext {
                entity: &mut self.entity,
                scene: self.scene.as_mut(),
            };
            component.on_detach(&mut ctx)
        };
        self.clear_owned_subscriptions(kind);
        self.process_effects(effects);
        self.notify(CompositionChange::Removed { kind });
        Some(component)
    }

    fn resolve_dependencies(&mut self, kind: ComponentKind, auto_added: &mut Vec<ComponentKind>) {
        for dep in self.catalog.dependencies(kind) {
            if self.entity.has(dep) {
                continue;
            }
            if self.resolving.contains(&dep) {
                log::debug!("{kind} -> {dep} is already being resolved, skipping");
                continue;
            }
            let Some(instance) = self.catalog.instantiate(dep) else {
                log::warn!("{kind} depends on {dep}, which the catalog does not offer");
                continue;
            };
            self.resolving.push(dep);
            self.resolve_dependencies(dep, auto_added);
            self.install(instance);
            auto_added.push(dep);
            self.resolving.pop();
        }
    }

    /// Tear down any same-kind occupant, run the attach hook, insert, and
    /// drain the resulting effects.
    fn install(&mut self, mut component: Box<dyn SceneComponent>) {
        let kind = component.kind();

        if let Some(mut old) = self.entity.take(kind) {
            let effects = {
                let mut ctx = HookContext {
                    entity: &mut self.entity,
                    scene: self.scene.as_mut(),
                };
                old.on_detach(&mut ctx)
            };
            self.clear_owned_subscriptions(kind);
            self.process_effects(effects);
        }

        let effects = {
            let mut ctx = HookContext {
                entity: &mut self.entity,
                scene: self.scene.as_mut(),
            };
            component.on_attach(&mut ctx)
        };
        self.entity.insert(component);
        self.process_effects(effects);
    }

    /// Drop every relay subscription registered on behalf of `owner`, so a
    /// detached component can no longer reach the scene through a callback.
    fn clear_owned_subscriptions(&mut self, owner: ComponentKind) {
        if let Some(relay) = self.entity.component_mut::<PointerInputComponent>() {
            relay.clear_owner(owner);
        }
        if let Some(relay) = self.entity.component_mut::<MouseInputComponent>() {
            relay.clear_owner(owner);
        }
        if let Some(relay) = self.entity.component_mut::<TouchInputComponent>() {
            relay.clear_owner(owner);
        }
    }

    // ── Propagation ─────────────────────────────────────────────────

    fn process_effects(&mut self, effects: Effects) {
        let mut queue: VecDeque<Effect> = effects.into();
        while let Some(effect) = queue.pop_front() {
            match effect {
                Effect::RefreshPhysicsBody => {
                    let Self { entity, scene, .. } = self;
                    if let Some(body) = entity.component::<PhysicsBodyComponent>() {
                        body.refresh(scene.as_mut());
                        queue.push_back(Effect::ReapplyFriction);
                    }
                }
                Effect::ReapplyFriction => {
                    let Self { entity, scene, .. } = self;
                    if let Some(friction) = entity.component::<FrictionComponent>() {
                        friction.apply(entity, scene.as_mut());
                    }
                }
            }
        }
    }

    // ── Setters ─────────────────────────────────────────────────────

    /// Move the scene's anchor point. Returns `false` when the target is out
    /// of range (the stored value then reflects the scene's actual anchor)
    /// or no anchor component is attached.
    pub fn set_anchor_point(&mut self, anchor: Vec2) -> bool {
        let applied = {
            let Self { entity, scene, .. } = self;
            let Some(component) = entity.component_mut::<AnchorPointComponent>() else {
                log::warn!("no {} attached", ComponentKind::AnchorPoint);
                return false;
            };
            component.apply(anchor, scene.as_mut())
        };
        if applied {
            self.process_effects(vec![Effect::RefreshPhysicsBody]);
        }
        applied
    }

    /// Store a friction coefficient (clamped into range) and re-apply it.
    /// Returns the value actually stored, or `None` when no friction
    /// component is attached.
    pub fn set_friction(&mut self, friction: f32) -> Option<f32> {
        let stored = match self.entity.component_mut::<FrictionComponent>() {
            Some(component) => component.set_friction(friction),
            None => {
                log::warn!("no {} attached", ComponentKind::Friction);
                return None;
            }
        };
        self.process_effects(vec![Effect::ReapplyFriction]);
        Some(stored)
    }

    /// Switch the physics body type, rebuilding the body representation.
    pub fn set_body_type(&mut self, body_type: BodyType) -> bool {
        match self.entity.component_mut::<PhysicsBodyComponent>() {
            Some(component) => component.set_body_type(body_type),
            None => {
                log::warn!("no {} attached", ComponentKind::PhysicsBody);
                return false;
            }
        }
        self.process_effects(vec![Effect::RefreshPhysicsBody]);
        true
    }

    /// Toggle the dynamic body's outline rendering in place (no rebuild).
    pub fn set_body_outline_visible(&mut self, visible: bool) -> bool {
        let Self { entity, scene, .. } = self;
        match entity.component_mut::<PhysicsBodyComponent>() {
            Some(component) => {
                component.set_outline_visible(visible);
                component.apply_outline(scene.as_mut());
                true
            }
            None => {
                log::warn!("no {} attached", ComponentKind::PhysicsBody);
                false
            }
        }
    }

    /// Set the scene's gravity vector.
    pub fn set_gravity(&mut self, gravity: Vec2) -> bool {
        let Self { entity, scene, .. } = self;
        match entity.component_mut::<GravityComponent>() {
            Some(component) => {
                component.set_gravity(gravity, scene.as_mut());
                true
            }
            None => {
                log::warn!("no {} attached", ComponentKind::Gravity);
                false
            }
        }
    }

    /// Set the background color scheme.
    pub fn set_color_scheme(&mut self, scheme: ColorScheme) -> bool {
        let Self { entity, scene, .. } = self;
        match entity.component_mut::<BackgroundColorComponent>() {
            Some(component) => {
                component.set_scheme(scheme, scene.as_mut());
                true
            }
            None => {
                log::warn!("no {} attached", ComponentKind::BackgroundColor);
                false
            }
        }
    }

    /// Record a new hosting-view size (e.g. after a window resize). Under
    /// resize-to-fill this also resizes the scene and refreshes the body.
    pub fn set_view_size(&mut self, size: Vec2) -> bool {
        let changed = {
            let Self { entity, scene, .. } = self;
            let Some(component) = entity.component_mut::<ViewSettingComponent>() else {
                log::warn!("no {} attached", ComponentKind::ViewSetting);
                return false;
            };
            if !component.set_view_size(size) {
                return false;
            }
            component.apply(scene.as_mut())
        };
        if changed {
            self.process_effects(vec![Effect::RefreshPhysicsBody]);
        }
        true
    }

    /// Explicitly set the scene size. Rejected while the scale mode keeps
    /// the scene size dynamic.
    pub fn set_scene_size(&mut self, size: Vec2) -> bool {
        let changed = {
            let Self { entity, scene, .. } = self;
            let Some(component) = entity.component_mut::<ViewSettingComponent>() else {
                log::warn!("no {} attached", ComponentKind::ViewSetting);
                return false;
            };
            if !component.set_scene_size(size) {
                return false;
            }
            component.apply(scene.as_mut())
        };
        if changed {
            self.process_effects(vec![Effect::RefreshPhysicsBody]);
        }
        true
    }

    /// Switch the scale mode, re-deriving the scene size.
    pub fn set_scale_mode(&mut self, mode: ScaleMode) -> bool {
        let changed = {
            let Self { entity, scene, .. } = self;
            let Some(component) = entity.component_mut::<ViewSettingComponent>() else {
                log::warn!("no {} attached", ComponentKind::ViewSetting);
                return false;
            };
            component.set_scale_mode(mode);
            component.apply(scene.as_mut())
        };
        if changed {
            self.process_effects(vec![Effect::RefreshPhysicsBody]);
        }
        true
    }

    /// Pause or resume the scene.
    pub fn set_paused(&mut self, paused: bool) {
        self.scene.set_paused(paused);
    }

    // ── Input routing ───────────────────────────────────────────────

    /// Deliver a raw mouse event: the mouse relay fans it out, then the
    /// normalized pointer event (if any) goes through the pointer relay.
    /// Returns `false` when no mouse relay is attached to receive it.
    pub fn mouse_event(&mut self, event: MouseEvent) -> bool {
        let Self { entity, scene, .. } = self;
        let Some(relay) = entity.component_mut::<MouseInputComponent>() else {
            return false;
        };
        relay.dispatch(&event, scene.as_mut());
        if let Some(pointer) = normalize_mouse(&event) {
            if let Some(relay) = entity.component_mut::<PointerInputComponent>() {
                relay.dispatch(pointer, scene.as_mut());
            }
        }
        true
    }

    /// Deliver a raw touch event; mirrors [`mouse_event`](Self::mouse_event).
    pub fn touch_event(&mut self, event: TouchEvent) -> bool {
        let Self { entity, scene, .. } = self;
        let Some(relay) = entity.component_mut::<TouchInputComponent>() else {
            return false;
        };
        relay.dispatch(&event, scene.as_mut());
        if let Some(pointer) = normalize_touch(&event) {
            if let Some(relay) = entity.component_mut::<PointerInputComponent>() {
                relay.dispatch(pointer, scene.as_mut());
            }
        }
        true
    }

    /// Deliver an already-normalized pointer event directly to the pointer
    /// relay.
    pub fn pointer_event(&mut self, event: PointerEvent) -> bool {
        let Self { entity, scene, .. } = self;
        let Some(relay) = entity.component_mut::<PointerInputComponent>() else {
            return false;
        };
        relay.dispatch(event, scene.as_mut());
        true
    }

    /// Subscribe an external callback to the pointer relay.
    pub fn subscribe_pointer(
        &mut self,
        phase: PointerPhase,
        callback: RelayCallback<PointerEvent>,
    ) -> Option<SubscriptionId> {
        match self.entity.component_mut::<PointerInputComponent>() {
            Some(relay) => Some(relay.subscribe(phase, callback)),
            None => {
                log::warn!("no {} attached", ComponentKind::PointerInput);
                None
            }
        }
    }

    /// Remove an external pointer subscription.
    pub fn unsubscribe_pointer(&mut self, id: SubscriptionId) -> bool {
        self.entity
            .component_mut::<PointerInputComponent>()
            .map(|relay| relay.unsubscribe(id))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use crate::components::MousePhase;
    use crate::scene::{BodyRepresentation, MemoryScene};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn composer() -> SceneComposer {
        SceneComposer::new(Box::new(MemoryScene::new()))
    }

    // A test component that can claim any kind and records its lifecycle.
    struct Probe {
        kind: ComponentKind,
        tag: u32,
        attach_log: Rc<RefCell<Vec<(ComponentKind, u32)>>>,
        detach_count: Rc<Cell<u32>>,
    }

    impl Probe {
        fn new(
            kind: ComponentKind,
            tag: u32,
            attach_log: &Rc<RefCell<Vec<(ComponentKind, u32)>>>,
            detach_count: &Rc<Cell<u32>>,
        ) -> Self {
            Self {
                kind,
                tag,
                attach_log: Rc::clone(attach_log),
                detach_count: Rc::clone(detach_count),
            }
        }
    }

    impl SceneComponent for Probe {
        fn kind(&self) -> ComponentKind {
            self.kind
        }

        fn on_attach(&mut self, _ctx: &mut HookContext<'_>) -> Effects {
            self.attach_log.borrow_mut().push((self.kind, self.tag));
            Effects::new()
        }

        fn on_detach(&mut self, _ctx: &mut HookContext<'_>) -> Effects {
            self.detach_count.set(self.detach_count.get() + 1);
            Effects::new()
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
            self
        }
    }

    fn probe_factory(
        kind: ComponentKind,
        tag: u32,
        attach_log: &Rc<RefCell<Vec<(ComponentKind, u32)>>>,
        detach_count: &Rc<Cell<u32>>,
    ) -> crate::catalog::ComponentFactory {
        let attach_log = Rc::clone(attach_log);
        let detach_count = Rc::clone(detach_count);
        Box::new(move || Box::new(Probe::new(kind, tag, &attach_log, &detach_count)))
    }

    #[test]
    fn same_kind_replaces_and_tears_down_once() {
        let mut composer = composer();
        let log = Rc::new(RefCell::new(Vec::new()));
        let first_detached = Rc::new(Cell::new(0));
        let second_detached = Rc::new(Cell::new(0));

        composer.attach(Box::new(Probe::new(
            ComponentKind::Gravity,
            1,
            &log,
            &first_detached,
        )));
        composer.attach(Box::new(Probe::new(
            ComponentKind::Gravity,
            2,
            &log,
            &second_detached,
        )));

        assert_eq!(composer.entity().len(), 1);
        let current = composer
            .entity()
            .get(ComponentKind::Gravity)
            .unwrap()
            .as_any()
            .downcast_ref::<Probe>()
            .unwrap();
        assert_eq!(current.tag, 2);
        assert_eq!(first_detached.get(), 1);
        assert_eq!(second_detached.get(), 0);
    }

    #[test]
    fn dependencies_auto_attach_in_order() {
        let mut composer = composer();
        let log = Rc::new(RefCell::new(Vec::new()));
        let detached = Rc::new(Cell::new(0));

        // Gravity depends on BackgroundColor, which depends on MouseInput.
        composer.catalog_mut().register(
            CatalogEntry::new(
                ComponentKind::Gravity,
                probe_factory(ComponentKind::Gravity, 0, &log, &detached),
            )
            .with_dependencies(vec![ComponentKind::BackgroundColor]),
        );
        composer.catalog_mut().register(
            CatalogEntry::new(
                ComponentKind::BackgroundColor,
                probe_factory(ComponentKind::BackgroundColor, 0, &log, &detached),
            )
            .with_dependencies(vec![ComponentKind::MouseInput]),
        );
        composer.catalog_mut().register(CatalogEntry::new(
            ComponentKind::MouseInput,
            probe_factory(ComponentKind::MouseInput, 0, &log, &detached),
        ));

        assert!(composer.add_component(ComponentKind::Gravity));

        // Attach hooks ran deepest dependency first, requested kind last.
        let order: Vec<ComponentKind> = log.borrow().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            order,
            vec![
                ComponentKind::MouseInput,
                ComponentKind::BackgroundColor,
                ComponentKind::Gravity
            ]
        );
        assert_eq!(composer.entity().len(), 3);
    }

    #[test]
    fn auto_attach_with_real_components() {
        let mut composer = composer();
        let changes = Rc::new(RefCell::new(Vec::new()));
        {
            let changes = Rc::clone(&changes);
            composer.observe(move |entity, change| {
                // Observers only ever see a fully-resolved set.
                assert!(entity.has(ComponentKind::EmojiSpawner));
                assert!(entity.has(ComponentKind::PointerInput));
                assert!(entity.has(ComponentKind::MouseInput));
                changes.borrow_mut().push(change.clone());
            });
        }

        composer.add_component(ComponentKind::EmojiSpawner);

        assert_eq!(
            *changes.borrow(),
            vec![CompositionChange::Added {
                kind: ComponentKind::EmojiSpawner,
                auto_added: vec![ComponentKind::MouseInput, ComponentKind::PointerInput],
            }]
        );
    }

    #[test]
    fn cyclic_declarations_terminate() {
        let mut composer = composer();
        let log = Rc::new(RefCell::new(Vec::new()));
        let detached = Rc::new(Cell::new(0));

        composer.catalog_mut().register(
            CatalogEntry::new(
                ComponentKind::Gravity,
                probe_factory(ComponentKind::Gravity, 0, &log, &detached),
            )
            .with_dependencies(vec![ComponentKind::BackgroundColor]),
        );
        composer.catalog_mut().register(
            CatalogEntry::new(
                ComponentKind::BackgroundColor,
                probe_factory(ComponentKind::BackgroundColor, 0, &log, &detached),
            )
            .with_dependencies(vec![ComponentKind::Gravity]),
        );

        assert!(composer.add_component(ComponentKind::Gravity));
        assert!(composer.entity().has(ComponentKind::Gravity));
        assert!(composer.entity().has(ComponentKind::BackgroundColor));
        // Each attached exactly once.
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn missing_catalog_dependency_degrades() {
        let mut scene_composer =
            SceneComposer::with_catalog(Box::new(MemoryScene::new()), Catalog::new());
        scene_composer.catalog_mut().register(CatalogEntry::new(
            ComponentKind::Friction,
            Box::new(|| Box::new(FrictionComponent::new())),
        ));

        // PhysicsBody is declared but not offered: friction still attaches,
        // just degraded.
        assert!(scene_composer.add_component(ComponentKind::Friction));
        assert!(scene_composer.entity().has(ComponentKind::Friction));
        assert!(!scene_composer.entity().has(ComponentKind::PhysicsBody));
        assert_eq!(
            scene_composer.check_compliance(ComponentKind::Friction),
            Some(false)
        );
    }

    #[test]
    fn removal_of_absent_kind_is_a_no_op() {
        let mut composer = composer();
        let fired = Rc::new(Cell::new(0u32));
        {
            let fired = Rc::clone(&fired);
            composer.observe(move |_, _| fired.set(fired.get() + 1));
        }
        assert!(composer.remove_component(ComponentKind::Friction).is_none());
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn anchor_change_rebuilds_physics_body() {
        let mut composer = composer();
        composer.add_component(ComponentKind::AnchorPoint);
        composer.add_component(ComponentKind::PhysicsBody);
        let before = composer.scene().body().unwrap().id;

        assert!(composer.set_anchor_point(Vec2::new(0.0, 0.0)));
        let after = composer.scene().body().unwrap().id;
        assert_ne!(before, after);
        assert_eq!(composer.scene().body().unwrap().frame, composer.scene().frame());
    }

    #[test]
    fn anchor_change_without_body_is_harmless() {
        let mut composer = composer();
        composer.add_component(ComponentKind::AnchorPoint);
        assert!(composer.set_anchor_point(Vec2::new(0.25, 0.25)));
        assert!(composer.scene().body().is_none());
    }

    #[test]
    fn rejected_anchor_keeps_scene_and_skips_rebuild() {
        let mut composer = composer();
        composer.add_component(ComponentKind::AnchorPoint);
        composer.add_component(ComponentKind::PhysicsBody);
        let body_before = composer.scene().body().unwrap().id;

        assert!(!composer.set_anchor_point(Vec2::new(0.5, 1.5)));
        assert_eq!(composer.scene().anchor(), Vec2::new(0.5, 0.0));
        let anchor = composer
            .entity()
            .component::<AnchorPointComponent>()
            .unwrap();
        assert_eq!(anchor.anchor(), Vec2::new(0.5, 0.0));
        assert_eq!(composer.scene().body().unwrap().id, body_before);
    }

    #[test]
    fn friction_clamps_and_applies() {
        let mut composer = composer();
        composer.add_component(ComponentKind::Friction); // pulls PhysicsBody in

        assert_eq!(composer.set_friction(1.3), Some(1.0));
        assert_eq!(composer.scene().body().unwrap().friction, 1.0);
        assert_eq!(composer.set_friction(-0.4), Some(0.0));
        assert_eq!(composer.scene().body().unwrap().friction, 0.0);
    }

    #[test]
    fn friction_survives_body_type_switch() {
        let mut composer = composer();
        composer.add_component(ComponentKind::Friction);
        composer.set_friction(0.4);

        composer.set_body_type(BodyType::Dynamic);
        let body = composer.scene().body().unwrap();
        assert_eq!(body.representation, BodyRepresentation::DynamicNode);
        assert_eq!(body.friction, 0.4);
    }

    #[test]
    fn friction_recovers_when_body_returns() {
        let mut composer = composer();
        composer.add_component(ComponentKind::Friction);
        composer.set_friction(0.8);
        composer.remove_component(ComponentKind::PhysicsBody);

        // Inert while the body component is gone.
        assert_eq!(composer.set_friction(0.6), Some(0.6));
        assert!(composer.scene().body().is_none());
        assert_eq!(composer.check_compliance(ComponentKind::Friction), Some(false));

        // No re-subscription needed: the next update after the body comes
        // back writes through again.
        composer.add_component(ComponentKind::PhysicsBody);
        assert_eq!(composer.scene().body().unwrap().friction, 0.6);
    }

    #[test]
    fn body_detach_and_reattach_restores_selection() {
        let mut composer = composer();
        composer.add_component(ComponentKind::PhysicsBody);
        composer.set_body_type(BodyType::Dynamic);

        let instance = composer.remove_component(ComponentKind::PhysicsBody).unwrap();
        assert!(composer.scene().body().is_none());

        composer.attach(instance);
        let body = composer.scene().body().unwrap();
        assert_eq!(body.representation, BodyRepresentation::DynamicNode);
    }

    #[test]
    fn view_resize_refreshes_body_under_resize_fill() {
        let mut composer = composer();
        composer.add_component(ComponentKind::ViewSetting);
        composer.add_component(ComponentKind::PhysicsBody);
        let before = composer.scene().body().unwrap().id;

        assert!(composer.set_view_size(Vec2::new(640.0, 480.0)));
        assert_eq!(composer.scene().size(), Vec2::new(640.0, 480.0));
        let body = composer.scene().body().unwrap();
        assert_ne!(body.id, before);
        assert_eq!(body.frame, composer.scene().frame());
    }

    #[test]
    fn mouse_click_spawns_emoji() {
        let mut composer = composer();
        composer.install_defaults();
        assert_eq!(composer.scene().node_count(), 0);

        composer.mouse_event(MouseEvent {
            phase: MousePhase::Down,
            position: Vec2::new(12.0, 34.0),
        });
        assert_eq!(composer.scene().node_count(), 1);

        // Releases and moves do not spawn.
        composer.mouse_event(MouseEvent {
            phase: MousePhase::Up,
            position: Vec2::new(12.0, 34.0),
        });
        assert_eq!(composer.scene().node_count(), 1);
    }

    #[test]
    fn detached_spawner_is_inert() {
        let mut composer = composer();
        composer.install_defaults();
        composer.remove_component(ComponentKind::EmojiSpawner);

        composer.mouse_event(MouseEvent {
            phase: MousePhase::Down,
            position: Vec2::ZERO,
        });
        assert_eq!(composer.scene().node_count(), 0);
    }

    #[test]
    fn mouse_events_need_the_device_relay() {
        let mut composer = composer();
        composer.add_component(ComponentKind::PointerInput); // pulls MouseInput
        composer.remove_component(ComponentKind::MouseInput);

        let fired = Rc::new(Cell::new(0u32));
        {
            let fired = Rc::clone(&fired);
            composer.subscribe_pointer(
                PointerPhase::Began,
                Box::new(move |_, _| fired.set(fired.get() + 1)),
            );
        }

        assert!(!composer.mouse_event(MouseEvent {
            phase: MousePhase::Down,
            position: Vec2::ZERO,
        }));
        assert_eq!(fired.get(), 0);

        // Direct normalized delivery still works.
        assert!(composer.pointer_event(PointerEvent {
            phase: PointerPhase::Began,
            position: Vec2::ZERO,
        }));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn observer_lifecycle() {
        let mut composer = composer();
        let fired = Rc::new(Cell::new(0u32));
        let id = {
            let fired = Rc::clone(&fired);
            composer.observe(move |_, _| fired.set(fired.get() + 1))
        };

        composer.add_component(ComponentKind::Gravity);
        assert_eq!(fired.get(), 1);

        assert!(composer.unobserve(id));
        composer.add_component(ComponentKind::BackgroundColor);
        assert_eq!(fired.get(), 1);
        assert!(!composer.unobserve(id));
    }

    #[test]
    fn replacement_notifies_as_replaced() {
        let mut composer = composer();
        composer.add_component(ComponentKind::Gravity);

        let changes = Rc::new(RefCell::new(Vec::new()));
        {
            let changes = Rc::clone(&changes);
            composer.observe(move |_, change| changes.borrow_mut().push(change.clone()));
        }
        composer.add_component(ComponentKind::Gravity);
        assert_eq!(
            *changes.borrow(),
            vec![CompositionChange::Replaced {
                kind: ComponentKind::Gravity,
                auto_added: Vec::new(),
            }]
        );
    }

    #[test]
    fn anchor_detach_resets_scene_anchor() {
        let mut composer = composer();
        composer.add_component(ComponentKind::AnchorPoint);
        composer.add_component(ComponentKind::PhysicsBody);
        assert_eq!(composer.scene().anchor(), Vec2::new(0.5, 0.0));
        let before = composer.scene().body().unwrap().id;

        composer.remove_component(ComponentKind::AnchorPoint);
        assert_eq!(composer.scene().anchor(), Vec2::ZERO);
        // Frame moved, so the body was rebuilt against it.
        let body = composer.scene().body().unwrap();
        assert_ne!(body.id, before);
        assert_eq!(body.frame, composer.scene().frame());
    }

    #[test]
    fn install_defaults_composes_the_editor_set() {
        let mut composer = composer();
        composer.install_defaults();

        for kind in [
            ComponentKind::ViewSetting,
            ComponentKind::AnchorPoint,
            ComponentKind::BackgroundColor,
            ComponentKind::PhysicsBody,
            ComponentKind::Friction,
            ComponentKind::Gravity,
            ComponentKind::EmojiSpawner,
            ComponentKind::PointerInput,
            ComponentKind::MouseInput,
        ] {
            assert!(composer.entity().has(kind), "missing {kind}");
        }
        assert_eq!(composer.check_compliance(ComponentKind::Friction), Some(true));
        assert_eq!(
            composer.check_compliance(ComponentKind::EmojiSpawner),
            Some(true)
        );
        // Compliance of an unattached kind is not applicable.
        assert_eq!(composer.check_compliance(ComponentKind::TouchInput), None);
    }
}
