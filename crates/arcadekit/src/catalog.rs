//! # Catalog — Available Component Kinds
//!
//! Maps presentable names to factories for the component kinds a caller may
//! instantiate and attach. The editor's "Add Component" menu is a walk over
//! the catalog; dependency resolution consults it when auto-attaching a
//! missing prerequisite.
//!
//! Entries default to the dependency list their kind declares, but an entry
//! may override it — useful for hosts that wire alternative relays, and for
//! exercising the resolver against unusual dependency graphs.

use crate::components::{
    AnchorPointComponent, BackgroundColorComponent, EmojiSpawnerComponent, FrictionComponent,
    GravityComponent, MouseInputComponent, PhysicsBodyComponent, PointerInputComponent,
    TouchInputComponent, ViewSettingComponent,
};
use crate::ecs::component::SceneComponent;
use crate::ecs::kind::ComponentKind;

/// Factory producing a fresh component instance.
pub type ComponentFactory = Box<dyn Fn() -> Box<dyn SceneComponent>>;

/// One offerable component kind: a display name, a factory, and the
/// dependency kinds the resolver attaches first.
pub struct CatalogEntry {
    name: String,
    kind: ComponentKind,
    dependencies: Vec<ComponentKind>,
    factory: ComponentFactory,
}

impl CatalogEntry {
    /// Entry with the kind's display name and declared dependencies.
    pub fn new(kind: ComponentKind, factory: ComponentFactory) -> Self {
        Self {
            name: kind.display_name().to_string(),
            kind,
            dependencies: kind.dependencies().to_vec(),
            factory,
        }
    }

    /// Override the presentable name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Override the dependency kinds the resolver attaches before this one.
    pub fn with_dependencies(mut self, dependencies: Vec<ComponentKind>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }
}

/// The fixed set of component kinds offered for attachment.
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// An empty catalog. Most callers want [`Catalog::standard`].
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Every built-in component kind, in menu order.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.register(CatalogEntry::new(
            ComponentKind::ViewSetting,
            Box::new(|| Box::new(ViewSettingComponent::new())),
        ));
        catalog.register(CatalogEntry::new(
            ComponentKind::AnchorPoint,
            Box::new(|| Box::new(AnchorPointComponent::new())),
        ));
        catalog.register(CatalogEntry::new(
            ComponentKind::BackgroundColor,
            Box::new(|| Box::new(BackgroundColorComponent::new())),
        ));
        catalog.register(CatalogEntry::new(
            ComponentKind::PhysicsBody,
            Box::new(|| Box::new(PhysicsBodyComponent::new())),
        ));
        catalog.register(CatalogEntry::new(
            ComponentKind::Friction,
            Box::new(|| Box::new(FrictionComponent::new())),
        ));
        catalog.register(CatalogEntry::new(
            ComponentKind::Gravity,
            Box::new(|| Box::new(GravityComponent::new())),
        ));
        catalog.register(CatalogEntry::new(
            ComponentKind::PointerInput,
            Box::new(|| Box::new(PointerInputComponent::new())),
        ));
        catalog.register(CatalogEntry::new(
            ComponentKind::MouseInput,
            Box::new(|| Box::new(MouseInputComponent::new())),
        ));
        catalog.register(CatalogEntry::new(
            ComponentKind::TouchInput,
            Box::new(|| Box::new(TouchInputComponent::new())),
        ));
        catalog.register(CatalogEntry::new(
            ComponentKind::EmojiSpawner,
            Box::new(|| Box::new(EmojiSpawnerComponent::new())),
        ));
        catalog
    }

    /// Add or replace the entry for a kind (last registration wins).
    pub fn register(&mut self, entry: CatalogEntry) {
        self.entries.retain(|e| e.kind != entry.kind);
        self.entries.push(entry);
    }

    /// Whether a kind is offered.
    pub fn contains(&self, kind: ComponentKind) -> bool {
        self.entries.iter().any(|e| e.kind == kind)
    }

    /// The dependency kinds the resolver attaches before `kind`. Falls back
    /// to the kind's declared list when the kind is not in the catalog.
    pub fn dependencies(&self, kind: ComponentKind) -> Vec<ComponentKind> {
        self.entries
            .iter()
            .find(|e| e.kind == kind)
            .map(|e| e.dependencies.clone())
            .unwrap_or_else(|| kind.dependencies().to_vec())
    }

    /// Build a fresh instance of a kind, if offered.
    pub fn instantiate(&self, kind: ComponentKind) -> Option<Box<dyn SceneComponent>> {
        self.entries
            .iter()
            .find(|e| e.kind == kind)
            .map(|e| (e.factory)())
    }

    /// Entries in menu order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Presentable names in menu order (for "Add Component" dropdowns).
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name()).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_offers_every_kind() {
        let catalog = Catalog::standard();
        for kind in ComponentKind::ALL {
            assert!(catalog.contains(kind), "missing {kind}");
            let instance = catalog.instantiate(kind).unwrap();
            assert_eq!(instance.kind(), kind);
        }
        assert_eq!(catalog.names().len(), ComponentKind::ALL.len());
    }

    #[test]
    fn dependency_override_wins() {
        let mut catalog = Catalog::standard();
        catalog.register(
            CatalogEntry::new(
                ComponentKind::Gravity,
                Box::new(|| Box::new(GravityComponent::new())),
            )
            .with_dependencies(vec![ComponentKind::BackgroundColor]),
        );
        assert_eq!(
            catalog.dependencies(ComponentKind::Gravity),
            vec![ComponentKind::BackgroundColor]
        );
        // Unregistered kinds fall back to the declared list.
        let empty = Catalog::new();
        assert_eq!(
            empty.dependencies(ComponentKind::Friction),
            vec![ComponentKind::PhysicsBody]
        );
    }
}
