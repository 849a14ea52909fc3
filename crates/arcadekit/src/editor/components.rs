//! Component list panel — left side panel showing the attached components
//! with add/remove affordances.

use crate::composer::SceneComposer;
use crate::ecs::kind::ComponentKind;

/// Draw the component list panel. Returns the current selection.
pub(crate) fn components_panel(
    ctx: &egui::Context,
    composer: &mut SceneComposer,
    selected: Option<ComponentKind>,
) -> Option<ComponentKind> {
    let mut new_selected = selected;
    let mut to_add: Option<ComponentKind> = None;
    let mut to_remove: Option<ComponentKind> = None;

    egui::SidePanel::left("components_panel")
        .default_width(220.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Components");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.menu_button("Add Component", |ui| {
                        let kinds: Vec<(String, ComponentKind)> = composer
                            .catalog()
                            .entries()
                            .map(|e| (e.name().to_string(), e.kind()))
                            .collect();
                        for (name, kind) in kinds {
                            if ui.button(name).clicked() {
                                to_add = Some(kind);
                                ui.close();
                            }
                        }
                    });
                });
            });
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                for kind in composer.entity().kinds_for_display() {
                    ui.horizontal(|ui| {
                        let is_selected = new_selected == Some(kind);
                        if ui.selectable_label(is_selected, kind.display_name()).clicked() {
                            new_selected = Some(kind);
                        }
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if kind.user_removable() && ui.small_button("✕").clicked() {
                                    to_remove = Some(kind);
                                }
                            },
                        );
                    });
                }
            });
        });

    if let Some(kind) = to_add {
        composer.add_component(kind);
        new_selected = Some(kind);
    }
    if let Some(kind) = to_remove {
        composer.remove_component(kind);
        if new_selected == Some(kind) {
            new_selected = None;
        }
    }

    // Selection can go stale when a component is removed elsewhere.
    if let Some(kind) = new_selected {
        if !composer.entity().has(kind) {
            new_selected = None;
        }
    }

    new_selected
}
