//! Component inspector panel — right side panel with editable fields for the
//! selected component.

use crate::components::{
    ANCHOR_RANGE, AnchorPointComponent, BackgroundColorComponent, BodyType, ColorScheme,
    EmojiSpawnerComponent, FRICTION_RANGE, FrictionComponent, GravityComponent,
    MouseInputComponent, PhysicsBodyComponent, PointerInputComponent, TouchInputComponent,
    ViewSettingComponent,
};
use crate::composer::SceneComposer;
use crate::ecs::kind::ComponentKind;
use crate::math::Vec2;
use crate::scene::ScaleMode;

/// Draw the inspector panel for the selected component.
pub(crate) fn inspector_panel(
    ctx: &egui::Context,
    composer: &mut SceneComposer,
    selected: Option<ComponentKind>,
) {
    egui::SidePanel::right("inspector_panel")
        .default_width(280.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Inspector");
            ui.separator();

            let Some(kind) = selected else {
                ui.label("No component selected");
                return;
            };
            if !composer.entity().has(kind) {
                ui.label("No component selected");
                return;
            }

            ui.label(kind.display_name());
            if composer.check_compliance(kind) == Some(false) {
                let missing: Vec<&str> = composer
                    .entity()
                    .missing_dependencies(kind)
                    .iter()
                    .map(|k| k.display_name())
                    .collect();
                ui.colored_label(
                    egui::Color32::YELLOW,
                    format!("Missing: {}", missing.join(", ")),
                );
            }
            ui.separator();

            match kind {
                ComponentKind::ViewSetting => view_setting_ui(ui, composer),
                ComponentKind::AnchorPoint => anchor_point_ui(ui, composer),
                ComponentKind::BackgroundColor => background_ui(ui, composer),
                ComponentKind::PhysicsBody => physics_body_ui(ui, composer),
                ComponentKind::Friction => friction_ui(ui, composer),
                ComponentKind::Gravity => gravity_ui(ui, composer),
                ComponentKind::PointerInput => {
                    let count = composer
                        .entity()
                        .component::<PointerInputComponent>()
                        .map(|relay| relay.subscriber_count())
                        .unwrap_or(0);
                    relay_summary(ui, count);
                }
                ComponentKind::MouseInput => {
                    let count = composer
                        .entity()
                        .component::<MouseInputComponent>()
                        .map(|relay| relay.subscriber_count())
                        .unwrap_or(0);
                    relay_summary(ui, count);
                }
                ComponentKind::TouchInput => {
                    let count = composer
                        .entity()
                        .component::<TouchInputComponent>()
                        .map(|relay| relay.subscriber_count())
                        .unwrap_or(0);
                    relay_summary(ui, count);
                }
                ComponentKind::EmojiSpawner => {
                    let font_size = composer
                        .entity()
                        .component::<EmojiSpawnerComponent>()
                        .map(|s| s.font_size())
                        .unwrap_or_default();
                    ui.label(format!("Glyph size: {font_size}"));
                }
            }
        });
}

fn view_setting_ui(ui: &mut egui::Ui, composer: &mut SceneComposer) {
    let Some(view) = composer.entity().component::<ViewSettingComponent>() else {
        return;
    };
    let dynamic = view.dynamic_scene_size();
    let mut size = view.scene_size();
    let mut mode = view.scale_mode();

    ui.label("Scene Size");
    let mut size_changed = false;
    ui.horizontal(|ui| {
        ui.add_enabled_ui(!dynamic, |ui| {
            size_changed |= ui
                .add(egui::DragValue::new(&mut size.x).speed(1.0).prefix("X: "))
                .changed();
            size_changed |= ui
                .add(egui::DragValue::new(&mut size.y).speed(1.0).prefix("Y: "))
                .changed();
        });
    });

    let mut mode_changed = false;
    egui::ComboBox::from_label("Scale Mode")
        .selected_text(mode.label())
        .show_ui(ui, |ui| {
            for candidate in ScaleMode::ALL {
                mode_changed |= ui
                    .selectable_value(&mut mode, candidate, candidate.label())
                    .changed();
            }
        });

    if size_changed {
        composer.set_scene_size(size);
    }
    if mode_changed {
        composer.set_scale_mode(mode);
    }
}

fn anchor_point_ui(ui: &mut egui::Ui, composer: &mut SceneComposer) {
    let Some(anchor) = composer.entity().component::<AnchorPointComponent>() else {
        return;
    };
    let mut value = anchor.anchor();

    let mut changed = false;
    ui.horizontal(|ui| {
        changed |= ui
            .add(egui::Slider::new(&mut value.x, ANCHOR_RANGE).text("X"))
            .changed();
    });
    ui.horizontal(|ui| {
        changed |= ui
            .add(egui::Slider::new(&mut value.y, ANCHOR_RANGE).text("Y"))
            .changed();
    });
    if changed {
        composer.set_anchor_point(value);
    }
}

fn background_ui(ui: &mut egui::Ui, composer: &mut SceneComposer) {
    let Some(background) = composer.entity().component::<BackgroundColorComponent>() else {
        return;
    };
    let mut scheme = background.scheme();

    let mut changed = false;
    ui.horizontal(|ui| {
        changed |= ui
            .radio_value(&mut scheme, ColorScheme::Light, "Light")
            .changed();
        changed |= ui
            .radio_value(&mut scheme, ColorScheme::Dark, "Dark")
            .changed();
    });
    if changed {
        composer.set_color_scheme(scheme);
    }
}

fn physics_body_ui(ui: &mut egui::Ui, composer: &mut SceneComposer) {
    let Some(body) = composer.entity().component::<PhysicsBodyComponent>() else {
        return;
    };
    let mut body_type = body.body_type();
    let mut outline = body.outline_visible();

    let mut type_changed = false;
    egui::ComboBox::from_label("Type")
        .selected_text(body_type.label())
        .show_ui(ui, |ui| {
            for candidate in BodyType::ALL {
                type_changed |= ui
                    .selectable_value(&mut body_type, candidate, candidate.label())
                    .changed();
            }
        });

    let outline_changed = ui
        .add_enabled(
            body_type == BodyType::Dynamic,
            egui::Checkbox::new(&mut outline, "Show Dynamic Physics Body"),
        )
        .changed();

    if type_changed {
        composer.set_body_type(body_type);
    }
    if outline_changed {
        composer.set_body_outline_visible(outline);
    }
}

fn friction_ui(ui: &mut egui::Ui, composer: &mut SceneComposer) {
    let Some(friction) = composer.entity().component::<FrictionComponent>() else {
        return;
    };
    let mut value = friction.friction();

    if ui
        .add(egui::Slider::new(&mut value, FRICTION_RANGE).text("Friction"))
        .changed()
    {
        composer.set_friction(value);
    }
}

fn gravity_ui(ui: &mut egui::Ui, composer: &mut SceneComposer) {
    let Some(gravity) = composer.entity().component::<GravityComponent>() else {
        return;
    };
    let mut value = gravity.gravity();

    let mut changed = false;
    ui.horizontal(|ui| {
        changed |= ui
            .add(egui::DragValue::new(&mut value.x).speed(0.1).prefix("X: "))
            .changed();
        changed |= ui
            .add(egui::DragValue::new(&mut value.y).speed(0.1).prefix("Y: "))
            .changed();
    });
    if changed {
        composer.set_gravity(Vec2::new(value.x, value.y));
    }
}

fn relay_summary(ui: &mut egui::Ui, count: usize) {
    ui.label(format!("{count} subscriber(s)"));
}
