//! Save a composition to JSON and rebuild it into a fresh scene.
//!
//! Run with `cargo run --example save_load`.

use arcadekit::prelude::*;

fn main() {
    env_logger::init();

    let mut composer = SceneComposer::new(Box::new(MemoryScene::new()));
    composer.install_defaults();
    composer.set_anchor_point(Vec2::new(0.5, 0.5));
    composer.set_body_type(BodyType::Dynamic);
    composer.set_friction(0.75);

    let data = save_composition(&composer);
    let json = serde_json::to_string_pretty(&data).expect("composition serializes");
    println!("{json}");

    let mut restored = SceneComposer::new(Box::new(MemoryScene::new()));
    load_composition(&mut restored, &data);

    println!(
        "restored {} components, anchor {:?}, body friction {:?}",
        restored.entity().len(),
        restored.scene().anchor(),
        restored.scene().body().map(|b| b.friction)
    );
}
