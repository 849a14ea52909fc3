//! Headless tour of the composition core: build the default editor set,
//! click around, change settings, and print what the scene ends up holding.
//!
//! Run with `cargo run --example playground` (add `RUST_LOG=warn` to see the
//! degradation warnings when components go missing).

use arcadekit::prelude::*;

fn main() {
    env_logger::init();

    let mut composer = SceneComposer::new(Box::new(MemoryScene::new()));
    composer.observe(|entity, change| {
        println!("composition changed: {change:?} ({} components)", entity.len());
    });

    composer.install_defaults();

    // A few clicks on the scene; each press drops an emoji node.
    for x in [100.0, 250.0, 400.0] {
        composer.apply(Command::Mouse(MouseEvent {
            phase: MousePhase::Down,
            position: Vec2::new(x, 300.0),
        }));
    }
    println!("nodes after clicks: {}", composer.scene().node_count());

    // Reshape the scene; the physics body follows the frame.
    composer.apply(Command::SetAnchor(Vec2::new(0.5, 0.5)));
    composer.apply(Command::SetBodyType(BodyType::Dynamic));
    composer.apply(Command::SetFriction(0.4));
    composer.apply(Command::SetBodyOutline(true));

    let body = composer.scene().body().expect("body should exist");
    println!(
        "body: {:?} frame={:?} friction={} outline={}",
        body.representation, body.frame, body.friction, body.outline_width
    );

    // Out-of-range values degrade instead of failing.
    let accepted = composer.apply(Command::SetAnchor(Vec2::new(0.5, 1.5)));
    println!(
        "invalid anchor accepted: {accepted}, scene anchor still {:?}",
        composer.scene().anchor()
    );

    // Remove the body; friction degrades gracefully and recovers later.
    composer.apply(Command::RemoveComponent(ComponentKind::PhysicsBody));
    println!(
        "friction compliant without body: {:?}",
        composer.check_compliance(ComponentKind::Friction)
    );
    composer.apply(Command::AddComponent(ComponentKind::PhysicsBody));
    println!(
        "friction after body returned: {:?}",
        composer.scene().body().map(|b| b.friction)
    );
}
