//! Headless walkthrough of the drawer controller.
//!
//! This example shows how to:
//! - Host a drawer in a `ViewStack` with plain in-memory surfaces
//! - Feed raw pointer events through the driver's gesture tracker
//! - Observe transition events and status bar requests
//! - Await an animated close on the driver's executor
//!
//! Run with: RUST_LOG=debug cargo run -p sidedrawer --example headless_drawer

use sidedrawer::logging;
use sidedrawer::prelude::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn drag(driver: &mut DrawerDriver<ViewStack>, from: Vec2, to: Vec2) {
    driver.pointer(PointerEvent::Down(from));
    driver.pointer(PointerEvent::Moved(from + Vec2::new(12.0, 0.0)));
    driver.pointer(PointerEvent::Moved(to));
    driver.pointer(PointerEvent::Up(to));
    let frames = driver.settle(FRAME);
    println!("  settled after {} frames", frames);
}

fn report(driver: &DrawerDriver<ViewStack>) {
    let controller = driver.controller();
    println!(
        "  offset={} open={} tap_enabled={} status_bar_hidden={}",
        controller.offset(),
        controller.is_open(),
        controller.tap_recognizer().is_enabled(),
        controller.host().is_status_bar_hidden(),
    );
}

fn main() -> Result<(), DrawerError> {
    logging::init();

    let host = ViewStack::new(Frame::new(0.0, 0.0, 390.0, 844.0));
    let config = DrawerConfig::new().drawer_width(280.0).shadow(Shadow::default());
    let mut controller = DrawerController::with_config(host, config)?;
    controller.set_top_surface(BasicSurface::new("inbox"));
    controller.set_left_surface(BasicSurface::new("mailboxes"));
    controller.subscribe(|event| println!("  -> {:?}", event.state()));
    controller.view_will_appear();

    println!("Hierarchy (bottom to top): {:?}", controller.host().subviews());

    let mut driver = DrawerDriver::new(controller);

    println!("\n=== Short drag: snaps back ===");
    drag(&mut driver, Vec2::new(5.0, 400.0), Vec2::new(100.0, 410.0));
    report(&driver);

    println!("\n=== Long drag: snaps open ===");
    drag(&mut driver, Vec2::new(5.0, 400.0), Vec2::new(220.0, 380.0));
    report(&driver);

    println!("\n=== Vertical scroll: ignored ===");
    drag(&mut driver, Vec2::new(300.0, 600.0), Vec2::new(320.0, 200.0));
    report(&driver);

    println!("\n=== Async close ===");
    let closing = driver.close();
    driver.settle(FRAME);
    println!("  close finished: {}", pollster::block_on(closing));
    report(&driver);

    println!(
        "\nStatus bar requests: {}",
        driver.controller().host().status_bar_requests()
    );

    Ok(())
}
