//! Side-menu walkthrough with synthetic gesture input.
//!
//! Replays the three interactions of the reference side menu against a
//! presenter: an edge-pan that commits the open, an in-panel drag that
//! falls short of the dismiss threshold and snaps back, and a backdrop tap
//! that dismisses for real. Progress updates are printed from a connected
//! slot; in a real host they would drive panel layout and backdrop
//! opacity.
//!
//! Run with `RUST_LOG=slidein=debug cargo run --example side_menu` to see
//! the engine's tracing output as well.

use std::time::Duration;

use slidein::{
    Direction, GesturePhase, GestureSample, PresentationConfig, SlidePresenter, TransitionOutcome,
};
use slidein_core::{Point, Size};

const CONTAINER: Size = Size::new(400.0, 800.0);

fn main() {
    tracing_subscriber::fmt::init();

    let config = PresentationConfig::default().with_animation_duration(Duration::from_millis(120));
    let mut presenter = SlidePresenter::new(Direction::Right, CONTAINER, config);

    presenter.engine().progress_changed().connect(|update| {
        println!(
            "  frame x={:7.2}  progress={:.2}  dimming={:.2}",
            update.frame.origin.x,
            update.progress,
            update.shown_fraction * slidein::MAX_DIMMING_ALPHA,
        );
    });
    presenter.engine().finished().connect(|outcome| {
        println!("  -> {outcome:?}");
    });

    println!("edge-pan open (drag past the halfway mark, release):");
    for (phase, tx) in [
        (GesturePhase::Began, 0.0),
        (GesturePhase::Changed, 90.0),
        (GesturePhase::Changed, 180.0),
        (GesturePhase::Changed, 250.0),
        (GesturePhase::Ended, 250.0),
    ] {
        presenter
            .handle_edge_pan(&drag(phase, tx))
            .expect("edge pan sample");
    }
    pump(&mut presenter);
    assert!(presenter.is_presented());

    println!("dismiss drag that falls short (snaps back):");
    for (phase, tx) in [
        (GesturePhase::Began, 0.0),
        (GesturePhase::Changed, 60.0),
        (GesturePhase::Ended, 60.0),
    ] {
        presenter
            .handle_dismiss_pan(&drag(phase, tx))
            .expect("dismiss pan sample");
    }
    pump(&mut presenter);
    assert!(presenter.is_presented());

    println!("backdrop tap:");
    presenter.handle_backdrop_tap();
    let outcome = pump(&mut presenter);
    assert_eq!(outcome, Some(TransitionOutcome::Hidden));
    assert!(!presenter.is_presented());
}

fn drag(phase: GesturePhase, tx: f32) -> GestureSample {
    GestureSample {
        translation: Point::new(tx, 0.0),
        velocity: Point::ZERO,
        bounds: CONTAINER,
        phase,
    }
}

/// Pump the playback ramp at ~60 fps until the session finishes.
fn pump(presenter: &mut SlidePresenter) -> Option<TransitionOutcome> {
    loop {
        if let Some(outcome) = presenter.update() {
            return Some(outcome);
        }
        if !presenter.engine().is_playing() {
            return None;
        }
        std::thread::sleep(Duration::from_millis(16));
    }
}
