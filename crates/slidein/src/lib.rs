//! Slide-in panel presentation transitions.
//!
//! This crate implements the moving parts of a side-menu style modal
//! presentation, independent of any particular rendering host:
//!
//! - **Direction model**: which container edge a panel slides from, and
//!   the presented/hidden frame geometry derived from it ([`Direction`])
//! - **Transition Engine**: owns one [`TransitionSession`] and drives it
//!   between its hidden and presented frames, either on a timed eased ramp
//!   or from externally supplied progress values ([`TransitionEngine`])
//! - **Gesture-to-Progress Controller**: maps drag samples to progress and
//!   applies the commit-or-cancel rule when the finger lifts
//!   ([`InteractionController`])
//! - **Presenter**: the composition root wiring the above into the
//!   edge-pan-to-open / pan-or-tap-to-dismiss side-menu behavior
//!   ([`SlidePresenter`])
//!
//! The host supplies gesture samples and a container size, lays the panel
//! out at the frames delivered through [`TransitionEngine::progress_changed`],
//! and pumps [`TransitionEngine::update`] (or [`SlidePresenter::update`])
//! once per frame while a timed ramp plays. Rendering, hit-testing and
//! gesture recognition stay on the host side.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use slidein::{
//!     Direction, GesturePhase, GestureSample, PresentationConfig, SlidePresenter,
//! };
//! use slidein_core::{Point, Size};
//!
//! let container = Size::new(400.0, 800.0);
//! let config = PresentationConfig::default().with_animation_duration(Duration::ZERO);
//! let mut presenter = SlidePresenter::new(Direction::Right, container, config);
//!
//! presenter.engine().progress_changed().connect(|_update| {
//!     // Lay the panel out at `_update.frame`, dim the backdrop by
//!     // `_update.shown_fraction`.
//! });
//!
//! // An edge drag three quarters of the way across commits the open.
//! for (phase, tx) in [
//!     (GesturePhase::Began, 0.0),
//!     (GesturePhase::Changed, 300.0),
//!     (GesturePhase::Ended, 300.0),
//! ] {
//!     presenter
//!         .handle_edge_pan(&GestureSample {
//!             translation: Point::new(tx, 0.0),
//!             velocity: Point::ZERO,
//!             bounds: container,
//!             phase,
//!         })
//!         .unwrap();
//! }
//! while presenter.update().is_none() {}
//! assert!(presenter.is_presented());
//! ```

pub mod config;
pub mod direction;
pub mod easing;
pub mod engine;
pub mod error;
pub mod interaction;
pub mod presenter;
pub mod session;

pub use config::{
    DEFAULT_ANIMATION_DURATION, DEFAULT_MINIMUM_RATIO_TO_COMMIT, PresentationConfig,
};
pub use direction::{Direction, Edge, PANEL_RATIO};
pub use easing::{Easing, ease, lerp_eased};
pub use engine::{ProgressUpdate, TransitionEngine};
pub use error::{TransitionError, TransitionResult};
pub use interaction::{
    CommitRule, GesturePhase, GestureSample, InteractionController, SessionRequest,
    TransitionProvider,
};
pub use presenter::{MAX_DIMMING_ALPHA, SlidePresenter};
pub use session::{TransitionKind, TransitionOutcome, TransitionSession};
