//! Presentation composition root.
//!
//! [`SlidePresenter`] wires the pieces together the way a host application
//! uses them: one engine, an edge-pan controller that opens the panel and a
//! pan controller that dismisses it, plus the non-interactive present and
//! dismiss paths and the backdrop (dimming view) behavior. The host owns
//! rendering; it connects to the engine's signals, feeds gesture samples in
//! and pumps [`SlidePresenter::update`] once per frame while a transition
//! plays.

use slidein_core::logging::targets;
use slidein_core::{Rect, Size};

use crate::config::PresentationConfig;
use crate::direction::{Direction, Edge};
use crate::engine::TransitionEngine;
use crate::error::{TransitionError, TransitionResult};
use crate::interaction::{CommitRule, GestureSample, InteractionController, SessionRequest};
use crate::session::{TransitionKind, TransitionOutcome};

/// Backdrop opacity when the panel is fully presented.
pub const MAX_DIMMING_ALPHA: f32 = 0.5;

/// Coordinates one slide-in panel: engine, gesture controllers and the
/// panel's presented/hidden state across sessions.
pub struct SlidePresenter {
    direction: Direction,
    config: PresentationConfig,
    container: Size,
    engine: TransitionEngine,
    open_controller: InteractionController,
    dismiss_controller: InteractionController,
    presented: bool,
}

impl SlidePresenter {
    /// Create a presenter for a panel sliding in from `direction` inside a
    /// container of the given size.
    pub fn new(direction: Direction, container: Size, config: PresentationConfig) -> Self {
        Self {
            direction,
            config,
            container,
            engine: TransitionEngine::new(config),
            open_controller: InteractionController::new(direction, CommitRule::EdgeOpen, config),
            dismiss_controller: InteractionController::new(
                direction,
                CommitRule::DistanceOnly,
                config,
            ),
            presented: false,
        }
    }

    /// The slide direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The container edge the host's edge-pan recognizer should watch.
    pub fn edge(&self) -> Edge {
        self.direction.edge()
    }

    /// Whether the panel currently rests on-screen.
    pub fn is_presented(&self) -> bool {
        self.presented
    }

    /// The underlying engine, for connecting progress/finished slots.
    pub fn engine(&self) -> &TransitionEngine {
        &self.engine
    }

    /// On-screen frame the panel occupies when presented, for the current
    /// container size.
    pub fn presented_frame(&self) -> Rect {
        self.direction.presented_frame(self.container)
    }

    /// Layout-pass hook: record a new container size.
    ///
    /// Affects the frames of subsequently started sessions; an in-flight
    /// session keeps the geometry it was created with.
    pub fn set_container_size(&mut self, container: Size) {
        self.container = container;
    }

    /// Backdrop opacity for the current state.
    ///
    /// Fades in lockstep with the shown fraction of the panel, from 0 when
    /// hidden to [`MAX_DIMMING_ALPHA`] when fully presented.
    pub fn dimming_alpha(&self) -> f32 {
        let shown = match self.engine.session() {
            Some(session) => session.shown_fraction(),
            None if self.presented => 1.0,
            None => 0.0,
        };
        shown * MAX_DIMMING_ALPHA
    }

    /// Present the panel non-interactively.
    pub fn present(&mut self) -> TransitionResult<()> {
        self.begin_timed(TransitionKind::Presenting)
    }

    /// Dismiss the panel non-interactively.
    pub fn dismiss(&mut self) -> TransitionResult<()> {
        self.begin_timed(TransitionKind::Dismissing)
    }

    /// Tap on the dimming backdrop: dismiss the panel.
    ///
    /// Inert when no panel is presented or another gesture already owns a
    /// session (overlapping recognizers: first to fire wins).
    pub fn handle_backdrop_tap(&mut self) {
        if !self.presented || self.engine.is_active() {
            tracing::debug!(target: targets::PRESENTER, "backdrop tap ignored");
            return;
        }
        if let Err(err) = self.dismiss() {
            tracing::debug!(target: targets::PRESENTER, %err, "backdrop dismiss rejected");
        }
    }

    /// Feed an edge-pan sample (interactive open).
    ///
    /// The inert conditions (`SessionAlreadyActive`, `NoActiveSession`)
    /// are logged and swallowed; geometry errors are returned.
    pub fn handle_edge_pan(&mut self, sample: &GestureSample) -> TransitionResult<()> {
        let request = SessionRequest {
            kind: TransitionKind::Presenting,
            direction: self.direction,
            presented_frame: self.direction.presented_frame(self.container),
            container: self.container,
        };
        let mut provider = move || request;
        let result = self
            .open_controller
            .handle_sample(&mut self.engine, &mut provider, sample);
        Self::filter_inert(result)
    }

    /// Feed a pan sample from inside the open panel (interactive dismiss).
    pub fn handle_dismiss_pan(&mut self, sample: &GestureSample) -> TransitionResult<()> {
        let request = SessionRequest {
            kind: TransitionKind::Dismissing,
            direction: self.direction,
            presented_frame: self.direction.presented_frame(self.container),
            container: self.container,
        };
        let mut provider = move || request;
        let result = self
            .dismiss_controller
            .handle_sample(&mut self.engine, &mut provider, sample);
        Self::filter_inert(result)
    }

    /// Cancel whichever interactive drag is in flight.
    pub fn cancel_gesture(&mut self) {
        let result = if self.open_controller.is_active() {
            self.open_controller.cancel(&mut self.engine)
        } else if self.dismiss_controller.is_active() {
            self.dismiss_controller.cancel(&mut self.engine)
        } else {
            Err(TransitionError::NoActiveSession)
        };
        if let Err(err) = result {
            tracing::debug!(target: targets::PRESENTER, %err, "gesture cancel ignored");
        }
    }

    /// Advance the active playback ramp; call once per frame.
    ///
    /// Tracks the panel's terminal state when a session finishes.
    pub fn update(&mut self) -> Option<TransitionOutcome> {
        let outcome = self.engine.update()?;
        self.presented = outcome == TransitionOutcome::Shown;
        Some(outcome)
    }

    fn begin_timed(&mut self, kind: TransitionKind) -> TransitionResult<()> {
        self.engine.begin(
            kind,
            self.direction,
            self.direction.presented_frame(self.container),
            self.container,
        )?;
        self.engine.play_to_completion(self.config.animation_duration)
    }

    fn filter_inert(result: TransitionResult<()>) -> TransitionResult<()> {
        match result {
            Err(
                err @ (TransitionError::SessionAlreadyActive | TransitionError::NoActiveSession),
            ) => {
                tracing::debug!(target: targets::PRESENTER, %err, "gesture sample ignored");
                Ok(())
            }
            other => other,
        }
    }
}
