//! Gesture-to-progress interaction: converts a stream of drag samples into
//! progress updates on the [`TransitionEngine`] and a final commit-or-cancel
//! decision.
//!
//! The controller is a two-state machine. A `Began` sample asks the
//! [`TransitionProvider`] for a session and moves to Active; `Changed`
//! samples project the drag translation onto the direction and feed the
//! clamped percentage to the engine; `Ended`/`Cancelled` samples evaluate
//! the commit rule once and hand the remaining animation to a timed ramp.
//! Per-drag state never outlives the gesture.

use slidein_core::logging::targets;
use slidein_core::{Point, Rect, Size};

use crate::config::PresentationConfig;
use crate::direction::Direction;
use crate::engine::TransitionEngine;
use crate::error::{TransitionError, TransitionResult};
use crate::session::TransitionKind;

/// Phase of a drag-gesture sample, as reported by the host recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// The drag was recognized.
    Began,
    /// The drag moved.
    Changed,
    /// The finger lifted.
    Ended,
    /// The host cancelled the gesture (e.g. a multi-touch conflict).
    Cancelled,
}

/// One drag sample delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    /// Translation since the gesture started.
    pub translation: Point,
    /// Instantaneous velocity.
    pub velocity: Point,
    /// Bounds of the view the gesture is measured in, used to normalize
    /// the translation into a progress fraction.
    pub bounds: Size,
    /// Sample phase.
    pub phase: GesturePhase,
}

/// How the release decision weighs drag distance against velocity.
///
/// The two variants preserve the reference behavior: the edge-open gesture
/// lets a flick in the commit direction override an insufficient drag,
/// while the in-panel dismiss gesture considers distance only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitRule {
    /// Commit if the drag passed the distance threshold with no residual
    /// velocity, or if the release velocity points in the commit
    /// direction.
    EdgeOpen,
    /// Commit on the distance threshold alone.
    DistanceOnly,
}

impl CommitRule {
    /// Evaluate the rule for a final drag percentage and the
    /// direction-projected release velocity.
    pub fn should_commit(self, percent: f32, velocity_along: f32, minimum_ratio: f32) -> bool {
        match self {
            CommitRule::EdgeOpen => {
                (percent > minimum_ratio && velocity_along == 0.0) || velocity_along > 0.0
            }
            CommitRule::DistanceOnly => percent > minimum_ratio,
        }
    }
}

/// Everything the engine needs to start a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionRequest {
    pub kind: TransitionKind,
    pub direction: Direction,
    pub presented_frame: Rect,
    pub container: Size,
}

/// Produces a session request when a gesture begins a transition.
///
/// This is the presentation host's seam: it decides what gets presented
/// (or dismissed) and where, while the controller owns the gesture logic.
/// Any `FnMut() -> SessionRequest` closure implements it.
pub trait TransitionProvider {
    /// Describe the session the gesture should drive.
    fn session_request(&mut self) -> SessionRequest;
}

impl<F> TransitionProvider for F
where
    F: FnMut() -> SessionRequest,
{
    fn session_request(&mut self) -> SessionRequest {
        self()
    }
}

/// Controller phase: whether a drag currently owns a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControllerPhase {
    Idle,
    Active,
}

/// Ephemeral per-drag record, reset after every Ended/Cancelled phase.
#[derive(Debug, Clone, Copy, Default)]
struct DragRecord {
    accumulated_translation: Point,
    last_velocity: Point,
    bounds: Size,
}

/// Stateful classifier mapping drag samples to engine progress.
#[derive(Debug)]
pub struct InteractionController {
    direction: Direction,
    rule: CommitRule,
    config: PresentationConfig,
    phase: ControllerPhase,
    drag: DragRecord,
}

impl InteractionController {
    /// Create a controller for one gesture role.
    pub fn new(direction: Direction, rule: CommitRule, config: PresentationConfig) -> Self {
        Self {
            direction,
            rule,
            config,
            phase: ControllerPhase::Idle,
            drag: DragRecord::default(),
        }
    }

    /// The direction drags are projected onto.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether a drag currently owns a session.
    pub fn is_active(&self) -> bool {
        self.phase == ControllerPhase::Active
    }

    /// Feed one gesture sample.
    ///
    /// `provider` is consulted only on `Began`, to create the session.
    /// Errors ([`TransitionError::SessionAlreadyActive`] on a re-entrant
    /// `Began`, [`TransitionError::NoActiveSession`] on samples without a
    /// drag in flight) are inert conditions the caller may log and ignore.
    pub fn handle_sample(
        &mut self,
        engine: &mut TransitionEngine,
        provider: &mut dyn TransitionProvider,
        sample: &GestureSample,
    ) -> TransitionResult<()> {
        match sample.phase {
            GesturePhase::Began => self.on_began(engine, provider, sample),
            GesturePhase::Changed => self.on_changed(engine, sample),
            GesturePhase::Ended | GesturePhase::Cancelled => self.on_finished(engine, sample),
        }
    }

    /// Host-driven mid-gesture cancellation.
    ///
    /// Behaves like a `Cancelled` sample at the drag's last recorded
    /// state: the session ramps back to where it started and the
    /// controller returns to idle.
    pub fn cancel(&mut self, engine: &mut TransitionEngine) -> TransitionResult<()> {
        if self.phase != ControllerPhase::Active {
            return Err(TransitionError::NoActiveSession);
        }
        tracing::debug!(target: targets::INTERACTION, "gesture cancelled by host");
        self.phase = ControllerPhase::Idle;
        self.drag = DragRecord::default();
        engine.play_to_cancellation(self.config.animation_duration)
    }

    fn on_began(
        &mut self,
        engine: &mut TransitionEngine,
        provider: &mut dyn TransitionProvider,
        sample: &GestureSample,
    ) -> TransitionResult<()> {
        if self.phase == ControllerPhase::Active || engine.is_active() {
            // Overlapping recognizers: whichever began first owns the
            // session, later starts are rejected without touching it.
            return Err(TransitionError::SessionAlreadyActive);
        }

        let request = provider.session_request();
        engine.begin(
            request.kind,
            request.direction,
            request.presented_frame,
            request.container,
        )?;

        self.phase = ControllerPhase::Active;
        self.drag = DragRecord {
            accumulated_translation: sample.translation,
            last_velocity: sample.velocity,
            bounds: sample.bounds,
        };
        tracing::debug!(
            target: targets::INTERACTION,
            direction = ?self.direction,
            rule = ?self.rule,
            "interactive drag began"
        );
        Ok(())
    }

    fn on_changed(
        &mut self,
        engine: &mut TransitionEngine,
        sample: &GestureSample,
    ) -> TransitionResult<()> {
        if self.phase != ControllerPhase::Active {
            return Err(TransitionError::NoActiveSession);
        }
        self.record(sample);

        let percent = self.current_percent().clamp(0.0, 1.0);
        engine.set_progress(percent)?;
        Ok(())
    }

    fn on_finished(
        &mut self,
        engine: &mut TransitionEngine,
        sample: &GestureSample,
    ) -> TransitionResult<()> {
        if self.phase != ControllerPhase::Active {
            return Err(TransitionError::NoActiveSession);
        }
        self.record(sample);

        let percent = self.current_percent().clamp(0.0, 1.0);
        let velocity_along = self.direction.velocity_along(self.drag.last_velocity);
        let commit =
            self.rule
                .should_commit(percent, velocity_along, self.config.minimum_ratio_to_commit);
        tracing::debug!(
            target: targets::INTERACTION,
            percent,
            velocity_along,
            commit,
            "drag released"
        );

        // Reset before driving the engine so the drag state never leaks,
        // even if the engine rejects the ramp.
        self.phase = ControllerPhase::Idle;
        self.drag = DragRecord::default();

        if commit {
            engine.play_to_completion(self.config.animation_duration)
        } else {
            engine.play_to_cancellation(self.config.animation_duration)
        }
    }

    fn record(&mut self, sample: &GestureSample) {
        self.drag.accumulated_translation = sample.translation;
        self.drag.last_velocity = sample.velocity;
        self.drag.bounds = sample.bounds;
    }

    fn current_percent(&self) -> f32 {
        self.direction
            .percent(self.drag.accumulated_translation, self.drag.bounds)
    }
}
