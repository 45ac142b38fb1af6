//! The transition engine: owns one [`TransitionSession`] and drives it
//! from its initial to its final frame.
//!
//! Progress can come from two sources: a timed playback ramp
//! ([`TransitionEngine::play_to_completion`] /
//! [`TransitionEngine::play_to_cancellation`], advanced by
//! [`TransitionEngine::update`] each frame) or externally supplied values
//! ([`TransitionEngine::set_progress`]) while a drag is interactive. The
//! host observes both through the [`progress_changed`] and [`finished`]
//! signals.
//!
//! Every session terminates at progress exactly 0.0 or 1.0, never at a
//! fractional value.
//!
//! [`progress_changed`]: TransitionEngine::progress_changed
//! [`finished`]: TransitionEngine::finished

use std::time::{Duration, Instant};

use slidein_core::logging::targets;
use slidein_core::{Rect, Signal, Size};

use crate::config::PresentationConfig;
use crate::direction::Direction;
use crate::easing::{Easing, ease};
use crate::error::{TransitionError, TransitionResult};
use crate::session::{TransitionKind, TransitionOutcome, TransitionSession};

/// Payload of a progress notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressUpdate {
    /// Interpolated panel frame the host should lay the panel out at.
    pub frame: Rect,
    /// Transition progress in `[0, 1]`.
    pub progress: f32,
    /// Fraction of the panel on-screen (0 hidden, 1 presented),
    /// independent of transition kind. Backdrop dimming binds to this.
    pub shown_fraction: f32,
}

/// A timed ramp from the progress at its start toward a terminal value.
#[derive(Debug, Clone, Copy)]
struct Playback {
    from: f32,
    /// Terminal progress, exactly 0.0 or 1.0.
    target: f32,
    easing: Easing,
    started: Instant,
    duration: Duration,
}

impl Playback {
    /// Raw time fraction elapsed, clamped to `[0, 1]`. A zero duration
    /// completes immediately.
    fn time_fraction(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

/// Drives one transition session between its hidden and presented frames.
pub struct TransitionEngine {
    config: PresentationConfig,
    session: Option<TransitionSession>,
    playback: Option<Playback>,
    progress_changed: Signal<ProgressUpdate>,
    finished: Signal<TransitionOutcome>,
}

impl TransitionEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: PresentationConfig) -> Self {
        Self {
            config,
            session: None,
            playback: None,
            progress_changed: Signal::new(),
            finished: Signal::new(),
        }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &PresentationConfig {
        &self.config
    }

    /// Signal emitted on every progress change, including the initial
    /// zero-progress update when a session begins.
    pub fn progress_changed(&self) -> &Signal<ProgressUpdate> {
        &self.progress_changed
    }

    /// Signal emitted when a session reaches its terminal state.
    pub fn finished(&self) -> &Signal<TransitionOutcome> {
        &self.finished
    }

    /// Whether a session is in flight.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Whether a timed playback ramp is running.
    pub fn is_playing(&self) -> bool {
        self.playback.is_some()
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&TransitionSession> {
        self.session.as_ref()
    }

    /// Current progress of the active session.
    pub fn current_progress(&self) -> Option<f32> {
        self.session.as_ref().map(|s| s.current_progress())
    }

    /// Begin a presentation or dismissal.
    ///
    /// Computes the hidden frame from the direction, starts the session at
    /// progress 0 and emits an initial progress update. Fails with
    /// [`TransitionError::InvalidGeometry`] for a non-positive-area
    /// presented frame and [`TransitionError::SessionAlreadyActive`] if a
    /// session is already in flight (the existing session is untouched).
    pub fn begin(
        &mut self,
        kind: TransitionKind,
        direction: Direction,
        presented_frame: Rect,
        container: Size,
    ) -> TransitionResult<()> {
        if self.session.is_some() {
            return Err(TransitionError::SessionAlreadyActive);
        }

        let session = TransitionSession::new(kind, direction, presented_frame, container)?;
        tracing::debug!(
            target: targets::ENGINE,
            ?kind,
            ?direction,
            ?presented_frame,
            "transition session started"
        );

        self.session = Some(session);
        self.playback = None;
        self.emit_progress();
        Ok(())
    }

    /// Store an externally driven progress value, clamped to `[0, 1]`, and
    /// notify the host with the interpolated frame.
    ///
    /// Returns the clamped value. Errors with
    /// [`TransitionError::NoActiveSession`] if no session is in flight.
    pub fn set_progress(&mut self, value: f32) -> TransitionResult<f32> {
        let session = self
            .session
            .as_mut()
            .ok_or(TransitionError::NoActiveSession)?;
        let clamped = session.set_progress(value);
        self.emit_progress();
        Ok(clamped)
    }

    /// Ramp the session's remaining progress to 1.0 over `duration`.
    ///
    /// The outcome is reported by [`TransitionEngine::update`] once the
    /// ramp finishes.
    pub fn play_to_completion(&mut self, duration: Duration) -> TransitionResult<()> {
        self.start_playback(1.0, duration)
    }

    /// Ramp progress back to 0.0 over `duration`, returning the panel to
    /// the state the session started from.
    ///
    /// Supersedes any in-flight completion ramp for the same session; the
    /// most recent ramp wins.
    pub fn play_to_cancellation(&mut self, duration: Duration) -> TransitionResult<()> {
        self.start_playback(0.0, duration)
    }

    fn start_playback(&mut self, target: f32, duration: Duration) -> TransitionResult<()> {
        let session = self
            .session
            .as_ref()
            .ok_or(TransitionError::NoActiveSession)?;
        tracing::debug!(
            target: targets::ENGINE,
            from = session.current_progress(),
            to = target,
            ?duration,
            "playback ramp started"
        );
        self.playback = Some(Playback {
            from: session.current_progress(),
            target,
            easing: self.config.easing,
            started: Instant::now(),
            duration,
        });
        Ok(())
    }

    /// Advance the active playback ramp.
    ///
    /// Call once per frame while [`TransitionEngine::is_playing`]. Emits a
    /// progress update each call; when the ramp reaches its target, the
    /// progress is snapped to exactly 0.0 or 1.0, the session is
    /// discarded, the [`finished`] signal fires and the outcome is
    /// returned. Returns `None` while the ramp is still running or when
    /// there is nothing to advance.
    ///
    /// [`finished`]: TransitionEngine::finished
    pub fn update(&mut self) -> Option<TransitionOutcome> {
        let playback = self.playback?;
        self.session.as_ref()?;

        let t = playback.time_fraction(Instant::now());
        if t >= 1.0 {
            return self.finish_at(playback.target);
        }

        let progress =
            playback.from + (playback.target - playback.from) * ease(playback.easing, t);
        if let Some(session) = self.session.as_mut() {
            session.set_progress(progress);
        }
        self.emit_progress();
        None
    }

    /// Land the session at an exact terminal progress and discard it.
    fn finish_at(&mut self, terminal: f32) -> Option<TransitionOutcome> {
        let mut session = self.session.take()?;
        self.playback = None;

        session.set_progress(terminal);
        let update = ProgressUpdate {
            frame: session.current_frame(),
            progress: session.current_progress(),
            shown_fraction: session.shown_fraction(),
        };
        let outcome = session.outcome_at(terminal);
        tracing::debug!(
            target: targets::ENGINE,
            ?outcome,
            progress = terminal,
            "transition session finished"
        );

        self.progress_changed.emit(update);
        self.finished.emit(outcome);
        Some(outcome)
    }

    fn emit_progress(&self) {
        if let Some(session) = self.session.as_ref() {
            self.progress_changed.emit(ProgressUpdate {
                frame: session.current_frame(),
                progress: session.current_progress(),
                shown_fraction: session.shown_fraction(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const CONTAINER: Size = Size::new(400.0, 800.0);

    fn engine() -> TransitionEngine {
        TransitionEngine::new(PresentationConfig::default().with_easing(Easing::Linear))
    }

    fn begin_presenting(engine: &mut TransitionEngine, direction: Direction) {
        let presented = direction.presented_frame(CONTAINER);
        engine
            .begin(TransitionKind::Presenting, direction, presented, CONTAINER)
            .expect("begin");
    }

    #[test]
    fn test_begin_rejects_empty_frame() {
        let mut engine = engine();
        let err = engine
            .begin(
                TransitionKind::Presenting,
                Direction::Left,
                Rect::ZERO,
                CONTAINER,
            )
            .unwrap_err();
        assert!(matches!(err, TransitionError::InvalidGeometry { .. }));
        assert!(!engine.is_active());
    }

    #[test]
    fn test_begin_rejects_second_session() {
        let mut engine = engine();
        begin_presenting(&mut engine, Direction::Left);
        engine.set_progress(0.4).unwrap();

        let presented = Direction::Right.presented_frame(CONTAINER);
        let err = engine
            .begin(
                TransitionKind::Presenting,
                Direction::Right,
                presented,
                CONTAINER,
            )
            .unwrap_err();
        assert_eq!(err, TransitionError::SessionAlreadyActive);
        // The original session's progress is unchanged.
        assert_eq!(engine.current_progress(), Some(0.4));
        assert_eq!(engine.session().unwrap().direction(), Direction::Left);
    }

    #[test]
    fn test_set_progress_without_session() {
        let mut engine = engine();
        assert_eq!(
            engine.set_progress(0.5).unwrap_err(),
            TransitionError::NoActiveSession
        );
    }

    #[test]
    fn test_set_progress_clamps_and_notifies() {
        let mut engine = engine();
        let updates = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&updates);
        engine.progress_changed().connect(move |u: &ProgressUpdate| {
            sink.borrow_mut().push(*u);
        });

        begin_presenting(&mut engine, Direction::Right);
        assert_eq!(engine.set_progress(1.3).unwrap(), 1.0);
        assert_eq!(engine.set_progress(-0.2).unwrap(), 0.0);

        let updates = updates.borrow();
        // Initial update plus the two explicit ones.
        assert_eq!(updates.len(), 3);
        assert_eq!(updates[0].progress, 0.0);
        assert_eq!(updates[1].progress, 1.0);
        assert_eq!(updates[2].progress, 0.0);
    }

    #[test]
    fn test_set_progress_idempotent_frame() {
        let mut engine = engine();
        begin_presenting(&mut engine, Direction::Bottom);
        engine.set_progress(0.6).unwrap();
        let first = engine.session().unwrap().current_frame();
        engine.set_progress(0.6).unwrap();
        let second = engine.session().unwrap().current_frame();
        assert_eq!(first, second);
    }

    #[test]
    fn test_full_progress_lands_on_presented_frame() {
        let mut engine = engine();
        begin_presenting(&mut engine, Direction::Right);
        engine.set_progress(1.0).unwrap();
        let session = engine.session().unwrap();
        assert_eq!(session.current_frame(), session.presented_frame());
    }

    #[test]
    fn test_play_to_completion_terminates_at_one() {
        let mut engine = engine();
        begin_presenting(&mut engine, Direction::Left);
        engine.set_progress(0.3).unwrap();

        let last = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&last);
        engine.progress_changed().connect(move |u: &ProgressUpdate| {
            *sink.borrow_mut() = Some(*u);
        });

        engine.play_to_completion(Duration::ZERO).unwrap();
        assert!(engine.is_playing());

        let outcome = engine.update().expect("ramp finishes");
        assert_eq!(outcome, TransitionOutcome::Shown);
        assert_eq!(last.borrow().unwrap().progress, 1.0);
        assert!(!engine.is_active());
        assert!(!engine.is_playing());
    }

    #[test]
    fn test_play_to_cancellation_terminates_at_zero() {
        let mut engine = engine();
        begin_presenting(&mut engine, Direction::Left);
        engine.set_progress(0.8).unwrap();

        let last = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&last);
        engine.progress_changed().connect(move |u: &ProgressUpdate| {
            *sink.borrow_mut() = Some(*u);
        });

        engine.play_to_cancellation(Duration::ZERO).unwrap();
        let outcome = engine.update().expect("ramp finishes");
        assert_eq!(outcome, TransitionOutcome::Hidden);
        assert_eq!(last.borrow().unwrap().progress, 0.0);
        assert!(!engine.is_active());
    }

    #[test]
    fn test_cancellation_supersedes_completion() {
        let mut engine = engine();
        begin_presenting(&mut engine, Direction::Left);
        engine.set_progress(0.5).unwrap();

        engine.play_to_completion(Duration::from_secs(60)).unwrap();
        engine.play_to_cancellation(Duration::ZERO).unwrap();

        // The most recent ramp wins.
        let outcome = engine.update().expect("ramp finishes");
        assert_eq!(outcome, TransitionOutcome::Hidden);
    }

    #[test]
    fn test_dismissing_outcomes() {
        let presented = Direction::Left.presented_frame(CONTAINER);

        let mut engine = engine();
        engine
            .begin(
                TransitionKind::Dismissing,
                Direction::Left,
                presented,
                CONTAINER,
            )
            .unwrap();
        engine.play_to_completion(Duration::ZERO).unwrap();
        assert_eq!(engine.update(), Some(TransitionOutcome::Hidden));

        engine
            .begin(
                TransitionKind::Dismissing,
                Direction::Left,
                presented,
                CONTAINER,
            )
            .unwrap();
        engine.play_to_cancellation(Duration::ZERO).unwrap();
        assert_eq!(engine.update(), Some(TransitionOutcome::Shown));
    }

    #[test]
    fn test_playback_without_session() {
        let mut engine = engine();
        assert_eq!(
            engine.play_to_completion(Duration::ZERO).unwrap_err(),
            TransitionError::NoActiveSession
        );
        assert_eq!(
            engine.play_to_cancellation(Duration::ZERO).unwrap_err(),
            TransitionError::NoActiveSession
        );
        assert_eq!(engine.update(), None);
    }

    #[test]
    fn test_finished_signal_fires_once() {
        let mut engine = engine();
        begin_presenting(&mut engine, Direction::Top);

        let outcomes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&outcomes);
        engine.finished().connect(move |o: &TransitionOutcome| {
            sink.borrow_mut().push(*o);
        });

        engine.play_to_completion(Duration::ZERO).unwrap();
        assert!(engine.update().is_some());
        assert_eq!(engine.update(), None);
        assert_eq!(*outcomes.borrow(), vec![TransitionOutcome::Shown]);
    }
}
