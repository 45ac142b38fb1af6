//! Per-transition session state.
//!
//! A [`TransitionSession`] represents one in-flight presentation or
//! dismissal. It is created when the transition begins, mutated by progress
//! updates while it runs, and discarded at its terminal state; nothing
//! survives past a single transition.

use slidein_core::{Rect, Size};

use crate::direction::Direction;
use crate::error::{TransitionError, TransitionResult};

/// Whether a transition brings the panel on-screen or takes it off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Panel appearing: hidden frame to presented frame.
    Presenting,
    /// Panel disappearing: presented frame to hidden frame.
    Dismissing,
}

/// Terminal state a finished transition left the panel in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The panel ended on-screen.
    Shown,
    /// The panel ended offscreen.
    Hidden,
}

/// One in-flight presentation or dismissal.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionSession {
    kind: TransitionKind,
    direction: Direction,
    presented_frame: Rect,
    hidden_frame: Rect,
    current_progress: f32,
}

impl TransitionSession {
    /// Create a session for a presented frame inside a container.
    ///
    /// The hidden frame is derived by offsetting the presented frame fully
    /// off the direction's edge. Fails with
    /// [`TransitionError::InvalidGeometry`] if the presented frame has
    /// non-positive area. The container size is accepted as-is; a
    /// degenerate container yields a degenerate session, which is rejected
    /// by the same area check.
    pub fn new(
        kind: TransitionKind,
        direction: Direction,
        presented_frame: Rect,
        _container: Size,
    ) -> TransitionResult<Self> {
        if presented_frame.is_empty() {
            return Err(TransitionError::InvalidGeometry {
                frame: presented_frame,
            });
        }
        Ok(Self {
            kind,
            direction,
            presented_frame,
            hidden_frame: direction.hidden_frame(presented_frame),
            current_progress: 0.0,
        })
    }

    /// The transition kind.
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// The slide direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Target on-screen frame.
    pub fn presented_frame(&self) -> Rect {
        self.presented_frame
    }

    /// Derived offscreen frame.
    pub fn hidden_frame(&self) -> Rect {
        self.hidden_frame
    }

    /// Current completion fraction in `[0, 1]`.
    pub fn current_progress(&self) -> f32 {
        self.current_progress
    }

    /// Frame the transition starts from, chosen by kind.
    pub fn initial_frame(&self) -> Rect {
        match self.kind {
            TransitionKind::Presenting => self.hidden_frame,
            TransitionKind::Dismissing => self.presented_frame,
        }
    }

    /// Frame the transition ends at, chosen by kind.
    pub fn final_frame(&self) -> Rect {
        match self.kind {
            TransitionKind::Presenting => self.presented_frame,
            TransitionKind::Dismissing => self.hidden_frame,
        }
    }

    /// Store a progress value, clamped to `[0, 1]`.
    ///
    /// Returns the clamped value.
    pub(crate) fn set_progress(&mut self, value: f32) -> f32 {
        self.current_progress = value.clamp(0.0, 1.0);
        self.current_progress
    }

    /// Interpolated frame at a progress value (clamped to `[0, 1]`).
    pub fn frame_at(&self, progress: f32) -> Rect {
        Rect::lerp(
            self.initial_frame(),
            self.final_frame(),
            progress.clamp(0.0, 1.0),
        )
    }

    /// Frame at the session's current progress.
    pub fn current_frame(&self) -> Rect {
        self.frame_at(self.current_progress)
    }

    /// Terminal outcome if the session ends at the given progress.
    ///
    /// Progress 1 lands in the kind's target state; progress 0 lands back
    /// where the session started.
    pub fn outcome_at(&self, terminal_progress: f32) -> TransitionOutcome {
        let completed = terminal_progress >= 1.0;
        match (self.kind, completed) {
            (TransitionKind::Presenting, true) => TransitionOutcome::Shown,
            (TransitionKind::Presenting, false) => TransitionOutcome::Hidden,
            (TransitionKind::Dismissing, true) => TransitionOutcome::Hidden,
            (TransitionKind::Dismissing, false) => TransitionOutcome::Shown,
        }
    }

    /// Fraction of the panel currently on-screen, independent of kind.
    ///
    /// 0 is fully hidden, 1 is fully presented. Hosts bind backdrop
    /// dimming to this value.
    pub fn shown_fraction(&self) -> f32 {
        match self.kind {
            TransitionKind::Presenting => self.current_progress,
            TransitionKind::Dismissing => 1.0 - self.current_progress,
        }
    }
}
