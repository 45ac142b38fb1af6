//! Configuration for slide-in presentations.

use std::time::Duration;

use crate::easing::Easing;

/// Default fraction of the drag that must complete before a release
/// commits the transition.
pub const DEFAULT_MINIMUM_RATIO_TO_COMMIT: f32 = 0.5;

/// Default duration of the timed portion of a transition.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(300);

/// Configuration for one presentation session.
///
/// Supplied by the host at construction and never mutated by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentationConfig {
    /// Drag fraction in `(0, 1)` beyond which a release commits rather
    /// than cancels.
    pub minimum_ratio_to_commit: f32,
    /// Duration of a full non-interactive transition. Timed ramps after a
    /// partial drag cover only the remaining fraction of progress.
    pub animation_duration: Duration,
    /// Easing curve applied to timed playback ramps.
    pub easing: Easing,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            minimum_ratio_to_commit: DEFAULT_MINIMUM_RATIO_TO_COMMIT,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            easing: Easing::default(),
        }
    }
}

impl PresentationConfig {
    /// Set the commit ratio, clamped to `(0, 1)`.
    pub fn with_minimum_ratio_to_commit(mut self, ratio: f32) -> Self {
        self.minimum_ratio_to_commit = ratio.clamp(f32::EPSILON, 1.0 - f32::EPSILON);
        self
    }

    /// Set the animation duration.
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Set the easing curve for timed ramps.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PresentationConfig::default();
        assert_eq!(config.minimum_ratio_to_commit, 0.5);
        assert_eq!(config.animation_duration, Duration::from_millis(300));
        assert_eq!(config.easing, Easing::EaseInOut);
    }

    #[test]
    fn test_builders() {
        let config = PresentationConfig::default()
            .with_minimum_ratio_to_commit(0.3)
            .with_animation_duration(Duration::from_millis(150))
            .with_easing(Easing::Linear);
        assert_eq!(config.minimum_ratio_to_commit, 0.3);
        assert_eq!(config.animation_duration, Duration::from_millis(150));
        assert_eq!(config.easing, Easing::Linear);
    }

    #[test]
    fn test_ratio_clamped_to_open_interval() {
        let low = PresentationConfig::default().with_minimum_ratio_to_commit(0.0);
        assert!(low.minimum_ratio_to_commit > 0.0);

        let high = PresentationConfig::default().with_minimum_ratio_to_commit(1.5);
        assert!(high.minimum_ratio_to_commit < 1.0);
    }
}
