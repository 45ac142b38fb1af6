//! Direction model: which container edge a panel slides from, and the
//! geometry derived from that choice.
//!
//! Everything here is a pure function of the direction and the container
//! geometry. A zero-area container is accepted and simply yields degenerate
//! empty frames.

use slidein_core::{Point, Rect, Size};

/// Fraction of the container the panel occupies along its slide axis.
///
/// Product choice inherited from the reference design, not derived.
pub const PANEL_RATIO: f32 = 0.8;

/// The container edge a panel slides from.
///
/// Chosen once per presentation session. Determines which axis and sign a
/// drag translation is projected onto, where the offscreen hidden frame
/// lies, and which container edge an edge-pan gesture must originate from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

/// A container edge, reported to the host so it can constrain its edge-pan
/// recognizer. Hit-testing itself is the host's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    /// The container edge an edge-pan gesture for this direction must
    /// originate from.
    pub fn edge(self) -> Edge {
        match self {
            Direction::Top => Edge::Top,
            Direction::Bottom => Edge::Bottom,
            Direction::Left => Edge::Left,
            Direction::Right => Edge::Right,
        }
    }

    /// Whether the panel slides along the horizontal axis.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Preferred panel size for a container.
    ///
    /// Left/Right panels take [`PANEL_RATIO`] of the container width at
    /// full height; Top/Bottom panels take [`PANEL_RATIO`] of the height
    /// at full width.
    pub fn panel_size(self, container: Size) -> Size {
        if self.is_horizontal() {
            Size::new(container.width * PANEL_RATIO, container.height)
        } else {
            Size::new(container.width, container.height * PANEL_RATIO)
        }
    }

    /// On-screen frame of the presented panel within a container.
    ///
    /// Left/Top anchor at the container origin; Right/Bottom anchor flush
    /// against the far edge.
    pub fn presented_frame(self, container: Size) -> Rect {
        let size = self.panel_size(container);
        let origin = match self {
            Direction::Top | Direction::Left => Point::ZERO,
            Direction::Right => Point::new(container.width - size.width, 0.0),
            Direction::Bottom => Point::new(0.0, container.height - size.height),
        };
        Rect::from_origin_size(origin, size)
    }

    /// Offscreen frame: the presented frame translated fully off this
    /// direction's edge by its own width or height.
    pub fn hidden_frame(self, presented: Rect) -> Rect {
        match self {
            Direction::Right => presented.translated(presented.width(), 0.0),
            Direction::Left => presented.translated(-presented.width(), 0.0),
            Direction::Top => presented.translated(0.0, -presented.height()),
            Direction::Bottom => presented.translated(0.0, presented.height()),
        }
    }

    /// Project a drag translation onto this direction as a signed progress
    /// fraction, nominally in `[-1, 1]`.
    ///
    /// The translation is relative to the gesture's origin and normalized
    /// against the reference bounds. Positive values move the panel toward
    /// its terminal position. Degenerate bounds yield 0.
    pub fn percent(self, translation: Point, bounds: Size) -> f32 {
        match self {
            Direction::Right => {
                if bounds.width <= 0.0 {
                    0.0
                } else {
                    translation.x / bounds.width
                }
            }
            Direction::Left => {
                if bounds.width <= 0.0 {
                    0.0
                } else {
                    -translation.x / bounds.width
                }
            }
            Direction::Bottom => {
                if bounds.height <= 0.0 {
                    0.0
                } else {
                    translation.y / bounds.height
                }
            }
            Direction::Top => {
                if bounds.height <= 0.0 {
                    0.0
                } else {
                    -translation.y / bounds.height
                }
            }
        }
    }

    /// Project a gesture velocity onto this direction.
    ///
    /// Positive values are flicks in the direction of travel. Same signs as
    /// [`Direction::percent`], without normalization.
    pub fn velocity_along(self, velocity: Point) -> f32 {
        match self {
            Direction::Right => velocity.x,
            Direction::Left => -velocity.x,
            Direction::Bottom => velocity.y,
            Direction::Top => -velocity.y,
        }
    }
}
