//! Basic geometry types for frame computation.
//!
//! These are plain value types: the engine computes panel frames with them
//! and hands them to the host, which owns actual compositing.

/// A point in 2D space.
///
/// Also used for gesture translations and velocities, where `x`/`y` are
/// signed offsets rather than absolute positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// A rectangle defined by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Create a rectangle from an origin point and a size.
    #[inline]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Left edge x coordinate.
    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    /// Top edge y coordinate.
    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// Right edge x coordinate.
    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge y coordinate.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Check if the rectangle is empty (zero or negative size).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    /// Return a copy translated by the given offsets.
    #[inline]
    pub fn translated(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            origin: Point {
                x: self.origin.x + dx,
                y: self.origin.y + dy,
            },
            size: self.size,
        }
    }

    /// Linearly interpolate between two rectangles.
    ///
    /// `t` is expected in `[0, 1]`; `t = 0` yields `a` and `t = 1` yields
    /// `b` exactly, with no residual offset.
    pub fn lerp(a: Rect, b: Rect, t: f32) -> Rect {
        if t >= 1.0 {
            return b;
        }
        if t <= 0.0 {
            return a;
        }
        Rect {
            origin: Point {
                x: a.origin.x + (b.origin.x - a.origin.x) * t,
                y: a.origin.y + (b.origin.y - a.origin.y) * t,
            },
            size: Size {
                width: a.size.width + (b.size.width - a.size.width) * t,
                height: a.size.height + (b.size.height - a.size.height) * t,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 50.0);
    }

    #[test]
    fn test_is_empty() {
        assert!(Rect::ZERO.is_empty());
        assert!(Rect::new(0.0, 0.0, -1.0, 10.0).is_empty());
        assert!(Rect::new(0.0, 0.0, 10.0, 0.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn test_contains() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(9.9, 9.9)));
        assert!(!r.contains(Point::new(10.0, 10.0)));
        assert!(!r.contains(Point::new(-0.1, 5.0)));
    }

    #[test]
    fn test_translated() {
        let r = Rect::new(5.0, 5.0, 20.0, 30.0);
        let moved = r.translated(-5.0, 10.0);
        assert_eq!(moved, Rect::new(0.0, 15.0, 20.0, 30.0));
        assert_eq!(moved.size, r.size);
    }

    #[test]
    fn test_lerp_midpoint() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(100.0, 0.0, 100.0, 100.0);
        let mid = Rect::lerp(a, b, 0.5);
        assert_eq!(mid, Rect::new(50.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn test_lerp_endpoints_exact() {
        // Endpoints must be reproduced exactly, not via float arithmetic.
        let a = Rect::new(0.3, 0.7, 123.4, 567.8);
        let b = Rect::new(-31.2, 9.9, 123.4, 567.8);
        assert_eq!(Rect::lerp(a, b, 0.0), a);
        assert_eq!(Rect::lerp(a, b, 1.0), b);
        // Out-of-range t clamps to the endpoints.
        assert_eq!(Rect::lerp(a, b, -0.5), a);
        assert_eq!(Rect::lerp(a, b, 1.5), b);
    }
}
