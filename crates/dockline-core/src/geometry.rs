#![forbid(unsafe_code)]

//! Geometric primitives in continuous pointer space.
//!
//! Unlike a cell grid, pointer coordinates are floats in the host's logical
//! pixel space (origin at top-left, y growing downward). All operations are
//! pure and total; degenerate rectangles (zero or negative extent) report
//! themselves as empty and contain no points.

/// A point in logical pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in logical pixel space.
///
/// Used for the dock's bounding box (hit testing, slot resolution). The
/// origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    #[must_use]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Left edge (alias for x).
    #[inline]
    #[must_use]
    pub const fn left(&self) -> f32 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    #[must_use]
    pub const fn top(&self) -> f32 {
        self.y
    }

    /// Right edge.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width.max(0.0)
    }

    /// Bottom edge.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height.max(0.0)
    }

    /// Check if the rectangle has no area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point lies inside the rectangle (edges inclusive).
    #[inline]
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        !self.is_empty()
            && p.x >= self.x
            && p.x <= self.right()
            && p.y >= self.y
            && p.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_new() {
        let p = Point::new(3.5, -1.0);
        assert_eq!(p.x, 3.5);
        assert_eq!(p.y, -1.0);
    }

    #[test]
    fn rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
    }

    #[test]
    fn rect_contains_edges_inclusive() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(5.0, 5.0)));
        assert!(!r.contains(Point::new(-0.1, 5.0)));
        assert!(!r.contains(Point::new(10.1, 5.0)));
        assert!(!r.contains(Point::new(5.0, 10.1)));
    }

    #[test]
    fn empty_rect_contains_nothing() {
        let r = Rect::new(5.0, 5.0, 0.0, 10.0);
        assert!(r.is_empty());
        assert!(!r.contains(Point::new(5.0, 5.0)));

        let r = Rect::new(5.0, 5.0, 10.0, -1.0);
        assert!(r.is_empty());
        assert!(!r.contains(Point::new(6.0, 5.0)));
    }

    #[test]
    fn negative_extent_clamps_edges() {
        let r = Rect::new(5.0, 5.0, -10.0, -10.0);
        assert_eq!(r.right(), 5.0);
        assert_eq!(r.bottom(), 5.0);
    }

    #[test]
    fn from_size_is_at_origin() {
        let r = Rect::from_size(40.0, 8.0);
        assert_eq!(r.x, 0.0);
        assert_eq!(r.y, 0.0);
        assert_eq!(r.right(), 40.0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn non_empty_rect_contains_its_center(
                x in -500.0f32..500.0,
                y in -500.0f32..500.0,
                w in 0.1f32..400.0,
                h in 0.1f32..400.0,
            ) {
                let r = Rect::new(x, y, w, h);
                let center = Point::new(x + w / 2.0, y + h / 2.0);
                prop_assert!(r.contains(center));
            }

            #[test]
            fn points_beyond_any_edge_are_outside(
                x in -500.0f32..500.0,
                y in -500.0f32..500.0,
                w in 0.1f32..400.0,
                h in 0.1f32..400.0,
                delta in 0.5f32..100.0,
            ) {
                let r = Rect::new(x, y, w, h);
                let mid = Point::new(x + w / 2.0, y + h / 2.0);
                prop_assert!(!r.contains(Point::new(r.left() - delta, mid.y)));
                prop_assert!(!r.contains(Point::new(r.right() + delta, mid.y)));
                prop_assert!(!r.contains(Point::new(mid.x, r.top() - delta)));
                prop_assert!(!r.contains(Point::new(mid.x, r.bottom() + delta)));
            }

            #[test]
            fn degenerate_rect_contains_nothing(
                x in -100.0f32..100.0,
                y in -100.0f32..100.0,
                w in -50.0f32..=0.0,
                px in -200.0f32..200.0,
                py in -200.0f32..200.0,
            ) {
                let r = Rect::new(x, y, w, 10.0);
                prop_assert!(r.is_empty());
                prop_assert!(!r.contains(Point::new(px, py)));
            }
        }
    }
}
