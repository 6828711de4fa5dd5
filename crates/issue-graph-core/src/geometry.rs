//! Geometric primitives for diagram layout and positioning.
//!
//! This module provides the integer geometric types used to place issue
//! nodes on the canvas.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//!
//! # Coordinate System
//!
//! Coordinates follow SVG conventions:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! All coordinates are integers. Halving a size truncates toward zero, so a
//! node of width `180` extends `90` units on either side of its center.
//! Arithmetic saturates at the `i32` range instead of overflowing.

/// A 2D point representing a position in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use issue_graph_core::geometry::Point;
/// let p1 = Point::new(0, 50);
/// let p2 = Point::new(400, 50);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 200);
/// assert_eq!(mid.y(), 50);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> i32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> i32 {
        self.y
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: i32) -> Self {
        self.y = y;
        self
    }

    /// Calculates the midpoint between this point and another point,
    /// truncating toward zero
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: midpoint(self.x, other.x),
            y: midpoint(self.y, other.y),
        }
    }

    /// Converts a point and size into a bounds rectangle
    ///
    /// The point is treated as the center of the bounds.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    width: i32,
    height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> i32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> i32 {
        self.height
    }

    /// Half the width, truncated
    pub fn half_width(self) -> i32 {
        self.width / 2
    }

    /// Half the height, truncated
    pub fn half_height(self) -> i32 {
        self.height / 2
    }

    /// Returns a new Size grown by `amount` in both dimensions
    pub fn grow(self, amount: i32) -> Self {
        Self {
            width: self.width.saturating_add(amount),
            height: self.height.saturating_add(amount),
        }
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        Self {
            min_x: center.x.saturating_sub(size.half_width()),
            min_y: center.y.saturating_sub(size.half_height()),
            max_x: center.x.saturating_add(size.half_width()),
            max_y: center.y.saturating_add(size.half_height()),
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> i32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> i32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> i32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> i32 {
        self.max_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use issue_graph_core::geometry::{Bounds, Point, Size};
    /// let a = Bounds::new_from_center(Point::new(0, 50), Size::new(180, 70));
    /// let b = Bounds::new_from_center(Point::new(200, 150), Size::new(180, 70));
    ///
    /// let combined = a.merge(&b);
    /// assert_eq!(combined.min_x(), -90);
    /// assert_eq!(combined.max_x(), 290);
    /// assert_eq!(combined.max_y(), 185);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// Average of two coordinates, truncated toward zero.
fn midpoint(a: i32, b: i32) -> i32 {
    let mid = (i64::from(a) + i64::from(b)) / 2;
    // The average of two i32 values is always an i32.
    i32::try_from(mid).unwrap_or(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_truncates() {
        let mid = Point::new(425, 50).midpoint(Point::new(1000, 50));
        assert_eq!(mid.x(), 712);

        let mid = Point::new(-3, 0).midpoint(Point::new(2, 0));
        assert_eq!(mid.x(), 0);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let far = Point::new(i32::MAX, i32::MAX - 10);
        assert_eq!(far.midpoint(far).x(), i32::MAX);

        let bounds = far.to_bounds(Size::new(180, 70));
        assert_eq!(bounds.max_x(), i32::MAX);
        assert_eq!(bounds.max_y(), i32::MAX);
        assert_eq!(bounds.min_x(), i32::MAX - 90);

        assert_eq!(Size::new(i32::MAX, 0).grow(100), Size::new(i32::MAX, 100));
    }

    #[test]
    fn test_bounds_from_center() {
        let bounds = Point::new(200, 150).to_bounds(Size::new(180, 70));
        assert_eq!(bounds.min_point(), Point::new(110, 115));
        assert_eq!(bounds.max_x(), 290);
        assert_eq!(bounds.max_y(), 185);
    }

    #[test]
    fn test_size_grow() {
        let size = Size::new(90, 85).grow(100);
        assert_eq!(size, Size::new(190, 185));
    }
}
