/// Rectangle - axis-aligned integer rectangle.
///
/// Edges are half-open: a point lies inside when
/// `left <= x < right` and `top <= y < bottom`.
/// Width and height are not validated; a rectangle with a negative
/// extent simply contains no points. `right()` and `bottom()` overflow for
/// edges past `i32::MAX`; the containment and overlap tests do not.

use std::fmt;
use glam::IVec2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    /// All-zero rectangle, the result of intersecting disjoint rectangles
    pub const EMPTY: Rectangle = Rectangle { x: 0, y: 0, width: 0, height: 0 };

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle at the origin covering `width` x `height`
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self { x: 0, y: 0, width, height }
    }

    // ===== EDGES =====

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn location(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Center point, rounded toward zero
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    /// True only for the all-zero rectangle
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Number of points covered, 0 for negative extents
    pub fn area(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    // ===== TESTS =====

    pub fn contains_point(&self, point: IVec2) -> bool {
        let (x, y) = (i64::from(point.x), i64::from(point.y));
        self.wide_left() <= x
            && x < self.wide_right()
            && self.wide_top() <= y
            && y < self.wide_bottom()
    }

    /// `other` lies entirely inside `self` (shared edges allowed)
    pub fn contains_rect(&self, other: &Rectangle) -> bool {
        self.wide_left() <= other.wide_left()
            && other.wide_right() <= self.wide_right()
            && self.wide_top() <= other.wide_top()
            && other.wide_bottom() <= self.wide_bottom()
    }

    /// Strict overlap: rectangles that only touch do not intersect
    pub fn intersects(&self, other: &Rectangle) -> bool {
        other.wide_left() < self.wide_right()
            && self.wide_left() < other.wide_right()
            && other.wide_top() < self.wide_bottom()
            && self.wide_top() < other.wide_bottom()
    }

    // Edges in i64, never overflowing

    fn wide_left(&self) -> i64 {
        i64::from(self.x)
    }

    fn wide_right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    fn wide_top(&self) -> i64 {
        i64::from(self.y)
    }

    fn wide_bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    // ===== COMBINATION =====

    /// Overlapping region, or [`Rectangle::EMPTY`] when disjoint
    pub fn intersect(&self, other: &Rectangle) -> Rectangle {
        if !self.intersects(other) {
            return Self::EMPTY;
        }

        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rectangle::new(left, top, right - left, bottom - top)
    }

    /// Smallest rectangle containing both
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rectangle::new(left, top, right - left, bottom - top)
    }

    /// Move by `delta`, keeping the size
    pub fn offset(&mut self, delta: IVec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Grow by `horizontal` on the left and right, `vertical` on top and bottom
    pub fn inflate(&mut self, horizontal: i32, vertical: i32) {
        self.x -= horizontal;
        self.y -= vertical;
        self.width += horizontal * 2;
        self.height += vertical * 2;
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{X:{} Y:{} Width:{} Height:{}}}", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
#[path = "rectangle_tests.rs"]
mod tests;
