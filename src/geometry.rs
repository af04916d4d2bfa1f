//! Plane geometry shared by hit testing and label placement.

use serde::Deserialize;
use std::ops::{Add, Div, Mul, Sub};

/// A 2D point or offset. Used for both screen and content space; which one is
/// meant is always clear from the call site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// A zero-area size means the host element has not been laid out yet.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Arithmetic mean of the vertices. Not the area centroid, but close enough
/// for placing a label inside the convex-ish shapes of a site plan.
pub fn centroid(polygon: &[Point]) -> Point {
    if polygon.is_empty() {
        return Point::ZERO;
    }
    let sum = polygon.iter().fold(Point::ZERO, |acc, p| acc + *p);
    sum / polygon.len() as f64
}

/// Even-odd ray casting towards +x.
///
/// An edge counts as crossed when exactly one endpoint has a greater y than
/// the point (`yi > y` differs from `yj > y`) and the crossing lies strictly
/// to the right of it. For an axis-aligned rectangle this makes the min-x and
/// min-y edges inside, the max-x and max-y edges outside. Content space is
/// y-down, so the inside edges are the left and top ones on screen.
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = polygon[i];
        let pj = polygon[j];
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
