// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Euclidean geometry in the planar frame of a [`Projection`].
//!
//! [`Projection`]: super::Projection

use std::ops::{Add, Mul, Sub};

/// Relative tolerance below which a discriminant is treated as zero.
const TANGENCY_TOLERANCE: f64 = 1e-9;

/// A point or vector in the planar frame with `x` pointing east and `y`
/// pointing north, both in m.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the unit vector pointing to the `bearing` in degree, measured
    /// clockwise from north.
    pub fn from_bearing(bearing: f64) -> Self {
        let (sin, cos) = bearing.to_radians().sin_cos();
        Self { x: sin, y: cos }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn dist(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Returns this vector rotated by 90° counter-clockwise.
    pub fn perp(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    /// Returns the mathematical angle of this vector in radians, measured
    /// counter-clockwise from the x-axis.
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Returns the point at the `angle` in radians on a circle of `radius`
    /// around this point.
    pub fn polar(self, radius: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x + radius * cos,
            y: self.y + radius * sin,
        }
    }
}

impl Add for PlanarPoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for PlanarPoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<f64> for PlanarPoint {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Circle {
    pub center: PlanarPoint,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: PlanarPoint, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns the polar line of the point `p` with respect to this circle.
    ///
    /// If `p` lies outside the circle, the polar line is the chord of contact
    /// which joins the two points where the tangents from `p` touch the
    /// circle. Returns `None` if `p` is the circle's center where no polar line
    /// exists.
    pub fn polar_line(&self, p: PlanarPoint) -> Option<Line> {
        let c = self.center;
        let r = self.radius;

        let line = Line {
            a: c.x - p.x,
            b: c.y - p.y,
            c: (c.x * c.x + c.y * c.y - r * r) - (p.x * c.x + p.y * c.y),
        };

        // both coefficients vanish if p is the center
        let scale = r.max(c.length()).max(p.length()).max(f64::MIN_POSITIVE);
        if line.a.hypot(line.b) <= scale * TANGENCY_TOLERANCE {
            None
        } else {
            Some(line)
        }
    }

    /// Returns the points where the `line` intersects this circle.
    pub fn intersect(&self, line: &Line) -> Intersection {
        let Line { a, b, c } = *line;
        let r = self.radius;

        // Move the origin into the circle's center to keep the magnitude of
        // the terms small. The line becomes a*x + b*y = k.
        let k = c - a * self.center.x - b * self.center.y;
        let n = a * a + b * b;

        // The discriminant of the quadratic has the sign of r²(a² + b²) - k².
        let disc = r * r * n - k * k;
        let tolerance = TANGENCY_TOLERANCE * (r * r * n).max(k * k);

        if disc < -tolerance {
            return Intersection::None;
        }

        if disc <= tolerance {
            // the foot of the perpendicular from the center is the only point
            return Intersection::One(self.center + PlanarPoint::new(a, b) * (k / n));
        }

        // Solve the quadratic in the coordinate whose coefficient is the
        // smaller one and derive the other coordinate from the line. Thus, a
        // horizontal line (a = 0) is solved in x and a vertical (b = 0) in y.
        let (p, q) = if b.abs() >= a.abs() {
            // y = (k - a*x) / b  =>  n*x² - 2*a*k*x + (k² - r²*b²) = 0
            let (x1, x2) = solve_quadratic(n, -2.0 * a * k, k * k - r * r * b * b);
            (
                PlanarPoint::new(x1, (k - a * x1) / b),
                PlanarPoint::new(x2, (k - a * x2) / b),
            )
        } else {
            // x = (k - b*y) / a  =>  n*y² - 2*b*k*y + (k² - r²*a²) = 0
            let (y1, y2) = solve_quadratic(n, -2.0 * b * k, k * k - r * r * a * a);
            (
                PlanarPoint::new((k - b * y1) / a, y1),
                PlanarPoint::new((k - b * y2) / a, y2),
            )
        };

        Intersection::Two(self.center + p, self.center + q)
    }
}

/// Solves `qa*t² + qb*t + qc = 0` for a positive discriminant.
fn solve_quadratic(qa: f64, qb: f64, qc: f64) -> (f64, f64) {
    let sqrt = (qb * qb - 4.0 * qa * qc).max(0.0).sqrt();

    // avoid the cancellation of -qb + sqrt
    let q = -0.5 * (qb + qb.signum() * sqrt);
    if q == 0.0 {
        // qb and the discriminant are zero
        return (0.0, 0.0);
    }

    (q / qa, qc / q)
}

/// A line `a*x + b*y = c` in the planar frame.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    /// Returns the residual `a*x + b*y - c` of the point `p`.
    pub fn residual(&self, p: PlanarPoint) -> f64 {
        self.a * p.x + self.b * p.y - self.c
    }
}

/// The intersection of a line with a circle.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Intersection {
    /// The line cuts the circle in two points.
    Two(PlanarPoint, PlanarPoint),
    /// The line touches the circle in one point.
    One(PlanarPoint),
    /// The line misses the circle.
    None,
}

impl Intersection {
    /// Returns the intersection points.
    pub fn points(&self) -> Vec<PlanarPoint> {
        match *self {
            Self::Two(p, q) => vec![p, q],
            Self::One(p) => vec![p],
            Self::None => Vec::new(),
        }
    }
}
