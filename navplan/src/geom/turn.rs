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

use std::f64::consts::PI;
use std::fmt;

use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::planar::{Circle, Intersection, PlanarPoint};
use super::{Coordinate, Projection};
use crate::error::GeometryError;
use crate::fc;

/// The direction of a turn.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TurnDirection {
    /// Counter-clockwise turn.
    Left,
    /// Clockwise turn.
    Right,
}

impl TurnDirection {
    /// Estimates the direction of the turn from the `inbound` to the
    /// `outbound` bearing.
    ///
    /// The turn is to the left if the outbound bearing is more than 180° to
    /// the right of the inbound bearing, otherwise it's to the right.
    pub fn estimate(inbound: f64, outbound: f64) -> Self {
        if fc::normalize_deg(outbound - inbound + 360.0) > 180.0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Returns the sense of rotation, which is `1` for counter-clockwise and
    /// `-1` for clockwise.
    pub fn sense(&self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

impl fmt::Display for TurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "L"),
            Self::Right => write!(f, "R"),
        }
    }
}

/// The circle on which a turn is flown.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TurnCircle {
    pub center: Coordinate,
    /// The radius in m.
    pub radius: f64,
}

impl TurnCircle {
    /// Returns a circle without extent at `c`.
    pub fn degenerate(c: Coordinate) -> Self {
        Self {
            center: c,
            radius: 0.0,
        }
    }
}

/// A turn that ends where the aircraft straightens onto a destination.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Turn {
    /// The circle on which the turn is flown. The origin of the turn lies on
    /// it.
    pub circle: TurnCircle,
    /// The point where the aircraft leaves the circle toward the destination.
    pub straightening_point: Coordinate,
    pub direction: TurnDirection,
    /// The angle in degree in the range [0, 180] which is flown on the circle.
    pub angle: f64,
}

impl Turn {
    /// Returns a turn that ends where it starts.
    pub fn none(origin: Coordinate, direction: TurnDirection) -> Self {
        Self {
            circle: TurnCircle::degenerate(origin),
            straightening_point: origin,
            direction,
            angle: 0.0,
        }
    }

    /// The length in m of the arc flown on the circle.
    pub fn arc_length(&self) -> f64 {
        self.circle.radius * self.angle.to_radians()
    }

    /// Solves the turn of an aircraft that arrives at the `origin` with the
    /// `inbound` bearing and continues straight to the `destination` after
    /// turning on a circle with the `radius` in m.
    ///
    /// The circle touches the inbound track at the origin on the side of the
    /// turn. The turn ends at the point of the circle where the tangent
    /// through the destination touches the circle. The geometry is solved in
    /// the planar frame of the `projection`.
    ///
    /// # Errors
    ///
    /// Returns [`DestinationInsideTurn`] if the destination lies inside the
    /// turn circle and [`DegenerateTangentLine`] if it lies in the circle's
    /// center.
    ///
    /// [`DestinationInsideTurn`]: GeometryError::DestinationInsideTurn
    /// [`DegenerateTangentLine`]: GeometryError::DegenerateTangentLine
    pub fn solve<P: Projection>(
        projection: &P,
        inbound: f64,
        origin: Coordinate,
        destination: Coordinate,
        radius: f64,
    ) -> Result<Self, GeometryError> {
        let direction = TurnDirection::estimate(inbound, origin.bearing(&destination));

        if radius <= 0.0 || !radius.is_finite() {
            trace!("turn at {origin} without radius");
            return Ok(Self::none(origin, direction));
        }

        let sense = direction.sense();

        // solved relative to the origin to keep the magnitudes small
        let offset = projection.to_planar(origin);
        let o = PlanarPoint::default();
        let d = projection.to_planar(destination) - offset;

        // the center is left of the inbound track for left turns
        let track = PlanarPoint::from_bearing(inbound);
        let center = o + track.perp() * (sense * radius);
        let circle = Circle::new(center, radius);

        let line = circle
            .polar_line(d)
            .ok_or(GeometryError::DegenerateTangentLine)?;

        let straightening_point = match circle.intersect(&line) {
            Intersection::Two(p, q) => select_tangent_point(&circle, sense, o, d, [p, q]),
            Intersection::One(p) => p,
            Intersection::None => return Err(GeometryError::DestinationInsideTurn),
        };

        // The arc from the entry to the straightening point in the (-π, π]
        // range. Its magnitude is the traversal in the turn's sense, or the
        // complementary arc if that traversal exceeds half a circle.
        let entry = (o - center).angle();
        let exit = (straightening_point - center).angle();
        let traversal = fc::normalize_rad(sense * (exit - entry));
        if traversal > PI {
            debug!(
                "turn {direction} at {origin} traverses {:.1}°, using the complementary arc",
                traversal.to_degrees()
            );
        }
        let angle = fc::wrap_rad(exit - entry).abs().to_degrees();

        let turn = Self {
            circle: TurnCircle {
                center: projection.to_geo(center + offset),
                radius,
            },
            straightening_point: projection.to_geo(straightening_point + offset),
            direction,
            angle,
        };

        trace!(
            "turn {direction} at {origin}: center {}, straightening at {} after {:.1}°",
            turn.circle.center,
            turn.straightening_point,
            turn.angle
        );

        Ok(turn)
    }
}

/// Selects the tangent point at which an aircraft turning in the `sense`
/// from the origin `o` straightens onto the destination `d`.
///
/// At a tangent point the aircraft heads either toward or away from the
/// destination, depending on the sense in which the circle is flown. Of the
/// points heading toward it, the first reached from the origin is taken.
fn select_tangent_point(
    circle: &Circle,
    sense: f64,
    o: PlanarPoint,
    d: PlanarPoint,
    candidates: [PlanarPoint; 2],
) -> PlanarPoint {
    let entry = (o - circle.center).angle();

    let heads_to_destination = |p: PlanarPoint| {
        let velocity = (p - circle.center).perp() * sense;
        velocity.dot(d - p) > 0.0
    };

    let traversal = |p: PlanarPoint| fc::normalize_rad(sense * ((p - circle.center).angle() - entry));

    let [p, q] = candidates;
    match (heads_to_destination(p), heads_to_destination(q)) {
        (true, false) => p,
        (false, true) => q,
        // only on numerical ties, so both are equally fine
        _ => {
            if traversal(p) <= traversal(q) {
                p
            } else {
                q
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::TransverseMercator;

    const RADIUS: f64 = 2500.0;
    // tolerance in m
    const TOLERANCE: f64 = 10.0;

    const ORIGIN: Coordinate = coord!(34.0, 36.0);

    struct Solution {
        turn: Turn,
        tm: TransverseMercator,
    }

    impl Solution {
        fn new(inbound: f64, destination: Coordinate, radius: f64) -> Self {
            let tm = TransverseMercator::centered_on(ORIGIN);
            let turn = Turn::solve(&tm, inbound, ORIGIN, destination, radius)
                .expect("turn should be solvable");
            Self { turn, tm }
        }

        fn center(&self) -> PlanarPoint {
            self.tm.to_planar(self.turn.circle.center)
        }

        fn straightening_point(&self) -> PlanarPoint {
            self.tm.to_planar(self.turn.straightening_point)
        }

        fn assert_on_circle(&self) {
            let planar = self.center().dist(self.straightening_point());
            assert!(
                (planar - self.turn.circle.radius).abs() < TOLERANCE,
                "straightening point is {planar} m from the center"
            );

            let ground = self
                .turn
                .circle
                .center
                .dist(&self.turn.straightening_point);
            assert!((ground - self.turn.circle.radius).abs() < TOLERANCE);
        }

        fn assert_on_polar_line(&self, destination: Coordinate) {
            let (c, s, d) = (
                self.center(),
                self.straightening_point(),
                self.tm.to_planar(destination),
            );
            let r = self.turn.circle.radius;

            let a = c.x - d.x;
            let b = c.y - d.y;
            let k = (c.x * c.x + c.y * c.y - r * r) - (d.x * c.x + d.y * c.y);

            let residual = (a * s.x + b * s.y - k).abs();
            assert!(residual < 1.0, "polar line residual is {residual}");
        }

        /// Heading change from the inbound track to the segment toward the
        /// destination, which equals the arc flown on the circle.
        fn heading_change(&self, inbound: f64, destination: Coordinate) -> f64 {
            let outbound = (self.tm.to_planar(destination) - self.straightening_point()).angle();
            let inbound = PlanarPoint::from_bearing(inbound).angle();
            fc::wrap_rad(outbound - inbound).abs().to_degrees()
        }
    }

    #[test]
    fn estimate_direction() {
        assert_eq!(TurnDirection::estimate(90.0, 0.0), TurnDirection::Left);
        assert_eq!(TurnDirection::estimate(90.0, 180.0), TurnDirection::Right);
        assert_eq!(TurnDirection::estimate(350.0, 10.0), TurnDirection::Right);
        assert_eq!(TurnDirection::estimate(10.0, 350.0), TurnDirection::Left);
        assert_eq!(TurnDirection::estimate(90.0, 89.9), TurnDirection::Left);
        assert_eq!(TurnDirection::estimate(90.0, 90.0), TurnDirection::Right);
    }

    #[test]
    fn straight_continuation() {
        let destination = coord!(34.0, 36.1); // ~9 km east
        let solution = Solution::new(90.0, destination, RADIUS);

        // great circles to the east start slightly left of east
        assert_eq!(solution.turn.direction, TurnDirection::Left);
        assert!(solution.turn.angle < 1.0, "{}", solution.turn.angle);
        solution.assert_on_circle();
        solution.assert_on_polar_line(destination);

        // we straighten almost immediately
        assert!(ORIGIN.dist(&solution.turn.straightening_point) < 100.0);
    }

    #[test]
    fn left_90_degree_turn() {
        let destination = coord!(34.1, 36.0); // ~11 km north
        let solution = Solution::new(90.0, destination, RADIUS);

        assert_eq!(solution.turn.direction, TurnDirection::Left);
        solution.assert_on_circle();
        solution.assert_on_polar_line(destination);

        // We need to turn more than 90° since the destination is only 4.4
        // radii north of the origin. The tangent from the destination
        // touches the circle asin(r / |CD|) past the 90° point.
        let cd = solution.center().dist(solution.tm.to_planar(destination));
        let expected = 90.0 + (RADIUS / cd).asin().to_degrees();
        assert!((solution.turn.angle - expected).abs() < 0.1);
        assert!((solution.heading_change(90.0, destination) - solution.turn.angle).abs() < 0.1);

        // and the straightening point is north-east of the origin
        let s = solution.turn.straightening_point;
        assert!(s.latitude > ORIGIN.latitude && s.longitude > ORIGIN.longitude);
    }

    #[test]
    fn right_90_degree_turn() {
        let destination = coord!(33.9, 36.0); // ~11 km south
        let solution = Solution::new(90.0, destination, 100.0);

        assert_eq!(solution.turn.direction, TurnDirection::Right);
        assert!((solution.turn.angle - 90.0).abs() < 1.0, "{}", solution.turn.angle);
        solution.assert_on_circle();
        solution.assert_on_polar_line(destination);
    }

    #[test]
    fn right_90_degree_turn_with_wide_radius() {
        let destination = coord!(33.9, 36.0);
        let solution = Solution::new(90.0, destination, RADIUS);

        assert_eq!(solution.turn.direction, TurnDirection::Right);
        solution.assert_on_circle();
        solution.assert_on_polar_line(destination);

        let cd = solution.center().dist(solution.tm.to_planar(destination));
        let expected = 90.0 + (RADIUS / cd).asin().to_degrees();
        assert!((solution.turn.angle - expected).abs() < 0.1);

        let s = solution.turn.straightening_point;
        assert!(s.latitude < ORIGIN.latitude && s.longitude > ORIGIN.longitude);
    }

    #[test]
    fn left_45_degree_turn() {
        let destination = coord!(34.05, 36.05); // ~7 km north-east
        let solution = Solution::new(90.0, destination, RADIUS);

        assert_eq!(solution.turn.direction, TurnDirection::Left);
        solution.assert_on_circle();
        solution.assert_on_polar_line(destination);

        // the wide turn overshoots the 45° bearing to the destination
        assert!(solution.turn.angle > 45.0 && solution.turn.angle < 90.0);
        assert!((solution.heading_change(90.0, destination) - solution.turn.angle).abs() < 0.1);

        let s = solution.turn.straightening_point;
        assert!(s.latitude > ORIGIN.latitude && s.longitude > ORIGIN.longitude);
    }

    #[test]
    fn reversal() {
        let destination = coord!(34.0, 35.9); // ~9 km west
        let solution = Solution::new(90.0, destination, RADIUS);

        solution.assert_on_circle();
        solution.assert_on_polar_line(destination);
        assert!((0.0..=180.0).contains(&solution.turn.angle));
    }

    #[test]
    fn turn_angle_is_never_reflex() {
        for inbound in [0.0, 45.0, 90.0, 200.0, 315.0] {
            for i in 0..24 {
                let bearing = i as f64 * 15.0;
                let (sin, cos) = bearing.to_radians().sin_cos();
                // ~10 km from the origin
                let destination = coord!(
                    ORIGIN.latitude + 0.09 * cos,
                    ORIGIN.longitude + 0.108 * sin
                );
                let solution = Solution::new(inbound, destination, RADIUS);

                assert!(
                    (0.0..=180.0).contains(&solution.turn.angle),
                    "turn from {inbound}° to {bearing}° is {}°",
                    solution.turn.angle
                );
                solution.assert_on_circle();
                solution.assert_on_polar_line(destination);
            }
        }
    }

    #[test]
    fn no_radius_means_no_turn() {
        let destination = coord!(34.1, 36.0);
        let turn = Turn::solve(
            &TransverseMercator::centered_on(ORIGIN),
            90.0,
            ORIGIN,
            destination,
            0.0,
        )
        .unwrap();

        assert_eq!(turn.straightening_point, ORIGIN);
        assert_eq!(turn.circle, TurnCircle::degenerate(ORIGIN));
        assert_eq!(turn.angle, 0.0);
        assert_eq!(turn.arc_length(), 0.0);
    }

    #[test]
    fn destination_inside_turn() {
        // 1 km north while turning left on a 2.5 km radius
        let destination = coord!(34.009, 36.0);
        let result = Turn::solve(
            &TransverseMercator::centered_on(ORIGIN),
            90.0,
            ORIGIN,
            destination,
            RADIUS,
        );

        assert_eq!(result, Err(GeometryError::DestinationInsideTurn));
    }

    #[test]
    fn destination_in_center() {
        let tm = TransverseMercator::centered_on(ORIGIN);
        // the center of a left turn with inbound east is north of the origin
        let center = tm.to_geo(tm.to_planar(ORIGIN) + PlanarPoint::new(0.0, RADIUS));
        let result = Turn::solve(&tm, 90.0, ORIGIN, center, RADIUS);

        assert_eq!(result, Err(GeometryError::DegenerateTangentLine));
    }

    #[test]
    fn destination_on_circle() {
        let tm = TransverseMercator::centered_on(ORIGIN);
        // the top of the left turn circle
        let destination = tm.to_geo(tm.to_planar(ORIGIN) + PlanarPoint::new(0.0, 2.0 * RADIUS));
        let turn = Turn::solve(&tm, 90.0, ORIGIN, destination, RADIUS).unwrap();

        assert!(turn.straightening_point.dist(&destination) < 1.0);
        assert!((turn.angle - 180.0).abs() < 0.1);
    }
}
