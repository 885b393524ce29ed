// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Route, Turnpoint};
use crate::error::Error;
use crate::fc::{self, WindTriangle};
use crate::geom::{Coordinate, Projection, TransverseMercator, Turn, TurnCircle, TurnDirection};
use crate::measurements::{constants::SECONDS_PER_HOUR, m_to_nm};

/// A leg `from` one turnpoint `to` another.
///
/// The leg starts with the turn from the inbound track onto the destination
/// and continues straight from the straightening point. The conditions of the
/// destination apply to the whole leg.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Leg {
    from: usize,
    to: usize,
    origin: Coordinate,
    destination: Coordinate,
    circle: TurnCircle,
    straightening_point: Coordinate,
    turn_direction: Option<TurnDirection>,
    turn_angle: f64,
    inbound: f64,
    #[cfg_attr(feature = "serde", serde(rename = "course"))]
    mc: f64,
    #[cfg_attr(feature = "serde", serde(rename = "heading"))]
    mh: f64,
    #[cfg_attr(feature = "serde", serde(rename = "distanceNm"))]
    dist: f64,
    #[cfg_attr(feature = "serde", serde(rename = "arcDistanceNm"))]
    arc_dist: f64,
    #[cfg_attr(feature = "serde", serde(rename = "eteSec"))]
    ete: i64,
    #[cfg_attr(feature = "serde", serde(rename = "eteToStraighteningSec"))]
    ete_to_straightening: i64,
    fuel: f64,
    gs: f64,
    tas: f64,
    alt: f64,
}

impl Leg {
    /// Computes the leg of the `route` from the turnpoint at index `from` to
    /// the one at index `to`.
    pub(super) fn new(route: &Route, from: usize, to: usize) -> Result<Self, Error> {
        let turnpoints = route.turnpoints();
        let origin = turnpoints.get(from).ok_or(Error::UnknownTurnpoint(from))?;
        let destination = turnpoints.get(to).ok_or(Error::UnknownTurnpoint(to))?;

        let (inbound, turn, turn_direction) = match from.checked_sub(1) {
            // we start straight without any turn
            None => (0.0, Turn::none(origin.coordinate(), TurnDirection::Right), None),
            Some(prev) => {
                let inbound = turnpoints[prev].coordinate().bearing(&origin.coordinate());
                let turn = Turn::solve(
                    &TransverseMercator::centered_on(origin.coordinate()),
                    inbound,
                    origin.coordinate(),
                    destination.coordinate(),
                    fc::turn_radius(destination.tas(), route.bank_angle()),
                )
                .map_err(|error| Error::InvalidGeometry { leg: from, error })?;

                (inbound, turn, Some(turn.direction))
            }
        };

        let bearing = turn.straightening_point.bearing(&destination.coordinate());
        let mc = fc::normalize_deg(bearing + route.declination() + 360.0);

        let arc = turn.arc_length();
        let straight = turn.straightening_point.dist(&destination.coordinate());
        let dist = m_to_nm(arc + straight);
        let arc_dist = m_to_nm(arc);

        let wt = WindTriangle::solve(mc, destination.tas(), destination.wind())
            .map_err(|error| Error::InvalidWind { leg: from, error })?;

        let ete = fc::time_enroute(dist, wt.gs);
        let ete_to_straightening = fc::time_enroute(arc_dist, wt.gs);
        let fuel = fuel_burned(ete, destination);

        trace!(
            "leg {from} -> {to}: mc {mc:.1}, mh {:.1}, dist {dist:.2} NM, gs {:.1} kt, ete {ete} s",
            wt.heading,
            wt.gs
        );

        Ok(Self {
            from,
            to,
            origin: origin.coordinate(),
            destination: destination.coordinate(),
            circle: turn.circle,
            straightening_point: turn.straightening_point,
            turn_direction,
            turn_angle: turn.angle,
            inbound,
            mc,
            mh: wt.heading,
            dist,
            arc_dist,
            ete,
            ete_to_straightening,
            fuel,
            gs: wt.gs,
            tas: destination.tas(),
            alt: destination.alt(),
        })
    }

    /// The index of the turnpoint from which the leg starts.
    pub fn from(&self) -> usize {
        self.from
    }

    /// The index of the turnpoint to which the leg is going.
    pub fn to(&self) -> usize {
        self.to
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn destination(&self) -> Coordinate {
        self.destination
    }

    /// The circle on which the turn onto the leg is flown. The first leg of a
    /// route has a circle without extent at its origin.
    pub fn circle(&self) -> &TurnCircle {
        &self.circle
    }

    /// The point where the turn ends and the leg continues straight to the
    /// destination.
    pub fn straightening_point(&self) -> Coordinate {
        self.straightening_point
    }

    /// The direction of the turn onto the leg or `None` for the first leg.
    pub fn turn_direction(&self) -> Option<TurnDirection> {
        self.turn_direction
    }

    /// The angle in degree between the entry into the turn and the
    /// straightening point, in the range [0, 180].
    ///
    /// A turn that traverses more than half of the circle is reported with
    /// its complementary angle. The arc distance and time of such a turn are
    /// thus shorter than the arc actually flown, which [`Leg::track`] draws.
    pub fn turn_angle(&self) -> f64 {
        self.turn_angle
    }

    /// The true bearing with which the origin is reached.
    pub fn inbound(&self) -> f64 {
        self.inbound
    }

    /// The magnetic course from the straightening point to the destination.
    pub fn mc(&self) -> f64 {
        self.mc
    }

    /// The magnetic heading considering the wind correction angle.
    pub fn mh(&self) -> f64 {
        self.mh
    }

    /// The distance in NM including the turn. The turn counts with the arc
    /// of the [`turn_angle`](Leg::turn_angle).
    pub fn dist(&self) -> f64 {
        self.dist
    }

    /// The distance in NM of the arc of the [`turn_angle`](Leg::turn_angle).
    pub fn arc_dist(&self) -> f64 {
        self.arc_dist
    }

    /// The estimated time enroute in s.
    pub fn ete(&self) -> i64 {
        self.ete
    }

    /// The estimated time in s until the straightening point is reached.
    pub fn ete_to_straightening(&self) -> i64 {
        self.ete_to_straightening
    }

    /// The fuel burned on the leg.
    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    /// The ground speed in knots.
    pub fn gs(&self) -> f64 {
        self.gs
    }

    /// The true airspeed in knots.
    pub fn tas(&self) -> f64 {
        self.tas
    }

    pub fn alt(&self) -> f64 {
        self.alt
    }

    /// Returns the flown track from the origin over the turn to the
    /// destination. The turn is sampled with `segments` straight segments in
    /// the direction of the turn.
    pub fn track(&self, segments: usize) -> Vec<Coordinate> {
        let mut track = Vec::with_capacity(segments + 3);
        track.push(self.origin);

        if self.circle.radius > 0.0 && self.turn_angle > 0.0 && segments > 0 {
            let tm = TransverseMercator::centered_on(self.origin);
            let center = tm.to_planar(self.circle.center);
            let entry = (tm.to_planar(self.origin) - center).angle();
            let exit = (tm.to_planar(self.straightening_point) - center).angle();
            // the arc is drawn in the direction of the turn, even where it
            // exceeds half a circle
            let sense = self.turn_direction.map_or(1.0, |direction| direction.sense());
            let sweep = sense * fc::normalize_rad(sense * (exit - entry));

            track.extend((1..segments).map(|i| {
                let angle = entry + sweep * i as f64 / segments as f64;
                tm.to_geo(center.polar(self.circle.radius, angle))
            }));
        }

        if self.straightening_point != self.origin {
            track.push(self.straightening_point);
        }

        track.push(self.destination);
        track
    }
}

fn fuel_burned(ete: i64, destination: &Turnpoint) -> f64 {
    ete as f64 * destination.fuel_flow() / SECONDS_PER_HOUR
}
