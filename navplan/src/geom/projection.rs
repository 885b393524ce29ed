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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Coordinate, PlanarPoint};
use crate::measurements::constants::EARTH_RADIUS;

/// Conversion between geographic coordinates and a planar frame.
///
/// The turn onto a leg is solved with Euclidean geometry in the planar frame
/// of a projection. Implementations must be invertible, i.e. converting a
/// point to the planar frame and back must yield the same coordinate within
/// float precision.
pub trait Projection {
    /// Converts the coordinate `c` into the planar frame.
    fn to_planar(&self, c: Coordinate) -> PlanarPoint;

    /// Converts the planar point `p` into a geographic coordinate.
    fn to_geo(&self, p: PlanarPoint) -> Coordinate;
}

/// Transverse Mercator projection of a spherical earth.
///
/// The projection is conformal and true to scale along its central meridian.
/// Around the central meridian, distances and angles in the planar frame are
/// thus the same as on ground, which makes it suitable to solve turns with a
/// radius of some km.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TransverseMercator {
    central_meridian: f64,
}

impl TransverseMercator {
    /// Creates a projection with the `central_meridian` in degree.
    pub fn new(central_meridian: f64) -> Self {
        Self { central_meridian }
    }

    /// Creates a projection whose central meridian runs through `c`.
    pub fn centered_on(c: Coordinate) -> Self {
        Self::new(c.longitude)
    }
}

impl Projection for TransverseMercator {
    fn to_planar(&self, c: Coordinate) -> PlanarPoint {
        let lat = c.latitude.to_radians();
        let d_lon = (c.longitude - self.central_meridian).to_radians();

        let b = lat.cos() * d_lon.sin();

        PlanarPoint {
            x: EARTH_RADIUS * b.atanh(),
            y: EARTH_RADIUS * lat.sin().atan2(lat.cos() * d_lon.cos()),
        }
    }

    fn to_geo(&self, p: PlanarPoint) -> Coordinate {
        let x = p.x / EARTH_RADIUS;
        let y = p.y / EARTH_RADIUS;

        let lat = (y.sin() / x.cosh()).asin();
        let d_lon = x.sinh().atan2(y.cos());

        let mut longitude = self.central_meridian + d_lon.to_degrees();
        if longitude > 180.0 {
            longitude -= 360.0;
        } else if longitude < -180.0 {
            longitude += 360.0;
        }

        Coordinate {
            latitude: lat.to_degrees(),
            longitude,
        }
    }
}
