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

use crate::{Coordinate, Wind};

/// A point of the route.
///
/// The conditions of a turnpoint apply to the leg that is flown into it.
///
/// Serialized, the coordinate and wind are flat fields of the turnpoint:
///
/// ```json
/// { "lat": 34.0, "lon": 36.0, "tas": 400, "alt": 3000, "fuelFlow": 6000,
///   "windSpeed": 20, "windDir": 270, "name": "WP1" }
/// ```
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "TurnpointData", into = "TurnpointData")
)]
pub struct Turnpoint {
    name: Option<String>,
    coordinate: Coordinate,
    tas: f64,
    alt: f64,
    fuel_flow: f64,
    wind: Wind,
}

/// The flat representation in which a turnpoint is exchanged.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TurnpointData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    lat: f64,
    lon: f64,
    tas: f64,
    alt: f64,
    fuel_flow: f64,
    #[serde(default)]
    wind_speed: f64,
    #[serde(default)]
    wind_dir: f64,
}

#[cfg(feature = "serde")]
impl From<TurnpointData> for Turnpoint {
    fn from(data: TurnpointData) -> Self {
        Self {
            name: data.name,
            coordinate: Coordinate::new(data.lat, data.lon),
            tas: data.tas,
            alt: data.alt,
            fuel_flow: data.fuel_flow,
            wind: Wind::new(data.wind_dir, data.wind_speed),
        }
    }
}

#[cfg(feature = "serde")]
impl From<Turnpoint> for TurnpointData {
    fn from(tp: Turnpoint) -> Self {
        Self {
            name: tp.name,
            lat: tp.coordinate.latitude,
            lon: tp.coordinate.longitude,
            tas: tp.tas,
            alt: tp.alt,
            fuel_flow: tp.fuel_flow,
            wind_speed: tp.wind.speed,
            wind_dir: tp.wind.direction,
        }
    }
}

impl Turnpoint {
    /// Creates a turnpoint at the `coordinate` which is reached with the `tas`
    /// in knots at the altitude `alt`, burning the `fuel_flow` per hour in the
    /// `wind`.
    pub fn new(coordinate: Coordinate, tas: f64, alt: f64, fuel_flow: f64, wind: Wind) -> Self {
        Self {
            name: None,
            coordinate,
            tas,
            alt,
            fuel_flow,
            wind,
        }
    }

    /// Names the turnpoint.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// The true airspeed in knots.
    pub fn tas(&self) -> f64 {
        self.tas
    }

    /// The altitude in the unit of the route's altitudes.
    pub fn alt(&self) -> f64 {
        self.alt
    }

    /// The fuel consumed per hour.
    pub fn fuel_flow(&self) -> f64 {
        self.fuel_flow
    }

    pub fn wind(&self) -> &Wind {
        &self.wind
    }
}
