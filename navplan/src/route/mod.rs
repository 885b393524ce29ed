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

use log::{debug, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

mod builder;
mod doghouse;
mod leg;
mod navlog;
mod turnpoint;

pub use builder::RouteBuilder;
pub use doghouse::Doghouse;
pub use leg::Leg;
pub use navlog::{NavLog, Totals, TurnpointState};
pub use turnpoint::Turnpoint;

/// A route through an ordered list of turnpoints.
///
/// The route is flown leg by leg from one turnpoint to the next. At each
/// turnpoint the aircraft turns with the route's bank angle onto the next
/// leg, thus each leg but the first starts with a turn that ends at the leg's
/// straightening point.
///
/// Evaluating the route computes the [`legs`] and propagates the time and
/// fuel over the turnpoints into a [`NavLog`]:
///
/// ```
/// use navplan::prelude::*;
///
/// let log = Route::builder()
///     .turnpoint(Turnpoint::new(coord!(34.0, 36.0), 100.0, 3000.0, 30.0, Wind::calm()))
///     .turnpoint(Turnpoint::new(coord!(34.5, 36.0), 100.0, 3000.0, 30.0, Wind::calm()))
///     .init_fob(60.0)
///     .build()
///     .evaluate()?;
///
/// let totals = log.totals().unwrap();
/// assert_eq!(totals.ete, log.legs()[0].ete());
/// # Ok::<(), navplan::Error>(())
/// ```
///
/// [`legs`]: Leg
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Route {
    #[cfg_attr(feature = "serde", serde(rename = "points"))]
    turnpoints: Vec<Turnpoint>,
    #[cfg_attr(feature = "serde", serde(default))]
    declination: f64,
    #[cfg_attr(feature = "serde", serde(default = "builder::default_bank_angle"))]
    bank_angle: f64,
    #[cfg_attr(feature = "serde", serde(default, rename = "initTimeSec"))]
    init_time: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    init_fob: f64,
}

impl Route {
    /// Returns a builder for a route.
    pub fn builder() -> RouteBuilder {
        RouteBuilder::new()
    }

    pub fn turnpoints(&self) -> &[Turnpoint] {
        &self.turnpoints
    }

    /// The magnetic declination in degree which is added to true bearings.
    pub fn declination(&self) -> f64 {
        self.declination
    }

    /// The bank angle in degree with which turns are flown.
    pub fn bank_angle(&self) -> f64 {
        self.bank_angle
    }

    /// The time of departure in s since midnight.
    pub fn init_time(&self) -> i64 {
        self.init_time
    }

    /// The fuel on board at departure.
    pub fn init_fob(&self) -> f64 {
        self.init_fob
    }

    /// Computes the leg from the turnpoint at index `from` to the one at
    /// index `to`.
    ///
    /// The turn onto the leg is flown from the inbound track of the previous
    /// turnpoint. A leg from the first turnpoint starts without a turn.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownTurnpoint`] if an index is out of range and
    /// [`InvalidGeometry`] or [`InvalidWind`] if the leg can't be flown.
    ///
    /// [`UnknownTurnpoint`]: Error::UnknownTurnpoint
    /// [`InvalidGeometry`]: Error::InvalidGeometry
    /// [`InvalidWind`]: Error::InvalidWind
    pub fn leg(&self, from: usize, to: usize) -> Result<Leg, Error> {
        Leg::new(self, from, to)
    }

    /// Evaluates the route into a navigation log.
    ///
    /// # Errors
    ///
    /// Fails with the error of the first leg that can't be flown.
    pub fn evaluate(&self) -> Result<NavLog, Error> {
        debug!(
            "evaluating route with {} turnpoints",
            self.turnpoints.len()
        );

        let legs = (1..self.turnpoints.len())
            .map(|to| self.leg(to - 1, to))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| warn!("route evaluation failed: {e}"))?;

        debug!("evaluated {} legs", legs.len());

        Ok(NavLog::propagate(
            &self.turnpoints,
            legs,
            self.init_time,
            self.init_fob,
        ))
    }
}
