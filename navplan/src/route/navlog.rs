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

use log::warn;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::{Duration, Time};

use super::{Doghouse, Leg, Turnpoint};
use crate::Coordinate;

/// The state of the aircraft when passing a turnpoint.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TurnpointState {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    name: Option<String>,
    coordinate: Coordinate,
    #[cfg_attr(feature = "serde", serde(rename = "etaSec"))]
    eta: i64,
    efr: f64,
}

impl TurnpointState {
    fn new(turnpoint: &Turnpoint, eta: i64, efr: f64) -> Self {
        Self {
            name: turnpoint.name().map(String::from),
            coordinate: turnpoint.coordinate(),
            eta,
            efr,
        }
    }

    /// Returns the state after flying the `leg` to the `turnpoint`.
    fn next(&self, leg: &Leg, turnpoint: &Turnpoint) -> Self {
        Self::new(turnpoint, self.eta + leg.ete(), self.efr - leg.fuel())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// The estimated time of arrival in s since midnight. Exceeds a day if the
    /// route goes past midnight.
    pub fn eta(&self) -> i64 {
        self.eta
    }

    /// The estimated fuel remaining, which is negative if the fuel on board
    /// was not sufficient.
    pub fn efr(&self) -> f64 {
        self.efr
    }

    /// The estimated time of arrival as time of day.
    pub fn time_of_day(&self) -> Time {
        Time::MIDNIGHT + Duration::seconds(self.eta)
    }
}

/// The totals of a [`NavLog`].
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Totals {
    /// Distance in NM.
    #[cfg_attr(feature = "serde", serde(rename = "distanceNm"))]
    pub dist: f64,
    /// Time enroute in s.
    #[cfg_attr(feature = "serde", serde(rename = "eteSec"))]
    pub ete: i64,
    pub fuel: f64,
    /// Time of arrival at the last turnpoint.
    #[cfg_attr(feature = "serde", serde(rename = "etaSec"))]
    pub eta: i64,
    /// Fuel remaining at the last turnpoint.
    pub efr: f64,
}

/// The navigation log of an evaluated route.
///
/// The log has a state for each turnpoint and the legs between them.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct NavLog {
    #[cfg_attr(feature = "serde", serde(rename = "legData"))]
    legs: Vec<Leg>,
    #[cfg_attr(feature = "serde", serde(rename = "turnpointData"))]
    turnpoints: Vec<TurnpointState>,
}

impl NavLog {
    /// Propagates the time and fuel from the initial state over the `legs`
    /// which join the `turnpoints`.
    pub(super) fn propagate(
        turnpoints: &[Turnpoint],
        legs: Vec<Leg>,
        init_time: i64,
        init_fob: f64,
    ) -> Self {
        let Some(first) = turnpoints.first() else {
            return Self::default();
        };

        let initial = TurnpointState::new(first, init_time, init_fob);
        let states = std::iter::once(initial.clone())
            .chain(legs.iter().zip(&turnpoints[1..]).scan(
                initial,
                |state, (leg, turnpoint)| {
                    *state = state.next(leg, turnpoint);
                    Some(state.clone())
                },
            ))
            .collect::<Vec<_>>();

        if let Some(state) = states.iter().find(|state| state.efr < 0.0) {
            warn!(
                "fuel on board is exhausted before {} with {:.1} remaining",
                state.coordinate, state.efr
            );
        }

        Self {
            legs,
            turnpoints: states,
        }
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// The states of the aircraft at each turnpoint.
    pub fn turnpoints(&self) -> &[TurnpointState] {
        &self.turnpoints
    }

    pub fn is_empty(&self) -> bool {
        self.turnpoints.is_empty()
    }

    /// Returns the totals of the log or `None` if the log is empty.
    pub fn totals(&self) -> Option<Totals> {
        let last = self.turnpoints.last()?;

        let (dist, ete, fuel) = self
            .legs
            .iter()
            .fold((0.0, 0, 0.0), |(dist, ete, fuel), leg| {
                (dist + leg.dist(), ete + leg.ete(), fuel + leg.fuel())
            });

        Some(Totals {
            dist,
            ete,
            fuel,
            eta: last.eta,
            efr: last.efr,
        })
    }

    pub fn doghouses(&self) -> Vec<Doghouse> {
        self.legs.iter().map(Doghouse::from).collect()
    }
}
