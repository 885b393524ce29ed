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

use log::trace;

use super::{Route, Turnpoint};

const DEFAULT_BANK_ANGLE: f64 = 30.0;

pub(super) fn default_bank_angle() -> f64 {
    DEFAULT_BANK_ANGLE
}

/// Route factory, which is used to build a route.
///
/// Without further configuration a route has no magnetic declination, turns
/// are flown with 30° of bank and the route starts at midnight with no fuel
/// on board.
#[derive(Clone, PartialEq, Debug)]
pub struct RouteBuilder {
    turnpoints: Vec<Turnpoint>,
    declination: f64,
    bank_angle: f64,
    init_time: i64,
    init_fob: f64,
}

impl Default for RouteBuilder {
    fn default() -> Self {
        Self {
            turnpoints: Vec::new(),
            declination: 0.0,
            bank_angle: default_bank_angle(),
            init_time: 0,
            init_fob: 0.0,
        }
    }
}

impl RouteBuilder {
    /// Creates a new builder.
    pub fn new() -> RouteBuilder {
        Self::default()
    }

    /// Builds the route.
    pub fn build(&self) -> Route {
        trace!(
            "building route with {} turnpoints (declination={}, bank={})",
            self.turnpoints.len(),
            self.declination,
            self.bank_angle
        );

        Route {
            turnpoints: self.turnpoints.clone(),
            declination: self.declination,
            bank_angle: self.bank_angle,
            init_time: self.init_time,
            init_fob: self.init_fob,
        }
    }

    /// Appends the `turnpoint` to the route.
    pub fn turnpoint(&mut self, turnpoint: Turnpoint) -> &mut Self {
        self.turnpoints.push(turnpoint);
        self
    }

    /// Replaces all turnpoints of the route.
    pub fn turnpoints(&mut self, turnpoints: Vec<Turnpoint>) -> &mut Self {
        self.turnpoints = turnpoints;
        self
    }

    pub fn declination(&mut self, declination: f64) -> &mut Self {
        self.declination = declination;
        self
    }

    pub fn bank_angle(&mut self, bank_angle: f64) -> &mut Self {
        self.bank_angle = bank_angle;
        self
    }

    /// Sets the time of departure in s since midnight.
    pub fn init_time(&mut self, init_time: i64) -> &mut Self {
        self.init_time = init_time;
        self
    }

    /// Sets the time of departure as time of day.
    pub fn init_time_of_day(&mut self, hour: u8, minute: u8) -> &mut Self {
        self.init_time(hour as i64 * 3600 + minute as i64 * 60)
    }

    pub fn init_fob(&mut self, init_fob: f64) -> &mut Self {
        self.init_fob = init_fob;
        self
    }
}
