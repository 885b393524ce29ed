// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Joe Pearson
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

/// Mean earth radius of the spherical earth model in m.
pub const EARTH_RADIUS: f64 = 6_371_000.0;
/// Standard gravity in m/s².
pub const STANDARD_GRAVITY: f64 = 9.80665;
/// Conversion factor from knots to m/s, rounded as used by the turn radius.
pub const KNOTS_IN_METER_PER_SECONDS: f64 = 0.514;
pub const NAUTICAL_MILE_IN_METER: f64 = 1852.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const SECONDS_PER_DAY: i64 = 86_400;
pub const PI2: f64 = std::f64::consts::PI * 2.0;
