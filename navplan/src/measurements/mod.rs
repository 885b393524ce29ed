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

//! Units of measurement.
//!
//! Speeds are in knots, distances on ground in nautical miles and distances
//! in the planar frame in meters. The functions below convert between them.

pub mod constants;

/// Converts a speed from knots to m/s.
pub fn kt_to_mps(kt: f64) -> f64 {
    kt * constants::KNOTS_IN_METER_PER_SECONDS
}

/// Converts a length from meters to nautical miles.
pub fn m_to_nm(m: f64) -> f64 {
    m / constants::NAUTICAL_MILE_IN_METER
}
