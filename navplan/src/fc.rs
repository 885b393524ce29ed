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

//! Flight Computer.

use crate::error::WindError;
use crate::measurements::{constants, kt_to_mps};
use crate::Wind;

/// Normalizes an angle in degree into the range [0, 360).
pub fn normalize_deg(angle: f64) -> f64 {
    let angle = angle.rem_euclid(360.0);
    // rem_euclid may round up to the modulus for tiny negative angles
    if angle >= 360.0 {
        0.0
    } else {
        angle
    }
}

/// Normalizes an angle in radians into the range [0, 2π).
pub fn normalize_rad(angle: f64) -> f64 {
    let angle = angle.rem_euclid(constants::PI2);
    if angle >= constants::PI2 {
        0.0
    } else {
        angle
    }
}

/// Normalizes an angle in radians into the range (-π, π].
pub fn wrap_rad(angle: f64) -> f64 {
    let angle = normalize_rad(angle);
    if angle > std::f64::consts::PI {
        angle - constants::PI2
    } else {
        angle
    }
}

/// Returns the radius in m of a turn flown at the true airspeed `tas` in
/// knots with the `bank_angle` in degree.
///
/// The radius of a coordinated turn is
///
/// ```text
/// r = TAS² / (g * tan(bank angle))
/// ```
pub fn turn_radius(tas: f64, bank_angle: f64) -> f64 {
    kt_to_mps(tas).powi(2) / (constants::STANDARD_GRAVITY * bank_angle.to_radians().tan())
}

/// The solution of the wind triangle for a course.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct WindTriangle {
    /// Wind component along the course in knots. Negative values are a
    /// headwind.
    pub tailwind: f64,
    /// Wind component across the course in knots. Positive values push the
    /// aircraft to the right of the course.
    pub crosswind: f64,
    /// The ground speed in knots.
    pub gs: f64,
    /// The heading in degree to fly the course.
    pub heading: f64,
}

impl WindTriangle {
    /// Solves the wind triangle to fly the `course` with the `tas` in `wind`.
    ///
    /// The ground speed is approximated by adding the tailwind component to
    /// the TAS while the crosswind only affects the heading.
    ///
    /// # Errors
    ///
    /// Returns a [`WindError`] if the ground speed is not positive or the
    /// crosswind exceeds the ground speed.
    pub fn solve(course: f64, tas: f64, wind: &Wind) -> Result<Self, WindError> {
        // angle between the course and the direction the wind blows to
        let wind_angle =
            normalize_deg((wind.direction + 180.0).rem_euclid(360.0) - course + 360.0).to_radians();

        let tailwind = wind.speed * wind_angle.cos();
        let crosswind = wind.speed * wind_angle.sin();
        let gs = tas + tailwind;

        if !gs.is_finite() || gs <= 0.0 {
            return Err(WindError::NonPositiveGroundSpeed { gs });
        }

        let ratio = crosswind / gs;
        if !ratio.is_finite() || ratio.abs() > 1.0 {
            return Err(WindError::WindCorrectionUndefined { ratio });
        }

        Ok(Self {
            tailwind,
            crosswind,
            gs,
            heading: normalize_deg(course - ratio.asin().to_degrees() + 360.0),
        })
    }

    /// The wind correction angle in degree in the range (-180, 180].
    pub fn wca(&self, course: f64) -> f64 {
        wrap_rad((self.heading - course).to_radians()).to_degrees()
    }
}

/// Returns the time in s to fly `dist` nautical miles with the ground speed
/// `gs` in knots, rounded to full seconds.
pub fn time_enroute(dist: f64, gs: f64) -> i64 {
    (dist / gs * constants::SECONDS_PER_HOUR).round_ties_even() as i64
}
