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

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Wind with the direction it blows from and its speed.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wind {
    /// The direction in degree from which the wind blows.
    pub direction: f64,
    /// The wind speed in knots.
    pub speed: f64,
}

impl Wind {
    pub fn new(direction: f64, speed: f64) -> Self {
        Self { direction, speed }
    }

    /// Returns a calm wind.
    pub fn calm() -> Self {
        Self::default()
    }

    pub fn is_calm(&self) -> bool {
        self.speed == 0.0
    }
}

impl FromStr for Wind {
    type Err = Error;

    /// Parses a string `s` to return a Wind.
    ///
    /// The string is encoded as in a METAR with three figures for the
    /// direction followed by two or three figures for the speed and the unit
    /// `KT` e.g. `27020KT` or `090105KT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.strip_suffix("KT").ok_or(Error::UnexpectedString)?;

        if !(5..=6).contains(&value.len()) || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::UnexpectedString);
        }

        let (direction, speed) = value.split_at(3);
        let direction: u16 = direction.parse().map_err(|_| Error::UnexpectedString)?;
        let speed: u16 = speed.parse().map_err(|_| Error::UnexpectedString)?;

        if direction > 360 {
            return Err(Error::UnexpectedString);
        }

        Ok(Self {
            // 360 is reported for wind from north
            direction: (direction % 360) as f64,
            speed: speed as f64,
        })
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:03}{:02}KT",
            self.direction.round() as u16,
            self.speed.round() as u16
        )
    }
}
