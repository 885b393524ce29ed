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

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Leg;

/// The annotation of a leg as it's written next to the track on a chart.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Doghouse {
    /// Magnetic heading in full degree from 1 to 360.
    pub heading: u16,
    /// Distance in tenth of NM.
    pub dist: u32,
    /// Time enroute in s.
    pub ete: i64,
    /// Altitude in full units.
    pub alt: i64,
}

impl From<&Leg> for Doghouse {
    fn from(leg: &Leg) -> Self {
        let heading = leg.mh().round() as u16 % 360;

        Self {
            heading: if heading == 0 { 360 } else { heading },
            dist: (leg.dist() * 10.0).round() as u32,
            ete: leg.ete(),
            alt: leg.alt().round() as i64,
        }
    }
}

impl fmt::Display for Doghouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:03}° {}.{}NM {:02}:{:02} {}",
            self.heading,
            self.dist / 10,
            self.dist % 10,
            self.ete / 60,
            self.ete % 60,
            self.alt
        )
    }
}
