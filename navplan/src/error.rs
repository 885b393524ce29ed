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

use std::error;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// The turn onto a leg has no solution.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum GeometryError {
    /// The destination lies inside the turn circle, thus no tangent from the
    /// destination touches the circle.
    DestinationInsideTurn,
    /// The tangent line of the destination is undefined, e.g. because the
    /// destination coincides with the circle's center.
    DegenerateTangentLine,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DestinationInsideTurn => {
                write!(f, "destination lies inside the turn circle")
            }
            Self::DegenerateTangentLine => {
                write!(f, "tangent line to the turn circle is degenerate")
            }
        }
    }
}

impl error::Error for GeometryError {}

/// The wind triangle of a leg has no solution.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum WindError {
    /// The wind is as strong as or stronger than the headwind the aircraft can
    /// fly against.
    NonPositiveGroundSpeed { gs: f64 },
    /// The crosswind exceeds the ground speed, so no wind correction angle
    /// exists.
    WindCorrectionUndefined { ratio: f64 },
}

impl fmt::Display for WindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveGroundSpeed { gs } => {
                write!(f, "ground speed is {gs:.1} kt but must be positive")
            }
            Self::WindCorrectionUndefined { ratio } => {
                write!(
                    f,
                    "crosswind to ground speed ratio is {ratio:.3} but must be within [-1, 1]"
                )
            }
        }
    }
}

impl error::Error for WindError {}

#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// The turn onto the leg with the index `leg` can't be flown.
    InvalidGeometry { leg: usize, error: GeometryError },
    /// The wind on the leg with the index `leg` can't be corrected.
    InvalidWind { leg: usize, error: WindError },
    /// No turnpoint exists at the index.
    UnknownTurnpoint(usize),
    /// A string could not be parsed into the expected value.
    UnexpectedString,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry { leg, error } => {
                write!(f, "invalid turn geometry on leg {leg}: {error}")
            }
            Self::InvalidWind { leg, error } => {
                write!(f, "invalid wind solution on leg {leg}: {error}")
            }
            Self::UnknownTurnpoint(index) => write!(f, "no turnpoint at index {index}"),
            Self::UnexpectedString => write!(f, "unexpected string"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InvalidGeometry { error, .. } => Some(error),
            Self::InvalidWind { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl Error {
    /// Returns the index of the leg that failed, if the error is leg specific.
    pub fn leg(&self) -> Option<usize> {
        match self {
            Self::InvalidGeometry { leg, .. } | Self::InvalidWind { leg, .. } => Some(*leg),
            _ => None,
        }
    }
}
