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

//! Navigation log computation for a route flown under wind.
//!
//! A [`Route`] is an ordered list of [`Turnpoint`]s together with the
//! magnetic declination, the bank angle flown in turns and the initial time
//! and fuel. Evaluating the route yields a [`NavLog`] with one [`Leg`] per
//! pair of consecutive turnpoints and one [`TurnpointState`] per turnpoint:
//!
//! ```
//! use navplan::prelude::*;
//!
//! # fn main() -> Result<(), Error> {
//! let wind = Wind::new(270.0, 20.0);
//! let route = Route::builder()
//!     .turnpoint(Turnpoint::new(coord!(34.0, 36.0), 400.0, 3000.0, 6000.0, wind))
//!     .turnpoint(Turnpoint::new(coord!(34.0, 37.0), 400.0, 3000.0, 6000.0, wind))
//!     .turnpoint(Turnpoint::new(coord!(34.5, 37.5), 400.0, 3000.0, 6000.0, wind))
//!     .declination(5.0)
//!     .bank_angle(30.0)
//!     .init_time_of_day(12, 0)
//!     .init_fob(12000.0)
//!     .build();
//!
//! let navlog = route.evaluate()?;
//! assert_eq!(navlog.legs().len(), 2);
//! assert_eq!(navlog.turnpoints().len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! Each leg after the first starts with a turn. The turn is flown on a circle
//! whose radius follows from the true airspeed and bank angle, and the leg
//! continues straight once the aircraft points at the next turnpoint. The
//! geometry of this turn is solved in a local planar [projection].
//!
//! The crate holds no global state. Evaluating routes concurrently from any
//! number of threads is safe.
//!
//! [projection]: geom::Projection

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

mod core;
mod error;
pub mod fc;
pub mod geom;
pub mod measurements;
pub mod route;

#[cfg(feature = "geojson")]
mod geojson;

pub use crate::core::Wind;
pub use error::{Error, GeometryError, Result, WindError};
pub use geom::Coordinate;
pub use route::{Leg, NavLog, Route, RouteBuilder, Totals, Turnpoint, TurnpointState};

pub mod prelude {
    pub use crate::coord;
    pub use crate::error::{Error, GeometryError, WindError};
    pub use crate::geom::{Coordinate, TurnDirection};
    pub use crate::route::{
        Doghouse, Leg, NavLog, Route, RouteBuilder, Totals, Turnpoint, TurnpointState,
    };
    pub use crate::Wind;
}
