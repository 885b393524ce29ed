// SPDX-License-Identifier: Apache-2.0
// Copyright 2025, 2026 Joe Pearson
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

use navplan::prelude::*;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// The evaluated route as it's returned to JavaScript.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsNavLog {
    #[serde(flatten)]
    navlog: NavLog,
    totals: Option<Totals>,
    doghouses: Vec<String>,
}

/// Evaluates the `route` and returns its navigation log.
///
/// The route is expected as object with the `points` and optionally the
/// `declination`, `bankAngle`, `initTimeSec` and `initFob`. Each point has
/// its `lat`, `lon`, `tas`, `alt`, `fuelFlow` and optionally the `windSpeed`,
/// `windDir` and `name`.
#[wasm_bindgen(js_name = evaluateRoute)]
pub fn evaluate_route(route: JsValue) -> Result<JsValue, JsError> {
    let route: Route = serde_wasm_bindgen::from_value(route)?;
    let navlog = route.evaluate()?;

    let result = JsNavLog {
        totals: navlog.totals(),
        doghouses: navlog.doghouses().iter().map(ToString::to_string).collect(),
        navlog,
    };

    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Evaluates the `route` and returns its navigation log as GeoJSON.
#[wasm_bindgen(js_name = evaluateRouteGeoJson)]
pub fn evaluate_route_geojson(route: JsValue) -> Result<JsValue, JsError> {
    let route: Route = serde_wasm_bindgen::from_value(route)?;
    let geojson = route.evaluate()?.to_geojson();

    Ok(serde_wasm_bindgen::to_value(&geojson)?)
}
