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

#![cfg(feature = "serde")]

use navplan::prelude::*;
use serde_json::{json, Value};

fn flight_plan() -> Value {
    json!({
        "points": [
            {
                "lat": 34.0,
                "lon": 36.0,
                "tas": 400,
                "alt": 3000,
                "fuelFlow": 6000,
                "windSpeed": 20,
                "windDir": 270,
                "name": "WP1"
            },
            {
                "lat": 35.0,
                "lon": 37.0,
                "tas": 400,
                "alt": 3000,
                "fuelFlow": 6000,
                "windSpeed": 20,
                "windDir": 270
            }
        ],
        "declination": 12.5,
        "bankAngle": 30.0,
        "initTimeSec": 43200,
        "initFob": 12000
    })
}

#[test]
fn deserialize_flight_plan() {
    let route: Route = serde_json::from_value(flight_plan()).unwrap();

    assert_eq!(route.declination(), 12.5);
    assert_eq!(route.bank_angle(), 30.0);
    assert_eq!(route.init_time(), 43_200);
    assert_eq!(route.init_fob(), 12_000.0);

    let [wp1, wp2] = route.turnpoints() else {
        panic!("expected two turnpoints");
    };
    assert_eq!(wp1.name(), Some("WP1"));
    assert_eq!(wp1.coordinate(), coord!(34.0, 36.0));
    assert_eq!(wp1.tas(), 400.0);
    assert_eq!(wp1.alt(), 3000.0);
    assert_eq!(wp1.fuel_flow(), 6000.0);
    assert_eq!(wp1.wind(), &Wind::new(270.0, 20.0));
    assert_eq!(wp2.name(), None);
    assert_eq!(wp2.coordinate(), coord!(35.0, 37.0));
}

#[test]
fn optional_fields_take_defaults() {
    let route: Route = serde_json::from_value(json!({
        "points": [{ "lat": 34.0, "lon": 36.0, "tas": 120, "alt": 3000, "fuelFlow": 30 }]
    }))
    .unwrap();

    assert_eq!(route.declination(), 0.0);
    assert_eq!(route.bank_angle(), 30.0);
    assert_eq!(route.init_time(), 0);
    assert!(route.turnpoints()[0].wind().is_calm());
}

#[test]
fn missing_points_are_rejected() {
    let result = serde_json::from_value::<Route>(json!({ "declination": 0.0 }));
    assert!(result.is_err());
}

#[test]
fn turnpoint_serializes_flat() {
    let tp = Turnpoint::new(coord!(34.0, 36.0), 400.0, 3000.0, 6000.0, Wind::new(270.0, 20.0))
        .with_name("WP1");

    assert_eq!(
        serde_json::to_value(&tp).unwrap(),
        json!({
            "name": "WP1",
            "lat": 34.0,
            "lon": 36.0,
            "tas": 400.0,
            "alt": 3000.0,
            "fuelFlow": 6000.0,
            "windSpeed": 20.0,
            "windDir": 270.0
        })
    );
}

#[test]
fn navlog_fields() {
    let route: Route = serde_json::from_value(flight_plan()).unwrap();
    let log = route.evaluate().unwrap();
    let value = serde_json::to_value(&log).unwrap();

    let leg = &value["legData"][0];
    assert_eq!(leg["eteSec"], json!(log.legs()[0].ete()));
    assert_eq!(leg["distanceNm"], json!(log.legs()[0].dist()));
    assert_eq!(leg["course"], json!(log.legs()[0].mc()));
    assert_eq!(leg["heading"], json!(log.legs()[0].mh()));

    let wp1 = &value["turnpointData"][0];
    assert_eq!(wp1["name"], json!("WP1"));
    assert_eq!(wp1["etaSec"], json!(43_200));
    assert_eq!(wp1["efr"], json!(12_000.0));
    assert_eq!(wp1["coordinate"], json!({ "lat": 34.0, "lon": 36.0 }));
}
