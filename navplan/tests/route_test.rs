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

use navplan::prelude::*;

const NOON: i64 = 43_200;
const INIT_FOB: f64 = 12_000.0;

/// A turnpoint at 400 kt and 3000 ft burning 6000 per hour in 20 kt of wind.
fn tp(latitude: f64, longitude: f64, wind_direction: f64) -> Turnpoint {
    Turnpoint::new(
        coord!(latitude, longitude),
        400.0,
        3000.0,
        6000.0,
        Wind::new(wind_direction, 20.0),
    )
}

fn evaluate(turnpoints: Vec<Turnpoint>, declination: f64) -> NavLog {
    Route::builder()
        .turnpoints(turnpoints)
        .declination(declination)
        .bank_angle(30.0)
        .init_time(NOON)
        .init_fob(INIT_FOB)
        .build()
        .evaluate()
        .expect("route should be flyable")
}

/// Points along the 34th parallel from `from` to `to` degree east.
fn along_parallel(from: i32, to: i32, wind_direction: f64) -> Vec<Turnpoint> {
    let step = if from <= to { 1 } else { -1 };
    let mut longitude = from;
    let mut turnpoints = vec![tp(34.0, from as f64, wind_direction)];

    while longitude != to {
        longitude += step;
        turnpoints.push(tp(34.0, longitude as f64, wind_direction));
    }

    turnpoints
}

fn assert_progress(log: &NavLog) {
    for pair in log.turnpoints().windows(2) {
        assert!(pair[1].eta() > pair[0].eta());
        assert!(pair[1].efr() < pair[0].efr());
    }
}

#[test]
fn tailwind() {
    let log = evaluate(along_parallel(36, 40, 270.0), 0.0);

    assert_eq!(log.turnpoints().len(), 5);
    assert_eq!(log.legs().len(), 4);
    for leg in log.legs() {
        assert!(leg.gs() > 400.0, "gs is {}", leg.gs());
    }
    assert_progress(&log);
}

#[test]
fn headwind() {
    let log = evaluate(along_parallel(40, 36, 270.0), 0.0);

    assert_eq!(log.legs().len(), 4);
    for leg in log.legs() {
        assert!(leg.gs() < 400.0, "gs is {}", leg.gs());
    }
    assert_progress(&log);
}

#[test]
fn crosswind() {
    let log = evaluate(along_parallel(36, 40, 0.0), 0.0);

    for leg in log.legs() {
        assert!((leg.gs() - 400.0).abs() < 25.0);
        // the wind from north is corrected to the left
        let wca = (leg.mh() - leg.mc() + 540.0) % 360.0 - 180.0;
        assert!(wca < -0.1, "wca is {wca}");
    }
    assert_progress(&log);
}

#[test]
fn east_declination() {
    let west = evaluate(along_parallel(36, 40, 270.0), 0.0);
    let east = evaluate(along_parallel(36, 40, 270.0), 12.5);

    for (w, e) in west.legs().iter().zip(east.legs()) {
        assert!((e.mc() - w.mc() - 12.5).abs() < 1e-6);
        // less tailwind on the magnetic course
        assert!(e.gs() < w.gs());
    }
    assert_progress(&east);
}

#[test]
fn west_declination_wraps_course() {
    // flying north with 12.5° west declination
    let log = evaluate(
        vec![tp(34.0, 36.0, 270.0), tp(35.0, 36.0, 270.0), tp(36.0, 36.0, 270.0)],
        -12.5,
    );

    for leg in log.legs() {
        assert!((0.0..360.0).contains(&leg.mc()));
        assert!((leg.mc() - 347.5).abs() < 0.5, "mc is {}", leg.mc());
    }
    assert_progress(&log);
}

#[test]
fn no_turnpoints() {
    let log = evaluate(Vec::new(), 0.0);

    assert!(log.legs().is_empty());
    assert!(log.turnpoints().is_empty());
    assert_eq!(log.totals(), None);
}

#[test]
fn single_turnpoint() {
    let log = evaluate(vec![tp(34.0, 36.0, 270.0)], 0.0);

    assert!(log.legs().is_empty());
    let [state] = log.turnpoints() else {
        panic!("expected one state");
    };
    assert_eq!(state.eta(), NOON);
    assert_eq!(state.efr(), INIT_FOB);
}

#[test]
fn two_turnpoints() {
    let log = evaluate(vec![tp(34.0, 36.0, 270.0), tp(34.0, 37.0, 270.0)], 0.0);

    assert_eq!(log.legs().len(), 1);
    assert_eq!(log.turnpoints()[0].eta(), NOON);
    assert_eq!(log.turnpoints()[0].efr(), INIT_FOB);
    assert_progress(&log);
}

#[test]
fn very_long_distance() {
    let log = evaluate(vec![tp(34.0, 36.0, 270.0), tp(34.0, 46.0, 270.0)], 0.0);
    assert!(log.legs()[0].dist() > 100.0);
    assert_progress(&log);
}

#[test]
fn very_short_distance() {
    let log = evaluate(vec![tp(34.0, 36.0, 270.0), tp(34.001, 36.001, 270.0)], 0.0);
    assert!(log.legs()[0].dist() > 0.0);
    assert!(log.turnpoints()[1].eta() >= log.turnpoints()[0].eta());
}

#[test]
fn known_distance() {
    let turnpoints = vec![
        Turnpoint::new(coord!(35.0, 36.0), 120.0, 3000.0, 6000.0, Wind::calm()),
        Turnpoint::new(coord!(36.0, 36.0), 120.0, 3000.0, 6000.0, Wind::calm()),
    ];
    let log = evaluate(turnpoints, 0.0);
    let leg = &log.legs()[0];

    // one degree of latitude at 120 kt
    assert!((leg.dist() - 60.0).abs() < 0.1, "dist is {}", leg.dist());
    assert!((leg.ete() - 1800).abs() < 2, "ete is {}", leg.ete());
    assert!(log.turnpoints()[1].eta() > log.turnpoints()[0].eta());
}

#[test]
fn calm_wind() {
    let turnpoints = along_parallel(36, 38, 270.0)
        .into_iter()
        .map(|tp| Turnpoint::new(tp.coordinate(), tp.tas(), tp.alt(), tp.fuel_flow(), Wind::calm()))
        .collect();
    let log = evaluate(turnpoints, 0.0);

    for leg in log.legs() {
        assert_eq!(leg.gs(), 400.0);
        assert!((leg.mh() - leg.mc()).abs() < 1e-9);
    }
}

#[test]
fn high_tailwind() {
    let turnpoints = vec![
        Turnpoint::new(coord!(34.0, 36.0), 400.0, 3000.0, 6000.0, Wind::new(270.0, 100.0)),
        Turnpoint::new(coord!(34.0, 37.0), 400.0, 3000.0, 6000.0, Wind::new(270.0, 100.0)),
    ];
    let log = evaluate(turnpoints, 0.0);

    assert!(log.legs()[0].gs() > 490.0);
}

#[test]
fn fuel_flow_of_destination_applies() {
    let turnpoints = [5000.0, 7000.0, 6000.0, 8000.0]
        .into_iter()
        .zip(36..)
        .map(|(ff, lon)| {
            Turnpoint::new(coord!(34.0, lon as f64), 400.0, 3000.0, ff, Wind::new(270.0, 20.0))
        })
        .collect();
    let log = evaluate(turnpoints, 0.0);
    let legs = log.legs();

    assert!(legs[0].fuel() > legs[1].fuel());
    assert!(legs[0].fuel() < legs[2].fuel());
    assert_progress(&log);
}

#[test]
fn tas_of_destination_applies() {
    let turnpoints = [300.0, 400.0, 500.0, 300.0]
        .into_iter()
        .zip(36..)
        .map(|(tas, lon)| {
            Turnpoint::new(coord!(34.0, lon as f64), tas, 3000.0, 6000.0, Wind::new(270.0, 20.0))
        })
        .collect();
    let log = evaluate(turnpoints, 0.0);
    let legs = log.legs();

    assert!(legs[1].gs() > legs[0].gs());
    assert!(legs[2].gs() < legs[0].gs());

    let ete: i64 = legs.iter().map(Leg::ete).sum();
    assert_eq!(log.turnpoints()[3].eta(), NOON + ete);
    assert_eq!(log.totals().map(|totals| totals.eta), Some(NOON + ete));
}

#[test]
fn straightening_points_lie_on_turn_circles() {
    let log = evaluate(
        vec![
            tp(34.0, 36.0, 270.0),
            tp(34.0, 37.0, 270.0),
            tp(34.8, 37.2, 270.0),
            tp(34.6, 36.4, 270.0),
        ],
        3.0,
    );

    for leg in log.legs().iter().skip(1) {
        let r = leg.circle().center.dist(&leg.straightening_point());
        assert!((r - leg.circle().radius).abs() < 10.0);
        assert!((0.0..=180.0).contains(&leg.turn_angle()));
        assert!(leg.turn_direction().is_some());
    }
}

#[test]
fn strong_headwind_fails_with_leg_index() {
    let turnpoints = vec![
        tp(34.0, 36.0, 270.0),
        tp(34.0, 37.0, 270.0),
        Turnpoint::new(coord!(34.0, 36.0), 100.0, 3000.0, 6000.0, Wind::new(270.0, 150.0)),
    ];
    let result = Route::builder().turnpoints(turnpoints).build().evaluate();

    match result {
        Err(Error::InvalidWind {
            leg: 1,
            error: WindError::NonPositiveGroundSpeed { gs },
        }) => assert!(gs < 0.0),
        other => panic!("expected a wind error but got {other:?}"),
    }
}

#[test]
fn concurrent_evaluation() {
    let route = Route::builder()
        .turnpoints(along_parallel(36, 40, 0.0))
        .init_time(NOON)
        .init_fob(INIT_FOB)
        .build();
    let expected = route.evaluate().unwrap();

    std::thread::scope(|s| {
        let handles = (0..8)
            .map(|_| s.spawn(|| route.evaluate().unwrap()))
            .collect::<Vec<_>>();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Route>();
    assert_send_sync::<NavLog>();
    assert_send_sync::<Error>();
}
