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

use geo::BoundingRect;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, JsonValue, Value};

use super::rect_to_bbox;
use crate::route::{Leg, NavLog, TurnpointState};

/// Straight segments with which a turn is drawn.
const ARC_SEGMENTS: usize = 16;

impl NavLog {
    /// Returns the log as GeoJSON feature collection.
    ///
    /// Each leg is a line string feature that follows the turn onto the leg
    /// and each turnpoint is a point feature. The features carry the values
    /// of the log as properties.
    #[cfg_attr(docsrs, doc(cfg(feature = "geojson")))]
    pub fn to_geojson(&self) -> GeoJson {
        let features = self
            .legs()
            .iter()
            .map(leg_feature)
            .chain(self.turnpoints().iter().map(turnpoint_feature))
            .collect::<Vec<_>>();

        let bbox = geo::MultiPoint::from(
            self.turnpoints()
                .iter()
                .map(|tp| geo::Point::from(tp.coordinate()))
                .collect::<Vec<_>>(),
        )
        .bounding_rect()
        .map(rect_to_bbox);

        GeoJson::FeatureCollection(FeatureCollection {
            bbox,
            features,
            foreign_members: None,
        })
    }
}

fn leg_feature(leg: &Leg) -> Feature {
    let line = geo::LineString::from(
        leg.track(ARC_SEGMENTS)
            .into_iter()
            .map(geo::Coord::from)
            .collect::<Vec<_>>(),
    );

    let mut properties = JsonObject::new();
    properties.insert("from".into(), JsonValue::from(leg.from()));
    properties.insert("to".into(), JsonValue::from(leg.to()));
    properties.insert("course".into(), JsonValue::from(leg.mc()));
    properties.insert("heading".into(), JsonValue::from(leg.mh()));
    properties.insert("distanceNm".into(), JsonValue::from(leg.dist()));
    properties.insert("eteSec".into(), JsonValue::from(leg.ete()));
    properties.insert("fuel".into(), JsonValue::from(leg.fuel()));
    properties.insert("gs".into(), JsonValue::from(leg.gs()));
    properties.insert("alt".into(), JsonValue::from(leg.alt()));
    properties.insert(
        "turnDirection".into(),
        JsonValue::from(leg.turn_direction().map(|direction| direction.to_string())),
    );
    properties.insert("turnAngle".into(), JsonValue::from(leg.turn_angle()));

    Feature {
        bbox: line.bounding_rect().map(rect_to_bbox),
        geometry: Some(Geometry::new(Value::from(&line))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn turnpoint_feature(state: &TurnpointState) -> Feature {
    let point = geo::Point::from(state.coordinate());

    let mut properties = JsonObject::new();
    properties.insert("name".into(), JsonValue::from(state.name()));
    properties.insert("etaSec".into(), JsonValue::from(state.eta()));
    properties.insert("efr".into(), JsonValue::from(state.efr()));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::from(&point))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
