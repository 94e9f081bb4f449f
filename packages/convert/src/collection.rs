//! Point, line-string, and polygon feature collection builders.
//!
//! The point builder emits one feature per row. The grouped builders run
//! two passes: scan every row into per-key groups, then emit one feature
//! per group. All three tolerate bad input: a row or group that fails
//! coordinate or ring parsing is warned about and skipped, and the build
//! carries on.

use std::collections::HashMap;

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Position};
use geotable_geometry::coordinate::parse_coordinate;
use geotable_geometry::hash::group_key_digest;
use geotable_geometry::ring::build_polygon;

use crate::progress::{ProgressSink, group_chunk};
use crate::properties::{PropertyCollections, extract_properties};
use crate::{GeometryColumns, Table};

/// Property carrying the hex digest of the group key on grouped features.
const HASH_PROPERTY: &str = "hash_";

/// Builds a point feature collection, one feature per parseable row.
///
/// Rows that fail coordinate parsing are logged and skipped. `limit` is
/// an exclusive cutoff on the raw row index: iteration stops before
/// appending the feature of the row whose index equals the limit, so
/// skipped rows still count toward it. This intentionally differs from
/// the grouped builders, which cap the number of emitted features.
#[must_use]
pub fn build_point_collection(
    table: &Table<'_>,
    columns: &GeometryColumns,
    limit: Option<usize>,
    progress: &dyn ProgressSink,
) -> FeatureCollection {
    let mut collection = empty_collection();

    for (index, record) in table.records.iter().enumerate() {
        progress.tick(1.0);

        let position = match parse_coordinate(&columns.positions, record) {
            Ok(position) => position,
            Err(err) => {
                log::warn!("skipping row {index}: {err}");
                continue;
            }
        };

        let properties = extract_properties(table.headers, record, columns);
        let feature = geometry_feature(geojson::Value::Point(position), properties);

        if limit == Some(index) {
            break;
        }
        collection.features.push(feature);
    }

    collection
}

/// Builds a line-string feature collection from rows grouped by the cell
/// at `group_column`.
///
/// Coordinates accumulate per key in row encounter order; groups emit in
/// first-seen key order. Each feature carries a `hash_` property with
/// the hex digest of its group key, and per-row properties collected as
/// arrays. `limit` caps the number of emitted features.
#[must_use]
pub fn build_line_string_collection(
    table: &Table<'_>,
    columns: &GeometryColumns,
    group_column: usize,
    limit: Option<usize>,
    progress: &dyn ProgressSink,
) -> FeatureCollection {
    let groups = collect_groups(table, columns, group_column, progress);
    log::debug!("emitting {} line-string groups", groups.len());

    let mut collection = empty_collection();
    let chunk = group_chunk(table.records.len(), groups.len());
    let mut emitted = 0;

    for (key, group) in groups.iter() {
        progress.tick(chunk);

        let mut properties = group.properties.overlay();
        properties.insert(
            HASH_PROPERTY.to_owned(),
            JsonValue::String(hex::encode(group_key_digest(key))),
        );
        let feature = geometry_feature(
            geojson::Value::LineString(group.positions.clone()),
            properties,
        );

        if limit == Some(emitted) {
            break;
        }
        emitted += 1;
        collection.features.push(feature);
    }

    collection
}

/// Builds a polygon feature collection from rows grouped by the cell at
/// `group_column`, treating each group's coordinates as a single ring.
///
/// A group whose ring cannot be closed (fewer than three positions) is
/// logged and skipped without affecting other groups. `limit` caps the
/// number of emitted features, exactly as for line strings.
#[must_use]
pub fn build_polygon_collection(
    table: &Table<'_>,
    columns: &GeometryColumns,
    group_column: usize,
    limit: Option<usize>,
    progress: &dyn ProgressSink,
) -> FeatureCollection {
    let groups = collect_groups(table, columns, group_column, progress);
    log::debug!("emitting {} polygon groups", groups.len());

    let mut collection = empty_collection();
    let chunk = group_chunk(table.records.len(), groups.len());
    let mut emitted = 0;

    for (key, group) in groups.iter() {
        progress.tick(chunk);

        let polygon = match build_polygon(std::slice::from_ref(&group.positions)) {
            Ok(polygon) => polygon,
            Err(err) => {
                log::warn!("skipping group {key}: {err}");
                continue;
            }
        };

        let mut properties = group.properties.overlay();
        properties.insert(
            HASH_PROPERTY.to_owned(),
            JsonValue::String(hex::encode(group_key_digest(key))),
        );
        let feature = geometry_feature(geojson::Value::Polygon(polygon), properties);

        if limit == Some(emitted) {
            break;
        }
        emitted += 1;
        collection.features.push(feature);
    }

    collection
}

/// One group's accumulated geometry and per-row properties.
#[derive(Debug, Default)]
struct Group {
    positions: Vec<Position>,
    properties: PropertyCollections,
}

/// Per-key groups, iterable in first-seen key order.
#[derive(Debug, Default)]
struct Groups {
    order: Vec<String>,
    by_key: HashMap<String, Group>,
}

impl Groups {
    fn push(&mut self, key: &str, position: Position, bag: JsonObject) {
        if !self.by_key.contains_key(key) {
            self.order.push(key.to_owned());
        }
        let group = self.by_key.entry(key.to_owned()).or_default();
        group.positions.push(position);
        group.properties.append(bag);
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn iter(&self) -> impl Iterator<Item = (&String, &Group)> {
        self.order.iter().map(|key| (key, &self.by_key[key]))
    }
}

/// First pass of the grouped builders: scan every record, parse its
/// coordinate, and accumulate positions and properties under the
/// record's group key. Bad rows are warned about and skipped.
fn collect_groups(
    table: &Table<'_>,
    columns: &GeometryColumns,
    group_column: usize,
    progress: &dyn ProgressSink,
) -> Groups {
    let mut groups = Groups::default();

    for (index, record) in table.records.iter().enumerate() {
        progress.tick(0.5);

        let position = match parse_coordinate(&columns.positions, record) {
            Ok(position) => position,
            Err(err) => {
                log::warn!("skipping row {index}: {err}");
                continue;
            }
        };

        let Some(key) = record.get(group_column) else {
            log::warn!("skipping row {index}: no group key in column {group_column}");
            continue;
        };

        let bag = extract_properties(table.headers, record, columns);
        groups.push(key, position, bag);
    }

    groups
}

const fn empty_collection() -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: Vec::new(),
        foreign_members: None,
    }
}

fn geometry_feature(value: geojson::Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}
