//! Per-row property extraction and per-group property accumulation.

use std::collections::BTreeMap;

use geojson::{JsonObject, JsonValue};

use crate::GeometryColumns;

/// Extracts a row's property map: every cell keyed by its header, except
/// the longitude and latitude columns.
///
/// Rows shorter than the header list contribute only the cells they
/// have; cells past the last header are dropped.
#[must_use]
pub fn extract_properties(
    headers: &[String],
    record: &[String],
    columns: &GeometryColumns,
) -> JsonObject {
    headers
        .iter()
        .zip(record)
        .filter(|(header, _)| **header != columns.longitude && **header != columns.latitude)
        .map(|(header, cell)| (header.clone(), JsonValue::String(cell.clone())))
        .collect()
}

/// Accumulates property values across the rows of one group.
///
/// Each property name maps to the ordered list of values it took, one
/// per contributing row in encounter order. The overlay renders every
/// list as a JSON array on the aggregated feature, so per-row attributes
/// survive grouping.
#[derive(Debug, Default)]
pub struct PropertyCollections {
    values: BTreeMap<String, Vec<JsonValue>>,
}

impl PropertyCollections {
    /// Appends one row's property bag.
    pub fn append(&mut self, bag: JsonObject) {
        for (name, value) in bag {
            self.values.entry(name).or_default().push(value);
        }
    }

    /// Renders the accumulated collections as feature properties.
    #[must_use]
    pub fn overlay(&self) -> JsonObject {
        self.values
            .iter()
            .map(|(name, values)| (name.clone(), JsonValue::Array(values.clone())))
            .collect()
    }
}
