#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! GeoJSON feature collection builders over tabular records.
//!
//! Turns rows of string cells into point, line-string, and polygon
//! feature collections: points come one per row, line strings and
//! polygons from rows grouped by a key column. The embedding import
//! pipeline owns file reading, CLI flags, and log/progress rendering;
//! this crate receives an already-materialized record set plus injected
//! collaborators and returns finished collections. Bad rows are warned
//! about and skipped, never fatal.

pub mod collection;
pub mod progress;
pub mod properties;

pub use collection::{
    build_line_string_collection, build_point_collection, build_polygon_collection,
};

use serde::{Deserialize, Serialize};

/// Borrowed view of a materialized record set: one header row plus data
/// rows of string cells.
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    /// Ordered column names from the header row.
    pub headers: &'a [String],
    /// Data rows, each an ordered list of string cells.
    pub records: &'a [Vec<String>],
}

/// Identifies the geometry columns of a table.
///
/// The import pipeline resolves this once per source: header names feed
/// property exclusion, cell positions feed coordinate parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryColumns {
    /// Header name of the longitude column, excluded from feature properties.
    pub longitude: String,
    /// Header name of the latitude column, excluded from feature properties.
    pub latitude: String,
    /// Cell positions of the longitude and latitude columns, in that order.
    pub positions: Vec<usize>,
}
