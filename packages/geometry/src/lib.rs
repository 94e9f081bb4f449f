#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Geometric building blocks for tabular-to-GeoJSON conversion.
//!
//! Extracts coordinates from raw record cells, closes polygon rings, and
//! derives stable group-key digests. The feature collection builders in
//! `geotable_convert` drive these against whole record sets; everything
//! here is a pure function of its inputs.

pub mod coordinate;
pub mod hash;
pub mod ring;

/// Errors produced while turning raw cells into geometries.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    /// Fewer than two coordinate column positions were configured.
    #[error("coordinate columns are invalid: need longitude and latitude positions, got {got}")]
    InvalidCoordinateFormat {
        /// Number of column positions supplied.
        got: usize,
    },

    /// A selected cell could not be parsed as a 64-bit float.
    #[error("column {column} cell {value:?} is not a valid coordinate")]
    NumericParse {
        /// Zero-based cell position within the record.
        column: usize,
        /// The offending cell contents (empty if the record was too short).
        value: String,
        /// The underlying float parse failure.
        #[source]
        source: std::num::ParseFloatError,
    },

    /// More rings than a polygon supports (an outer boundary plus one hole).
    #[error("polygon supports at most 2 rings, got {got}")]
    TooManyRings {
        /// Number of rings supplied.
        got: usize,
    },

    /// A ring too short to bound an area.
    #[error("ring needs at least 3 positions before closing, got {got}")]
    RingTooShort {
        /// Number of positions in the offending ring.
        got: usize,
    },
}
