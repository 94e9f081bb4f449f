//! Coordinate extraction from raw record cells.
//!
//! A record is an ordered list of string cells. The import pipeline
//! resolves which cell positions hold longitude and latitude before
//! conversion starts; this module only selects and parses those cells.

use geojson::Position;

use crate::GeometryError;

/// Parses the `[longitude, latitude]` position of a record.
///
/// `positions` lists the cell positions of the longitude and latitude
/// columns, in that order. Positions beyond the first two are ignored. A
/// position past the end of the record is treated as an empty cell and
/// fails numeric parsing.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidCoordinateFormat`] if fewer than two
/// positions are supplied, or [`GeometryError::NumericParse`] if either
/// selected cell is not a valid `f64`.
pub fn parse_coordinate(positions: &[usize], record: &[String]) -> Result<Position, GeometryError> {
    if positions.len() < 2 {
        return Err(GeometryError::InvalidCoordinateFormat {
            got: positions.len(),
        });
    }

    let longitude = parse_cell(positions[0], record)?;
    let latitude = parse_cell(positions[1], record)?;

    Ok(vec![longitude, latitude])
}

fn parse_cell(column: usize, record: &[String]) -> Result<f64, GeometryError> {
    let value = record.get(column).map_or("", String::as_str);
    value.parse().map_err(|source| GeometryError::NumericParse {
        column,
        value: value.to_owned(),
        source,
    })
}
