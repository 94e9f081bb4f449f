//! Polygon assembly with ring closure.
//!
//! A polygon is an outer boundary ring plus at most one hole. Rings
//! collected from grouped rows usually arrive open; closure appends a
//! copy of the first position so first == last. No further validation
//! (self-intersection, winding order) happens here.

use geojson::{LineStringType, PolygonType, Position};

use crate::GeometryError;

/// Minimum positions a ring must have before closing.
const MIN_RING_LEN: usize = 3;

/// A polygon holds at most an outer boundary and one hole.
const MAX_RINGS: usize = 2;

/// Builds a polygon from up to two collected rings, closing each one.
///
/// A ring whose first and last positions differ component-wise gets a
/// copy of its first position appended; an already-closed ring is copied
/// unchanged. Inputs are never mutated. Winding order is the caller's
/// responsibility.
///
/// # Errors
///
/// Returns [`GeometryError::TooManyRings`] if more than two rings are
/// supplied, or [`GeometryError::RingTooShort`] if any ring has fewer
/// than three positions.
pub fn build_polygon(rings: &[LineStringType]) -> Result<PolygonType, GeometryError> {
    if rings.len() > MAX_RINGS {
        return Err(GeometryError::TooManyRings { got: rings.len() });
    }

    rings.iter().map(|ring| close_ring(ring)).collect()
}

/// Returns a closed copy of `ring`.
fn close_ring(ring: &[Position]) -> Result<LineStringType, GeometryError> {
    if ring.len() < MIN_RING_LEN {
        return Err(GeometryError::RingTooShort { got: ring.len() });
    }

    let mut closed = ring.to_vec();
    if ring.first() != ring.last() {
        closed.push(ring[0].clone());
    }

    Ok(closed)
}
