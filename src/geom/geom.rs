use geo::{Area, BooleanOps, GeodesicArea, MultiPolygon};

/// Planar area, in squared coordinate units.
#[inline]
pub(crate) fn planar_area(shape: &MultiPolygon<f64>) -> f64 {
    shape.unsigned_area()
}

/// Area on the WGS84 ellipsoid, in square kilometres. Assumes lon/lat input.
#[inline]
pub(crate) fn geodesic_area_km2(shape: &MultiPolygon<f64>) -> f64 {
    shape.geodesic_area_unsigned() / 1.0e6
}

/// Drop polygon parts with no area (slivers left over from clipping).
pub(crate) fn without_slivers(shape: MultiPolygon<f64>) -> MultiPolygon<f64> {
    MultiPolygon::new(shape.0.into_iter()
        .filter(|polygon| polygon.unsigned_area() > 0.0)
        .collect())
}

/// Union of all shapes into a single MultiPolygon.
/// This may be slow for large numbers of complex polygons.
pub(crate) fn union_all<'a>(shapes: impl IntoIterator<Item = &'a MultiPolygon<f64>>) -> MultiPolygon<f64> {
    shapes.into_iter()
        .cloned()
        .reduce(|a, b| a.union(&b))
        .unwrap_or_else(|| MultiPolygon::new(Vec::new()))
}
