use shapefile as shp;

use crate::{Error, Result};

/// Convert a shapefile record's shape into a MultiPolygon.
/// Only plain polygon shapes are accepted; null shapes and other geometry
/// types are a parse error.
pub(crate) fn shape_to_multipolygon(shape: shp::Shape) -> Result<geo::MultiPolygon<f64>> {
    match shape {
        shp::Shape::Polygon(polygon) => {
            let mp = shp_to_geo(&polygon);
            if mp.0.is_empty() {
                return Err(Error::Parse("polygon shape has no exterior ring".into()));
            }
            Ok(mp)
        }
        shp::Shape::NullShape => Err(Error::Parse("feature has a null geometry".into())),
        other => Err(Error::Parse(format!("expected a polygon shape, found {:?}", other.shapetype()))),
    }
}

/// Convert shapefile::Polygon to geo::MultiPolygon<f64>
fn shp_to_geo(p: &shp::Polygon) -> geo::MultiPolygon<f64> {
    /// Ensure first and last are the same for geo::LineString coords
    fn ensure_closed(coords: &mut Vec<geo::Coord<f64>>) {
        if !coords.is_empty() && coords[0] != coords[coords.len() - 1] {
            coords.push(coords[0])
        }
    }

    // Each outer ring is followed by its holes; the reader tags them for us.
    let mut polys: Vec<geo::Polygon<f64>> = Vec::new();
    let mut current_exterior: Option<geo::LineString<f64>> = None;
    let mut current_holes: Vec<geo::LineString<f64>> = Vec::new();

    for ring in p.rings() {
        let mut coords: Vec<geo::Coord<f64>> = ring.points().iter()
            .map(|pt| geo::Coord { x: pt.x, y: pt.y })
            .collect();
        ensure_closed(&mut coords);
        let ls = geo::LineString(coords);

        match ring {
            shp::PolygonRing::Outer(_) => {
                if let Some(ext) = current_exterior.take() {
                    polys.push(geo::Polygon::new(ext, std::mem::take(&mut current_holes)));
                }
                current_exterior = Some(ls);
            }
            shp::PolygonRing::Inner(_) => current_holes.push(ls),
        }
    }
    if let Some(ext) = current_exterior {
        polys.push(geo::Polygon::new(ext, current_holes));
    }

    geo::MultiPolygon(polys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Area;

    fn ring(pts: &[(f64, f64)]) -> Vec<shp::Point> {
        pts.iter().map(|&(x, y)| shp::Point { x, y }).collect()
    }

    #[test]
    fn exterior_with_hole_becomes_one_polygon() {
        let polygon = shp::Polygon::with_rings(vec![
            shp::PolygonRing::Outer(ring(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0), (0.0, 0.0)])),
            shp::PolygonRing::Inner(ring(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0), (1.0, 1.0)])),
        ]);
        let mp = shape_to_multipolygon(shp::Shape::Polygon(polygon)).unwrap();

        assert_eq!(mp.0.len(), 1);
        assert_eq!(mp.0[0].interiors().len(), 1);
        assert!((mp.unsigned_area() - 15.0).abs() < 1e-12);
    }

    #[test]
    fn ring_tags_decide_exteriors_and_holes() {
        // Outer ring given counter-clockwise, hole given clockwise.
        let polygon = shp::Polygon::with_rings(vec![
            shp::PolygonRing::Outer(ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)])),
            shp::PolygonRing::Inner(ring(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0), (1.0, 1.0)])),
            shp::PolygonRing::Outer(ring(&[(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 6.0), (5.0, 5.0)])),
        ]);
        let mp = shape_to_multipolygon(shp::Shape::Polygon(polygon)).unwrap();

        assert_eq!(mp.0.len(), 2);
        assert_eq!(mp.0[0].interiors().len(), 1);
        assert!(mp.0[1].interiors().is_empty());
        assert!((mp.unsigned_area() - 16.0).abs() < 1e-12);
    }

    #[test]
    fn two_exteriors_become_two_polygons() {
        let polygon = shp::Polygon::with_rings(vec![
            shp::PolygonRing::Outer(ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)])),
            shp::PolygonRing::Outer(ring(&[(5.0, 5.0), (5.0, 6.0), (6.0, 6.0), (6.0, 5.0), (5.0, 5.0)])),
        ]);
        let mp = shape_to_multipolygon(shp::Shape::Polygon(polygon)).unwrap();
        assert_eq!(mp.0.len(), 2);
    }

    #[test]
    fn null_and_point_shapes_are_rejected() {
        assert!(matches!(shape_to_multipolygon(shp::Shape::NullShape), Err(Error::Parse(_))));
        let point = shp::Shape::Point(shp::Point { x: 1.0, y: 2.0 });
        assert!(matches!(shape_to_multipolygon(point), Err(Error::Parse(_))));
    }
}
