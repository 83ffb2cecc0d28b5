use geo::{BooleanOps, BoundingRect, MultiPolygon};
use tracing::{debug, info, warn};

use crate::{geom::{self, BoundingBox}, FeatureCollection};

/// Clip every feature to `bbox`, treating lon/lat as planar coordinates.
///
/// Features with no area left inside the window (including those that only
/// touch its edge) are removed. Attributes are carried over unchanged; in
/// particular population is not scaled by the retained fraction of area.
pub fn crop(collection: FeatureCollection, bbox: &BoundingBox) -> FeatureCollection {
    let before = collection.len();
    let (features, shell) = collection.split();
    let name_column = shell.name_column();
    let window = MultiPolygon::new(vec![bbox.to_rect().to_polygon()]);

    let features: Vec<_> = features.into_iter()
        .filter_map(|mut feature| {
            let Some(rect) = feature.geometry.bounding_rect() else {
                debug!(feature = %feature.label(name_column), "dropping feature with empty geometry");
                return None;
            };

            // Fully inside: nothing to clip. Fully outside: nothing to keep.
            if !bbox.contains_rect(&rect) {
                if !bbox.touches_rect(&rect) {
                    warn!(feature = %feature.label(name_column), "outside crop window");
                    return None;
                }
                feature.geometry = geom::without_slivers(feature.geometry.intersection(&window));
            }

            if feature.geometry.0.is_empty() || geom::planar_area(&feature.geometry) <= 0.0 {
                warn!(feature = %feature.label(name_column), "no area left after cropping");
                return None;
            }
            Some(feature)
        })
        .collect();

    info!(before, after = features.len(), "cropped features");
    shell.with_features(features)
}
