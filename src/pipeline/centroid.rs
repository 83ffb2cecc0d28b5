use ahash::AHashMap;
use geo::{Centroid, Coord, MultiPolygon};
use tracing::info;

use crate::{feature::{X, Y}, Error, FeatureCollection, Group, Result};

/// Centroid coordinates by feature (or group) key.
pub type CentroidMap = AHashMap<String, Coord<f64>>;

/// Area-weighted planar centroid of a shape.
pub fn centroid(shape: &MultiPolygon<f64>) -> Result<Coord<f64>> {
    shape.centroid()
        .map(|point| point.0)
        .filter(|c| c.x.is_finite() && c.y.is_finite())
        .ok_or_else(|| Error::Arithmetic("centroid of an empty geometry is undefined".into()))
}

/// Centroid of every feature, keyed by its value in `key`. Keys must be unique.
pub fn extract_all(collection: &FeatureCollection, key: &str) -> Result<CentroidMap> {
    let mut centroids = CentroidMap::with_capacity(collection.len());
    for feature in collection {
        let name = feature.key(key, collection.name_column())?;
        let coord = centroid(&feature.geometry)
            .map_err(|e| Error::Arithmetic(format!("feature {name:?}: {e}")))?;
        if centroids.insert(name.to_string(), coord).is_some() {
            return Err(Error::DuplicateKey { key: name.to_string() });
        }
    }
    Ok(centroids)
}

/// Centroid of every group's union geometry, keyed by group key.
pub fn group_centroids(groups: &[Group]) -> Result<CentroidMap> {
    groups.iter()
        .map(|group| {
            let coord = centroid(&group.geometry)
                .map_err(|e| Error::Arithmetic(format!("group {:?}: {e}", group.key)))?;
            Ok((group.key.clone(), coord))
        })
        .collect()
}

/// Append `x`/`y` columns by looking up each feature's key in `centroids`.
/// A feature without an entry is an error, never skipped.
pub fn join(collection: FeatureCollection, centroids: &CentroidMap, key: &str) -> Result<FeatureCollection> {
    let (features, shell) = collection.split();
    let name_column = shell.name_column();

    let features = features.into_iter()
        .map(|mut feature| {
            let name = feature.key(key, name_column)?;
            let coord = *centroids.get(name)
                .ok_or_else(|| Error::MissingCentroid { key: name.to_string() })?;
            feature.set(X, coord.x);
            feature.set(Y, coord.y);
            Ok(feature)
        })
        .collect::<Result<Vec<_>>>()?;

    info!(features = features.len(), "joined centroids");
    Ok(shell.with_features(features))
}
