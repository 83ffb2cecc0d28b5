use std::path::Path;

use geo::MultiPolygon;
use serde_json::{json, Map, Value};

use crate::{CentroidMap, Error, FeatureCollection, Group, Result};

/// GeoJSON `coordinates` array for a MultiPolygon.
fn multipolygon_coords(mp: &MultiPolygon<f64>) -> Value {
    let polygons: Vec<Value> = mp.0.iter().map(|polygon| {
        let rings: Vec<Vec<[f64; 2]>> = std::iter::once(polygon.exterior())
            .chain(polygon.interiors())
            .map(|ring| ring.coords().map(|c| [c.x, c.y]).collect())
            .collect();
        json!(rings)
    }).collect();
    Value::Array(polygons)
}

fn feature_json(geometry: &MultiPolygon<f64>, properties: Map<String, Value>) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "MultiPolygon",
            "coordinates": multipolygon_coords(geometry),
        },
        "properties": properties,
    })
}

fn write_collection(features: Vec<Value>, path: &Path) -> Result<()> {
    let collection = json!({
        "type": "FeatureCollection",
        "features": features,
    });
    let bytes = serde_json::to_vec(&collection)
        .map_err(|e| Error::Export { path: path.to_path_buf(), message: e.to_string() })?;
    std::fs::write(path, bytes)
        .map_err(|e| Error::io(format!("failed to write {}", path.display()), e))
}

/// Serialize features to GeoJSON, every attribute becoming a property.
pub fn features_to_geojson(collection: &FeatureCollection) -> Vec<Value> {
    collection.iter().map(|feature| {
        let properties = feature.attributes.iter()
            .map(|(column, value)| (column.clone(), json!(value)))
            .collect();
        feature_json(&feature.geometry, properties)
    }).collect()
}

/// Write countries (with `area`, `density`, `x`, `y` attached) as a GeoJSON FeatureCollection.
pub fn write_features_geojson(collection: &FeatureCollection, path: &Path) -> Result<()> {
    write_collection(features_to_geojson(collection), path)
}

/// Write subregion unions as a GeoJSON FeatureCollection.
/// Centroids, when present for a group, are attached as `x`/`y`.
pub fn write_groups_geojson(groups: &[Group], centroids: &CentroidMap, path: &Path) -> Result<()> {
    let features = groups.iter().map(|group| {
        let mut properties = Map::new();
        properties.insert("subregion".into(), json!(group.key));
        properties.insert("members".into(), json!(group.members));
        properties.insert("population".into(), json!(group.population));
        properties.insert("area".into(), json!(group.area));
        properties.insert("density".into(), json!(group.density));
        if let Some(c) = centroids.get(&group.key) {
            properties.insert("x".into(), json!(c.x));
            properties.insert("y".into(), json!(c.y));
        }
        feature_json(&group.geometry, properties)
    }).collect();

    write_collection(features, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attributes, Feature};
    use geo::polygon;

    #[test]
    fn properties_and_rings_are_written() {
        let square = MultiPolygon::new(vec![polygon![
            exterior: [(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 4.0)],
            interiors: [[(x: 1.0, y: 1.0), (x: 2.0, y: 1.0), (x: 2.0, y: 2.0), (x: 1.0, y: 2.0)]]
        ]]);
        let collection: FeatureCollection = vec![
            Feature::new(Attributes::new(), square).with("NAME", "Holey").with("density", 3.5),
        ].into_iter().collect();

        let features = features_to_geojson(&collection);
        assert_eq!(features.len(), 1);
        assert_eq!(features[0]["properties"]["NAME"], "Holey");
        assert_eq!(features[0]["properties"]["density"], 3.5);

        let rings = features[0]["geometry"]["coordinates"][0].as_array().unwrap();
        assert_eq!(rings.len(), 2);
        assert_eq!(rings[0][0], json!([0.0, 0.0]));
    }

    #[test]
    fn writes_valid_json_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("empty.geojson");
        write_features_geojson(&FeatureCollection::default(), &path).unwrap();

        let value: Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"], json!([]));
    }
}
