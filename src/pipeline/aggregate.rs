use ahash::AHashMap;
use geo::MultiPolygon;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{feature::{AREA, DENSITY}, geom, Error, Feature, FeatureCollection, Result, Schema};

/// How feature areas are measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaMode {
    /// Shoelace area in squared coordinate units (degrees² for lon/lat data).
    #[default]
    Planar,
    /// Ellipsoidal area in km², for lon/lat data.
    Geodesic,
}

impl AreaMode {
    pub fn measure(self, shape: &MultiPolygon<f64>) -> f64 {
        match self {
            AreaMode::Planar => geom::planar_area(shape),
            AreaMode::Geodesic => geom::geodesic_area_km2(shape),
        }
    }
}

/// Population ÷ area, refusing a zero (or non-finite) area.
fn checked_density(population: f64, area: f64, what: &str) -> Result<f64> {
    if area == 0.0 || !area.is_finite() {
        return Err(Error::Arithmetic(format!("cannot compute density of {what}: area is {area}")));
    }
    Ok(population / area)
}

/// Attach `area` and `density = population / area` to every feature.
pub fn compute_area_and_density(
    collection: FeatureCollection,
    schema: &Schema,
    mode: AreaMode,
) -> Result<FeatureCollection> {
    let (features, shell) = collection.split();
    let name_column = shell.name_column();

    let features = features.into_iter()
        .map(|mut feature| {
            let label = feature.label(name_column);
            let population = feature.require_number(&schema.population, name_column)?;
            let area = mode.measure(&feature.geometry);
            let density = checked_density(population, area, &format!("feature {label:?}"))?;
            debug!(feature = %label, area, density, "measured");

            feature.set(AREA, area);
            feature.set(DENSITY, density);
            Ok(feature)
        })
        .collect::<Result<Vec<_>>>()?;

    info!(features = features.len(), ?mode, "computed area and density");
    Ok(shell.with_features(features))
}

/// Features sharing one key value, with summed metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub key: String,
    pub members: usize,
    pub population: f64,
    pub area: f64,
    /// `population / area` over the whole group (weighted, not a mean of member densities).
    pub density: f64,
    /// Union of the member geometries.
    pub geometry: MultiPolygon<f64>,
}

/// Partition features by `key` and sum `area` and population per partition.
///
/// Requires [`compute_area_and_density`] to have run. Groups are returned in
/// the order their key is first seen.
pub fn group_by(collection: &FeatureCollection, key: &str, schema: &Schema) -> Result<Vec<Group>> {
    struct Partial<'a> {
        key: &'a str,
        population: f64,
        area: f64,
        members: Vec<&'a Feature>,
    }

    let mut index: AHashMap<&str, usize> = AHashMap::new();
    let mut partials: Vec<Partial> = Vec::new();

    let name_column = collection.name_column();
    for feature in collection {
        let value = feature.key(key, name_column)?;
        let population = feature.require_number(&schema.population, name_column)?;
        let area = feature.require_number(AREA, name_column)?;

        let slot = *index.entry(value).or_insert_with(|| {
            partials.push(Partial { key: value, population: 0.0, area: 0.0, members: Vec::new() });
            partials.len() - 1
        });
        let partial = &mut partials[slot];
        partial.population += population;
        partial.area += area;
        partial.members.push(feature);
    }

    let groups = partials.into_iter()
        .map(|p| Ok(Group {
            key: p.key.to_string(),
            members: p.members.len(),
            population: p.population,
            area: p.area,
            density: checked_density(p.population, p.area, &format!("group {:?}", p.key))?,
            geometry: geom::union_all(p.members.iter().map(|f| &f.geometry)),
        }))
        .collect::<Result<Vec<_>>>()?;

    info!(key, groups = groups.len(), "grouped features");
    Ok(groups)
}
