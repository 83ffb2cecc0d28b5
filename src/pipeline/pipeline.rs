use tracing::info;

use crate::{
    error::{Stage, StageError},
    CentroidMap, FeatureCollection, Group, PipelineConfig,
};
use super::{aggregate, centroid, crop, filter, loader};

/// Result of a full run, ready to hand to a renderer.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Cropped countries with `area`, `density`, `x` and `y` attached.
    pub countries: FeatureCollection,
    /// Per-subregion aggregates, in first-seen order.
    pub subregions: Vec<Group>,
    /// Centroid of each subregion's union geometry.
    pub subregion_centroids: CentroidMap,
}

/// The five stages, run in order from one configuration.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self { Self { config } }

    #[inline] pub fn config(&self) -> &PipelineConfig { &self.config }

    /// Load (downloading if the cache is absent), then process.
    pub fn run(&self) -> Result<PipelineOutput, StageError> {
        let raw = loader::load(&self.config.source_url, &self.config.cache_dir, &self.config.layer)
            .map_err(StageError::at(Stage::Load))?;
        self.process(raw)
    }

    /// Run every stage after loading on an in-memory collection.
    pub fn process(&self, raw: FeatureCollection) -> Result<PipelineOutput, StageError> {
        let config = &self.config;
        let schema = &config.schema;

        let raw = raw.with_name_column(&schema.name);
        let predicate = config.predicate();
        let region = filter::filter(raw, |f| predicate.matches(f), &schema.columns());

        let cropped = crop::crop(region, &config.bbox);

        let measured = aggregate::compute_area_and_density(cropped, schema, config.area_mode)
            .map_err(StageError::at(Stage::Aggregate))?;
        let subregions = aggregate::group_by(&measured, &schema.subregion, schema)
            .map_err(StageError::at(Stage::Aggregate))?;

        let centroids = centroid::extract_all(&measured, &schema.name)
            .map_err(StageError::at(Stage::Centroid))?;
        let countries = centroid::join(measured, &centroids, &schema.name)
            .map_err(StageError::at(Stage::Centroid))?;
        let subregion_centroids = centroid::group_centroids(&subregions)
            .map_err(StageError::at(Stage::Centroid))?;

        info!(countries = countries.len(), subregions = subregions.len(), "pipeline complete");
        Ok(PipelineOutput { countries, subregions, subregion_centroids })
    }
}
