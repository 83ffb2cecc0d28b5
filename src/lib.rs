#![doc = "euromap public API"]
//!
//! A five-stage pipeline over a world country-borders shapefile:
//! load (download and cache) → filter by continent → crop to a window →
//! area, density and subregion aggregation → centroids.
//!
//! ```no_run
//! use euromap::{Pipeline, PipelineConfig};
//!
//! let output = Pipeline::new(PipelineConfig::default()).run()?;
//! for group in &output.subregions {
//!     println!("{}: {:.1}", group.key, group.density);
//! }
//! # Ok::<(), euromap::StageError>(())
//! ```
mod common;
mod config;
mod error;
mod feature;
mod geom;
mod io;
mod pipeline;

#[doc(inline)]
pub use config::{PipelineConfig, DEFAULT_LAYER, DEFAULT_SOURCE_URL};

#[doc(inline)]
pub use error::{Error, ErrorKind, Result, Stage, StageError};

#[doc(inline)]
pub use feature::{Attributes, AttrValue, Feature, FeatureCollection, Schema, AREA, DENSITY, X, Y};

#[doc(inline)]
pub use geom::BoundingBox;

#[doc(inline)]
pub use io::{features_to_geojson, groups_to_dataframe, write_features_geojson, write_groups_csv, write_groups_geojson};

#[doc(inline)]
pub use pipeline::{
    centroid, compute_area_and_density, crop, extract_all, fetch_into_cache, filter, group_by,
    group_centroids, join, load, load_cached, AreaMode, AttrPredicate, CentroidMap, Group,
    Pipeline, PipelineOutput,
};
