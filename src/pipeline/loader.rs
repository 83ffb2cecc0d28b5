use std::path::Path;

use tracing::{debug, info};

use crate::{common, io, Attributes, AttrValue, Error, Feature, FeatureCollection, Result};

/// True for sources fetched over HTTP(S); anything else is a local archive path.
fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Obtain the dataset (if `cache_dir` is absent) and parse layer `layer` from it.
///
/// An existing `cache_dir` is trusted as-is and the source is never contacted.
pub fn load(source: &str, cache_dir: &Path, layer: &str) -> Result<FeatureCollection> {
    if cache_dir.exists() {
        debug!(cache = %cache_dir.display(), "using cached dataset");
    } else {
        fetch_into_cache(source, cache_dir)?;
    }
    load_cached(cache_dir, layer)
}

/// Populate `cache_dir` from a zip archive at `source` (a URL or a local path).
pub fn fetch_into_cache(source: &str, cache_dir: &Path) -> Result<()> {
    if is_remote(source) {
        fetch_remote(source, cache_dir)
    } else {
        info!(archive = source, cache = %cache_dir.display(), "extracting local archive");
        common::install_archive(Path::new(source), cache_dir)
    }
}

#[cfg(feature = "download")]
fn fetch_remote(url: &str, cache_dir: &Path) -> Result<()> {
    let parent = common::parent_dir(cache_dir);
    common::ensure_dir_exists(parent)?;

    info!(url, "downloading dataset");
    let archive = common::download_to_temp(url, parent)?;

    info!(cache = %cache_dir.display(), "extracting dataset");
    common::install_archive(archive.path(), cache_dir)
}

#[cfg(not(feature = "download"))]
fn fetch_remote(url: &str, _cache_dir: &Path) -> Result<()> {
    Err(Error::Config(format!("cannot fetch {url}: built without the `download` feature")))
}

/// Parse layer `layer` from an already-populated cache directory. Never touches the network.
pub fn load_cached(cache_dir: &Path, layer: &str) -> Result<FeatureCollection> {
    let shp_path = io::find_layer(cache_dir, layer)?;
    let (shapes, records) = io::read_from_shapefile(&shp_path)?;
    let crs = io::read_projection(&shp_path)?;

    let features = shapes.into_iter().zip(records)
        .enumerate()
        .map(|(i, (shape, record))| {
            let attributes: Attributes = record.into_iter()
                .map(|(column, value)| (column, AttrValue::from(value)))
                .collect();
            let geometry = common::shape_to_multipolygon(shape)
                .map_err(|e| Error::Parse(format!("record {i} of {}: {e}", shp_path.display())))?;
            Ok(Feature::new(attributes, geometry))
        })
        .collect::<Result<Vec<_>>>()?;

    info!(layer, features = features.len(), "loaded dataset");
    Ok(FeatureCollection::new(features, crs))
}
