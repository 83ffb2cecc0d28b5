use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{AreaMode, AttrPredicate, BoundingBox, Error, Result, Schema};

/// Natural Earth 1:110m admin-0 countries.
pub const DEFAULT_SOURCE_URL: &str =
    "https://naciscdn.org/naturalearth/110m/cultural/ne_110m_admin_0_countries.zip";
pub const DEFAULT_LAYER: &str = "ne_110m_admin_0_countries";

/// Everything a pipeline run needs. Every field has a default, so a config
/// file only lists what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Zip archive location: an http(s) URL or a local path.
    pub source_url: String,
    /// Directory the archive is extracted into; trusted if it exists.
    pub cache_dir: PathBuf,
    /// Shapefile layer name (file stem) inside the archive.
    pub layer: String,
    pub schema: Schema,
    /// Value of the continent column that the region filter keeps.
    pub continent: String,
    /// Explicit region filter; replaces the continent test when set.
    pub filter: Option<AttrPredicate>,
    pub bbox: BoundingBox,
    pub area_mode: AreaMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.into(),
            cache_dir: PathBuf::from("data").join(DEFAULT_LAYER),
            layer: DEFAULT_LAYER.into(),
            schema: Schema::default(),
            continent: "Europe".into(),
            filter: None,
            bbox: BoundingBox::europe(),
            area_mode: AreaMode::Planar,
        }
    }
}

impl PipelineConfig {
    /// Read a JSON config file; absent fields keep their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config file: {}", path.display()), e))?;
        Self::from_json(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// The region filter in effect.
    pub fn predicate(&self) -> AttrPredicate {
        self.filter.clone()
            .unwrap_or_else(|| AttrPredicate::equals(self.schema.continent.clone(), self.continent.clone()))
    }
}
