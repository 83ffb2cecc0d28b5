use serde::{Deserialize, Serialize};

/// Column appended by the area/density stage: area of the (cropped) geometry.
pub const AREA: &str = "area";
/// Column appended by the area/density stage: population per unit area.
pub const DENSITY: &str = "density";
/// Column appended by the centroid join: centroid longitude.
pub const X: &str = "x";
/// Column appended by the centroid join: centroid latitude.
pub const Y: &str = "y";

/// Natural Earth's country-name column.
pub(crate) const NAME_COLUMN: &str = "NAME";

/// Names of the source columns the pipeline reads.
/// Defaults match the Natural Earth admin-0 attribute table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
    /// Unique feature key (country name).
    pub name: String,
    pub continent: String,
    /// Grouping key for aggregation.
    pub subregion: String,
    pub population: String,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            name: NAME_COLUMN.into(),
            continent: "CONTINENT".into(),
            subregion: "SUBREGION".into(),
            population: "POP_EST".into(),
        }
    }
}

impl Schema {
    /// The columns kept by the region filter.
    pub fn columns(&self) -> [&str; 4] {
        [self.name.as_str(), self.continent.as_str(), self.subregion.as_str(), self.population.as_str()]
    }
}
