//! Format-specific reading and writing.
//!
//! - `shp` - Shapefile layer reading (the dataset input)
//! - `geojson` - GeoJSON export of countries and subregions for map rendering
//! - `csv` - CSV export of the subregion summary table

mod csv;
mod geojson;
mod shp;

pub use csv::*;
pub use geojson::*;
pub(crate) use shp::*;
