mod bbox;
mod geom;

pub use bbox::BoundingBox;
pub(crate) use geom::{geodesic_area_km2, planar_area, union_all, without_slivers};
