mod attr;
mod feature;
mod schema;

pub use attr::AttrValue;
pub use feature::{Attributes, Feature, FeatureCollection};
pub use schema::{Schema, AREA, DENSITY, X, Y};
