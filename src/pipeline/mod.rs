mod aggregate;
mod centroid;
mod crop;
mod filter;
mod loader;
mod pipeline;

pub use aggregate::{compute_area_and_density, group_by, AreaMode, Group};
pub use centroid::{centroid, extract_all, group_centroids, join, CentroidMap};
pub use crop::crop;
pub use filter::{filter, AttrPredicate};
pub use loader::{fetch_into_cache, load, load_cached};
pub use pipeline::{Pipeline, PipelineOutput};
