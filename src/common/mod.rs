#[cfg(feature = "download")]
mod download;
mod fs;
mod polygon;

#[cfg(feature = "download")]
pub(crate) use download::*;
pub(crate) use fs::*;
pub(crate) use polygon::*;
