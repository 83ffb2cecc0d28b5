//! CSV export.

mod write;

pub use write::*;
