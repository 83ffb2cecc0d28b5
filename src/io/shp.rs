use std::path::{Path, PathBuf};

use shapefile::{dbase::Record, Reader, Shape};

use crate::{Error, Result};

/// Reads all shapes + attribute records from a given `.shp` file path.
/// The sibling `.dbf` (and `.shx`, if present) are picked up by the reader.
pub(crate) fn read_from_shapefile(path: &Path) -> Result<(Vec<Shape>, Vec<Record>)> {
    let shapefile_err = |source| Error::Shapefile { path: path.to_path_buf(), source };

    let mut reader = Reader::from_path(path).map_err(shapefile_err)?;

    let mut shapes = Vec::new();
    let mut records = Vec::new();
    for result in reader.iter_shapes_and_records() {
        let (shape, record) = result.map_err(shapefile_err)?;
        shapes.push(shape);
        records.push(record);
    }
    Ok((shapes, records))
}

/// Locate `<layer>.shp` in `dir`, or in one of its immediate subdirectories.
pub(crate) fn find_layer(dir: &Path, layer: &str) -> Result<PathBuf> {
    let file_name = format!("{layer}.shp");

    let direct = dir.join(&file_name);
    if direct.is_file() {
        return Ok(direct);
    }

    let entries = std::fs::read_dir(dir)
        .map_err(|e| Error::io(format!("failed to list {}", dir.display()), e))?;
    let mut subdirs = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_dir())
        .collect::<Vec<_>>();
    subdirs.sort();

    subdirs.into_iter()
        .map(|sub| sub.join(&file_name))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| Error::Parse(format!("layer {layer:?} not found in {}", dir.display())))
}

/// Read the `.prj` sidecar of a `.shp` file, if it exists.
pub(crate) fn read_projection(shp_path: &Path) -> Result<Option<String>> {
    let prj = shp_path.with_extension("prj");
    if !prj.is_file() {
        return Ok(None);
    }
    let wkt = std::fs::read_to_string(&prj)
        .map_err(|e| Error::io(format!("failed to read {}", prj.display()), e))?;
    Ok(Some(wkt.trim().to_string()))
}
