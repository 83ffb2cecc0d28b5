//! CSV writing operations.

use std::{fs::File, path::Path};

use polars::{frame::DataFrame, io::SerWriter, prelude::{Column, CsvWriter, PolarsError, PolarsResult}};

use crate::{Error, Group, Result};

fn export_err(path: &Path) -> impl Fn(PolarsError) -> Error + '_ {
    move |e| Error::Export { path: path.to_path_buf(), message: e.to_string() }
}

/// Build the subregion summary table:
/// `subregion, members, population, area, density`, one row per group.
pub fn groups_to_dataframe(groups: &[Group]) -> PolarsResult<DataFrame> {
    DataFrame::new(vec![
        Column::new("subregion".into(), groups.iter().map(|g| g.key.clone()).collect::<Vec<_>>()),
        Column::new("members".into(), groups.iter().map(|g| g.members as u32).collect::<Vec<_>>()),
        Column::new("population".into(), groups.iter().map(|g| g.population).collect::<Vec<_>>()),
        Column::new("area".into(), groups.iter().map(|g| g.area).collect::<Vec<_>>()),
        Column::new("density".into(), groups.iter().map(|g| g.density).collect::<Vec<_>>()),
    ])
}

/// Write the subregion summary table to a CSV file.
pub fn write_groups_csv(groups: &[Group], path: &Path) -> Result<()> {
    let mut df = groups_to_dataframe(groups).map_err(export_err(path))?;

    let file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create CSV file: {}", path.display()), e))?;
    CsvWriter::new(file)
        .finish(&mut df)
        .map_err(export_err(path))
}
