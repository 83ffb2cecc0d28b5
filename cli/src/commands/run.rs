use anyhow::{Context, Result};
use euromap::{write_features_geojson, write_groups_csv, write_groups_geojson, Pipeline, PipelineConfig};
use tracing::info;

pub fn run(config: &PipelineConfig, args: &crate::cli::RunArgs) -> Result<()> {
    let out_dir = args.output.clone().unwrap_or(".".into());
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let output = Pipeline::new(config.clone()).run()?;

    let countries = out_dir.join("countries.geojson");
    let subregions = out_dir.join("subregions.geojson");
    let table = out_dir.join("subregions.csv");

    write_features_geojson(&output.countries, &countries)?;
    write_groups_geojson(&output.subregions, &output.subregion_centroids, &subregions)?;
    write_groups_csv(&output.subregions, &table)?;
    info!(dir = %out_dir.display(), "wrote outputs");

    println!("{:<28} {:>7} {:>16} {:>12} {:>12}", "subregion", "members", "population", "area", "density");
    for group in &output.subregions {
        println!(
            "{:<28} {:>7} {:>16.0} {:>12.2} {:>12.1}",
            group.key, group.members, group.population, group.area, group.density,
        );
    }
    println!("{} countries -> {}", output.countries.len(), countries.display());

    Ok(())
}
