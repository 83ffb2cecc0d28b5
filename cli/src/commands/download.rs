use anyhow::{Context, Result};
use euromap::{fetch_into_cache, PipelineConfig};

pub fn run(config: &PipelineConfig) -> Result<()> {
    let cache = &config.cache_dir;

    if cache.exists() {
        println!("Cache already present at {}", cache.display());
        return Ok(());
    }

    fetch_into_cache(&config.source_url, cache)
        .with_context(|| format!("fetching {}", config.source_url))?;

    println!("Downloaded {} into {}", config.source_url, cache.display());
    Ok(())
}
