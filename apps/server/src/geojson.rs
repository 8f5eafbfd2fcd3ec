//! Country boundaries for the map layer.

use std::path::Path;

use tracing::info;

/// Where the boundaries file lives under the static directory.
const GEOJSON_RELATIVE_PATH: &str = "data/countries.geojson";

/// Public-domain country boundaries dataset.
const GEOJSON_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/datasets/geo-countries/master/data/countries.geojson";

/// Load the countries GeoJSON, downloading it on first run.
///
/// The file is kept next to the rest of the static assets so later starts
/// work offline.
pub async fn load_countries(static_dir: &str) -> anyhow::Result<serde_json::Value> {
    let path = Path::new(static_dir).join(GEOJSON_RELATIVE_PATH);

    if !path.exists() {
        bootstrap(&path).await?;
    }

    let raw = tokio::fs::read_to_string(&path).await?;
    let value = serde_json::from_str(&raw)?;
    Ok(value)
}

async fn bootstrap(path: &Path) -> anyhow::Result<()> {
    info!("Countries file missing, downloading {}", GEOJSON_SOURCE_URL);

    let body = reqwest::get(GEOJSON_SOURCE_URL)
        .await?
        .error_for_status()?
        .text()
        .await?;

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, &body).await?;

    info!("Saved countries file to {}", path.display());
    Ok(())
}
