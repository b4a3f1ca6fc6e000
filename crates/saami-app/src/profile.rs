use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use saami_config::Config;

/// Config from the file named by `SAAMI_CONFIG`, else defaults with
/// environment overrides
pub fn load_config() -> anyhow::Result<Config> {
    match env::var("SAAMI_CONFIG") {
        Ok(path) => load_config_file(Path::new(&path)),
        Err(_) => Ok(Config::new()),
    }
}

pub fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open config {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    Ok(config)
}
