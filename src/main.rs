use anyhow::{Context, Result};
use flowvac_siting::{config, ingest, report, telemetry};

use config::Config;
use telemetry::init_tracing;
use tracing::info;

fn main() -> Result<()> {
    init_tracing();

    let cfg = Config::load()?;

    let path = std::env::args()
        .nth(1)
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| cfg.data.sites_csv.clone());

    let sites = ingest::load_sites(&path)
        .with_context(|| format!("ingesting site records from {}", path.display()))?;
    info!(count = sites.len(), path = %path.display(), "loaded site records");

    print!(
        "{}",
        report::render(&sites, &path.display().to_string(), &cfg.estimator)
    );

    Ok(())
}
