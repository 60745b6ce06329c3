//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use tracing::{info, warn};

/// Ensure the data directory used by file-backed storage exists.
pub async fn ensure_data_dir(data_dir: &str) -> anyhow::Result<()> {
    if data_dir.trim().is_empty() {
        warn!("empty data_dir; file storage will write to the working directory");
        return Ok(());
    }
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    info!(%data_dir, "data directory ready");
    Ok(())
}
