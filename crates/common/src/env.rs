//! Environment/runtime helpers
//!
//! Startup checks for the directories the server expects on disk.

use tracing::warn;

/// Ensure the data directory for the SQLite file exists; warn when the
/// static assets directory is missing (the page will 404 but the API works).
pub async fn ensure_env(frontend_dir: &str, data_dir: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(frontend_dir).await.is_err() {
        warn!(%frontend_dir, "frontend assets directory not found; the game page will 404");
    }
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {data_dir}: {e}"))?;
    Ok(())
}
