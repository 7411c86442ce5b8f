use crate::error::{DisplayError, DisplayErrorExt};
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// A reusable configuration loader that combines file-based settings with
/// environment overrides.
///
/// Layered strategy:
/// 1. **Base file**: settings from `path` (e.g., `nbgate.toml`); defaults to
///    `"nbgate"` in the current working directory when no path is given.
/// 2. **Environment overrides**: values from variables prefixed with
///    `NBGATE__`, nested fields separated by double underscores
///    (e.g., `NBGATE__WARN_ON_SUPPRESS`).
///
/// # Errors
/// Returns [`DisplayError::Config`] if:
/// * The specified (or default) configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, DisplayError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("nbgate"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix("NBGATE")
                .separator("__")
                .convert_case(config::Case::Snake),  // Env var overrides (e.g., NBGATE__CAPABILITIES)
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
