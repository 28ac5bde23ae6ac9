use crate::{AppSettings, DEFAULT_SETTINGS, RawSettings};
use color_eyre::eyre::{Context, Result};
use config::{Config, File, FileFormat};
use std::path::Path;
use tracing::debug;

/// Loads the built-in settings, overridden by `config_file` when given.
///
/// The override only needs to contain the keys it changes. Its format is
/// picked from the file extension (yaml, toml, json, ...).
pub fn load_app_settings(config_file: Option<&Path>) -> Result<AppSettings> {
    let mut builder =
        Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));

    if let Some(path) = config_file {
        let config_path = path
            .canonicalize()
            .with_context(|| format!("Cannot find settings file {}", path.display()))?;
        debug!("Loading settings override from {}", config_path.display());
        builder = builder.add_source(File::from(config_path));
    }

    let raw_settings = builder
        .build()?
        .try_deserialize::<RawSettings>()
        .context("Invalid settings")?;
    raw_settings.try_into()
}
