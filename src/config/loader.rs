use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::BiasmapConfig;
use super::thresholds::RiskThresholds;
use crate::errors::{BiasError, Result};

pub const CONFIG_FILE_NAME: &str = ".biasmap.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string.
///
/// Invalid thresholds are replaced by the defaults with a warning, so a
/// discovered config file never blocks analysis.
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<BiasmapConfig, String> {
    let mut config = toml::from_str::<BiasmapConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;

    if let Some(thresholds) = config.thresholds {
        if let Err(e) = thresholds.validate() {
            log::warn!("Invalid risk thresholds: {}. Using defaults.", e);
            config.thresholds = Some(RiskThresholds::default());
        }
    }

    Ok(config)
}

/// Parse config and reject invalid thresholds instead of falling back.
pub fn parse_config_strict(contents: &str) -> std::result::Result<BiasmapConfig, String> {
    let config = toml::from_str::<BiasmapConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;
    config.risk_thresholds().validate()?;
    Ok(config)
}

/// Load an explicitly requested config file. Any problem is an error.
pub fn load_config_from(path: &Path) -> Result<BiasmapConfig> {
    let contents = read_config_file(path).map_err(|e| BiasError::io(path, e))?;
    parse_config_strict(&contents).map_err(|message| BiasError::Config {
        message,
        path: Some(path.to_path_buf()),
    })
}

/// Try loading config from a specific path during discovery
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<BiasmapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest `.biasmap.toml` at or above `start`.
pub fn discover_config(start: PathBuf) -> BiasmapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            BiasmapConfig::default()
        })
}

pub fn load_config() -> BiasmapConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            BiasmapConfig::default()
        }
    }
}
