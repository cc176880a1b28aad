mod core;
mod keywords;
pub mod loader;
mod thresholds;

pub use self::core::{
    BiasmapConfig, InputConfig, OutputConfig, ValidationConfig, DEFAULT_MAX_FILE_SIZE,
};
pub use keywords::KeywordConfig;
pub use loader::{
    discover_config, load_config, load_config_from, parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use thresholds::{ConcentrationThresholds, RangeThresholds, RiskThresholds};
