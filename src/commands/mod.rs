//! CLI command implementations.
//!
//! - **analyze**: scan one or more datasets and render a report
//! - **init**: write a default `.biasmap.toml`
//! - **validate**: fail when a dataset's overall risk exceeds a ceiling

pub mod analyze;
pub mod init;
pub mod validate;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::init_config;
pub use validate::{validate_project, ValidateConfig, ValidationDetails};
