use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# Biasmap Configuration

# Concentration thresholds are percentages of the largest category.
# A value strictly above `high` is High risk, strictly above `medium` is Medium.
[thresholds.gender]
high = 75.0
medium = 60.0

[thresholds.race_ethnicity]
high = 70.0
medium = 50.0

# Age risk is inverted: a narrow range (max - min) is the concern.
[thresholds.age]
high_below = 20
medium_below = 40

# Case-insensitive substrings matched against column headers.
[keywords]
gender = ["gender", "sex"]
age = ["age"]
race_ethnicity = ["race", "ethnicity"]

[input]
max_file_size_bytes = 104857600
delimiter = ","

[output]
default_format = "terminal"

[validation]
max_overall_risk = "Medium"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

pub fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }
    io::write_file(config_path, DEFAULT_CONFIG)
}
