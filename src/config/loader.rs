use crate::config::Config;
use crate::renderer::Color;
use crate::utils::{Result, TriPaneError};
use std::fs;
use std::path::PathBuf;

/// Get the default config file path: ~/.config/tripane/config.yaml
pub fn default_config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| TriPaneError::config("HOME environment variable not set"))?;

    let mut path = PathBuf::from(home);
    path.push(".config");
    path.push("tripane");
    path.push("config.yaml");

    Ok(path)
}

/// Parse and validate configuration from YAML text
pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

/// Reject values the panel group cannot start from
pub fn validate_config(config: &Config) -> Result<()> {
    let initial = config.layout.initial;
    if !initial.is_well_formed() {
        return Err(TriPaneError::config(format!(
            "layout.initial must be non-negative and sum to 100, got ({}, {}, {})",
            initial.left, initial.center, initial.right
        )));
    }
    if !initial.is_symmetric() {
        return Err(TriPaneError::config(format!(
            "layout.initial must have equal margins, got left={} right={}",
            initial.left, initial.right
        )));
    }

    let step = config.layout.nudge_step;
    if step.is_nan() || step <= 0.0 {
        return Err(TriPaneError::config("layout.nudge_step must be positive"));
    }

    for (name, value) in [
        ("background", &config.theme.background),
        ("margin", &config.theme.margin),
        ("center", &config.theme.center),
        ("handle", &config.theme.handle),
        ("active_handle", &config.theme.active_handle),
    ] {
        if Color::from_hex(value).is_none() {
            return Err(TriPaneError::config(format!(
                "theme.{}: expected #rrggbb, got {:?}",
                name, value
            )));
        }
    }

    Ok(())
}

/// Load configuration from file
///
/// A missing default file falls back to defaults, a missing explicit path is an error.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = match path {
        Some(p) => p,
        None => default_config_path()?,
    };

    if config_path.exists() {
        log::info!("Loading config from: {}", config_path.display());
        let content = fs::read_to_string(&config_path)?;
        parse_config(&content)
    } else if explicit {
        Err(TriPaneError::config(format!(
            "Config file not found: {}",
            config_path.display()
        )))
    } else {
        log::info!("Config file not found at {}, using defaults", config_path.display());
        Ok(Config::default())
    }
}

/// Save configuration to file
pub fn save_config(config: &Config) -> Result<()> {
    let config_path = default_config_path()?;

    // Create parent directory if it doesn't exist
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let yaml = serde_yaml::to_string(config)?;
    fs::write(&config_path, yaml)?;

    log::info!("Config saved to: {}", config_path.display());
    Ok(())
}

/// Initialize config directory and create default config if it doesn't exist
pub fn init_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match &path {
        Some(p) => p.clone(),
        None => default_config_path()?,
    };

    if config_path.exists() {
        return load_config(path);
    }

    if path.is_none() {
        // Only auto-create if using default path
        log::info!("Creating default config file at: {}", config_path.display());
        let default_config = Config::default();
        save_config(&default_config)?;
        Ok(default_config)
    } else {
        Err(TriPaneError::config(format!(
            "Config file not found: {}",
            config_path.display()
        )))
    }
}
