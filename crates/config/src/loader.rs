use std::path::{Path, PathBuf};

use {secrecy::Secret, tracing::{debug, warn}};

use crate::schema::ParleyConfig;

/// Standard config file name, looked up in the working directory.
const CONFIG_FILENAME: &str = "parley.toml";

/// Load config from the given TOML file, then apply environment overrides.
pub fn load_config(path: &Path) -> anyhow::Result<ParleyConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let mut config: ParleyConfig = toml::from_str(&raw)?;
    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    Ok(config)
}

/// Load `./parley.toml` if present, defaults otherwise. Environment overrides
/// apply either way.
pub fn discover_and_load() -> ParleyConfig {
    if let Some(path) = find_config_file() {
        debug!(path = %path.display(), "loading config");
        match load_config(&path) {
            Ok(cfg) => return cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            },
        }
    } else {
        debug!("no config file found, using defaults");
    }
    let mut config = ParleyConfig::default();
    apply_env_overrides(&mut config, |name| std::env::var(name).ok());
    config
}

fn find_config_file() -> Option<PathBuf> {
    let p = PathBuf::from(CONFIG_FILENAME);
    p.exists().then_some(p)
}

/// Apply environment variable overrides on top of whatever the file (or the
/// defaults) provided. `var` is injectable so tests never mutate the process
/// environment.
fn apply_env_overrides(config: &mut ParleyConfig, var: impl Fn(&str) -> Option<String>) {
    if let Some(name) = var("PARLEY_NAME") {
        config.runtime.name = name;
    }
    if let Some(environment) = var("PARLEY_ENV") {
        config.runtime.environment = environment;
    }
    if let Some(level) = var("PARLEY_LOG_LEVEL") {
        config.runtime.log_level = level.to_lowercase();
    }
    if let Some(token) = var("TELEGRAM_BOT_TOKEN") {
        config.telegram.token = Secret::new(token);
    }
    if let Some(id) = var("BOT_AGENT_ID") {
        config.agent.id = Some(id);
    }
    if let Some(username) = var("BOT_AGENT_USERNAME") {
        config.agent.username = Some(username);
    }
    if let Some(display_name) = var("TELEGRAM_BOT_NAME") {
        config.agent.display_name = Some(display_name);
    }
}
