use anyhow::Context;
use chatroom_panel::PanelConfig;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Path to an optional JSON file holding a [`PanelConfig`].
pub const CONFIG_ENV: &str = "CHATROOM_CONFIG";
/// Overrides the sender-selection seed from the config file.
pub const SEED_ENV: &str = "CHATROOM_SEED";

/// Runtime configuration for the desktop client.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub panel: PanelConfig,
    /// File the panel config was read from, if any.
    pub source: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(env::var_os(CONFIG_ENV), env::var(SEED_ENV).ok())
    }

    /// Builds the config from the raw values of [`CONFIG_ENV`] and [`SEED_ENV`].
    fn from_vars(config: Option<OsString>, seed: Option<String>) -> anyhow::Result<Self> {
        let source = config.map(PathBuf::from);
        let mut panel = match &source {
            Some(path) => load_panel_config(path)?,
            None => PanelConfig::default(),
        };

        if let Some(raw) = seed {
            match parse_seed(&raw) {
                Some(seed) => panel.seed = Some(seed),
                None => warn!(value = %raw, "ignoring unparsable {}", SEED_ENV),
            }
        }

        Ok(Self { panel, source })
    }
}

/// Reads and validates a panel config file.
pub fn load_panel_config(path: &Path) -> anyhow::Result<PanelConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = PanelConfig::from_json_str(&json)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    config
        .roster()
        .with_context(|| format!("Invalid roster in {}", path.display()))?;
    Ok(config)
}

fn parse_seed(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}
