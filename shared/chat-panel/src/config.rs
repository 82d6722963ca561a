use serde::{Deserialize, Serialize};

use crate::roster::Roster;
use crate::{PanelError, Result};

/// Static text and roster the panel is built from.
///
/// Every field is optional in JSON; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub title: String,
    pub subtitle: String,
    pub placeholder: String,
    pub roster: Vec<String>,
    /// Seeds sender selection when set; otherwise senders come from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: "Introductions".to_string(),
            subtitle: "This Channel Is For Company Wide Chatter".to_string(),
            placeholder: "Type your message...".to_string(),
            roster: Roster::default().names().to_vec(),
            seed: None,
        }
    }
}

impl PanelConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PanelError::Config(e.to_string()))
    }

    pub fn roster(&self) -> Result<Roster> {
        Roster::new(&self.roster)
    }
}
