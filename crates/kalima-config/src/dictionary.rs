use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Directory holding `<lang>/<category>.txt` overlay word lists,
    /// merged after the embedded lists
    #[serde(default)]
    pub overlay_dir: Option<String>,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        Self {
            enabled: default_enabled(),
            overlay_dir: env::var("WORDLIST_DIR").ok(),
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            overlay_dir: None,
        }
    }
}
