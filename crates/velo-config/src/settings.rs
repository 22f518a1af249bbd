//! Global settings shared across profiles.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalSettings {
    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default)]
    pub log_format: Option<String>,

    /// Variables injected into the build engine's environment
    #[serde(default)]
    pub environment: IndexMap<String, String>,
}
