//! Dependency pre-bundling options.

use serde::{Deserialize, Serialize};

use crate::build::EsTarget;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimizeDeps {
    /// Dependencies always pre-bundled, even when not discovered by the scan
    #[serde(default)]
    pub include: Vec<String>,

    /// Dependencies never pre-bundled
    #[serde(default)]
    pub exclude: Vec<String>,

    #[serde(default)]
    pub esbuild_options: EsbuildOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EsbuildOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<EsTarget>,
}

impl OptimizeDeps {
    /// Whether `dependency` is forced into pre-bundling.
    ///
    /// An exclusion wins over an inclusion of the same name.
    pub fn forces(&self, dependency: &str) -> bool {
        self.include.iter().any(|dep| dep == dependency)
            && !self.exclude.iter().any(|dep| dep == dependency)
    }
}
