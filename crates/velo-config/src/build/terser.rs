use serde::{Deserialize, Serialize};

use crate::build::helpers::{default_passes, default_true};

/// Options forwarded to terser when it is the selected minifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerserOptions {
    #[serde(default)]
    pub compress: TerserCompress,

    /// Mangle local identifiers
    #[serde(default = "default_true")]
    pub mangle: bool,

    /// Keep license comments in the output
    #[serde(default)]
    pub keep_comments: bool,
}

impl Default for TerserOptions {
    fn default() -> Self {
        Self {
            compress: TerserCompress::default(),
            mangle: true,
            keep_comments: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerserCompress {
    /// Remove `console.*` calls
    #[serde(default)]
    pub drop_console: bool,

    /// Remove `debugger` statements
    #[serde(default)]
    pub drop_debugger: bool,

    /// Calls treated as side-effect free and dropped when unused
    #[serde(default)]
    pub pure_funcs: Vec<String>,

    #[serde(default = "default_passes")]
    pub passes: u32,
}

impl Default for TerserCompress {
    fn default() -> Self {
        Self {
            drop_console: false,
            drop_debugger: false,
            pure_funcs: Vec::new(),
            passes: 1,
        }
    }
}

impl TerserCompress {
    /// Statement kinds removed from production output.
    pub fn stripped_statements(&self) -> Vec<&str> {
        let mut stripped = Vec::new();
        if self.drop_console {
            stripped.push("console");
        }
        if self.drop_debugger {
            stripped.push("debugger");
        }
        stripped.extend(self.pure_funcs.iter().map(String::as_str));
        stripped
    }
}
