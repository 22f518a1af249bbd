use std::fmt;

use serde::{Deserialize, Serialize};

/// Target ECMAScript version handed to the transpiler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EsTarget {
    ES2015,
    ES2016,
    ES2017,
    ES2018,
    ES2019,
    /// ECMAScript 2020 (default)
    #[default]
    ES2020,
    ES2021,
    ES2022,
    ES2023,
    ES2024,
    /// Latest syntax, no down-levelling
    ESNext,
    /// Browsers with native ES module support
    Modules,
}

impl EsTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            EsTarget::ES2015 => "es2015",
            EsTarget::ES2016 => "es2016",
            EsTarget::ES2017 => "es2017",
            EsTarget::ES2018 => "es2018",
            EsTarget::ES2019 => "es2019",
            EsTarget::ES2020 => "es2020",
            EsTarget::ES2021 => "es2021",
            EsTarget::ES2022 => "es2022",
            EsTarget::ES2023 => "es2023",
            EsTarget::ES2024 => "es2024",
            EsTarget::ESNext => "esnext",
            EsTarget::Modules => "modules",
        }
    }
}

impl fmt::Display for EsTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minifier used for production output.
///
/// Accepts `false`/`true` in addition to the names, mirroring the usual
/// bundler config shorthand (`true` selects esbuild).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "FlagOrName", into = "FlagOrName")]
pub enum Minifier {
    None,
    #[default]
    Esbuild,
    Terser,
}

impl Minifier {
    pub fn is_enabled(self) -> bool {
        !matches!(self, Minifier::None)
    }
}

/// Source map emission mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "FlagOrName", into = "FlagOrName")]
pub enum SourceMapOptions {
    /// No source maps (default)
    #[default]
    Disabled,
    /// External .map files referenced from the bundle
    External,
    /// Inline source maps (base64)
    Inline,
    /// External .map files without the reference comment
    Hidden,
}

impl SourceMapOptions {
    /// Whether `.map` files land in the output directory.
    pub fn emits_files(self) -> bool {
        matches!(self, SourceMapOptions::External | SourceMapOptions::Hidden)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum FlagOrName {
    Flag(bool),
    Name(String),
}

impl TryFrom<FlagOrName> for Minifier {
    type Error = String;

    fn try_from(value: FlagOrName) -> Result<Self, Self::Error> {
        match value {
            FlagOrName::Flag(false) => Ok(Minifier::None),
            FlagOrName::Flag(true) => Ok(Minifier::Esbuild),
            FlagOrName::Name(name) => match name.as_str() {
                "none" => Ok(Minifier::None),
                "esbuild" => Ok(Minifier::Esbuild),
                "terser" => Ok(Minifier::Terser),
                other => Err(format!(
                    "unknown minifier '{other}', expected esbuild, terser or false"
                )),
            },
        }
    }
}

impl From<Minifier> for FlagOrName {
    fn from(value: Minifier) -> Self {
        match value {
            Minifier::None => FlagOrName::Flag(false),
            Minifier::Esbuild => FlagOrName::Name("esbuild".into()),
            Minifier::Terser => FlagOrName::Name("terser".into()),
        }
    }
}

impl TryFrom<FlagOrName> for SourceMapOptions {
    type Error = String;

    fn try_from(value: FlagOrName) -> Result<Self, Self::Error> {
        match value {
            FlagOrName::Flag(false) => Ok(SourceMapOptions::Disabled),
            FlagOrName::Flag(true) => Ok(SourceMapOptions::External),
            FlagOrName::Name(name) => match name.as_str() {
                "inline" => Ok(SourceMapOptions::Inline),
                "hidden" => Ok(SourceMapOptions::Hidden),
                "external" => Ok(SourceMapOptions::External),
                other => Err(format!(
                    "unknown sourcemap mode '{other}', expected true, false, inline or hidden"
                )),
            },
        }
    }
}

impl From<SourceMapOptions> for FlagOrName {
    fn from(value: SourceMapOptions) -> Self {
        match value {
            SourceMapOptions::Disabled => FlagOrName::Flag(false),
            SourceMapOptions::External => FlagOrName::Flag(true),
            SourceMapOptions::Inline => FlagOrName::Name("inline".into()),
            SourceMapOptions::Hidden => FlagOrName::Name("hidden".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minifier_accepts_flags_and_names() {
        let parsed: Minifier = serde_json::from_value(json!("terser")).unwrap();
        assert_eq!(parsed, Minifier::Terser);
        let parsed: Minifier = serde_json::from_value(json!(false)).unwrap();
        assert_eq!(parsed, Minifier::None);
        let parsed: Minifier = serde_json::from_value(json!(true)).unwrap();
        assert_eq!(parsed, Minifier::Esbuild);
        assert!(serde_json::from_value::<Minifier>(json!("uglify")).is_err());
    }

    #[test]
    fn sourcemap_serializes_like_bundler_config() {
        assert_eq!(
            serde_json::to_value(SourceMapOptions::Disabled).unwrap(),
            json!(false)
        );
        assert_eq!(
            serde_json::to_value(SourceMapOptions::Hidden).unwrap(),
            json!("hidden")
        );
        let parsed: SourceMapOptions = serde_json::from_value(json!(true)).unwrap();
        assert!(parsed.emits_files());
        let parsed: SourceMapOptions = serde_json::from_value(json!("inline")).unwrap();
        assert!(!parsed.emits_files());
    }

    #[test]
    fn es_target_uses_lowercase_names() {
        assert_eq!(serde_json::to_value(EsTarget::ES2020).unwrap(), json!("es2020"));
        let parsed: EsTarget = serde_json::from_value(json!("esnext")).unwrap();
        assert_eq!(parsed, EsTarget::ESNext);
        assert_eq!(EsTarget::Modules.to_string(), "modules");
    }
}
