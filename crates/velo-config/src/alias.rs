//! Path aliases for module resolution.
//!
//! An alias maps a symbolic prefix such as `@components` to a directory. A
//! specifier matches an alias when it is the alias itself or continues with a
//! `/` after it, so `@components/Hero` matches `@components` while
//! `@componentsX` does not. When several aliases match, the longest wins.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use path_clean::PathClean;
use serde::{Deserialize, Serialize};

/// Outcome of resolving a module specifier against an [`AliasMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The specifier matched an alias and was rewritten to a path.
    Aliased { alias: &'a str, path: PathBuf },
    /// No alias matched; the bundler resolves the specifier itself.
    Passthrough(&'a str),
}

impl Resolution<'_> {
    pub fn is_aliased(&self) -> bool {
        matches!(self, Resolution::Aliased { .. })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Resolution::Aliased { path, .. } => Some(path),
            Resolution::Passthrough(_) => None,
        }
    }
}

/// Ordered mapping from alias prefix to target path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasMap {
    entries: IndexMap<String, PathBuf>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an alias. Returns the previous target, if any.
    pub fn insert(&mut self, alias: impl Into<String>, path: impl Into<PathBuf>) -> Option<PathBuf> {
        self.entries.insert(alias.into(), path.into())
    }

    pub fn with(mut self, alias: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.insert(alias, path);
        self
    }

    pub fn get(&self, alias: &str) -> Option<&Path> {
        self.entries.get(alias).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(alias, path)| (alias.as_str(), path.as_path()))
    }

    /// Anchor every relative target to `root` and normalise the result.
    ///
    /// Absolute targets are only normalised.
    pub fn anchored(&self, root: &Path) -> AliasMap {
        let entries = self
            .entries
            .iter()
            .map(|(alias, path)| (alias.clone(), anchor(root, path)))
            .collect();
        AliasMap { entries }
    }

    /// Resolve a module specifier.
    ///
    /// # Example
    ///
    /// ```
    /// use velo_config::{AliasMap, Resolution};
    /// use std::path::PathBuf;
    ///
    /// let aliases = AliasMap::new()
    ///     .with("@", "/app/src")
    ///     .with("@components", "/app/src/components");
    ///
    /// let hero = aliases.resolve("@components/Hero");
    /// assert_eq!(hero.path(), Some(PathBuf::from("/app/src/components/Hero").as_path()));
    /// assert_eq!(aliases.resolve("react"), Resolution::Passthrough("react"));
    /// ```
    pub fn resolve<'a>(&'a self, specifier: &'a str) -> Resolution<'a> {
        let best = self
            .entries
            .iter()
            .filter_map(|(alias, target)| {
                rest_after(specifier, alias).map(|rest| (alias, target, rest))
            })
            .max_by_key(|(alias, _, _)| alias.len());

        match best {
            Some((alias, target, rest)) => {
                let path = if rest.is_empty() {
                    target.clone()
                } else {
                    target.join(rest)
                };
                Resolution::Aliased { alias, path }
            }
            None => Resolution::Passthrough(specifier),
        }
    }
}

impl<K: Into<String>, V: Into<PathBuf>> FromIterator<(K, V)> for AliasMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(alias, path)| (alias.into(), path.into()))
            .collect();
        AliasMap { entries }
    }
}

fn rest_after<'a>(specifier: &'a str, alias: &str) -> Option<&'a str> {
    let rest = specifier.strip_prefix(alias)?;
    if rest.is_empty() {
        return Some(rest);
    }
    rest.strip_prefix('/')
}

pub(crate) fn anchor(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.clean()
    } else {
        root.join(path).clean()
    }
}
