use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Manual chunk grouping: chunk name to the module specifiers it owns.
///
/// A listed entry owns the specifier itself, its subpaths (`react-dom/client`
/// belongs to `react-dom`) and files installed under `node_modules/<entry>/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChunkGroups {
    groups: IndexMap<String, IndexSet<String>>,
}

/// A module listed in more than one chunk group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkOverlap {
    pub module: String,
    pub first: String,
    pub second: String,
}

impl ChunkGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group. Modules keep their declaration order; duplicates collapse.
    pub fn with_group<I, S>(mut self, name: impl Into<String>, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set = self.groups.entry(name.into()).or_default();
        set.extend(modules.into_iter().map(Into::into));
        self
    }

    pub fn get(&self, name: &str) -> Option<&IndexSet<String>> {
        self.groups.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.groups.iter().map(|(name, modules)| (name.as_str(), modules))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Chunk that owns `module`, or `None` when the bundler's default
    /// chunking applies. The first declared group wins on overlap.
    ///
    /// ```
    /// use velo_config::ChunkGroups;
    ///
    /// let chunks = ChunkGroups::new().with_group("react-vendor", ["react", "react-dom"]);
    /// assert_eq!(chunks.assign("react-dom/client"), Some("react-vendor"));
    /// assert_eq!(chunks.assign("/app/node_modules/react/index.js"), Some("react-vendor"));
    /// assert_eq!(chunks.assign("lodash"), None);
    /// ```
    pub fn assign(&self, module: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|(_, modules)| modules.iter().any(|entry| owns(entry, module)))
            .map(|(name, _)| name.as_str())
    }

    /// Every module specifier listed under two different groups.
    pub fn overlaps(&self) -> Vec<ChunkOverlap> {
        let mut seen: IndexMap<&str, &str> = IndexMap::new();
        let mut overlaps = Vec::new();

        for (name, modules) in &self.groups {
            for module in modules {
                match seen.get(module.as_str()) {
                    Some(first) => overlaps.push(ChunkOverlap {
                        module: module.clone(),
                        first: (*first).to_string(),
                        second: name.clone(),
                    }),
                    None => {
                        seen.insert(module.as_str(), name.as_str());
                    }
                }
            }
        }

        overlaps
    }
}

fn owns(entry: &str, module: &str) -> bool {
    if let Some(rest) = module.strip_prefix(entry) {
        if rest.is_empty() || rest.starts_with('/') {
            return true;
        }
    }

    installed_package(module) == Some(entry)
}

/// Package name of a path that lives under `node_modules`, using the last
/// `node_modules` segment so nested installs map to the innermost package.
pub fn installed_package(module: &str) -> Option<&str> {
    let idx = module.rfind("node_modules/")?;
    let after = &module[idx + "node_modules/".len()..];

    let mut segments = after.splitn(3, '/');
    let first = segments.next().filter(|segment| !segment.is_empty())?;

    if first.starts_with('@') {
        let second = segments.next().filter(|segment| !segment.is_empty())?;
        let len = first.len() + 1 + second.len();
        Some(&after[..len])
    } else {
        Some(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor_chunks() -> ChunkGroups {
        ChunkGroups::new()
            .with_group("react-vendor", ["react", "react-dom"])
            .with_group(
                "three-vendor",
                ["three", "@react-three/fiber", "@react-three/drei"],
            )
            .with_group("motion-vendor", ["framer-motion"])
    }

    #[test]
    fn listed_modules_map_to_their_group() {
        let chunks = vendor_chunks();
        for (name, modules) in chunks.iter() {
            for module in modules {
                assert_eq!(chunks.assign(module), Some(name));
            }
        }
    }

    #[test]
    fn subpath_imports_follow_their_package() {
        let chunks = vendor_chunks();
        assert_eq!(chunks.assign("react/jsx-runtime"), Some("react-vendor"));
        assert_eq!(
            chunks.assign("three/examples/jsm/controls/OrbitControls"),
            Some("three-vendor")
        );
    }

    #[test]
    fn prefix_without_boundary_does_not_match() {
        let chunks = vendor_chunks();
        assert_eq!(chunks.assign("react-router"), None);
        assert_eq!(chunks.assign("threejs-utils"), None);
    }

    #[test]
    fn resolved_node_modules_paths_are_assigned() {
        let chunks = vendor_chunks();
        assert_eq!(
            chunks.assign("/site/node_modules/@react-three/drei/core/Text.js"),
            Some("three-vendor")
        );
        assert_eq!(
            chunks.assign("/site/node_modules/framer-motion/dist/es/index.mjs"),
            Some("motion-vendor")
        );
    }

    #[test]
    fn unmatched_modules_use_default_chunking() {
        let chunks = vendor_chunks();
        assert_eq!(chunks.assign("/site/src/App.tsx"), None);
        assert_eq!(chunks.assign("zustand"), None);
    }

    #[test]
    fn installed_package_handles_scopes_and_nesting() {
        assert_eq!(installed_package("/a/node_modules/react/index.js"), Some("react"));
        assert_eq!(
            installed_package("/a/node_modules/@scope/pkg/lib/x.js"),
            Some("@scope/pkg")
        );
        assert_eq!(
            installed_package("/a/node_modules/outer/node_modules/inner/x.js"),
            Some("inner")
        );
        assert_eq!(installed_package("/a/src/main.ts"), None);
        assert_eq!(installed_package("/a/node_modules/@scope"), None);
    }

    #[test]
    fn overlaps_report_each_duplicate() {
        let chunks = vendor_chunks().with_group("misc", ["three", "zustand"]);
        let overlaps = chunks.overlaps();
        assert_eq!(
            overlaps,
            vec![ChunkOverlap {
                module: "three".into(),
                first: "three-vendor".into(),
                second: "misc".into(),
            }]
        );
    }

    #[test]
    fn first_group_wins_on_overlap() {
        let chunks = ChunkGroups::new()
            .with_group("a", ["shared"])
            .with_group("b", ["shared"]);
        assert_eq!(chunks.assign("shared"), Some("a"));
    }
}
