//! Maintainer to distgit grouping.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Deserialize;

/// Alias directory payload: package path to maintainer names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AliasDirectory {
    pub rpms: HashMap<String, Vec<String>>,
}

impl AliasDirectory {
    /// Maintainers of a namespace-qualified distgit such as `rpms/foo`.
    ///
    /// The leading namespace segment is dropped before the lookup, so
    /// `rpms/foo/bar` is looked up as `foo/bar`. Unknown names have no
    /// maintainers.
    pub fn maintainers_of(&self, distgit: &str) -> &[String] {
        self.rpms
            .get(lookup_key(distgit))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Strip the namespace segment of a distgit name.
pub fn lookup_key(distgit: &str) -> &str {
    distgit.split_once('/').map_or("", |(_, rest)| rest)
}

/// Every maintainer mapped to the distgits they maintain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintainerRegistry {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl MaintainerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `distgit` to the set of each listed maintainer.
    ///
    /// An empty maintainer list leaves the registry untouched.
    pub fn register<S: AsRef<str>>(&mut self, distgit: &str, maintainers: &[S]) {
        for maintainer in maintainers {
            self.entries
                .entry(maintainer.as_ref().to_string())
                .or_default()
                .insert(distgit.to_string());
        }
    }

    /// Fold a list of distgits against the alias directory.
    pub fn build<'a>(
        distgits: impl IntoIterator<Item = &'a str>,
        aliases: &AliasDirectory,
    ) -> Self {
        distgits
            .into_iter()
            .fold(Self::new(), |mut registry, distgit| {
                let maintainers = aliases.maintainers_of(distgit);
                log::debug!(
                    "Maintainers for {}: {}",
                    distgit,
                    if maintainers.is_empty() {
                        "none".to_string()
                    } else {
                        maintainers.join(", ")
                    }
                );
                registry.register(distgit, maintainers);
                registry
            })
    }

    pub fn get(&self, maintainer: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(maintainer)
    }

    /// Maintainers in sorted order with their distgits.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aliases(pairs: &[(&str, &[&str])]) -> AliasDirectory {
        AliasDirectory {
            rpms: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
                .collect(),
        }
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_grouping() {
        let directory = aliases(&[("A", &["x", "y"]), ("B", &["y"]), ("C", &[])]);
        let registry = MaintainerRegistry::build(["rpms/A", "rpms/B", "rpms/C"], &directory);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("x"), Some(&set(&["rpms/A"])));
        assert_eq!(registry.get("y"), Some(&set(&["rpms/A", "rpms/B"])));
    }

    #[test]
    fn grouping_ignores_input_order() {
        let directory = aliases(&[("A", &["x", "y"]), ("B", &["y"]), ("D", &["x"])]);
        let forward = MaintainerRegistry::build(["rpms/A", "rpms/B", "rpms/D"], &directory);
        let backward = MaintainerRegistry::build(["rpms/D", "rpms/B", "rpms/A"], &directory);
        assert_eq!(forward, backward);
    }

    #[test]
    fn repeated_distgit_is_recorded_once() {
        let mut registry = MaintainerRegistry::new();
        registry.register("rpms/A", &["x"]);
        registry.register("rpms/A", &["x"]);
        assert_eq!(registry.get("x"), Some(&set(&["rpms/A"])));
    }

    #[test]
    fn unknown_distgit_contributes_nothing() {
        let registry = MaintainerRegistry::build(["rpms/ghost"], &AliasDirectory::default());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_lookup_key() {
        assert_eq!(lookup_key("rpms/foo"), "foo");
        assert_eq!(lookup_key("rpms/foo/bar"), "foo/bar");
        assert_eq!(lookup_key("foo"), "");
    }

    #[test]
    fn nested_name_looks_up_without_namespace() {
        let directory = aliases(&[("foo/bar", &["alice"])]);
        assert_eq!(directory.maintainers_of("rpms/foo/bar"), ["alice".to_string()]);
        assert!(directory.maintainers_of("rpms/foo").is_empty());
    }

    #[test]
    fn alias_directory_decodes_rpms_field() {
        let directory: AliasDirectory = serde_json::from_str(
            r#"{"rpms": {"python-foo": ["alice", "bob"]}, "modules": {"x": ["y"]}}"#,
        )
        .unwrap();
        assert_eq!(directory.maintainers_of("rpms/python-foo").len(), 2);
    }

    #[test]
    fn alias_directory_without_rpms_is_rejected() {
        let result: std::result::Result<AliasDirectory, _> =
            serde_json::from_str(r#"{"error": "maintenance"}"#);
        assert!(result.is_err());
    }
}
