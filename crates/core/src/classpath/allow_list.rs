use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::interfaces::{HostEnvironment, PathResolver};

/// Plugins whose jars are resolved from a dependency cache in the host's test harness.
pub const COMPANION_PLUGIN_IDS: &[&str] = &["com.intellij", "JUnit"];

/// Path prefixes whose classpath entries survive reconciliation.
///
/// Matching is by substring, not by exact path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    paths: BTreeSet<String>,
}

impl AllowList {
    /// Empty paths are dropped, since they would match every entry.
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
        }
    }

    /// The host installation and plugin roots, plus the dependency-cache
    /// roots of the companion plugins when running in test mode.
    pub fn for_host(host: &dyn HostEnvironment, resolver: &dyn PathResolver) -> Self {
        let mut paths = vec![path_string(&host.home_path()), path_string(&host.plugins_path())];

        if host.is_unit_test_mode() {
            // .../com.intellij.junit-plugin/junit-rt/jars/junit-rt-latest.jar
            //   -> .../com.intellij.junit-plugin
            for id in COMPANION_PLUGIN_IDS {
                let root = host
                    .plugin_path(id)
                    .and_then(|path| cache_root(&path, resolver));
                if let Some(root) = root {
                    tracing::debug!("Allowing {} classpath under {}", id, root.display());
                    paths.push(path_string(&root));
                }
            }
        }

        Self::new(paths)
    }

    pub fn permits(&self, entry: &str) -> bool {
        self.paths.iter().any(|path| entry.contains(path.as_str()))
    }

    /// Entries of `classpath` this list permits, in their original order.
    pub fn filter(&self, classpath: &[String]) -> Vec<String> {
        classpath
            .iter()
            .filter(|entry| self.permits(entry))
            .cloned()
            .collect()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

fn cache_root(plugin_path: &Path, resolver: &dyn PathResolver) -> Option<PathBuf> {
    let mut root = plugin_path.to_path_buf();
    for _ in 0..3 {
        root = resolver.parent(&root)?;
    }
    Some(resolver.absolute(&root))
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::DefaultPathResolver;
    use std::collections::HashMap;

    struct Host {
        test_mode: bool,
        plugins: HashMap<&'static str, PathBuf>,
    }

    impl HostEnvironment for Host {
        fn home_path(&self) -> PathBuf {
            PathBuf::from("/opt/idea")
        }

        fn plugins_path(&self) -> PathBuf {
            PathBuf::from("/home/me/.idea/plugins")
        }

        fn is_unit_test_mode(&self) -> bool {
            self.test_mode
        }

        fn plugin_path(&self, plugin_id: &str) -> Option<PathBuf> {
            self.plugins.get(plugin_id).cloned()
        }
    }

    fn host(test_mode: bool) -> Host {
        Host {
            test_mode,
            plugins: HashMap::from([
                (
                    "JUnit",
                    PathBuf::from("/home/me/.ivy2/pants/com.intellij.junit-plugin/junit-rt/jars/junit-rt-latest.jar"),
                ),
                (
                    "com.intellij",
                    PathBuf::from("/home/me/.ivy2/pants/com.intellij.sdk.community/idea_rt/jars/idea_rt-latest.jar"),
                ),
            ]),
        }
    }

    #[test]
    fn test_host_roots() {
        let list = AllowList::for_host(&host(false), &DefaultPathResolver);
        assert_eq!(list.paths().collect::<Vec<_>>(), vec!["/home/me/.idea/plugins", "/opt/idea"]);
    }

    #[test]
    fn test_companion_plugin_roots_in_test_mode() {
        let list = AllowList::for_host(&host(true), &DefaultPathResolver);
        assert!(list.permits("/home/me/.ivy2/pants/com.intellij.junit-plugin/junit/jars/junit.jar"));
        assert!(list.permits("/home/me/.ivy2/pants/com.intellij.sdk.community/lib/util.jar"));
        assert!(!list.permits("/home/me/.ivy2/pants/com.google.guava/guava.jar"));
    }

    #[test]
    fn test_substring_match() {
        let list = AllowList::new(["/opt/idea"]);
        assert!(list.permits("/opt/idea/lib/idea_rt.jar"));
        assert!(list.permits("file:/opt/idea/lib/junit.jar"));
        assert!(!list.permits("/home/me/.m2/junit.jar"));
    }

    #[test]
    fn test_empty_paths_are_ignored() {
        let list = AllowList::new(["", "/opt/idea"]);
        assert!(!list.permits("/anything.jar"));
    }

    #[test]
    fn test_filter_is_idempotent_and_ordered() {
        let list = AllowList::new(["/opt/idea", "/plugins"]);
        let classpath: Vec<String> = ["/plugins/b.jar", "/m2/x.jar", "/opt/idea/a.jar", "/m2/y.jar"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let once = list.filter(&classpath);
        assert_eq!(once, vec!["/plugins/b.jar", "/opt/idea/a.jar"]);
        assert_eq!(list.filter(&once), once);
    }
}
