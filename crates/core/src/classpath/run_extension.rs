use crate::error::Result;
use crate::interfaces::{
    HostEnvironment, ModuleMetadata, PathResolver, ProjectLayout, RunConfiguration,
};

use super::allow_list::AllowList;
use super::published::{find_published_classpath, target_address_infos};
use super::reconciler::reconcile_classpath;

/// Rewrites the classpath of run configurations that Pants built.
pub struct ClasspathRunExtension<'a> {
    host: &'a dyn HostEnvironment,
    layout: &'a dyn ProjectLayout,
    resolver: &'a dyn PathResolver,
}

impl<'a> ClasspathRunExtension<'a> {
    pub fn new(
        host: &'a dyn HostEnvironment,
        layout: &'a dyn ProjectLayout,
        resolver: &'a dyn PathResolver,
    ) -> Self {
        Self {
            host,
            layout,
            resolver,
        }
    }

    /// Module based configurations running in a Pants module.
    pub fn is_applicable_for(&self, configuration: &dyn RunConfiguration) -> bool {
        configuration
            .module()
            .is_some_and(|module| module.is_pants_module())
    }

    pub fn allow_list(&self) -> AllowList {
        AllowList::for_host(self.host, self.resolver)
    }

    /// Replace the configuration's classpath with the host-owned entries plus
    /// the manifest jar. Returns `false` when the configuration was left alone
    /// because Pants did not build it.
    ///
    /// On error the classpath is unchanged.
    pub fn update_run_classpath(&self, configuration: &mut dyn RunConfiguration) -> Result<bool> {
        if !configuration.built_by_pants() || !self.is_applicable_for(configuration) {
            return Ok(false);
        }

        let manifest = self.layout.manifest_jar();
        let classpath = configuration.classpath_mut();
        let reconciled = reconcile_classpath(classpath, &self.allow_list(), manifest.as_deref())?;
        *classpath = reconciled;
        Ok(true)
    }

    /// Per-target classpath entries published for `module`.
    pub fn find_published_classpath(&self, module: &dyn ModuleMetadata) -> Result<Vec<String>> {
        let infos = target_address_infos(module)?;
        let export_dir = self.layout.export_classpath_dir();
        Ok(find_published_classpath(export_dir.as_deref(), &infos, self.resolver))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::interfaces::{PANTS_MAKE_BEFORE_RUN_ID, TARGET_ADDRESSES_KEY};
    use crate::services::{DefaultPathResolver, JsonModule};
    use std::path::PathBuf;

    struct Host;

    impl HostEnvironment for Host {
        fn home_path(&self) -> PathBuf {
            PathBuf::from("/opt/idea")
        }

        fn plugins_path(&self) -> PathBuf {
            PathBuf::from("/opt/plugins")
        }
    }

    struct Layout(Option<PathBuf>);

    impl ProjectLayout for Layout {
        fn manifest_jar(&self) -> Option<PathBuf> {
            self.0.clone()
        }

        fn export_classpath_dir(&self) -> Option<PathBuf> {
            None
        }
    }

    struct Run {
        tasks: Vec<String>,
        module: Option<JsonModule>,
        classpath: Vec<String>,
    }

    impl RunConfiguration for Run {
        fn before_run_task_ids(&self) -> Vec<String> {
            self.tasks.clone()
        }

        fn module(&self) -> Option<&dyn ModuleMetadata> {
            self.module.as_ref().map(|m| m as &dyn ModuleMetadata)
        }

        fn classpath_mut(&mut self) -> &mut Vec<String> {
            &mut self.classpath
        }
    }

    fn pants_run() -> Run {
        Run {
            tasks: vec!["Make".to_string(), PANTS_MAKE_BEFORE_RUN_ID.to_string()],
            module: Some(JsonModule::new("foo").with_option(TARGET_ADDRESSES_KEY, r#"["a:lib"]"#)),
            classpath: vec!["/opt/idea/lib/junit.jar".to_string(), "/m2/guava.jar".to_string()],
        }
    }

    #[test]
    fn test_rewrites_pants_built_run() {
        let layout = Layout(Some(PathBuf::from("/repo/dist/manifest.jar")));
        let extension = ClasspathRunExtension::new(&Host, &layout, &DefaultPathResolver);
        let mut run = pants_run();

        assert!(extension.update_run_classpath(&mut run).unwrap());
        assert_eq!(run.classpath, vec!["/opt/idea/lib/junit.jar", "/repo/dist/manifest.jar"]);
    }

    #[test]
    fn test_leaves_host_built_run_alone() {
        let layout = Layout(Some(PathBuf::from("/repo/dist/manifest.jar")));
        let extension = ClasspathRunExtension::new(&Host, &layout, &DefaultPathResolver);
        let mut run = Run {
            tasks: vec!["Make".to_string()],
            ..pants_run()
        };

        assert!(!extension.update_run_classpath(&mut run).unwrap());
        assert_eq!(run.classpath.len(), 2);
    }

    #[test]
    fn test_not_applicable_without_pants_module() {
        let layout = Layout(None);
        let extension = ClasspathRunExtension::new(&Host, &layout, &DefaultPathResolver);
        let mut run = Run {
            module: Some(JsonModule::new("plain")),
            ..pants_run()
        };
        assert!(!extension.is_applicable_for(&run));
        assert!(!extension.update_run_classpath(&mut run).unwrap());

        run.module = None;
        assert!(!extension.is_applicable_for(&run));
    }

    #[test]
    fn test_missing_manifest_keeps_classpath() {
        let layout = Layout(None);
        let extension = ClasspathRunExtension::new(&Host, &layout, &DefaultPathResolver);
        let mut run = pants_run();

        let err = extension.update_run_classpath(&mut run).unwrap_err();
        assert!(matches!(err, Error::ManifestNotFound { .. }));
        assert_eq!(run.classpath.len(), 2);
    }
}
