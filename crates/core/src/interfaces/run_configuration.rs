use super::module::ModuleMetadata;

/// Id of the before-run task that builds with Pants.
pub const PANTS_MAKE_BEFORE_RUN_ID: &str = "Pants.BeforeRunTask";

/// A host run configuration about to be launched.
pub trait RunConfiguration {
    /// Provider ids of the tasks executed before this configuration runs
    fn before_run_task_ids(&self) -> Vec<String>;

    /// The module this configuration runs in, for module based configurations
    fn module(&self) -> Option<&dyn ModuleMetadata>;

    /// The classpath the configuration will launch with
    fn classpath_mut(&mut self) -> &mut Vec<String>;

    fn built_by_pants(&self) -> bool {
        self.before_run_task_ids()
            .iter()
            .any(|id| id == PANTS_MAKE_BEFORE_RUN_ID)
    }
}
