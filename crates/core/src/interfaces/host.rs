use std::path::PathBuf;

/// Installation facts about the host, used to decide which classpath entries it owns.
pub trait HostEnvironment {
    /// Root of the host installation
    fn home_path(&self) -> PathBuf;

    /// Directory plugins are installed into
    fn plugins_path(&self) -> PathBuf;

    /// Running inside the host's own test harness
    fn is_unit_test_mode(&self) -> bool {
        false
    }

    /// Install path of the plugin with the given id, if it is loaded
    fn plugin_path(&self, _plugin_id: &str) -> Option<PathBuf> {
        None
    }
}
