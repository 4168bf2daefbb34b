use crate::{
    build::PantsProjectExtension,
    error::{Error, Result},
    interfaces::HostEnvironment,
    services::{PantsTargetPolicy, pants_target_policy::DEFAULT_GENERATED_PREFIXES},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Looked up in this order in every directory while walking up.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".pants-ide.json", "pants-ide.json"];

pub const DEFAULT_PANTS_EXECUTABLE: &str = "./pants";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Relative paths resolve against the build root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pants_executable: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_root: Option<PathBuf>,

    // Generated-target predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_target_prefixes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generated_target_markers: Vec<String>,

    #[serde(default)]
    pub compile_with_ide: bool,

    // Allow-list roots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ide_home: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins_home: Option<PathBuf>,
    #[serde(default)]
    pub test_mode: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub companion_plugins: BTreeMap<String, PathBuf>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_env: BTreeMap<String, String>,

    // Directory of the file this was loaded from (internal, not exposed in JSON)
    #[serde(skip)]
    pub config_dir: Option<PathBuf>,
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        config.config_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Config for `start_path`, or the defaults when no file is found.
    pub fn load(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                Self::load_from_file(&path)
            }
            None => {
                tracing::debug!("No config file above {}", start_path.display());
                Ok(Self::default())
            }
        }
    }

    pub fn build_root(&self) -> PathBuf {
        self.build_root
            .clone()
            .or_else(|| self.config_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn pants_executable_path(&self) -> PathBuf {
        let exe = self
            .pants_executable
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PANTS_EXECUTABLE));
        if exe.is_absolute() {
            exe
        } else {
            self.build_root().join(exe)
        }
    }

    pub fn target_policy(&self) -> PantsTargetPolicy {
        let prefixes = match &self.generated_target_prefixes {
            Some(prefixes) => prefixes.clone(),
            None => DEFAULT_GENERATED_PREFIXES.iter().map(|p| p.to_string()).collect(),
        };
        PantsTargetPolicy::new(prefixes, self.generated_target_markers.clone())
    }

    pub fn project_extension(&self) -> PantsProjectExtension {
        PantsProjectExtension {
            compile_with_ide: self.compile_with_ide,
        }
    }

    pub fn env(&self) -> Vec<(String, String)> {
        self.extra_env
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl HostEnvironment for Config {
    fn home_path(&self) -> PathBuf {
        self.ide_home.clone().unwrap_or_default()
    }

    fn plugins_path(&self) -> PathBuf {
        self.plugins_home.clone().unwrap_or_default()
    }

    fn is_unit_test_mode(&self) -> bool {
        self.test_mode
    }

    fn plugin_path(&self, plugin_id: &str) -> Option<PathBuf> {
        self.companion_plugins.get(plugin_id).cloned()
    }
}
