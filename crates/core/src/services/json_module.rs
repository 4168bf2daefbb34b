use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::interfaces::ModuleMetadata;

/// A module described in JSON, for hosts without a module model of their own.
///
/// Option values are stored the way the host stores them, as strings holding
/// JSON. When reading, a non-string value is serialized back into a string so
/// descriptions can be written by hand:
///
/// ```json
/// {
///   "name": "foo",
///   "options": { "pants.target.addresses": ["src/java/foo:lib"] },
///   "dependencies": [{ "name": "bar" }]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonModule {
    pub name: String,
    #[serde(default, deserialize_with = "options_as_strings")]
    pub options: BTreeMap<String, String>,
    #[serde(default)]
    pub dependencies: Vec<JsonModule>,
}

impl JsonModule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn with_dependency(mut self, dependency: JsonModule) -> Self {
        self.dependencies.push(dependency);
        self
    }

    fn collect_runtime<'a>(
        &'a self,
        seen: &mut BTreeSet<&'a str>,
        out: &mut Vec<&'a dyn ModuleMetadata>,
    ) {
        if !seen.insert(self.name.as_str()) {
            return;
        }
        out.push(self);
        for dependency in &self.dependencies {
            dependency.collect_runtime(seen, out);
        }
    }
}

impl ModuleMetadata for JsonModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn option_value(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    fn runtime_modules(&self) -> Vec<&dyn ModuleMetadata> {
        let mut seen = BTreeSet::new();
        let mut out = Vec::new();
        self.collect_runtime(&mut seen, &mut out);
        out
    }
}

fn options_as_strings<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(key, value)| match value {
            serde_json::Value::String(s) => (key, s),
            other => (key, other.to_string()),
        })
        .collect())
}
