use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identifier of a buildable unit in the Pants build graph, e.g. `src/java/foo:lib`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetAddress(String);

impl TargetAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetAddress {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TargetAddress {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for TargetAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An exported artifact group together with the targets that produced it.
///
/// Published by `./pants export` and stored in module metadata; only read here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetAddressInfo {
    pub id: String,
    #[serde(default)]
    pub target_addresses: BTreeSet<TargetAddress>,
}

impl TargetAddressInfo {
    pub fn new<I, T>(id: impl Into<String>, addresses: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TargetAddress>,
    {
        Self {
            id: id.into(),
            target_addresses: addresses.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_address_is_a_plain_json_string() {
        let address: TargetAddress = serde_json::from_str(r#""src/java/foo:lib""#).unwrap();
        assert_eq!(address.as_str(), "src/java/foo:lib");
        assert_eq!(serde_json::to_string(&address).unwrap(), r#""src/java/foo:lib""#);
    }

    #[test]
    fn test_target_address_info_deserialization() {
        let json = r#"[
            {"id": "src.java.foo.lib", "targetAddresses": ["src/java/foo:lib"], "isTargetRoot": true},
            {"id": "3rdparty.guava"}
        ]"#;
        let infos: BTreeSet<TargetAddressInfo> = serde_json::from_str(json).unwrap();

        assert_eq!(infos.len(), 2);
        let foo = infos.iter().find(|i| i.id == "src.java.foo.lib").unwrap();
        assert!(foo.target_addresses.contains(&TargetAddress::from("src/java/foo:lib")));
        let guava = infos.iter().find(|i| i.id == "3rdparty.guava").unwrap();
        assert!(guava.target_addresses.is_empty());
    }
}
