use crate::interfaces::TargetPolicy;
use crate::types::TargetAddress;

/// Generated sources live under the Pants workdir.
pub const DEFAULT_GENERATED_PREFIXES: &[&str] = &[".pants.d"];

/// Generated-target rules driven by settings.
#[derive(Debug, Clone)]
pub struct PantsTargetPolicy {
    prefixes: Vec<String>,
    markers: Vec<String>,
}

impl PantsTargetPolicy {
    /// `prefixes` match the start of an address case-insensitively,
    /// `markers` match anywhere in it.
    pub fn new(prefixes: Vec<String>, markers: Vec<String>) -> Self {
        Self {
            prefixes: prefixes.into_iter().map(|p| p.to_lowercase()).collect(),
            markers,
        }
    }
}

impl Default for PantsTargetPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_GENERATED_PREFIXES.iter().map(|p| p.to_string()).collect(),
            Vec::new(),
        )
    }
}

impl TargetPolicy for PantsTargetPolicy {
    fn is_generated(&self, address: &TargetAddress) -> bool {
        let lower = address.as_str().to_lowercase();
        self.prefixes.iter().any(|p| lower.starts_with(p.as_str()))
            || self.markers.iter().any(|m| address.as_str().contains(m.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = PantsTargetPolicy::default();
        assert!(policy.is_generated(&".pants.d/gen/thrift/java:foo".into()));
        assert!(policy.is_generated(&".PANTS.D/gen:bar".into()));
        assert!(!policy.is_generated(&"src/java/foo:lib".into()));
    }

    #[test]
    fn test_markers() {
        let policy = PantsTargetPolicy::new(vec![], vec!["_gen".to_string()]);
        assert!(policy.is_generated(&"a:lib_gen".into()));
        assert!(!policy.is_generated(&"a:lib".into()));
    }

    #[test]
    fn test_hydrate() {
        let policy = PantsTargetPolicy::default();
        let hydrated = policy
            .hydrate_target_addresses(Some(r#"["a:lib", "b:test"]"#))
            .unwrap();
        assert_eq!(hydrated, vec![TargetAddress::from("a:lib"), TargetAddress::from("b:test")]);
        assert!(policy.hydrate_target_addresses(None).unwrap().is_empty());
        assert!(policy.hydrate_target_addresses(Some("not json")).is_err());
    }
}
