use crate::error::Result;
use crate::types::TargetAddress;

/// Rules about target addresses that belong to the host integration.
pub trait TargetPolicy {
    /// Synthetic targets are never passed to Pants directly.
    fn is_generated(&self, address: &TargetAddress) -> bool;

    /// Parse a serialized address list from module metadata. Absent means empty.
    fn hydrate_target_addresses(&self, raw: Option<&str>) -> Result<Vec<TargetAddress>> {
        match raw {
            Some(json) if !json.trim().is_empty() => Ok(serde_json::from_str(json)?),
            _ => Ok(Vec::new()),
        }
    }

    fn contains_generated(&self, addresses: &[TargetAddress]) -> bool {
        addresses.iter().any(|address| self.is_generated(address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NothingGenerated;

    impl TargetPolicy for NothingGenerated {
        fn is_generated(&self, _address: &TargetAddress) -> bool {
            false
        }
    }

    #[test]
    fn test_hydrate_target_addresses() {
        let policy = NothingGenerated;
        assert!(policy.hydrate_target_addresses(None).unwrap().is_empty());
        assert!(policy.hydrate_target_addresses(Some("  ")).unwrap().is_empty());
        assert_eq!(
            policy.hydrate_target_addresses(Some(r#"["a:lib", "b:bin"]"#)).unwrap(),
            vec![TargetAddress::new("a:lib"), TargetAddress::new("b:bin")]
        );
        assert!(policy.hydrate_target_addresses(Some("a:lib")).is_err());
    }
}
