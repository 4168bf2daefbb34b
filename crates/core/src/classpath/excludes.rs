use std::collections::BTreeMap;

use crate::error::Result;
use crate::interfaces::{LIBRARY_EXCLUDES_KEY, ModuleMetadata, TARGET_ADDRESSES_KEY, TargetPolicy};
use crate::types::TargetAddress;

/// Library excludes declared anywhere on `module`'s runtime closure, each
/// mapped to the targets of the module that declared it (or its name).
pub fn find_excludes(
    module: &dyn ModuleMetadata,
    policy: &dyn TargetPolicy,
) -> Result<BTreeMap<TargetAddress, String>> {
    let mut result = BTreeMap::new();
    for runtime_module in module.runtime_modules() {
        let owner = runtime_module
            .option_value(TARGET_ADDRESSES_KEY)
            .unwrap_or(runtime_module.name());
        let excludes =
            policy.hydrate_target_addresses(runtime_module.option_value(LIBRARY_EXCLUDES_KEY))?;
        for exclude in excludes {
            result.insert(exclude, owner.to_string());
        }
    }
    Ok(result)
}
