/// Metadata key holding the JSON list of target addresses a module was imported from.
pub const TARGET_ADDRESSES_KEY: &str = "pants.target.addresses";
/// Metadata key holding the JSON set of [`TargetAddressInfo`](crate::types::TargetAddressInfo)s.
pub const TARGET_ADDRESS_INFOS_KEY: &str = "pants.target.address.infos";
/// Metadata key holding the JSON list of excluded library addresses.
pub const LIBRARY_EXCLUDES_KEY: &str = "pants.library.excludes";

/// A host module and the options Pants stored on it during import.
pub trait ModuleMetadata {
    fn name(&self) -> &str;

    fn option_value(&self, key: &str) -> Option<&str>;

    /// This module and every module it depends on at runtime, transitively.
    fn runtime_modules(&self) -> Vec<&dyn ModuleMetadata>;

    /// Modules imported from Pants carry their target addresses.
    fn is_pants_module(&self) -> bool {
        self.option_value(TARGET_ADDRESSES_KEY).is_some()
    }
}
