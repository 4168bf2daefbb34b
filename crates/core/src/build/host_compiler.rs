use crate::interfaces::ModuleMetadata;

/// Project-level Pants settings saved by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PantsProjectExtension {
    /// Let the host compile the project itself instead of Pants
    pub compile_with_ide: bool,
}

/// Whether the host's own Java compiler has to be turned off for this build.
///
/// Only imported Pants projects set to compile with Pants are affected.
pub fn should_disable_host_compiler(
    extension: Option<&PantsProjectExtension>,
    modules: &[&dyn ModuleMetadata],
) -> bool {
    let compile_with_pants = extension.is_some_and(|ext| !ext.compile_with_ide);
    compile_with_pants && modules.iter().any(|module| module.is_pants_module())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::TARGET_ADDRESSES_KEY;
    use crate::services::JsonModule;

    #[test]
    fn test_disable_for_pants_projects() {
        let pants = JsonModule::new("foo").with_option(TARGET_ADDRESSES_KEY, r#"["a:lib"]"#);
        let plain = JsonModule::new("plain");
        let ext = PantsProjectExtension::default();

        assert!(should_disable_host_compiler(Some(&ext), &[&plain, &pants]));
        assert!(!should_disable_host_compiler(Some(&ext), &[&plain]));
        assert!(!should_disable_host_compiler(None, &[&pants]));

        let ide = PantsProjectExtension { compile_with_ide: true };
        assert!(!should_disable_host_compiler(Some(&ide), &[&pants]));
    }
}
