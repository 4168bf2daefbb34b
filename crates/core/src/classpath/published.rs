use std::collections::BTreeSet;
use std::path::Path;

use crate::error::Result;
use crate::interfaces::{ModuleMetadata, PathResolver, TARGET_ADDRESS_INFOS_KEY};
use crate::types::TargetAddressInfo;

/// Target address infos stored on a module. Absent means none.
pub fn target_address_infos(module: &dyn ModuleMetadata) -> Result<BTreeSet<TargetAddressInfo>> {
    match module.option_value(TARGET_ADDRESS_INFOS_KEY) {
        Some(json) if !json.trim().is_empty() => Ok(serde_json::from_str(json)?),
        _ => Ok(BTreeSet::new()),
    }
}

/// Classpath entries `export-classpath` published for each target id.
///
/// Returns nothing when the export directory does not exist yet.
pub fn find_published_classpath<'i>(
    export_dir: Option<&Path>,
    infos: impl IntoIterator<Item = &'i TargetAddressInfo>,
    resolver: &dyn PathResolver,
) -> Vec<String> {
    let Some(dir) = export_dir else {
        return Vec::new();
    };
    infos
        .into_iter()
        .flat_map(|info| published_by_target_id(dir, &info.id, resolver))
        .collect()
}

/// Pants publishes either numbered jars `{id}-0.jar`, `{id}-1.jar`, ... or a
/// directory `{id}-{n}`, which is always the last entry.
fn published_by_target_id(dir: &Path, id: &str, resolver: &dyn PathResolver) -> Vec<String> {
    let mut paths = Vec::new();
    for count in 0.. {
        let link_dir = dir.join(format!("{id}-{count}"));
        if resolver.is_dir(&link_dir) {
            paths.push(link_dir.to_string_lossy().into_owned());
            break;
        }

        let link_jar = dir.join(format!("{id}-{count}.jar"));
        if resolver.is_file(&link_jar) {
            paths.push(link_jar.to_string_lossy().into_owned());
        } else {
            break;
        }
    }
    paths
}
