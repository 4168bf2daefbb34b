//! Classpath reconciliation for run configurations built by Pants.
//!
//! Pants exports the full runtime classpath of a build, so when a test or
//! application built by Pants is launched, the host's own resolution is
//! thrown away. Only entries under the host installation are kept, and
//! Pants' manifest jar is appended.

pub mod allow_list;
pub mod excludes;
pub mod published;
pub mod reconciler;
pub mod run_extension;

pub use allow_list::{AllowList, COMPANION_PLUGIN_IDS};
pub use excludes::find_excludes;
pub use published::{find_published_classpath, target_address_infos};
pub use reconciler::{EXPORT_CLASSPATH_COMMAND, reconcile_classpath};
pub use run_extension::ClasspathRunExtension;
