//! Compiling through Pants.
//!
//! A build goes `CheckingDirty -> (UpToDate | Invoking) -> Streaming ->
//! (Succeeded | Failed)`. [`BuildInvoker`] drives it; [`CapabilityProbe`]
//! answers what the Pants install supports and [`BuildPlan`] decides the
//! goals and targets to pass.

pub mod host_compiler;
pub mod invoker;
pub mod plan;
pub mod probe;

pub use host_compiler::{PantsProjectExtension, should_disable_host_compiler};
pub use invoker::{BuildInvoker, BuildOutcome, BuildRequest, PantsBuildTarget, PreparedBuild};
pub use plan::{BuildMode, BuildPlan, assemble_command};
pub use probe::CapabilityProbe;
