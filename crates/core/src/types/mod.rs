pub mod capabilities;
pub mod target;

// Re-export commonly used types
pub use capabilities::BuildCapabilities;
pub use target::{TargetAddress, TargetAddressInfo};
