//! Platform capability detection and caching.

mod probe;
mod registry;

pub use probe::{PlatformProbe, StaticProbe, VendorPrefix};
pub use registry::{Features, PlatformRegistry};
