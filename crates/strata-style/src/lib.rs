//! Cross-platform style property normalization for Strata.
//!
//! This crate abstracts over a platform's visual style properties:
//!
//! - **Capability detection**: which properties (and which vendor prefix)
//!   the runtime supports, probed lazily and cached for the process
//! - **Name resolution**: shorthand expansion, transform pseudo-properties,
//!   prefix qualification
//! - **Value codec**: string ↔ number/unit conversion, `rgb()` → hex
//!   colors, opacity including the legacy filter form
//! - **Transform matrices**: extracting logical components
//!   (`translateX`, `scale`, `rotate`, …) from `matrix(…)`/`matrix3d(…)`
//!   values, and merging a changed component back in without disturbing
//!   the rest
//!
//! # Example
//!
//! ```
//! use strata_style::{MemoryElement, StyleEngine, Value};
//!
//! let engine = StyleEngine::modern();
//! let mut element = MemoryElement::new();
//!
//! // Setting one transform component preserves the others.
//! engine.set_style(&mut element, "scale", vec![Value::from(0.5), Value::from(0.5)]);
//! engine.set_style(&mut element, "translateY", 100);
//!
//! assert_eq!(
//!     engine.get_style(&element, "scaleX"),
//!     Some(Value::from(0.5))
//! );
//! ```

pub mod element;
pub mod engine;
pub mod parser;
pub mod platform;
pub mod property;
pub mod rules;
pub mod transform;
pub mod value;

mod error;

pub use element::{ElementStyles, MemoryElement};
pub use engine::StyleEngine;
pub use error::{Error, Result};
pub use platform::{Features, PlatformProbe, PlatformRegistry, StaticProbe, VendorPrefix};
pub use property::Expansion;
pub use rules::{StyleRule, StyleSheet};
pub use transform::{TransformComponent, TransformMatrix, merge_transform, parse_transform};
pub use value::{OpacityMode, Value, ValueUnit, opacity_value, parse_number, parse_opacity};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::element::{ElementStyles, MemoryElement};
    pub use crate::engine::StyleEngine;
    pub use crate::platform::{Features, PlatformProbe, PlatformRegistry, StaticProbe, VendorPrefix};
    pub use crate::property::Expansion;
    pub use crate::rules::{StyleRule, StyleSheet};
    pub use crate::transform::{TransformComponent, TransformMatrix};
    pub use crate::value::{OpacityMode, Value, ValueUnit};
}
