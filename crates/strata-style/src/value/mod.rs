//! Style value types and the string/number codec.

mod number;
mod opacity;
mod types;

pub use number::parse_number;
pub use opacity::{OpacityMode, opacity_value, parse_opacity};
pub use types::{Value, ValueUnit};

pub(crate) use number::{has_unit_suffix, leading_float};
