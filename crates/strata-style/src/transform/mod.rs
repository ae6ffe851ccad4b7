//! The transform-matrix subsystem.
//!
//! A platform stores an element's transform as a single `matrix(…)` /
//! `matrix3d(…)` value. This module maps between that flat matrix and the
//! logical transform components callers think in (`translateX`, `scale`,
//! `rotate`, …): [`parse_transform`] extracts a component from a matrix,
//! and [`merge_transform`] produces a new transform string that folds a
//! changed component into the existing matrix without disturbing unrelated
//! components.

mod component;
mod evaluate;
mod extract;
mod generate;
mod matrix;

pub use component::TransformComponent;
pub use evaluate::resolve_transform_list;
pub use extract::parse_transform;
pub use generate::merge_transform;
pub use matrix::{IDENTITY_2D, IDENTITY_3D, TransformMatrix};
