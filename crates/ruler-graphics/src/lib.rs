//! Pure math/data for drawing & units in the ruler picker
//!
//! This crate contains geometry primitives, color definitions, draw
//! primitives and unit types shared by the picker and its hosts.

mod color;
mod geometry;
mod typography;
mod unit;

pub use color::*;
pub use geometry::*;
pub use typography::*;
pub use unit::*;
