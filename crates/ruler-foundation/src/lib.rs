//! Scroll foundation for the ruler picker.
//!
//! Provides the snapping list primitive that stands in for a platform
//! scroll container, and the geometry snapshots it publishes on every
//! scroll-position change.

pub mod lazy;

pub use lazy::*;
