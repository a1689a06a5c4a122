//! Fixed-size snapping list.
//!
//! # Architecture
//!
//! - [`SnapListState`] - owns the scroll position and publishes geometry
//! - [`ScrollGeometry`] - immutable snapshot of viewport bounds and visible items
//! - [`ScrollSubscription`] - handle for a registered scroll-event handler
//!
//! # Example
//!
//! ```rust,ignore
//! use ruler_foundation::lazy::SnapListState;
//!
//! let state = SnapListState::centered(216, 10.0, 400.0);
//! let _subscription = state.subscribe(|geometry| {
//!     println!("{} visible items", geometry.visible_items.len());
//! });
//! state.scroll_by(25.0);
//! state.settle();
//! ```

mod layout_info;
mod snap_list_state;
mod subscription;
mod viewport;

pub use layout_info::*;
pub use snap_list_state::*;
pub use subscription::*;
pub use viewport::*;
