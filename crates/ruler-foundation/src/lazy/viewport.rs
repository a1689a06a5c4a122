//! Viewport handling for the snapping list.
//!
//! This module handles viewport size validation and infinite viewport fallback logic.

/// Handles viewport size validation and provides effective viewport size.
///
/// Detects infinite/unbounded viewports (when the list is placed in an unconstrained
/// parent) and provides a reasonable fallback size.
#[derive(Clone, Copy, Debug)]
pub struct ViewportHandler {
    effective_size: f32,
}

/// Maximum reasonable viewport size before treating as infinite.
const MAX_REASONABLE_VIEWPORT: f32 = 100_000.0;

/// Number of items to show in infinite viewport fallback case.
const INFINITE_VIEWPORT_ITEM_COUNT: f32 = 40.0;

impl ViewportHandler {
    /// Creates a new ViewportHandler, detecting and handling infinite viewports.
    ///
    /// # Arguments
    /// * `viewport_size` - Raw viewport size from the host
    /// * `item_size` - Fixed main-axis size of one item
    pub fn new(viewport_size: f32, item_size: f32) -> Self {
        let is_infinite = !viewport_size.is_finite() || viewport_size > MAX_REASONABLE_VIEWPORT;

        let effective_size = if is_infinite {
            let estimated_size = item_size * INFINITE_VIEWPORT_ITEM_COUNT;
            log::warn!(
                "SnapList: Detected infinite viewport ({}), using fallback size {}. \
                 Consider placing the ruler in a constrained container.",
                viewport_size,
                estimated_size
            );
            estimated_size
        } else {
            if viewport_size < item_size {
                log::warn!(
                    "SnapList: viewport ({}) is smaller than one item ({})",
                    viewport_size,
                    item_size
                );
            }
            viewport_size.max(0.0)
        };

        Self { effective_size }
    }

    /// Returns the effective viewport size to use for layout.
    #[inline]
    pub fn effective_size(&self) -> f32 {
        self.effective_size
    }
}
