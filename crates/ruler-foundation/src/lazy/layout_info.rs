//! Geometry snapshots published by the snapping list.

use smallvec::SmallVec;

/// Inline capacity for visible item descriptors.
/// A ruler viewport rarely shows more than a few dozen ticks at once.
pub type VisibleItems = SmallVec<[VisibleItemInfo; 32]>;

/// One reading of viewport bounds and visible item positions.
///
/// Produced anew on every scroll-position change and never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollGeometry {
    /// Visible items in index order.
    pub visible_items: VisibleItems,

    /// Total number of items in the list this snapshot was taken from.
    pub total_items_count: usize,

    /// Bumped by the list each time its item set is replaced; snapshots with
    /// an older value describe items that no longer exist.
    pub content_generation: u64,

    /// Start of the viewport in the main axis.
    pub viewport_start_offset: f32,

    /// End of the viewport in the main axis.
    pub viewport_end_offset: f32,
}

/// A single visible item in a [`ScrollGeometry`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleItemInfo {
    /// Index of the item in generation order.
    pub index: usize,

    /// Top edge of the item relative to the viewport.
    pub offset: f32,

    /// Size of the item in the main axis.
    pub size: f32,
}

impl VisibleItemInfo {
    pub fn new(index: usize, offset: f32, size: f32) -> Self {
        Self {
            index,
            offset,
            size,
        }
    }

    #[inline]
    pub fn center(&self) -> f32 {
        self.offset + self.size / 2.0
    }
}

impl ScrollGeometry {
    /// Main-axis coordinate of the middle of the viewport.
    #[inline]
    pub fn viewport_center(&self) -> f32 {
        self.viewport_start_offset + (self.viewport_end_offset - self.viewport_start_offset) / 2.0
    }

    pub fn viewport_size(&self) -> f32 {
        self.viewport_end_offset - self.viewport_start_offset
    }

    pub fn is_empty(&self) -> bool {
        self.visible_items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_center_with_offset_start() {
        let geometry = ScrollGeometry {
            viewport_start_offset: 100.0,
            viewport_end_offset: 500.0,
            ..Default::default()
        };
        assert_eq!(geometry.viewport_center(), 300.0);
        assert_eq!(geometry.viewport_size(), 400.0);
        assert!(geometry.is_empty());
    }

    #[test]
    fn test_item_center() {
        let item = VisibleItemInfo::new(3, 40.0, 10.0);
        assert_eq!(item.center(), 45.0);
    }
}
