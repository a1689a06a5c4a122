//! Geometry builders for unit tests.

use ruler_foundation::{ScrollGeometry, VisibleItemInfo};

/// Geometry over a `[0, viewport]` viewport with 10px items at the given
/// `(index, offset)` positions.
pub fn geometry_with_items(
    viewport: f32,
    total_items_count: usize,
    items: &[(usize, f32)],
) -> ScrollGeometry {
    ScrollGeometry {
        visible_items: items
            .iter()
            .map(|&(index, offset)| VisibleItemInfo::new(index, offset, 10.0))
            .collect(),
        total_items_count,
        content_generation: 0,
        viewport_start_offset: 0.0,
        viewport_end_offset: viewport,
    }
}

/// One visible item whose center sits exactly on the viewport center.
pub fn single_centered_item(
    viewport: f32,
    index: usize,
    item_size: f32,
    total_items_count: usize,
) -> ScrollGeometry {
    let center = viewport / 2.0;
    ScrollGeometry {
        visible_items: std::iter::once(VisibleItemInfo::new(
            index,
            center - item_size / 2.0,
            item_size,
        ))
        .collect(),
        total_items_count,
        content_generation: 0,
        viewport_start_offset: 0.0,
        viewport_end_offset: viewport,
    }
}
