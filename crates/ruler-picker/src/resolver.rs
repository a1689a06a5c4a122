//! Scroll position to value resolution.
//!
//! Inverts the pixel geometry of the tick list into a domain value: the tick
//! closest to the needle gives the integer part, the needle's pixel distance
//! from that tick's center gives the fractional correction.

use ruler_foundation::{ScrollGeometry, VisibleItemInfo};

use crate::unit::UnitRange;

/// Resolves the value under the needle for one geometry snapshot.
///
/// The needle sits on the vertical center of the viewport. Index 0 maps to
/// `max_value`, each further index one value lower. The interpolated value is
/// rounded half away from zero and clamped into `[min_value, max_value]`.
///
/// Returns `None` when no items are visible; such snapshots occur while the
/// list is being repositioned and carry no position.
///
/// `item_height_px` is expected to be positive and finite. Other values
/// still produce an in-range result.
pub fn resolve(
    geometry: &ScrollGeometry,
    item_height_px: f32,
    max_value: i32,
    min_value: i32,
) -> Option<i32> {
    let center_y = geometry.viewport_center();
    let closest = closest_item(&geometry.visible_items, center_y)?;

    let diff_px = center_y - closest.center();
    let diff_unit = diff_px / item_height_px;
    let exact_value = (max_value as f32 - closest.index as f32) + diff_unit;

    // `as` saturates and maps NaN to 0, so the clamp below always lands in range.
    let rounded = exact_value.round() as i32;
    Some(rounded.clamp(min_value, max_value))
}

fn closest_item(items: &[VisibleItemInfo], center_y: f32) -> Option<&VisibleItemInfo> {
    items.iter().min_by(|a, b| {
        let da = (a.center() - center_y).abs();
        let db = (b.center() - center_y).abs();
        da.total_cmp(&db)
    })
}

/// [`resolve`] bound to a fixed item height and value range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollValueResolver {
    item_height_px: f32,
    range: UnitRange,
}

impl ScrollValueResolver {
    pub fn new(item_height_px: f32, range: UnitRange) -> Self {
        Self {
            item_height_px,
            range,
        }
    }

    pub fn item_height_px(&self) -> f32 {
        self.item_height_px
    }

    pub fn range(&self) -> UnitRange {
        self.range
    }

    pub fn resolve(&self, geometry: &ScrollGeometry) -> Option<i32> {
        resolve(
            geometry,
            self.item_height_px,
            self.range.max_value,
            self.range.min_value,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{geometry_with_items, single_centered_item};
    use crate::unit::Unit;

    const ITEM: f32 = 10.0;

    #[test]
    fn test_empty_geometry_is_skipped() {
        let geometry = geometry_with_items(400.0, 216, &[]);
        assert_eq!(resolve(&geometry, ITEM, 215, 0), None);
    }

    #[test]
    fn test_index_zero_centered_resolves_to_max() {
        let geometry = single_centered_item(400.0, 0, ITEM, 216);
        assert_eq!(resolve(&geometry, ITEM, 215, 0), Some(215));
    }

    #[test]
    fn test_monotonic_in_index() {
        for index in 0..=215usize {
            let geometry = single_centered_item(400.0, index, ITEM, 216);
            assert_eq!(resolve(&geometry, ITEM, 215, 0), Some(215 - index as i32));
        }
    }

    #[test]
    fn test_picks_item_closest_to_center() {
        // Viewport center is 100; item 12 is centered at 102, item 11 at 92.
        let geometry = geometry_with_items(200.0, 216, &[(11, 87.0), (12, 97.0), (13, 107.0)]);
        assert_eq!(resolve(&geometry, ITEM, 215, 0), Some(203));
    }

    #[test]
    fn test_fractional_offset_rounding() {
        // Item 10 centered at 105, needle at 100: exact = 205 - 0.5, a tie.
        let geometry = geometry_with_items(200.0, 216, &[(10, 100.0)]);
        assert_eq!(resolve(&geometry, ITEM, 215, 0), Some(205));

        // Needle 4px past the center of item 10: exact = 205.4.
        let geometry = geometry_with_items(200.0, 216, &[(10, 91.0)]);
        assert_eq!(resolve(&geometry, ITEM, 215, 0), Some(205));

        // Needle 6px past: exact = 205.6.
        let geometry = geometry_with_items(200.0, 216, &[(10, 89.0)]);
        assert_eq!(resolve(&geometry, ITEM, 215, 0), Some(206));
    }

    #[test]
    fn test_extrapolation_is_clamped() {
        // Index 0 far above the needle would extrapolate past max.
        let geometry = geometry_with_items(400.0, 216, &[(0, 0.0)]);
        assert_eq!(resolve(&geometry, ITEM, 215, 0), Some(215));

        // Last index far below the needle would extrapolate below min.
        let geometry = geometry_with_items(400.0, 216, &[(215, 395.0)]);
        assert_eq!(resolve(&geometry, ITEM, 215, 0), Some(0));
    }

    #[test]
    fn test_range_invariant_over_offsets() {
        for step in -300..300 {
            let offset = step as f32 * 1.7;
            for index in [0usize, 1, 100, 214, 215] {
                let geometry = geometry_with_items(400.0, 216, &[(index, offset)]);
                let value = resolve(&geometry, ITEM, 215, 0).unwrap();
                assert!((0..=215).contains(&value), "value {value} out of range");
            }
        }
    }

    #[test]
    fn test_degenerate_item_height_stays_in_range() {
        let geometry = geometry_with_items(400.0, 216, &[(3, 10.0)]);
        for height in [0.0, -10.0, f32::NAN, f32::INFINITY] {
            let value = resolve(&geometry, height, 215, 0).unwrap();
            assert!((0..=215).contains(&value));
        }
    }

    #[test]
    fn test_viewport_start_offset_shifts_center() {
        let mut geometry = geometry_with_items(400.0, 216, &[(5, 295.0)]);
        geometry.viewport_start_offset = 200.0;
        geometry.viewport_end_offset = 400.0;
        // Center is 300, item 5 centered there.
        assert_eq!(resolve(&geometry, ITEM, 215, 0), Some(210));
    }

    #[test]
    fn test_bound_resolver_uses_range() {
        let resolver = ScrollValueResolver::new(ITEM, UnitRange::new(Unit::Imperial, 0, 84));
        let geometry = single_centered_item(400.0, 0, ITEM, 85);
        assert_eq!(resolver.resolve(&geometry), Some(84));
        assert_eq!(resolver.range().major_tick_interval, 12);
    }
}
