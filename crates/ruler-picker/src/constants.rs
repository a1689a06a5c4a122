//! Layout constants for the ruler, in density-independent units.

use ruler_graphics::{Dp, Sp};

/// Height of one tick row.
pub const ITEM_HEIGHT: Dp = Dp(10.0);

/// Width of the area ticks are drawn in, measured from the right edge.
pub const TICK_AREA_WIDTH: Dp = Dp(80.0);

/// Gap between the longest possible tick and the right edge.
pub const TICK_END_PADDING: Dp = Dp(16.0);

/// Distance from the right edge to the end of a major tick label.
pub const LABEL_PADDING_END: Dp = Dp(90.0);

/// Vertical padding between the screen edges and the scroll viewport.
pub const RULER_PADDING: Dp = Dp(152.0);

/// Default content padding before the first and after the last tick.
///
/// Only used when the caller asks for fixed padding; see
/// [`RulerOptions::with_content_padding`](crate::RulerOptions::with_content_padding).
pub const LIST_CONTENT_PADDING: Dp = Dp(220.0);

pub const NEEDLE_THICKNESS: Dp = Dp(2.0);

/// Share of the ruler width covered by the needle, anchored at the right edge.
pub const NEEDLE_WIDTH_FRACTION: f32 = 0.5;

pub const TICK_LABEL_SIZE: Sp = Sp(12.0);
pub const VALUE_TEXT_SIZE: Sp = Sp(32.0);
pub const VALUE_TEXT_START_PADDING: Dp = Dp(16.0);
pub const VALUE_TEXT_BOTTOM_PADDING: Dp = Dp(40.0);
