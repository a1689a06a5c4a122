//! Ruler-style value picker.
//!
//! A vertically scrolling strip of ticks, one per integer value, scrolls past
//! a fixed needle. [`RulerPicker`] turns each [`ScrollGeometry`] published by
//! a [`SnapListState`] into the currently selected value, pulses haptics on
//! every change and hands the value to the host callback.
//!
//! ```rust,ignore
//! use ruler_picker::{RulerOptions, RulerPicker, Unit};
//!
//! let mut picker = RulerPicker::new(RulerOptions::default())?
//!     .on_value_change(|value, unit| println!("{value} {unit}"));
//! let list = picker.create_list_state(480.0);
//! picker.bind(&list);
//! list.scroll_by(35.0);
//! list.settle();
//! assert_eq!(picker.selected_text(), "211 cm");
//! picker.set_unit(Unit::Imperial, &list);
//! ```

pub mod classifier;
pub mod constants;
pub mod format;
pub mod notifier;
pub mod options;
pub mod picker;
pub mod render;
pub mod resolver;
pub mod ticks;
pub mod toggle;
pub mod unit;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use classifier::{classify, TickStyle, TickTier};
pub use format::{format_feet_inches, format_value};
pub use notifier::{
    ChangeNotifier, HapticFeedback, HapticFeedbackType, NoopHaptics, NO_PREVIOUS_VALUE,
};
pub use options::{RulerConfigError, RulerOptions};
pub use picker::RulerPicker;
pub use render::RulerLayout;
pub use resolver::{resolve, ScrollValueResolver};
pub use ticks::TickSequence;
pub use toggle::UnitToggle;
pub use unit::{Unit, UnitRange};

pub use ruler_foundation::{ScrollGeometry, ScrollSubscription, SnapListState, VisibleItemInfo};
pub use ruler_graphics::{Color, ColorScheme, Density, DrawPrimitive, RulerColors, Size};
