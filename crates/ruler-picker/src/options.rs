//! Picker configuration and its validation.

use std::fmt;

use ruler_graphics::{ColorScheme, Density, Dp, RulerColors};

use crate::constants::{ITEM_HEIGHT, RULER_PADDING};
use crate::unit::{Unit, UnitRange};

/// Configuration supplied by the host when creating a picker.
#[derive(Clone, Debug, PartialEq)]
pub struct RulerOptions {
    /// Largest selectable centimeter value.
    pub max_cm: i32,
    /// Largest selectable imperial value, in inches.
    pub max_ft: i32,
    /// Smallest selectable value for both units.
    pub min_value: i32,
    pub initial_unit: Unit,
    pub density: Density,
    pub item_height: Dp,
    /// Fixed padding before the first and after the last tick. `None` pads
    /// just enough for both ends to reach the needle.
    pub content_padding: Option<Dp>,
    pub colors: RulerColors,
}

impl Default for RulerOptions {
    fn default() -> Self {
        Self {
            max_cm: Unit::Metric.default_max(),
            max_ft: Unit::Imperial.default_max(),
            min_value: 0,
            initial_unit: Unit::Metric,
            density: Density::default(),
            item_height: ITEM_HEIGHT,
            content_padding: None,
            colors: RulerColors::default(),
        }
    }
}

impl RulerOptions {
    pub fn with_max_cm(mut self, max_cm: i32) -> Self {
        self.max_cm = max_cm;
        self
    }

    pub fn with_max_ft(mut self, max_inches: i32) -> Self {
        self.max_ft = max_inches;
        self
    }

    pub fn with_min_value(mut self, min_value: i32) -> Self {
        self.min_value = min_value;
        self
    }

    pub fn with_initial_unit(mut self, unit: Unit) -> Self {
        self.initial_unit = unit;
        self
    }

    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    pub fn with_item_height(mut self, item_height: Dp) -> Self {
        self.item_height = item_height;
        self
    }

    pub fn with_content_padding(mut self, padding: Dp) -> Self {
        self.content_padding = Some(padding);
        self
    }

    pub fn with_colors(mut self, colors: RulerColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_dark_theme(self, dark: bool) -> Self {
        self.with_colors(RulerColors::from_scheme(&ColorScheme::for_dark_theme(dark)))
    }

    pub fn range_for(&self, unit: Unit) -> UnitRange {
        UnitRange {
            min_value: self.min_value,
            ..unit.range(self.max_cm, self.max_ft)
        }
    }

    pub fn item_height_px(&self) -> f32 {
        self.density.dp_to_px(self.item_height)
    }

    /// Scroll viewport height left inside a container of `container_height_px`.
    pub fn viewport_height_px(&self, container_height_px: f32) -> f32 {
        (container_height_px - 2.0 * self.density.dp_to_px(RULER_PADDING)).max(0.0)
    }

    pub fn validate(&self) -> Result<(), RulerConfigError> {
        if !(self.density.density.is_finite() && self.density.density > 0.0) {
            return Err(RulerConfigError::InvalidDensity(self.density.density));
        }
        let item_height_px = self.item_height_px();
        if !(item_height_px.is_finite() && item_height_px > 0.0) {
            return Err(RulerConfigError::InvalidItemHeight(item_height_px));
        }
        if self.min_value < 0 {
            return Err(RulerConfigError::NegativeMinimum(self.min_value));
        }
        for unit in Unit::ALL {
            let range = self.range_for(unit);
            if range.is_empty() {
                return Err(RulerConfigError::EmptyRange {
                    unit,
                    min: range.min_value,
                    max: range.max_value,
                });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RulerConfigError {
    EmptyRange { unit: Unit, min: i32, max: i32 },
    NegativeMinimum(i32),
    InvalidItemHeight(f32),
    InvalidDensity(f32),
}

impl fmt::Display for RulerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulerConfigError::EmptyRange { unit, min, max } => {
                write!(f, "{unit} range is empty: max {max} is below min {min}")
            }
            RulerConfigError::NegativeMinimum(min) => {
                write!(f, "minimum value {min} is negative")
            }
            RulerConfigError::InvalidItemHeight(height) => {
                write!(f, "item height must be a positive pixel size, got {height}")
            }
            RulerConfigError::InvalidDensity(density) => {
                write!(f, "density must be positive, got {density}")
            }
        }
    }
}

impl std::error::Error for RulerConfigError {}
