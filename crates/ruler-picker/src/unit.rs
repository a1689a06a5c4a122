//! Supported measurement units and their value ranges.

use std::fmt;

/// Unit a ruler measures in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Whole centimeters.
    #[default]
    Metric,
    /// Whole inches, displayed as feet and inches.
    Imperial,
}

impl Unit {
    pub const ALL: [Unit; 2] = [Unit::Metric, Unit::Imperial];

    /// A tick is major when `value % major_tick_interval() == 0`.
    pub const fn major_tick_interval(self) -> i32 {
        match self {
            Unit::Metric => 10,
            Unit::Imperial => 12,
        }
    }

    /// Upper bound used when the caller does not configure one.
    pub const fn default_max(self) -> i32 {
        match self {
            Unit::Metric => 215,
            Unit::Imperial => 7 * 12,
        }
    }

    /// Short label shown on the toggle and passed to the value callback.
    pub const fn label(self) -> &'static str {
        match self {
            Unit::Metric => "cm",
            Unit::Imperial => "ft",
        }
    }

    /// Range starting at zero, picking `max_cm` or `max_ft` (in inches) by unit.
    pub fn range(self, max_cm: i32, max_ft: i32) -> UnitRange {
        let max_value = match self {
            Unit::Metric => max_cm,
            Unit::Imperial => max_ft,
        };
        UnitRange::new(self, 0, max_value)
    }

    pub fn from_label(label: &str) -> Option<Unit> {
        Unit::ALL.into_iter().find(|unit| unit.label() == label)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive integer domain of a unit plus its major tick interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitRange {
    pub min_value: i32,
    pub max_value: i32,
    pub major_tick_interval: i32,
}

impl UnitRange {
    pub fn new(unit: Unit, min_value: i32, max_value: i32) -> Self {
        Self {
            min_value,
            max_value,
            major_tick_interval: unit.major_tick_interval(),
        }
    }

    /// Number of ticks in the range; zero when `max_value < min_value`.
    pub fn len(&self) -> usize {
        if self.max_value < self.min_value {
            0
        } else {
            (self.max_value as i64 - self.min_value as i64 + 1) as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
