//! Major/minor tick classification and label policy.

use crate::unit::Unit;

/// Visual weight of a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickTier {
    Selected,
    Major,
    Minor,
}

impl TickTier {
    /// Share of the tick area width the line spans.
    pub const fn line_length_fraction(self) -> f32 {
        match self {
            TickTier::Selected => 0.9,
            TickTier::Major => 0.7,
            TickTier::Minor => 0.3,
        }
    }

    pub const fn stroke_weight(self) -> f32 {
        match self {
            TickTier::Selected => 4.0,
            TickTier::Major => 3.0,
            TickTier::Minor => 1.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TickStyle {
    pub is_major: bool,
    pub is_selected: bool,
    pub line_length_fraction: f32,
    pub stroke_weight: f32,
    /// Present on major ticks only.
    pub label: Option<String>,
}

impl TickStyle {
    pub fn tier(&self) -> TickTier {
        tier_for(self.is_selected, self.is_major)
    }
}

fn tier_for(is_selected: bool, is_major: bool) -> TickTier {
    if is_selected {
        TickTier::Selected
    } else if is_major {
        TickTier::Major
    } else {
        TickTier::Minor
    }
}

pub fn is_major_tick(value: i32, unit: Unit) -> bool {
    value % unit.major_tick_interval() == 0
}

/// Label drawn next to a major tick: whole feet for imperial, the raw value for metric.
pub fn tick_label(value: i32, unit: Unit) -> String {
    match unit {
        Unit::Imperial => format!("{}′", value / unit.major_tick_interval()),
        Unit::Metric => value.to_string(),
    }
}

pub fn classify(value: i32, unit: Unit, selected_value: i32) -> TickStyle {
    let is_major = is_major_tick(value, unit);
    let is_selected = value == selected_value;
    let tier = tier_for(is_selected, is_major);
    TickStyle {
        is_major,
        is_selected,
        line_length_fraction: tier.line_length_fraction(),
        stroke_weight: tier.stroke_weight(),
        label: is_major.then(|| tick_label(value, unit)),
    }
}
