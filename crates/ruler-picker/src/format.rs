//! Display text for the selected value.

use crate::unit::Unit;

pub fn format_value(value: i32, unit: Unit) -> String {
    match unit {
        Unit::Metric => format!("{value} cm"),
        Unit::Imperial => format_feet_inches(value),
    }
}

/// Format inches as feet′ inches″
pub fn format_feet_inches(total_inches: i32) -> String {
    let feet = total_inches / 12;
    let inches = total_inches % 12;
    format!("{feet}′ {inches}″")
}
