//! Two-option exclusive unit selector.

use crate::unit::Unit;

/// Model behind the segmented cm/ft toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitToggle {
    selected: Unit,
}

impl UnitToggle {
    pub fn new(selected: Unit) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> Unit {
        self.selected
    }

    /// Segments in display order as `(unit, label, is_selected)`.
    pub fn segments(&self) -> impl Iterator<Item = (Unit, &'static str, bool)> + '_ {
        Unit::ALL
            .into_iter()
            .map(move |unit| (unit, unit.label(), unit == self.selected))
    }

    /// Selects the segment labelled `label`; returns the unit when the selection changed.
    pub fn click(&mut self, label: &str) -> Option<Unit> {
        let unit = Unit::from_label(label)?;
        self.select(unit).then_some(unit)
    }

    /// Returns `true` when `unit` was not already selected.
    pub fn select(&mut self, unit: Unit) -> bool {
        let changed = self.selected != unit;
        self.selected = unit;
        changed
    }
}
