//! The picker state holder.
//!
//! [`RulerPicker`] owns the selected value and the change notifier for one
//! ruler instance. It subscribes to a [`SnapListState`] and resolves every
//! published geometry synchronously, in delivery order.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use ruler_foundation::{centering_padding, ScrollGeometry, ScrollSubscription, SnapListState};
use ruler_graphics::{DrawPrimitive, DrawScope, DrawScopeDefault, RulerColors, Size};

use crate::classifier::{classify, TickStyle};
use crate::format::format_value;
use crate::notifier::{ChangeNotifier, HapticFeedback, HapticFeedbackType, NoopHaptics};
use crate::options::{RulerConfigError, RulerOptions};
use crate::render::{draw_ruler, RulerFrame, RulerLayout};
use crate::resolver::ScrollValueResolver;
use crate::ticks::TickSequence;
use crate::toggle::UnitToggle;
use crate::unit::{Unit, UnitRange};

/// Receives every resolved value together with the unit label (`"cm"` or `"ft"`).
pub type ValueChangeCallback = Box<dyn FnMut(i32, &str)>;

struct PickerCore {
    options: RulerOptions,
    unit: Unit,
    resolver: ScrollValueResolver,
    ticks: TickSequence,
    selected: i32,
    notifier: ChangeNotifier,
    /// Geometry from an older list generation predates the last reconfiguration.
    min_generation: u64,
    haptics: Rc<dyn HapticFeedback>,
    on_value_change: Option<ValueChangeCallback>,
}

impl PickerCore {
    fn new(options: RulerOptions) -> Self {
        let unit = options.initial_unit;
        let range = options.range_for(unit);
        Self {
            resolver: ScrollValueResolver::new(options.item_height_px(), range),
            ticks: TickSequence::for_range(&range),
            selected: range.max_value,
            notifier: ChangeNotifier::new(),
            min_generation: 0,
            haptics: Rc::new(NoopHaptics),
            on_value_change: None,
            options,
            unit,
        }
    }

    /// Switches to `unit`, regenerating ticks and resetting the selection to its max.
    fn configure(&mut self, unit: Unit) {
        let range = self.options.range_for(unit);
        self.unit = unit;
        self.resolver = ScrollValueResolver::new(self.options.item_height_px(), range);
        self.ticks = TickSequence::for_range(&range);
        self.selected = range.max_value;
        self.notifier.reset();
    }

    /// Resolves, dedups and stores. Returns the value and whether it changed;
    /// the caller forwards both to the host.
    fn apply(&mut self, geometry: &ScrollGeometry) -> Option<(i32, bool)> {
        if geometry.content_generation < self.min_generation {
            log::debug!(
                "dropping geometry from list generation {}, current is {}",
                geometry.content_generation,
                self.min_generation
            );
            return None;
        }
        if geometry.total_items_count != self.ticks.len() {
            log::debug!(
                "dropping geometry for {} items, current {} sequence has {}",
                geometry.total_items_count,
                self.unit,
                self.ticks.len()
            );
            return None;
        }
        let value = self.resolver.resolve(geometry)?;
        let changed = self.notifier.notify(value);
        self.selected = value;
        Some((value, changed))
    }
}

/// Runs one geometry through the picker and forwards the result to the host.
///
/// The haptic sink and the callback run with the picker state released, so
/// either may read the picker back.
fn deliver(core: &RefCell<PickerCore>, geometry: &ScrollGeometry) -> Option<i32> {
    let Ok(mut state) = core.try_borrow_mut() else {
        log::warn!("re-entrant scroll event dropped");
        return None;
    };
    let (value, changed) = state.apply(geometry)?;
    let unit_label = state.unit.label();
    let haptics = changed.then(|| Rc::clone(&state.haptics));
    let mut callback = state.on_value_change.take();
    drop(state);

    if let Some(haptics) = haptics {
        haptics.perform_haptic_feedback(HapticFeedbackType::TextHandleMove);
    }
    if let Some(callback) = callback.as_mut() {
        callback(value, unit_label);
    }
    if let Some(callback) = callback {
        let mut state = core.borrow_mut();
        if state.on_value_change.is_none() {
            state.on_value_change = Some(callback);
        }
    }
    Some(value)
}

/// A ruler value picker bound to at most one scroll list at a time.
pub struct RulerPicker {
    core: Rc<RefCell<PickerCore>>,
    layout: RulerLayout,
    subscription: Option<ScrollSubscription>,
}

impl RulerPicker {
    pub fn new(options: RulerOptions) -> Result<Self, RulerConfigError> {
        options.validate()?;
        let layout = RulerLayout::new(&options.density);
        let core = PickerCore::new(options);
        log::debug!(
            "ruler picker created: unit={}, range={}..={}",
            core.unit,
            core.resolver.range().min_value,
            core.resolver.range().max_value
        );
        Ok(Self {
            core: Rc::new(RefCell::new(core)),
            layout,
            subscription: None,
        })
    }

    pub fn with_haptics(self, haptics: impl HapticFeedback + 'static) -> Self {
        self.core.borrow_mut().haptics = Rc::new(haptics);
        self
    }

    pub fn on_value_change(self, callback: impl FnMut(i32, &str) + 'static) -> Self {
        self.core.borrow_mut().on_value_change = Some(Box::new(callback));
        self
    }

    /// Builds a snapping list sized for the current tick sequence, positioned
    /// on the selected value.
    pub fn create_list_state(&self, viewport_size_px: f32) -> SnapListState {
        let mut core = self.core.borrow_mut();
        let item_height_px = core.resolver.item_height_px();
        let padding = match core.options.content_padding {
            Some(padding) => core.options.density.dp_to_px(padding),
            None => centering_padding(viewport_size_px, item_height_px),
        };
        let list = SnapListState::new(
            core.ticks.len(),
            item_height_px,
            viewport_size_px,
            padding,
            padding,
        );
        if let Some(index) = core.ticks.index_of(core.selected) {
            list.scroll_to_item(index);
        }
        core.min_generation = list.content_generation();
        list
    }

    /// Subscribes to `list`, replacing any previous subscription, and resolves
    /// its current position right away.
    pub fn bind(&mut self, list: &SnapListState) {
        self.unbind();
        self.core.borrow_mut().min_generation = list.content_generation();
        let weak: Weak<RefCell<PickerCore>> = Rc::downgrade(&self.core);
        let subscription = list.subscribe(move |geometry| {
            if let Some(core) = weak.upgrade() {
                deliver(&core, geometry);
            }
        });
        self.subscription = Some(subscription);
        deliver(&self.core, &list.layout_info());
    }

    pub fn unbind(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }

    pub fn is_bound(&self) -> bool {
        self.subscription
            .as_ref()
            .is_some_and(ScrollSubscription::is_active)
    }

    /// Handles one scroll-position-changed event from a host that drives the
    /// picker directly instead of through [`RulerPicker::bind`].
    ///
    /// Snapshots taken before the last [`RulerPicker::set_unit`] are ignored.
    pub fn on_scroll(&self, geometry: &ScrollGeometry) -> Option<i32> {
        deliver(&self.core, geometry)
    }

    /// Switches units.
    ///
    /// The current subscription is cancelled before `list` is reconfigured for
    /// the new tick sequence, so nothing computed against the old sequence is
    /// delivered afterwards. The selection resets to the new unit's maximum
    /// and the list scrolls back to the top. Returns `false` when `unit` is
    /// already active.
    pub fn set_unit(&mut self, unit: Unit, list: &SnapListState) -> bool {
        if self.unit() == unit {
            return false;
        }
        let was_bound = self.subscription.is_some();
        self.unbind();

        let tick_count = {
            let mut core = self.core.borrow_mut();
            let from = core.unit;
            core.configure(unit);
            log::info!(
                "unit switched {} -> {}, range {}..={}",
                from,
                unit,
                core.resolver.range().min_value,
                core.resolver.range().max_value
            );
            core.ticks.len()
        };

        list.set_item_count(tick_count);
        self.core.borrow_mut().min_generation = list.content_generation();
        list.scroll_to_item(0);
        if was_bound {
            self.bind(list);
        }
        true
    }

    /// Routes a click on the toggle segment labelled `label`.
    pub fn click_toggle(&mut self, label: &str, list: &SnapListState) -> Option<Unit> {
        let mut toggle = self.toggle();
        let unit = toggle.click(label)?;
        self.set_unit(unit, list);
        Some(unit)
    }

    pub fn toggle(&self) -> UnitToggle {
        UnitToggle::new(self.unit())
    }

    pub fn unit(&self) -> Unit {
        self.core.borrow().unit
    }

    pub fn selected_value(&self) -> i32 {
        self.core.borrow().selected
    }

    pub fn selected_text(&self) -> String {
        let core = self.core.borrow();
        format_value(core.selected, core.unit)
    }

    pub fn range(&self) -> UnitRange {
        self.core.borrow().resolver.range()
    }

    pub fn ticks(&self) -> TickSequence {
        self.core.borrow().ticks
    }

    pub fn item_height_px(&self) -> f32 {
        self.core.borrow().resolver.item_height_px()
    }

    pub fn colors(&self) -> RulerColors {
        self.core.borrow().options.colors
    }

    pub fn layout(&self) -> &RulerLayout {
        &self.layout
    }

    pub fn tick_style(&self, value: i32) -> TickStyle {
        let core = self.core.borrow();
        classify(value, core.unit, core.selected)
    }

    /// Paints the ruler for `geometry` into a viewport of `size`.
    pub fn frame(&self, geometry: &ScrollGeometry, size: Size) -> Vec<DrawPrimitive> {
        let core = self.core.borrow();
        let mut scope = DrawScopeDefault::new(size);
        draw_ruler(
            &mut scope,
            RulerFrame {
                geometry,
                ticks: core.ticks,
                unit: core.unit,
                selected_value: core.selected,
                selected_text: format_value(core.selected, core.unit),
                colors: &core.options.colors,
                layout: &self.layout,
            },
        );
        scope.into_primitives()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::single_centered_item;
    use std::cell::Cell;

    fn geometry_for(value: i32) -> ScrollGeometry {
        single_centered_item(400.0, (215 - value) as usize, 10.0, 216)
    }

    #[test]
    fn test_initial_state() {
        let picker = RulerPicker::new(RulerOptions::default()).unwrap();
        assert_eq!(picker.unit(), Unit::Metric);
        assert_eq!(picker.selected_value(), 215);
        assert_eq!(picker.selected_text(), "215 cm");
        assert_eq!(picker.ticks().len(), 216);
        assert!(!picker.is_bound());
    }

    #[test]
    fn test_invalid_options_rejected() {
        let result = RulerPicker::new(RulerOptions::default().with_max_cm(-3));
        assert!(matches!(result, Err(RulerConfigError::EmptyRange { .. })));
    }

    #[test]
    fn test_single_centered_item_resolves_to_max() {
        let picker = RulerPicker::new(RulerOptions::default()).unwrap();
        assert_eq!(picker.on_scroll(&geometry_for(215)), Some(215));
        assert_eq!(picker.selected_value(), 215);
    }

    #[test]
    fn test_dedup_fires_haptics_on_transitions_only() {
        let haptic_fires = Rc::new(Cell::new(0));
        let callbacks = Rc::new(RefCell::new(Vec::new()));
        let fires = Rc::clone(&haptic_fires);
        let seen = Rc::clone(&callbacks);
        let picker = RulerPicker::new(RulerOptions::default())
            .unwrap()
            .with_haptics(move |_kind: HapticFeedbackType| fires.set(fires.get() + 1))
            .on_value_change(move |value, unit| seen.borrow_mut().push((value, unit.to_string())));

        // Seed the notifier so only the transitions below are counted.
        picker.on_scroll(&geometry_for(100));
        haptic_fires.set(0);
        callbacks.borrow_mut().clear();

        for value in [100, 100, 99, 99, 99, 98] {
            picker.on_scroll(&geometry_for(value));
        }
        assert_eq!(haptic_fires.get(), 2);
        assert_eq!(callbacks.borrow().len(), 6);
        assert!(callbacks.borrow().iter().all(|(_, unit)| unit == "cm"));
        assert_eq!(picker.selected_value(), 98);
    }

    #[test]
    fn test_first_value_fires_from_sentinel() {
        let haptic_fires = Rc::new(Cell::new(0));
        let fires = Rc::clone(&haptic_fires);
        let picker = RulerPicker::new(RulerOptions::default())
            .unwrap()
            .with_haptics(move |_kind: HapticFeedbackType| fires.set(fires.get() + 1));
        picker.on_scroll(&geometry_for(215));
        assert_eq!(haptic_fires.get(), 1);
    }

    #[test]
    fn test_empty_geometry_keeps_selection() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let picker = RulerPicker::new(RulerOptions::default())
            .unwrap()
            .on_value_change(move |_, _| counter.set(counter.get() + 1));
        picker.on_scroll(&geometry_for(120));
        let empty = ScrollGeometry {
            total_items_count: 216,
            viewport_end_offset: 400.0,
            ..Default::default()
        };
        assert_eq!(picker.on_scroll(&empty), None);
        assert_eq!(picker.selected_value(), 120);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_geometry_from_other_sequence_is_dropped() {
        let picker = RulerPicker::new(RulerOptions::default()).unwrap();
        let foreign = single_centered_item(400.0, 10, 10.0, 85);
        assert_eq!(picker.on_scroll(&foreign), None);
        assert_eq!(picker.selected_value(), 215);
    }

    #[test]
    fn test_callback_may_read_picker_back() {
        let slot: Rc<RefCell<Option<Rc<RulerPicker>>>> = Rc::new(RefCell::new(None));
        let texts = Rc::new(RefCell::new(Vec::new()));
        let slot_for_callback = Rc::clone(&slot);
        let texts_for_callback = Rc::clone(&texts);
        let picker = Rc::new(
            RulerPicker::new(RulerOptions::default())
                .unwrap()
                .on_value_change(move |_, _| {
                    if let Some(picker) = slot_for_callback.borrow().as_ref() {
                        texts_for_callback.borrow_mut().push(picker.selected_text());
                    }
                }),
        );
        *slot.borrow_mut() = Some(Rc::clone(&picker));
        picker.on_scroll(&geometry_for(150));
        assert_eq!(*texts.borrow(), vec!["150 cm".to_string()]);
        slot.borrow_mut().take();
    }

    #[test]
    fn test_haptic_sink_may_read_picker_back() {
        let slot: Rc<RefCell<Option<Rc<RulerPicker>>>> = Rc::new(RefCell::new(None));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let slot_for_sink = Rc::clone(&slot);
        let seen_by_sink = Rc::clone(&seen);
        let picker = Rc::new(RulerPicker::new(RulerOptions::default()).unwrap().with_haptics(
            move |_kind: HapticFeedbackType| {
                if let Some(picker) = slot_for_sink.borrow().as_ref() {
                    seen_by_sink.borrow_mut().push(picker.selected_value());
                }
            },
        ));
        *slot.borrow_mut() = Some(Rc::clone(&picker));
        picker.on_scroll(&geometry_for(150));
        picker.on_scroll(&geometry_for(150));
        picker.on_scroll(&geometry_for(149));
        assert_eq!(*seen.borrow(), vec![150, 149]);
        slot.borrow_mut().take();
    }

    #[test]
    fn test_snapshot_before_switch_dropped_when_counts_match() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&calls);
        let options = RulerOptions::default().with_max_cm(84).with_max_ft(84);
        let mut picker = RulerPicker::new(options)
            .unwrap()
            .on_value_change(move |value, unit| seen.borrow_mut().push((value, unit.to_string())));
        let list = picker.create_list_state(400.0);
        picker.bind(&list);
        list.scroll_to_item(30);
        assert_eq!(picker.selected_value(), 54);
        let stale = list.layout_info();

        assert!(picker.set_unit(Unit::Imperial, &list));
        calls.borrow_mut().clear();

        assert_eq!(stale.total_items_count, picker.ticks().len());
        assert_eq!(picker.on_scroll(&stale), None);
        assert!(calls.borrow().is_empty());
        assert_eq!(picker.selected_value(), 84);

        list.scroll_to_item(30);
        assert_eq!(*calls.borrow(), vec![(54, "ft".to_string())]);
    }

    #[test]
    fn test_tick_style_tracks_selection() {
        let picker = RulerPicker::new(RulerOptions::default()).unwrap();
        picker.on_scroll(&geometry_for(150));
        assert!(picker.tick_style(150).is_selected);
        assert!(picker.tick_style(150).is_major);
        assert!(!picker.tick_style(151).is_selected);
    }

    #[test]
    fn test_frame_contains_selected_text() {
        let picker = RulerPicker::new(RulerOptions::default()).unwrap();
        let geometry = geometry_for(200);
        picker.on_scroll(&geometry);
        let primitives = picker.frame(&geometry, Size::new(360.0, 400.0));
        let texts: Vec<&str> = primitives.iter().filter_map(|p| p.text()).collect();
        assert_eq!(texts, vec!["200", "200 cm"]);
    }
}
