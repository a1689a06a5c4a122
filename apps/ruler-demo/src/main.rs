use anyhow::Context;
use ruler_foundation::SnapListState;
use ruler_graphics::{Density, DrawPrimitive, Size};
use ruler_picker::{HapticFeedbackType, RulerOptions, RulerPicker, Unit};

const SCREEN_WIDTH_PX: f32 = 1080.0;
const SCREEN_HEIGHT_PX: f32 = 2400.0;
const DENSITY: f32 = 2.75;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Ruler Picker Demo ===");

    let dark = std::env::args().any(|arg| arg == "--dark");
    let options = RulerOptions::default()
        .with_density(Density::new(DENSITY))
        .with_dark_theme(dark);
    let viewport_px = options.viewport_height_px(SCREEN_HEIGHT_PX);

    let mut picker = RulerPicker::new(options)
        .context("invalid ruler options")?
        .with_haptics(|kind: HapticFeedbackType| log::debug!("haptic {:?}", kind))
        .on_value_change(|value, unit| log::info!("value changed: {} {}", value, unit));

    let list = picker.create_list_state(viewport_px);
    picker.bind(&list);
    print_frame(&picker, &list, "initial");

    let step = picker.item_height_px() * 0.4;
    for _ in 0..25 {
        list.scroll_by(step);
    }
    print_frame(&picker, &list, "after drag");

    if let Some(index) = list.settle() {
        log::info!("settled on item {}", index);
    }
    print_frame(&picker, &list, "settled");

    picker.set_unit(Unit::Imperial, &list);
    list.scroll_to_item(14);
    print_frame(&picker, &list, "imperial");

    Ok(())
}

fn print_frame(picker: &RulerPicker, list: &SnapListState, label: &str) {
    let size = Size::new(SCREEN_WIDTH_PX, list.viewport_size());
    let primitives = picker.frame(&list.layout_info(), size);
    let lines = primitives
        .iter()
        .filter(|primitive| matches!(primitive, DrawPrimitive::Line { .. }))
        .count();
    let labels: Vec<&str> = primitives.iter().filter_map(DrawPrimitive::text).collect();
    println!(
        "[{label}] {} | {} lines | texts: {}",
        picker.selected_text(),
        lines,
        labels.join(", ")
    );
}
