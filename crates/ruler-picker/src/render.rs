//! Draw instructions for the ruler.
//!
//! Coordinates are relative to the scroll viewport: `y = 0` is the viewport
//! start and the needle sits on [`ScrollGeometry::viewport_center`].

use ruler_foundation::ScrollGeometry;
use ruler_graphics::{Density, DrawScope, Point, Rect, RulerColors, TextAnchor, TextStyle};

use crate::classifier::{classify, TickStyle};
use crate::constants::{
    LABEL_PADDING_END, NEEDLE_THICKNESS, NEEDLE_WIDTH_FRACTION, TICK_AREA_WIDTH,
    TICK_END_PADDING, TICK_LABEL_SIZE, VALUE_TEXT_BOTTOM_PADDING, VALUE_TEXT_SIZE,
    VALUE_TEXT_START_PADDING,
};
use crate::ticks::TickSequence;
use crate::unit::Unit;

/// Layout constants resolved to pixels for one density.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RulerLayout {
    pub tick_area_width: f32,
    pub tick_end_padding: f32,
    pub label_padding_end: f32,
    pub needle_thickness: f32,
    pub needle_width_fraction: f32,
    pub label_style: TextStyle,
    pub value_style: TextStyle,
    pub value_start_padding: f32,
    pub value_bottom_padding: f32,
}

impl RulerLayout {
    pub fn new(density: &Density) -> Self {
        Self {
            tick_area_width: density.dp_to_px(TICK_AREA_WIDTH),
            tick_end_padding: density.dp_to_px(TICK_END_PADDING),
            label_padding_end: density.dp_to_px(LABEL_PADDING_END),
            needle_thickness: density.dp_to_px(NEEDLE_THICKNESS),
            needle_width_fraction: NEEDLE_WIDTH_FRACTION,
            label_style: TextStyle::new(density.sp_to_px(TICK_LABEL_SIZE)),
            value_style: TextStyle::new(density.sp_to_px(VALUE_TEXT_SIZE)).bold(),
            value_start_padding: density.dp_to_px(VALUE_TEXT_START_PADDING),
            value_bottom_padding: density.dp_to_px(VALUE_TEXT_BOTTOM_PADDING),
        }
    }

    /// Width ticks are measured against: the tick area minus its end padding.
    pub fn tick_canvas_width(&self) -> f32 {
        (self.tick_area_width - self.tick_end_padding).max(0.0)
    }
}

impl Default for RulerLayout {
    fn default() -> Self {
        Self::new(&Density::default())
    }
}

pub fn draw_background(scope: &mut dyn DrawScope, colors: &RulerColors) {
    let size = scope.size();
    scope.draw_rect_at(Rect::from_size(size), colors.background);
}

/// Draws one tick whose row is vertically centered on `center_y`.
///
/// The line grows leftwards from the right edge of the tick canvas.
pub fn draw_tick(
    scope: &mut dyn DrawScope,
    center_y: f32,
    style: &TickStyle,
    colors: &RulerColors,
    layout: &RulerLayout,
) {
    let width = scope.size().width;
    let canvas_right = width - layout.tick_end_padding;
    let line_length = layout.tick_canvas_width() * style.line_length_fraction;
    let color = if style.is_selected {
        colors.needle
    } else {
        colors.tick
    };
    scope.draw_line(
        Point::new(canvas_right, center_y),
        Point::new(canvas_right - line_length, center_y),
        style.stroke_weight,
        color,
    );

    if let Some(label) = &style.label {
        scope.draw_text(
            label.clone(),
            Point::new(width - layout.label_padding_end, center_y),
            TextAnchor::End,
            layout.label_style,
            colors.text,
        );
    }
}

pub fn draw_needle(
    scope: &mut dyn DrawScope,
    center_y: f32,
    colors: &RulerColors,
    layout: &RulerLayout,
) {
    let width = scope.size().width;
    scope.draw_line(
        Point::new(width * (1.0 - layout.needle_width_fraction), center_y),
        Point::new(width, center_y),
        layout.needle_thickness,
        colors.needle,
    );
}

pub fn draw_selected_value(
    scope: &mut dyn DrawScope,
    center_y: f32,
    text: String,
    colors: &RulerColors,
    layout: &RulerLayout,
) {
    scope.draw_text(
        text,
        Point::new(
            layout.value_start_padding,
            center_y - layout.value_bottom_padding / 2.0,
        ),
        TextAnchor::Start,
        layout.value_style,
        colors.text,
    );
}

/// Everything needed to paint one frame of the ruler.
pub struct RulerFrame<'a> {
    pub geometry: &'a ScrollGeometry,
    pub ticks: TickSequence,
    pub unit: Unit,
    pub selected_value: i32,
    pub selected_text: String,
    pub colors: &'a RulerColors,
    pub layout: &'a RulerLayout,
}

/// Paints background, visible ticks, needle and selected value, in that order.
pub fn draw_ruler(scope: &mut dyn DrawScope, frame: RulerFrame<'_>) {
    draw_background(scope, frame.colors);
    for item in &frame.geometry.visible_items {
        let Some(value) = frame.ticks.value_at(item.index) else {
            continue;
        };
        let style = classify(value, frame.unit, frame.selected_value);
        draw_tick(scope, item.center(), &style, frame.colors, frame.layout);
    }
    let center_y = frame.geometry.viewport_center();
    draw_needle(scope, center_y, frame.colors, frame.layout);
    draw_selected_value(
        scope,
        center_y,
        frame.selected_text,
        frame.colors,
        frame.layout,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::geometry_with_items;
    use ruler_graphics::{DrawPrimitive, DrawScopeDefault, Size};

    fn scope() -> DrawScopeDefault {
        DrawScopeDefault::new(Size::new(360.0, 200.0))
    }

    #[test]
    fn test_minor_tick_line() {
        let mut scope = scope();
        let colors = RulerColors::default();
        let layout = RulerLayout::default();
        draw_tick(&mut scope, 50.0, &classify(3, Unit::Metric, 7), &colors, &layout);
        let primitives = scope.into_primitives();
        assert_eq!(
            primitives,
            vec![DrawPrimitive::Line {
                start: Point::new(344.0, 50.0),
                end: Point::new(344.0 - 64.0 * 0.3, 50.0),
                stroke_width: 1.5,
                color: colors.tick,
            }]
        );
    }

    #[test]
    fn test_selected_major_tick_uses_needle_color_and_label() {
        let mut scope = scope();
        let colors = RulerColors::default();
        let layout = RulerLayout::default();
        draw_tick(&mut scope, 20.0, &classify(48, Unit::Imperial, 48), &colors, &layout);
        let primitives = scope.into_primitives();
        assert_eq!(primitives.len(), 2);
        match &primitives[0] {
            DrawPrimitive::Line {
                stroke_width,
                color,
                ..
            } => {
                assert_eq!(*stroke_width, 4.0);
                assert_eq!(*color, colors.needle);
            }
            other => panic!("expected line, got {other:?}"),
        }
        match &primitives[1] {
            DrawPrimitive::Text {
                text,
                anchor_point,
                anchor,
                ..
            } => {
                assert_eq!(text, "4′");
                assert_eq!(*anchor_point, Point::new(270.0, 20.0));
                assert_eq!(*anchor, TextAnchor::End);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_layout_scales_with_density() {
        let layout = RulerLayout::new(&Density::new(2.0));
        assert_eq!(layout.tick_canvas_width(), 128.0);
        assert_eq!(layout.needle_thickness, 4.0);
        assert_eq!(layout.value_style.font_size, 64.0);
    }

    #[test]
    fn test_draw_ruler_order() {
        let geometry = geometry_with_items(200.0, 216, &[(9, 85.0), (10, 95.0), (11, 105.0)]);
        let colors = RulerColors::default();
        let layout = RulerLayout::default();
        let mut scope = scope();
        draw_ruler(
            &mut scope,
            RulerFrame {
                geometry: &geometry,
                ticks: TickSequence::new(0, 215),
                unit: Unit::Metric,
                selected_value: 205,
                selected_text: "205 cm".to_string(),
                colors: &colors,
                layout: &layout,
            },
        );
        let primitives = scope.into_primitives();
        // Indices 9..=11 hold 206, 205 and 204: minor ticks without labels.
        assert!(matches!(primitives[0], DrawPrimitive::Rect { .. }));
        let texts: Vec<&str> = primitives.iter().filter_map(|p| p.text()).collect();
        assert_eq!(texts, vec!["205 cm"]);
        assert_eq!(primitives.len(), 1 + 3 + 1 + 1);
        match &primitives[4] {
            DrawPrimitive::Line { start, end, .. } => {
                assert_eq!(*start, Point::new(180.0, 100.0));
                assert_eq!(*end, Point::new(360.0, 100.0));
            }
            other => panic!("expected needle line, got {other:?}"),
        }
    }
}
