//! Geometric primitives and draw primitives: Point, Size, Rect, DrawScope

use crate::color::Color;
use crate::typography::TextStyle;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::from_origin_size(Point::ZERO, size)
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }
}

/// Which horizontal edge of a text run sits on its anchor point.
///
/// Text is always centered vertically on the anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Rect {
        rect: Rect,
        color: Color,
    },
    Line {
        start: Point,
        end: Point,
        stroke_width: f32,
        color: Color,
    },
    Text {
        text: String,
        anchor_point: Point,
        anchor: TextAnchor,
        style: TextStyle,
        color: Color,
    },
}

impl DrawPrimitive {
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawPrimitive::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

pub trait DrawScope {
    fn size(&self) -> Size;
    fn draw_rect_at(&mut self, rect: Rect, color: Color);
    fn draw_line(&mut self, start: Point, end: Point, stroke_width: f32, color: Color);
    fn draw_text(
        &mut self,
        text: String,
        anchor_point: Point,
        anchor: TextAnchor,
        style: TextStyle,
        color: Color,
    );
    fn into_primitives(self) -> Vec<DrawPrimitive>;
}

/// Records primitives, translating every coordinate by a fixed origin.
#[derive(Default)]
pub struct DrawScopeDefault {
    size: Size,
    origin: Point,
    primitives: Vec<DrawPrimitive>,
}

impl DrawScopeDefault {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            origin: Point::ZERO,
            primitives: Vec::new(),
        }
    }

    /// Runs `f` with a nested scope of `size` placed at `origin` (local coordinates).
    pub fn with_child(&mut self, origin: Point, size: Size, f: impl FnOnce(&mut DrawScopeDefault)) {
        let mut child = DrawScopeDefault {
            size,
            origin: self.origin.translate(origin.x, origin.y),
            primitives: Vec::new(),
        };
        f(&mut child);
        self.primitives.append(&mut child.primitives);
    }

    fn place(&self, point: Point) -> Point {
        point.translate(self.origin.x, self.origin.y)
    }
}

impl DrawScope for DrawScopeDefault {
    fn size(&self) -> Size {
        self.size
    }

    fn draw_rect_at(&mut self, rect: Rect, color: Color) {
        let rect = rect.translate(self.origin.x, self.origin.y);
        self.primitives.push(DrawPrimitive::Rect { rect, color });
    }

    fn draw_line(&mut self, start: Point, end: Point, stroke_width: f32, color: Color) {
        let start = self.place(start);
        let end = self.place(end);
        self.primitives.push(DrawPrimitive::Line {
            start,
            end,
            stroke_width,
            color,
        });
    }

    fn draw_text(
        &mut self,
        text: String,
        anchor_point: Point,
        anchor: TextAnchor,
        style: TextStyle,
        color: Color,
    ) {
        let anchor_point = self.place(anchor_point);
        self.primitives.push(DrawPrimitive::Text {
            text,
            anchor_point,
            anchor,
            style,
            color,
        });
    }

    fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.primitives
    }
}
