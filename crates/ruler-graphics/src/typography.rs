//! Typography data structures (font weights, text styles)

/// Font weight (100-900)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Text style (data only, no rendering)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextStyle {
    /// Font size in raw pixels.
    pub font_size: f32,
    pub font_weight: FontWeight,
}

impl TextStyle {
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            font_weight: FontWeight::NORMAL,
        }
    }

    pub fn bold(mut self) -> Self {
        self.font_weight = FontWeight::BOLD;
        self
    }
}
