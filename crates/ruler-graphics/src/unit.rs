//! Unit types: Dp, Sp, and conversions

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }
}

/// Scale-independent pixels (for text)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Sp(pub f32);

impl Sp {
    pub fn to_px(&self, density: f32, font_scale: f32) -> f32 {
        self.0 * density * font_scale
    }
}

/// Display density used to turn dp/sp values into raw pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    pub density: f32,
    pub font_scale: f32,
}

impl Density {
    pub const fn new(density: f32) -> Self {
        Self {
            density,
            font_scale: 1.0,
        }
    }

    pub fn with_font_scale(mut self, font_scale: f32) -> Self {
        self.font_scale = font_scale;
        self
    }

    pub fn dp_to_px(&self, dp: Dp) -> f32 {
        dp.to_px(self.density)
    }

    pub fn sp_to_px(&self, sp: Sp) -> f32 {
        sp.to_px(self.density, self.font_scale)
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::new(1.0)
    }
}
