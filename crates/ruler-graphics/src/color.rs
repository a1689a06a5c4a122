//! Color representation and the ruler color slots

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Builds a color from a packed `0xAARRGGBB` value.
    pub const fn from_argb_u32(argb: u32) -> Self {
        Self::from_rgba_u8(
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        )
    }

    pub const RED: Color = Color(1.0, 0.0, 0.0, 1.0);
}

/// The subset of a Material color scheme the ruler reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorScheme {
    pub primary: Color,
    pub background: Color,
    pub on_background: Color,
}

impl ColorScheme {
    pub const fn light() -> Self {
        Self {
            primary: Color::RED,
            background: Color::from_argb_u32(0xFFFF_FBFE),
            on_background: Color::from_argb_u32(0xFF1C_1B1F),
        }
    }

    pub const fn dark() -> Self {
        Self {
            primary: Color::RED,
            background: Color::from_argb_u32(0xFF1C_1B1F),
            on_background: Color::from_argb_u32(0xFFE6_E1E5),
        }
    }

    pub fn for_dark_theme(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::light()
    }
}

/// Colors used to paint the ruler, supplied by the surrounding theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RulerColors {
    pub background: Color,
    pub tick: Color,
    pub needle: Color,
    pub text: Color,
}

impl RulerColors {
    pub fn from_scheme(scheme: &ColorScheme) -> Self {
        Self {
            background: scheme.background,
            tick: scheme.on_background,
            needle: scheme.primary,
            text: scheme.on_background,
        }
    }
}

impl Default for RulerColors {
    fn default() -> Self {
        Self::from_scheme(&ColorScheme::default())
    }
}
