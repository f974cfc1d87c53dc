use crate::topology::TileKind;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0x00_00_00);
    pub const WHITE: Self = Self::rgb(0xFF_FF_FF);
    pub const WHEAT: Self = Self::rgb(0xF5_DE_B3);

    /// Opaque color from a `0xRRGGBB` literal.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn rgb(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
            a: 0xFF,
        }
    }

    /// Same color with opacity `alpha` in `[0, 1]` (clamped).
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    /// Opacity in `[0, 1]`.
    #[must_use]
    pub fn alpha(self) -> f64 {
        f64::from(self.a) / 255.0
    }
}

/// Outline of a filled shape. `width` is in output pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// Fill and optional outline for polygons and circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub fill: Color,
    pub stroke: Option<Stroke>,
}

impl ShapeStyle {
    #[must_use]
    pub fn filled(fill: Color) -> Self {
        Self { fill, stroke: None }
    }

    #[must_use]
    pub fn stroked(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some(Stroke { color, width });
        self
    }
}

/// Text color and integer glyph scale (1 = 5x7 pixels per glyph).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Color,
    pub scale: u32,
}

impl TextStyle {
    #[must_use]
    pub fn new(color: Color, scale: u32) -> Self {
        Self { color, scale }
    }
}

/// Fill colors per tile kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub land: Color,
    pub water: Color,
    pub port: Color,
}

impl Palette {
    #[must_use]
    pub fn color_for(&self, kind: TileKind) -> Color {
        match kind {
            TileKind::Land => self.land,
            TileKind::Water => self.water,
            TileKind::Port => self.port,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            land: Color::rgb(0x8B_45_13),
            water: Color::rgb(0x41_69_E1),
            port: Color::rgb(0xFF_D7_00),
        }
    }
}

/// One swatch in an image legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_literal() {
        let c = Color::rgb(0x41_69_E1);
        assert_eq!((c.r, c.g, c.b, c.a), (0x41, 0x69, 0xE1, 0xFF));
    }

    #[test]
    fn rgb_ignores_high_byte() {
        assert_eq!(Color::rgb(0xAB_41_69_E1), Color::rgb(0x41_69_E1));
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Color::WHITE.with_alpha(0.8).a, 204);
        assert_eq!(Color::WHITE.with_alpha(2.0).a, 255);
        assert_eq!(Color::WHITE.with_alpha(-1.0).a, 0);
        assert!((Color::BLACK.alpha() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn palette_by_kind() {
        let p = Palette::default();
        assert_eq!(p.color_for(TileKind::Land), Color::rgb(0x8B_45_13));
        assert_eq!(p.color_for(TileKind::Port), p.port);
        assert_ne!(p.color_for(TileKind::Water), p.land);
    }

    #[test]
    fn stroked_style() {
        let s = ShapeStyle::filled(Color::WHITE).stroked(Color::BLACK, 1.5);
        assert_eq!(
            s.stroke,
            Some(Stroke {
                color: Color::BLACK,
                width: 1.5
            })
        );
    }
}
