use super::style::Palette;
use crate::error::{RenderError, Result};

/// Parameters of a board rendering pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Hexagon circumradius in world units.
    pub hex_size: f64,
    /// Margin around the board, in multiples of `hex_size`.
    pub padding_ratio: f64,
    /// Node marker radius, in multiples of `hex_size`.
    pub node_marker_ratio: f64,
    /// Output pixels per world unit.
    pub pixels_per_unit: f64,
    /// Tile fill opacity.
    pub tile_alpha: f64,
    /// Label land tiles `0..` and ports `P0..` at their centers.
    pub tile_labels: bool,
    pub palette: Palette,
    pub title: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            hex_size: 0.5,
            padding_ratio: 2.0,
            node_marker_ratio: 0.15,
            pixels_per_unit: 200.0,
            tile_alpha: 0.8,
            tile_labels: false,
            palette: Palette::default(),
            title: None,
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn with_hex_size(mut self, hex_size: f64) -> Self {
        self.hex_size = hex_size;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Checks that every size and ratio is usable.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidOptions` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("hex_size", self.hex_size),
            ("node_marker_ratio", self.node_marker_ratio),
            ("pixels_per_unit", self.pixels_per_unit),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if self.node_marker_ratio > 1.0 {
            return Err(invalid(format!(
                "node_marker_ratio must not exceed 1, got {}",
                self.node_marker_ratio
            )));
        }
        if !(self.padding_ratio.is_finite() && self.padding_ratio >= 0.0) {
            return Err(invalid(format!(
                "padding_ratio must be non-negative, got {}",
                self.padding_ratio
            )));
        }
        if !(0.0..=1.0).contains(&self.tile_alpha) {
            return Err(invalid(format!(
                "tile_alpha must be within [0, 1], got {}",
                self.tile_alpha
            )));
        }
        Ok(())
    }

    /// Margin around the board in world units.
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.hex_size * self.padding_ratio
    }

    /// Node marker radius in world units.
    #[must_use]
    pub fn node_marker_radius(&self) -> f64 {
        self.hex_size * self.node_marker_ratio
    }
}

fn invalid(message: String) -> crate::error::BoardvizError {
    RenderError::InvalidOptions(message).into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let opts = RenderOptions::default();
        assert!(opts.validate().is_ok());
        assert!((opts.padding() - 1.0).abs() < f64::EPSILON);
        assert!((opts.node_marker_radius() - 0.075).abs() < 1e-12);
    }

    #[test]
    fn zero_hex_size_fails() {
        let opts = RenderOptions::default().with_hex_size(0.0);
        let err = opts.validate().unwrap_err();
        assert!(err.to_string().contains("hex_size"), "{err}");
    }

    #[test]
    fn nan_scale_fails() {
        let opts = RenderOptions {
            pixels_per_unit: f64::NAN,
            ..RenderOptions::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn marker_larger_than_hex_fails() {
        let opts = RenderOptions {
            node_marker_ratio: 1e9,
            ..RenderOptions::default()
        };
        let err = opts.validate().unwrap_err();
        assert!(err.to_string().contains("node_marker_ratio"), "{err}");
        let full = RenderOptions {
            node_marker_ratio: 1.0,
            ..RenderOptions::default()
        };
        assert!(full.validate().is_ok());
    }

    #[test]
    fn negative_padding_fails() {
        let opts = RenderOptions {
            padding_ratio: -1.0,
            ..RenderOptions::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn alpha_out_of_range_fails() {
        let opts = RenderOptions {
            tile_alpha: 1.5,
            ..RenderOptions::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn builders() {
        let opts = RenderOptions::default()
            .with_hex_size(0.6)
            .with_title("Mini");
        assert!((opts.hex_size - 0.6).abs() < f64::EPSILON);
        assert_eq!(opts.title.as_deref(), Some("Mini"));
    }
}
