use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::{
    BitMapBackend, Circle, DrawingArea, DrawingBackend, IntoDrawingArea, PathElement, Polygon,
    Rectangle,
};
use plotters::style::{RGBAColor, ShapeStyle as PlotStyle};
use tracing::info;

use super::font;
use super::style::{Color, LegendEntry, ShapeStyle, TextStyle};
use super::Canvas;
use crate::error::{RenderError, Result};
use crate::math::{Bounds2, Point2};

/// Largest accepted image side, in pixels.
const MAX_DIMENSION: u32 = 16_384;
/// Circles are clipped to this radius, in pixels.
const MAX_RADIUS: u32 = 2 * MAX_DIMENSION;
const TITLE_SCALE: u32 = 3;
const BOX_SCALE: u32 = 2;
/// Gap between image edge and title / legend / annotation boxes.
const MARGIN: i32 = 12;
/// Inner padding of legend and annotation boxes.
const BOX_PADDING: i32 = 8;
const LINE_GAP: i32 = 6;

/// A [`Canvas`] that draws through a plotters bitmap backend and saves PNG.
///
/// World coordinates map to pixels by a uniform scale, with the minimum
/// corner of the bounds at pixel `(0, 0)` and y growing downwards. The pixel
/// buffer is allocated by [`Canvas::set_bounds`] and written by
/// [`Canvas::finish`], replacing any existing file at the output path.
pub struct RasterCanvas {
    path: PathBuf,
    pixels_per_unit: f64,
    frame: Option<Frame>,
}

/// RGB pixels of the framed world region.
struct Frame {
    origin: Point2,
    scale: f64,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterCanvas {
    /// Creates a canvas that will write to `path`.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidOptions` if `pixels_per_unit` is not a
    /// positive finite number.
    pub fn new(path: impl Into<PathBuf>, pixels_per_unit: f64) -> Result<Self> {
        if !(pixels_per_unit.is_finite() && pixels_per_unit > 0.0) {
            return Err(RenderError::InvalidOptions(format!(
                "pixels_per_unit must be positive, got {pixels_per_unit}"
            ))
            .into());
        }
        Ok(Self {
            path: path.into(),
            pixels_per_unit,
            frame: None,
        })
    }

    /// Output file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Image size in pixels, once bounds are set.
    #[must_use]
    pub fn size(&self) -> Option<(u32, u32)> {
        self.frame.as_ref().map(|f| (f.width, f.height))
    }

    /// RGB value of the pixel at `(x, y)` drawn so far.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        let frame = self.frame.as_ref()?;
        if x >= frame.width || y >= frame.height {
            return None;
        }
        let at = (y as usize * frame.width as usize + x as usize) * 3;
        let rgb = frame.pixels.get(at..at + 3)?;
        Some([rgb[0], rgb[1], rgb[2]])
    }

    fn frame_mut(&mut self) -> Result<&mut Frame> {
        self.frame.as_mut().ok_or_else(|| RenderError::NotFramed.into())
    }
}

impl Canvas for RasterCanvas {
    fn set_bounds(&mut self, bounds: Bounds2) -> Result<()> {
        let width = (bounds.width() * self.pixels_per_unit).ceil();
        let height = (bounds.height() * self.pixels_per_unit).ceil();
        // Negated comparison so NaN is rejected too.
        if !(width >= 1.0 && height >= 1.0) {
            return Err(RenderError::EmptyBounds.into());
        }
        let (width, height) = (saturating_u32(width), saturating_u32(height));
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(RenderError::ImageTooLarge { width, height }.into());
        }
        self.frame = Some(Frame {
            origin: bounds.min,
            scale: self.pixels_per_unit,
            width,
            height,
            pixels: vec![0xFF; width as usize * height as usize * 3],
        });
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Point2], style: &ShapeStyle) -> Result<()> {
        let frame = self.frame_mut()?;
        let ring: Vec<(i32, i32)> = points.iter().map(|p| frame.to_pixel(*p)).collect();
        let Some(&first) = ring.first() else {
            return Ok(());
        };
        let area = frame.area();
        area.draw(&Polygon::new(ring.clone(), plot_style(style.fill, true, 1)))
            .map_err(RenderError::backend)?;
        if let Some(stroke) = style.stroke {
            let mut closed = ring;
            closed.push(first);
            let outline = plot_style(stroke.color, false, stroke_px(stroke.width));
            area.draw(&PathElement::new(closed, outline))
                .map_err(RenderError::backend)?;
        }
        area.present().map_err(RenderError::backend)
    }

    fn fill_circle(&mut self, center: Point2, radius: f64, style: &ShapeStyle) -> Result<()> {
        let frame = self.frame_mut()?;
        let center = frame.to_pixel(center);
        let radius = radius_px(radius * frame.scale);
        let area = frame.area();
        area.draw(&Circle::new(center, radius, plot_style(style.fill, true, 1)))
            .map_err(RenderError::backend)?;
        if let Some(stroke) = style.stroke {
            let outline = plot_style(stroke.color, false, stroke_px(stroke.width));
            area.draw(&Circle::new(center, radius, outline))
                .map_err(RenderError::backend)?;
        }
        area.present().map_err(RenderError::backend)
    }

    fn text(&mut self, position: Point2, text: &str, style: &TextStyle) -> Result<()> {
        let frame = self.frame_mut()?;
        let (cx, cy) = frame.to_pixel(position);
        let x = cx - px(font::text_width(text, style.scale)) / 2;
        let y = cy - px(font::text_height(style.scale)) / 2;
        frame.draw_text(x, y, text, style)
    }

    fn title(&mut self, text: &str) -> Result<()> {
        let frame = self.frame_mut()?;
        let x = (px(frame.width) - px(font::text_width(text, TITLE_SCALE))) / 2;
        frame.draw_text(x, MARGIN, text, &TextStyle::new(Color::BLACK, TITLE_SCALE))
    }

    fn legend(&mut self, entries: &[LegendEntry]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        let frame = self.frame_mut()?;
        let text_h = px(font::text_height(BOX_SCALE));
        let swatch = text_h;
        let label_w = entries
            .iter()
            .map(|e| px(font::text_width(&e.label, BOX_SCALE)))
            .max()
            .unwrap_or(0);
        let box_w = BOX_PADDING * 2 + swatch + BOX_PADDING + label_w;
        let left = px(frame.width) - box_w - MARGIN;
        frame.draw_box(left, box_w, entries.len(), Color::WHITE.with_alpha(0.9))?;

        let style = TextStyle::new(Color::BLACK, BOX_SCALE);
        let mut y = MARGIN + BOX_PADDING;
        for entry in entries {
            let x = left + BOX_PADDING;
            frame.fill_rect((x, y), (x + swatch - 1, y + swatch - 1), entry.color)?;
            frame.draw_text(x + swatch + BOX_PADDING, y, &entry.label, &style)?;
            y += text_h + LINE_GAP;
        }
        Ok(())
    }

    fn annotation(&mut self, lines: &[String]) -> Result<()> {
        if lines.is_empty() {
            return Ok(());
        }
        let frame = self.frame_mut()?;
        let text_h = px(font::text_height(BOX_SCALE));
        let text_w = lines
            .iter()
            .map(|l| px(font::text_width(l, BOX_SCALE)))
            .max()
            .unwrap_or(0);
        frame.draw_box(MARGIN, BOX_PADDING * 2 + text_w, lines.len(), Color::WHEAT.with_alpha(0.8))?;

        let style = TextStyle::new(Color::BLACK, BOX_SCALE);
        let mut y = MARGIN + BOX_PADDING;
        for line in lines {
            frame.draw_text(MARGIN + BOX_PADDING, y, line, &style)?;
            y += text_h + LINE_GAP;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let frame = self.frame.as_ref().ok_or(RenderError::NotFramed)?;
        let size = (frame.width, frame.height);
        let mut backend = BitMapBackend::new(&self.path, size);
        backend
            .blit_bitmap((0, 0), size, &frame.pixels)
            .map_err(RenderError::backend)?;
        backend.present().map_err(RenderError::backend)?;
        info!(
            path = %self.path.display(),
            width = frame.width,
            height = frame.height,
            "image written"
        );
        Ok(())
    }
}

impl Frame {
    fn area(&mut self) -> DrawingArea<BitMapBackend<'_>, Shift> {
        BitMapBackend::with_buffer(&mut self.pixels, (self.width, self.height)).into_drawing_area()
    }

    #[allow(clippy::cast_possible_truncation)]
    fn to_pixel(&self, p: Point2) -> (i32, i32) {
        (
            ((p.x - self.origin.x) * self.scale).round() as i32,
            ((p.y - self.origin.y) * self.scale).round() as i32,
        )
    }

    fn fill_rect(&mut self, from: (i32, i32), to: (i32, i32), color: Color) -> Result<()> {
        let area = self.area();
        area.draw(&Rectangle::new([from, to], plot_style(color, true, 1)))
            .map_err(RenderError::backend)?;
        area.present().map_err(RenderError::backend)
    }

    /// Bordered box at the top margin, tall enough for `rows` lines of box text.
    fn draw_box(&mut self, left: i32, width: i32, rows: usize, background: Color) -> Result<()> {
        let rows = i32::try_from(rows).unwrap_or(i32::MAX / 64);
        let text_h = px(font::text_height(BOX_SCALE));
        let height = BOX_PADDING * 2 + rows * text_h + (rows - 1) * LINE_GAP;
        let corners = [(left, MARGIN), (left + width - 1, MARGIN + height - 1)];

        let area = self.area();
        area.draw(&Rectangle::new(corners, plot_style(background, true, 1)))
            .map_err(RenderError::backend)?;
        area.draw(&Rectangle::new(corners, plot_style(Color::BLACK, false, 1)))
            .map_err(RenderError::backend)?;
        area.present().map_err(RenderError::backend)
    }

    /// Draws `text` with its top-left corner at `(x, y)`, one rectangle per
    /// glyph cell.
    fn draw_text(&mut self, x: i32, y: i32, text: &str, style: &TextStyle) -> Result<()> {
        let scale = px(style.scale).max(1);
        let advance = (px(font::GLYPH_WIDTH) + 1) * scale;
        let ink = plot_style(style.color, true, 1);

        let area = self.area();
        let mut cursor = x;
        for ch in text.chars() {
            if let Some(rows) = font::glyph(ch) {
                for row in 0..font::GLYPH_HEIGHT {
                    for col in (0..font::GLYPH_WIDTH).filter(|&col| font::is_set(rows, col, row)) {
                        let left = cursor + px(col) * scale;
                        let top = y + px(row) * scale;
                        let cell = [(left, top), (left + scale - 1, top + scale - 1)];
                        area.draw(&Rectangle::new(cell, ink))
                            .map_err(RenderError::backend)?;
                    }
                }
            }
            cursor = cursor.saturating_add(advance);
        }
        area.present().map_err(RenderError::backend)
    }
}

fn plot_style(color: Color, filled: bool, stroke_width: u32) -> PlotStyle {
    PlotStyle {
        color: RGBAColor(color.r, color.g, color.b, color.alpha()),
        filled,
        stroke_width,
    }
}

fn px(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn stroke_px(width: f64) -> u32 {
    width.round().clamp(1.0, 64.0) as u32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn radius_px(radius: f64) -> u32 {
    radius.round().clamp(0.0, f64::from(MAX_RADIUS)) as u32
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn saturating_u32(v: f64) -> u32 {
    v as u32
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::BoardvizError;
    use crate::render::{RenderBoard, RenderOptions};
    use crate::topology::{NodeIdTable, Topology};

    const RED: Color = Color::rgb(0xFF_00_00);
    const RED_PX: [u8; 3] = [255, 0, 0];
    const BLACK_PX: [u8; 3] = [0, 0, 0];
    const WHITE_PX: [u8; 3] = [255, 255, 255];

    fn framed(width: f64, height: f64, ppu: f64) -> RasterCanvas {
        let mut canvas = RasterCanvas::new("unused.png", ppu).unwrap();
        canvas
            .set_bounds(Bounds2 {
                min: Point2::origin(),
                max: Point2::new(width, height),
            })
            .unwrap();
        canvas
    }

    fn all_pixels(canvas: &RasterCanvas) -> Vec<[u8; 3]> {
        let (w, h) = canvas.size().unwrap();
        (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .map(|(x, y)| canvas.pixel(x, y).unwrap())
            .collect()
    }

    #[test]
    fn rejects_non_positive_scale() {
        assert!(RasterCanvas::new("x.png", 0.0).is_err());
        assert!(RasterCanvas::new("x.png", f64::INFINITY).is_err());
    }

    #[test]
    fn drawing_before_bounds_fails() {
        let mut canvas = RasterCanvas::new("x.png", 10.0).unwrap();
        let err = canvas
            .fill_circle(Point2::origin(), 1.0, &ShapeStyle::filled(RED))
            .unwrap_err();
        assert!(matches!(err, BoardvizError::Render(RenderError::NotFramed)));
        assert!(canvas.finish().is_err());
        assert!(canvas.pixel(0, 0).is_none());
    }

    #[test]
    fn empty_bounds_fail() {
        let mut canvas = RasterCanvas::new("x.png", 10.0).unwrap();
        let flat = Bounds2 {
            min: Point2::new(1.0, 1.0),
            max: Point2::new(5.0, 1.0),
        };
        let err = canvas.set_bounds(flat).unwrap_err();
        assert!(matches!(err, BoardvizError::Render(RenderError::EmptyBounds)));
    }

    #[test]
    fn oversized_bounds_fail() {
        let mut canvas = RasterCanvas::new("x.png", 1000.0).unwrap();
        let huge = Bounds2 {
            min: Point2::origin(),
            max: Point2::new(100.0, 1.0),
        };
        assert!(matches!(
            canvas.set_bounds(huge),
            Err(BoardvizError::Render(RenderError::ImageTooLarge { .. }))
        ));
    }

    #[test]
    fn image_size_follows_bounds_and_scale() {
        let canvas = framed(2.0, 1.0, 10.0);
        assert_eq!(canvas.size(), Some((20, 10)));
        assert!(all_pixels(&canvas).iter().all(|p| *p == WHITE_PX));
        assert!(canvas.pixel(20, 0).is_none());
    }

    #[test]
    fn polygon_fill_covers_interior_only() {
        let mut canvas = framed(2.0, 1.0, 10.0);
        let rect = [
            Point2::new(0.5, 0.25),
            Point2::new(1.5, 0.25),
            Point2::new(1.5, 0.75),
            Point2::new(0.5, 0.75),
        ];
        canvas
            .fill_polygon(&rect, &ShapeStyle::filled(Color::BLACK))
            .unwrap();
        assert_eq!(canvas.pixel(10, 5), Some(BLACK_PX));
        assert_eq!(canvas.pixel(7, 4), Some(BLACK_PX));
        assert_eq!(canvas.pixel(1, 1), Some(WHITE_PX));
        assert_eq!(canvas.pixel(18, 5), Some(WHITE_PX));
    }

    #[test]
    fn polygon_outline_is_stroked() {
        let mut canvas = framed(2.0, 2.0, 10.0);
        let square = [
            Point2::new(0.5, 0.5),
            Point2::new(1.5, 0.5),
            Point2::new(1.5, 1.5),
            Point2::new(0.5, 1.5),
        ];
        let style = ShapeStyle::filled(Color::WHITE).stroked(RED, 2.0);
        canvas.fill_polygon(&square, &style).unwrap();
        assert!((4..=6).any(|y| canvas.pixel(10, y) == Some(RED_PX)));
        assert_eq!(canvas.pixel(10, 10), Some(WHITE_PX));
    }

    #[test]
    fn translucent_fill_blends() {
        let mut canvas = framed(1.0, 1.0, 10.0);
        let all = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        canvas
            .fill_polygon(&all, &ShapeStyle::filled(Color::BLACK.with_alpha(0.5)))
            .unwrap();
        let [r, g, b] = canvas.pixel(5, 5).unwrap();
        assert!((120..=135).contains(&r), "r={r}");
        assert_eq!((r, r), (g, b));
    }

    #[test]
    fn circle_with_outline() {
        let mut canvas = framed(2.0, 2.0, 10.0);
        let style = ShapeStyle::filled(RED).stroked(Color::BLACK, 1.5);
        canvas
            .fill_circle(Point2::new(1.0, 1.0), 0.5, &style)
            .unwrap();
        assert_eq!(canvas.pixel(10, 10), Some(RED_PX));
        assert!((13..=16).any(|x| canvas.pixel(x, 10) == Some(BLACK_PX)));
        assert_eq!(canvas.pixel(1, 1), Some(WHITE_PX));
    }

    #[test]
    fn oversized_circle_is_clipped() {
        let mut canvas = framed(1.0, 1.0, 10.0);
        canvas
            .fill_circle(Point2::new(0.5, 0.5), 1e12, &ShapeStyle::filled(RED))
            .unwrap();
        assert!(all_pixels(&canvas).iter().all(|p| *p == RED_PX));
    }

    #[test]
    fn text_leaves_ink() {
        let mut canvas = framed(4.0, 4.0, 10.0);
        canvas
            .text(Point2::new(2.0, 2.0), "8", &TextStyle::new(Color::BLACK, 2))
            .unwrap();
        let ink = all_pixels(&canvas)
            .iter()
            .filter(|p| **p == BLACK_PX)
            .count();
        assert!(ink > 0);
        // Centered: nothing in the outer rim.
        assert_eq!(canvas.pixel(0, 0), Some(WHITE_PX));
        assert_eq!(canvas.pixel(39, 39), Some(WHITE_PX));
    }

    #[test]
    fn boxes_clip_to_small_images() {
        let mut canvas = framed(1.0, 1.0, 10.0);
        canvas.title("A long title").unwrap();
        canvas
            .legend(&[LegendEntry {
                label: "Land".to_owned(),
                color: RED,
            }])
            .unwrap();
        canvas.annotation(&["Nodes: 0".to_owned()]).unwrap();
        assert_eq!(canvas.size(), Some((10, 10)));
    }

    #[test]
    fn finish_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.png");
        let mut canvas = RasterCanvas::new(&path, 10.0).unwrap();
        canvas
            .set_bounds(Bounds2 {
                min: Point2::new(-1.0, -1.0),
                max: Point2::new(2.0, 1.0),
            })
            .unwrap();
        canvas
            .fill_polygon(
                &[
                    Point2::new(-1.0, -1.0),
                    Point2::new(2.0, -1.0),
                    Point2::new(2.0, 1.0),
                    Point2::new(-1.0, 1.0),
                ],
                &ShapeStyle::filled(RED),
            )
            .unwrap();
        canvas.finish().unwrap();

        let written = image::open(&path).unwrap().to_rgb8();
        assert_eq!(written.dimensions(), (30, 20));
        assert_eq!(written.get_pixel(15, 10).0, RED_PX);
    }

    #[test]
    fn finish_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.png");
        std::fs::write(&path, b"stale").unwrap();
        let mut canvas = framed(1.0, 1.0, 8.0);
        canvas.path = path.clone();
        canvas.finish().unwrap();
        assert_eq!(image::open(&path).unwrap().width(), 8);
    }

    #[test]
    fn unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut canvas = framed(1.0, 1.0, 10.0);
        canvas.path = dir.path().join("missing").join("board.png");
        let err = canvas.finish().unwrap_err();
        assert!(matches!(err, BoardvizError::Render(RenderError::Backend(_))));
    }

    #[test]
    fn renders_mini_board_to_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mini.png");
        let topology = Topology::mini().unwrap();
        let table = NodeIdTable::mini().unwrap();
        let options = RenderOptions::default()
            .with_hex_size(0.6)
            .with_title("Mini");
        let mut canvas = RasterCanvas::new(&path, options.pixels_per_unit).unwrap();

        let summary = RenderBoard::new(&topology, &options)
            .with_node_ids(&table)
            .execute(&mut canvas)
            .unwrap();

        let written = image::open(&path).unwrap().to_rgb8();
        let expected_w = saturating_u32((summary.bounds.width() * 200.0).ceil());
        assert_eq!(written.width(), expected_w);
        assert_eq!(summary.node_labels, 54);

        // The center tile is land-colored (blended over white).
        let x = saturating_u32(((0.15 - summary.bounds.min.x) * 200.0).round());
        let y = saturating_u32(((0.15 - summary.bounds.min.y) * 200.0).round());
        let [r, g, b] = written.get_pixel(x, y).0;
        assert!(r > g && g > b, "({r}, {g}, {b})");
    }
}
