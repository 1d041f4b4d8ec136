use axt_canvas::{Brush, CanvasError, Draw, LayeredCanvas, Recorder};
use axt_easing::EasingCurve;
use axt_shared::Color;
use glam::DVec2;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Largest grid side the CLI accepts.
pub const MAX_SIZE: u16 = 512;

const MARK: char = '*';
const PIXELS_PER_CELL: u32 = 8;
const BACKGROUND: Color = Color::new(24, 24, 32, 255);
const FOREGROUND: Color = Color::new(120, 180, 255, 255);

/// A curve rasterized onto a character grid, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plot {
    rows: Vec<Vec<char>>,
}

impl Plot {
    /// Samples `curve` once per column and joins the samples with straight
    /// segments. Sides are clamped to `2..=MAX_SIZE` cells.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn new(curve: EasingCurve, width: u16, height: u16) -> Result<Self, CanvasError> {
        let [width, height] = [width, height].map(|side| usize::from(side.clamp(2, MAX_SIZE)));
        let scale = DVec2::new((width - 1) as f64, (height - 1) as f64);

        let points: Vec<_> = (0..width)
            .map(|column| {
                let t = column as f64 / scale.x;

                DVec2::new(t, 1.0 - curve.convert(t)) * scale
            })
            .collect();

        let mut recorder = Recorder::new(width as u32, height as u32);

        recorder.path(&Brush::stroke(FOREGROUND, 1.0), &points, false)?;

        let mut rows = vec![vec![' '; width]; height];
        let mut previous: Option<DVec2> = None;

        for (x, y) in recorder.path_points() {
            let point = DVec2::new(x, y);
            let from = previous.unwrap_or(point);
            let steps = (point - from).abs().max_element().ceil().max(1.0) as usize;

            for step in 0..=steps {
                let cell = from.lerp(point, step as f64 / steps as f64).round();
                let column = (cell.x.max(0.0) as usize).min(width - 1);
                let row = (cell.y.max(0.0) as usize).min(height - 1);

                rows[row][column] = MARK;
            }

            previous = Some(point);
        }

        tracing::trace!(%curve, width, height, "plotted curve");

        Ok(Self { rows })
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|row| row.iter().collect())
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub const fn height(&self) -> usize {
        self.rows.len()
    }

    /// Renders the grid as an image, one square block per marked cell, over a
    /// solid background layer.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_canvas(&self) -> LayeredCanvas {
        let width = self.width() as u32 * PIXELS_PER_CELL;
        let height = self.height() as u32 * PIXELS_PER_CELL;

        let background = RgbaImage::from_pixel(width, height, Rgba(BACKGROUND.into()));
        let curve = RgbaImage::from_fn(width, height, |x, y| {
            let row = (y / PIXELS_PER_CELL) as usize;
            let column = (x / PIXELS_PER_CELL) as usize;

            if self.rows[row][column] == MARK {
                Rgba(FOREGROUND.into())
            } else {
                Rgba([0; 4])
            }
        });

        let mut canvas = LayeredCanvas::new(width, height);

        canvas.push(background);
        canvas.push(curve);

        canvas
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), CanvasError> {
        self.to_canvas().save_png(path)
    }
}

#[cfg(test)]
mod tests {
    use super::{BACKGROUND, FOREGROUND, PIXELS_PER_CELL, Plot};
    use axt_easing::EasingCurve;
    use image::Rgba;

    #[test]
    fn test_linear_is_a_diagonal() {
        let plot = Plot::new(EasingCurve::LinearIn, 5, 5).unwrap();
        let rows: Vec<_> = plot.rows().collect();

        assert_eq!(rows, ["    *", "   * ", "  *  ", " *   ", "*    "]);
    }

    #[test]
    fn test_steep_curves_stay_connected() {
        let plot = Plot::new(EasingCurve::ExpoIn, 8, 10).unwrap();

        for (row, line) in plot.rows().enumerate() {
            assert!(line.contains('*'), "row {row} is empty: {line:?}");
        }
    }

    #[test]
    fn test_degenerate_sizes_are_widened() {
        let plot = Plot::new(EasingCurve::QuadOut, 0, 1).unwrap();

        assert_eq!((plot.width(), plot.height()), (2, 2));

        let plot = Plot::new(EasingCurve::QuadOut, u16::MAX, 3).unwrap();

        assert_eq!(plot.width(), usize::from(super::MAX_SIZE));
    }

    #[test]
    fn test_png_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.png");
        let plot = Plot::new(EasingCurve::LinearIn, 3, 3).unwrap();

        plot.save_png(&path).unwrap();

        let image = image::open(&path).unwrap().to_rgba8();
        let cell = PIXELS_PER_CELL;

        assert_eq!(image.dimensions(), (3 * cell, 3 * cell));
        assert_eq!(image.get_pixel(0, 2 * cell), &Rgba(FOREGROUND.into()));
        assert_eq!(image.get_pixel(0, 0), &Rgba(BACKGROUND.into()));
    }
}
