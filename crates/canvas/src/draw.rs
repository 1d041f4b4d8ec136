use crate::{Anchor, Brush, CanvasError, Context2d};
use axt_easing::{ControlPoints, EasingCurve};
use axt_shared::Color;
use glam::DVec2;
use image::RgbaImage;

/// Higher-level drawing verbs for any [`Context2d`].
///
/// Each verb sets what it needs inside a `save`/`restore` pair, so the
/// context's styles are unchanged afterwards. [`Draw::set_shadow`] is the
/// exception: changing the context is its whole point.
pub trait Draw: Context2d {
    /// Draws a `size` rectangle whose `anchor` point sits at `position`.
    fn rect(&mut self, brush: &Brush, position: DVec2, size: DVec2, anchor: Anchor) {
        let origin = anchor.top_left(position, size);

        self.save();
        self.set_line_width(brush.thickness);

        if let Some(fill) = &brush.fill {
            self.set_fill_style(fill);
            self.fill_rect(origin.x, origin.y, size.x, size.y);
        }

        if let Some(stroke) = &brush.stroke {
            self.set_stroke_style(stroke);
            self.stroke_rect(origin.x, origin.y, size.x, size.y);
        }

        self.restore();
    }

    /// Draws an ellipse inscribed in the `2 * radius` box anchored at
    /// `position`.
    fn oval(&mut self, brush: &Brush, position: DVec2, radius: DVec2, anchor: Anchor) {
        let center = anchor.top_left(position, radius * 2.0) + radius;

        self.save();
        self.set_line_width(brush.thickness);
        self.begin_path();
        self.ellipse(center.x, center.y, radius.x, radius.y);
        self.paint(brush);
        self.restore();
    }

    /// Writes `text` with `font` (any CSS `font` value). The anchor picks the
    /// text alignment and baseline. A `max_width` of `None` or zero leaves the
    /// text unconstrained.
    fn write(
        &mut self,
        brush: &Brush,
        position: DVec2,
        text: &str,
        font: &str,
        anchor: Anchor,
        max_width: Option<f64>,
    ) {
        let max_width = max_width.filter(|width| *width > 0.0);

        self.save();
        self.set_line_width(brush.thickness);
        self.set_font(font);
        self.set_text_align(anchor.text_align());
        self.set_text_baseline(anchor.text_baseline());

        if let Some(fill) = &brush.fill {
            self.set_fill_style(fill);
            self.fill_text(text, position.x, position.y, max_width);
        }

        if let Some(stroke) = &brush.stroke {
            self.set_stroke_style(stroke);
            self.stroke_text(text, position.x, position.y, max_width);
        }

        self.restore();
    }

    /// Draws a polyline through `points`, optionally closing it.
    fn path(&mut self, brush: &Brush, points: &[DVec2], closed: bool) -> Result<(), CanvasError> {
        let [first, rest @ ..] = points else {
            return Err(CanvasError::EmptyPath(0));
        };

        if rest.is_empty() {
            return Err(CanvasError::EmptyPath(1));
        }

        self.save();
        self.set_line_width(brush.thickness);
        self.begin_path();
        self.move_to(first.x, first.y);

        for point in rest {
            self.line_to(point.x, point.y);
        }

        if closed {
            self.close_path();
        }

        self.paint(brush);
        self.restore();

        Ok(())
    }

    /// Draws the cubic-Bézier approximation of `curve` across a `size` box:
    /// time runs left to right, progress bottom to top.
    fn easing_curve(
        &mut self,
        brush: &Brush,
        position: DVec2,
        size: DVec2,
        curve: EasingCurve,
        anchor: Anchor,
    ) {
        let origin = anchor.top_left(position, size);
        let map = |x: f64, y: f64| origin + DVec2::new(x, 1.0 - y) * size;
        let ControlPoints { x1, y1, x2, y2 } = curve.control_points();
        let (start, first, second, end) = (map(0.0, 0.0), map(x1, y1), map(x2, y2), map(1.0, 1.0));

        self.save();
        self.set_line_width(brush.thickness);
        self.begin_path();
        self.move_to(start.x, start.y);
        self.bezier_curve_to(first.x, first.y, second.x, second.y, end.x, end.y);
        self.paint(brush);
        self.restore();
    }

    /// Draws `image` with its `anchor` point at `position`.
    fn image(&mut self, image: &RgbaImage, position: DVec2, anchor: Anchor) {
        let size = DVec2::new(f64::from(image.width()), f64::from(image.height()));
        let origin = anchor.top_left(position, size);

        self.draw_image(image, origin.x, origin.y);
    }

    fn set_shadow(&mut self, x: f64, y: f64, blur: f64, color: Color) {
        self.set_shadow_offset(x, y);
        self.set_shadow_blur(blur);
        self.set_shadow_color(color);
    }

    /// Resets the shadow to the canvas defaults.
    fn clear_shadow(&mut self) {
        self.set_shadow(0.0, 0.0, 0.0, Color::TRANSPARENT);
    }

    /// Fills then strokes the current path with whatever `brush` has.
    fn paint(&mut self, brush: &Brush) {
        if let Some(fill) = &brush.fill {
            self.set_fill_style(fill);
            self.fill();
        }

        if let Some(stroke) = &brush.stroke {
            self.set_stroke_style(stroke);
            self.stroke();
        }
    }
}

impl<T: Context2d + ?Sized> Draw for T {}

#[cfg(test)]
mod tests {
    use super::Draw;
    use crate::{
        Anchor, Brush, CanvasError, Command, Gradient, GradientKind, Recorder, Style, TextAlign,
        TextBaseline,
    };
    use axt_easing::EasingCurve;
    use axt_shared::Color;
    use glam::DVec2;
    use image::RgbaImage;

    #[test]
    fn test_rect_is_anchored_and_restores_state() {
        let mut recorder = Recorder::new(200, 200);
        let before = recorder.state().clone();
        let brush = Brush::fill(Color::RED).with_stroke(Color::BLUE, 3.0);

        recorder.rect(
            &brush,
            DVec2::new(100.0, 100.0),
            DVec2::new(40.0, 20.0),
            Anchor::CENTER,
        );

        assert_eq!(recorder.state(), &before);
        assert_eq!(
            recorder.commands(),
            [
                Command::Save,
                Command::LineWidth(3.0),
                Command::FillStyle(Style::Color(Color::RED)),
                Command::FillRect {
                    x: 80.0,
                    y: 90.0,
                    width: 40.0,
                    height: 20.0
                },
                Command::StrokeStyle(Style::Color(Color::BLUE)),
                Command::StrokeRect {
                    x: 80.0,
                    y: 90.0,
                    width: 40.0,
                    height: 20.0
                },
                Command::Restore,
            ]
        );
    }

    #[test]
    fn test_missing_passes_are_skipped() {
        let mut recorder = Recorder::new(10, 10);

        recorder.rect(
            &Brush::stroke(Color::BLACK, 1.0),
            DVec2::ZERO,
            DVec2::ONE,
            Anchor::TOP_LEFT,
        );

        assert!(
            !recorder
                .commands()
                .iter()
                .any(|command| matches!(command, Command::FillRect { .. }))
        );
    }

    #[test]
    fn test_write_sets_alignment_from_anchor() {
        let mut recorder = Recorder::new(100, 100);

        recorder.write(
            &Brush::fill(Color::WHITE),
            DVec2::new(50.0, 50.0),
            "score",
            "bold 16px monospace",
            Anchor::from_dir(9).unwrap(),
            Some(0.0),
        );

        let commands = recorder.commands();

        assert!(commands.contains(&Command::TextAlign(TextAlign::Right)));
        assert!(commands.contains(&Command::TextBaseline(TextBaseline::Bottom)));
        assert!(commands.contains(&Command::FillText {
            text: "score".to_string(),
            x: 50.0,
            y: 50.0,
            max_width: None,
        }));
        assert_eq!(recorder.state().font, "10px sans-serif");
    }

    #[test]
    fn test_ellipse_center() {
        let mut recorder = Recorder::new(100, 100);

        recorder.oval(
            &Brush::fill(Color::GREEN),
            DVec2::ZERO,
            DVec2::new(10.0, 5.0),
            Anchor::TOP_LEFT,
        );

        assert!(recorder.commands().contains(&Command::Ellipse {
            x: 10.0,
            y: 5.0,
            radius_x: 10.0,
            radius_y: 5.0,
        }));
        assert!(recorder.commands().contains(&Command::Fill));
        assert!(!recorder.commands().contains(&Command::Stroke));
    }

    #[test]
    fn test_path() {
        let mut recorder = Recorder::new(100, 100);
        let brush = Brush::stroke(Color::BLACK, 2.0);

        assert!(matches!(
            recorder.path(&brush, &[], false),
            Err(CanvasError::EmptyPath(0))
        ));
        assert!(matches!(
            recorder.path(&brush, &[DVec2::ZERO], false),
            Err(CanvasError::EmptyPath(1))
        ));
        assert!(recorder.commands().is_empty());

        recorder
            .path(&brush, &[DVec2::ZERO, DVec2::X, DVec2::ONE], true)
            .unwrap();

        let points: Vec<_> = recorder.path_points().collect();

        assert_eq!(points, [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert!(recorder.commands().contains(&Command::ClosePath));
    }

    #[test]
    fn test_easing_curve_spans_its_box() {
        let mut recorder = Recorder::new(100, 50);

        recorder.easing_curve(
            &Brush::stroke(Color::WHITE, 2.0),
            DVec2::new(50.0, 25.0),
            DVec2::new(100.0, 50.0),
            EasingCurve::LinearIn,
            Anchor::CENTER,
        );

        assert!(
            recorder
                .commands()
                .contains(&Command::BezierCurveTo([0.0, 50.0, 100.0, 0.0, 100.0, 0.0]))
        );

        let points: Vec<_> = recorder.path_points().collect();

        assert_eq!(points, [(0.0, 50.0), (100.0, 0.0)]);
        assert!(recorder.commands().contains(&Command::Stroke));
        assert!((recorder.state().line_width - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gradient_brush_is_scoped_to_the_verb() {
        let mut recorder = Recorder::new(100, 100);
        let kind = GradientKind::Linear {
            start: DVec2::ZERO,
            end: DVec2::new(100.0, 0.0),
        };
        let gradient = Gradient::eased(kind, Color::BLACK, Color::RED, EasingCurve::SineInOut, 8);
        let brush = Brush::fill(gradient.clone());

        recorder
            .path(&brush, &[DVec2::ZERO, DVec2::new(100.0, 0.0), DVec2::ONE * 100.0], true)
            .unwrap();

        assert!(
            recorder
                .commands()
                .contains(&Command::FillStyle(Style::Gradient(gradient)))
        );
        assert!(recorder.commands().contains(&Command::Fill));
        assert_eq!(recorder.state().fill_style, Style::Color(Color::BLACK));
        assert_eq!(recorder.commands().last(), Some(&Command::Restore));
    }

    #[test]
    fn test_image_and_shadow() {
        let mut recorder = Recorder::new(100, 100);
        let image = RgbaImage::new(8, 4);

        recorder.image(&image, DVec2::new(50.0, 50.0), Anchor::BOTTOM_RIGHT);
        recorder.set_shadow(2.0, 3.0, 4.0, Color::BLACK.with_alpha(0.5));

        assert_eq!(
            recorder.commands()[0],
            Command::DrawImage {
                x: 42.0,
                y: 46.0,
                width: 8,
                height: 4
            }
        );
        assert_eq!(recorder.state().shadow_offset, (2.0, 3.0));
        assert!((recorder.state().shadow_blur - 4.0).abs() < f64::EPSILON);

        recorder.clear_shadow();
        assert_eq!(recorder.state().shadow_color, Color::TRANSPARENT);
    }
}
