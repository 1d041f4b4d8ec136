use crate::{Context2d, Style, Surface, TextAlign, TextBaseline};
use axt_shared::Color;
use image::RgbaImage;

/// Style properties a [`Recorder`] tracks across `save`/`restore`.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleState {
    pub fill_style: Style,
    pub stroke_style: Style,
    pub line_width: f64,
    pub font: String,
    pub text_align: TextAlign,
    pub text_baseline: TextBaseline,
    pub shadow_offset: (f64, f64),
    pub shadow_blur: f64,
    pub shadow_color: Color,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            fill_style: Style::Color(Color::BLACK),
            stroke_style: Style::Color(Color::BLACK),
            line_width: 1.0,
            font: "10px sans-serif".to_string(),
            text_align: TextAlign::default(),
            text_baseline: TextBaseline::default(),
            shadow_offset: (0.0, 0.0),
            shadow_blur: 0.0,
            shadow_color: Color::TRANSPARENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Save,
    Restore,
    FillStyle(Style),
    StrokeStyle(Style),
    LineWidth(f64),
    Font(String),
    TextAlign(TextAlign),
    TextBaseline(TextBaseline),
    ShadowOffset(f64, f64),
    ShadowBlur(f64),
    ShadowColor(Color),
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    StrokeRect { x: f64, y: f64, width: f64, height: f64 },
    FillText { text: String, x: f64, y: f64, max_width: Option<f64> },
    StrokeText { text: String, x: f64, y: f64, max_width: Option<f64> },
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    BezierCurveTo([f64; 6]),
    Ellipse { x: f64, y: f64, radius_x: f64, radius_y: f64 },
    ClosePath,
    Fill,
    Stroke,
    DrawImage { x: f64, y: f64, width: u32, height: u32 },
}

/// A headless context that keeps every call as a [`Command`].
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    width: u32,
    height: u32,
    state: StyleState,
    stack: Vec<StyleState>,
    commands: Vec<Command>,
}

impl Recorder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub const fn state(&self) -> &StyleState {
        &self.state
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// Every point the recorded paths visit, in drawing order.
    pub fn path_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            Command::MoveTo(x, y) | Command::LineTo(x, y) => Some((*x, *y)),
            Command::BezierCurveTo([.., x, y]) => Some((*x, *y)),
            _ => None,
        })
    }

    fn record(&mut self, command: Command) {
        self.commands.push(command);
    }
}

impl Context2d for Recorder {
    fn save(&mut self) {
        self.stack.push(self.state.clone());
        self.record(Command::Save);
    }

    /// Like the canvas API, an unbalanced `restore` is ignored.
    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }

        self.record(Command::Restore);
    }

    fn set_fill_style(&mut self, style: &Style) {
        self.state.fill_style = style.clone();
        self.record(Command::FillStyle(style.clone()));
    }

    fn set_stroke_style(&mut self, style: &Style) {
        self.state.stroke_style = style.clone();
        self.record(Command::StrokeStyle(style.clone()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
        self.record(Command::LineWidth(width));
    }

    fn set_font(&mut self, font: &str) {
        self.state.font = font.to_string();
        self.record(Command::Font(font.to_string()));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.text_align = align;
        self.record(Command::TextAlign(align));
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.text_baseline = baseline;
        self.record(Command::TextBaseline(baseline));
    }

    fn set_shadow_offset(&mut self, x: f64, y: f64) {
        self.state.shadow_offset = (x, y);
        self.record(Command::ShadowOffset(x, y));
    }

    fn set_shadow_blur(&mut self, blur: f64) {
        self.state.shadow_blur = blur;
        self.record(Command::ShadowBlur(blur));
    }

    fn set_shadow_color(&mut self, color: Color) {
        self.state.shadow_color = color;
        self.record(Command::ShadowColor(color));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.record(Command::FillRect {
            x,
            y,
            width,
            height,
        });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.record(Command::StrokeRect {
            x,
            y,
            width,
            height,
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, max_width: Option<f64>) {
        self.record(Command::FillText {
            text: text.to_string(),
            x,
            y,
            max_width,
        });
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64, max_width: Option<f64>) {
        self.record(Command::StrokeText {
            text: text.to_string(),
            x,
            y,
            max_width,
        });
    }

    fn begin_path(&mut self) {
        self.record(Command::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.record(Command::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.record(Command::LineTo(x, y));
    }

    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        self.record(Command::BezierCurveTo([cp1x, cp1y, cp2x, cp2y, x, y]));
    }

    fn ellipse(&mut self, x: f64, y: f64, radius_x: f64, radius_y: f64) {
        self.record(Command::Ellipse {
            x,
            y,
            radius_x,
            radius_y,
        });
    }

    fn close_path(&mut self) {
        self.record(Command::ClosePath);
    }

    fn fill(&mut self) {
        self.record(Command::Fill);
    }

    fn stroke(&mut self) {
        self.record(Command::Stroke);
    }

    fn draw_image(&mut self, image: &RgbaImage, x: f64, y: f64) {
        self.record(Command::DrawImage {
            x,
            y,
            width: image.width(),
            height: image.height(),
        });
    }
}

impl Surface for Recorder {
    type Context = Self;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn ctx(&mut self) -> &mut Self::Context {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Command, Recorder};
    use crate::{Anchor, Brush, Context2d, Draw, Surface};
    use axt_shared::Color;
    use glam::DVec2;

    fn frame<S: Surface>(surface: &mut S) -> DVec2 {
        let size = DVec2::new(f64::from(surface.width()), f64::from(surface.height()));

        surface
            .ctx()
            .rect(&Brush::fill(Color::BLUE), DVec2::ZERO, size, Anchor::TOP_LEFT);

        size
    }

    #[test]
    fn test_surface_draws_through_its_context() {
        let mut recorder = Recorder::new(320, 240);

        assert_eq!(frame(&mut recorder), DVec2::new(320.0, 240.0));
        assert!(recorder.commands().contains(&Command::FillRect {
            x: 0.0,
            y: 0.0,
            width: 320.0,
            height: 240.0,
        }));
    }

    #[test]
    fn test_unbalanced_restore_is_ignored() {
        let mut recorder = Recorder::new(1, 1);

        recorder.set_line_width(4.0);
        recorder.restore();

        assert!((recorder.state().line_width - 4.0).abs() < f64::EPSILON);
        assert_eq!(recorder.take_commands().len(), 2);
        assert!(recorder.commands().is_empty());
    }
}
