use crate::Style;
use axt_shared::Color;
use image::RgbaImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextBaseline {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// The subset of a host 2D rendering context the drawing helpers are built on.
///
/// `save` and `restore` must behave like their canvas counterparts: they push
/// and pop every style property set through this trait.
pub trait Context2d {
    fn save(&mut self);
    fn restore(&mut self);

    fn set_fill_style(&mut self, style: &Style);
    fn set_stroke_style(&mut self, style: &Style);
    fn set_line_width(&mut self, width: f64);
    fn set_font(&mut self, font: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    fn set_shadow_offset(&mut self, x: f64, y: f64);
    fn set_shadow_blur(&mut self, blur: f64);
    fn set_shadow_color(&mut self, color: Color);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, max_width: Option<f64>);
    fn stroke_text(&mut self, text: &str, x: f64, y: f64, max_width: Option<f64>);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64);
    /// Full-turn, unrotated ellipse around `(x, y)`.
    fn ellipse(&mut self, x: f64, y: f64, radius_x: f64, radius_y: f64);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn draw_image(&mut self, image: &RgbaImage, x: f64, y: f64);
}

/// Something that owns a 2D context.
pub trait Surface {
    type Context: Context2d;

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn ctx(&mut self) -> &mut Self::Context;
}
