use crate::Color;

pub trait Lerp {
    #[must_use]
    fn lerp(&self, end: &Self, x: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, end: &Self, x: f32) -> Self {
        self * (1.0 - x) + end * x
    }
}

impl Lerp for f64 {
    fn lerp(&self, end: &Self, x: f32) -> Self {
        let x = f64::from(x);

        self * (1.0 - x) + end * x
    }
}

impl Lerp for Color {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn lerp(&self, end: &Self, x: f32) -> Self {
        let channel = |a: u8, b: u8| {
            f32::from(a)
                .lerp(&f32::from(b), x)
                .round()
                .clamp(0.0, 255.0) as u8
        };

        Self::new(
            channel(self.get_red(), end.get_red()),
            channel(self.get_green(), end.get_green()),
            channel(self.get_blue(), end.get_blue()),
            channel(self.get_alpha(), end.get_alpha()),
        )
    }
}
