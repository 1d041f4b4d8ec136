use axt_easing::EasingCurve;
use axt_shared::{Color, Lerp};
use glam::DVec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientKind {
    Linear {
        start: DVec2,
        end: DVec2,
    },
    Radial {
        start: DVec2,
        start_radius: f64,
        end: DVec2,
        end_radius: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

/// A gradient with its stops kept sorted by offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub kind: GradientKind,
    stops: Vec<ColorStop>,
}

impl Gradient {
    pub const fn new(kind: GradientKind) -> Self {
        Self {
            kind,
            stops: Vec::new(),
        }
    }

    pub const fn linear(start: DVec2, end: DVec2) -> Self {
        Self::new(GradientKind::Linear { start, end })
    }

    pub const fn radial(start: DVec2, start_radius: f64, end: DVec2, end_radius: f64) -> Self {
        Self::new(GradientKind::Radial {
            start,
            start_radius,
            end,
            end_radius,
        })
    }

    /// A two-colour gradient whose transition follows `curve`, approximated by
    /// `steps` evenly spaced stops.
    #[allow(clippy::cast_possible_truncation)]
    pub fn eased(
        kind: GradientKind,
        from: Color,
        to: Color,
        curve: EasingCurve,
        steps: u16,
    ) -> Self {
        let steps = steps.max(1);
        let mut gradient = Self::new(kind);

        for step in 0..=steps {
            let offset = f64::from(step) / f64::from(steps);

            gradient.add_stop(offset, from.lerp(&to, curve.convert(offset) as f32));
        }

        gradient
    }

    /// Adds a stop. Offsets are clamped to `[0, 1]`; a stop at an offset that
    /// already has stops goes after them.
    pub fn add_stop(&mut self, offset: f64, color: Color) {
        let offset = if offset.is_nan() { 0.0 } else { offset.clamp(0.0, 1.0) };
        let index = self.stops.partition_point(|stop| stop.offset <= offset);

        self.stops.insert(index, ColorStop { offset, color });
    }

    #[must_use]
    pub fn with_stop(mut self, offset: f64, color: Color) -> Self {
        self.add_stop(offset, color);

        self
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// The colour the gradient shows at `offset`, or `None` without stops.
    #[allow(clippy::cast_possible_truncation)]
    pub fn color_at(&self, offset: f64) -> Option<Color> {
        let first = self.stops.first()?;
        let last = self.stops.last()?;

        if offset.is_nan() || offset <= first.offset {
            return Some(first.color);
        }

        if offset >= last.offset {
            return Some(last.color);
        }

        let index = self.stops.partition_point(|stop| stop.offset <= offset);
        let (before, after) = (self.stops[index - 1], self.stops[index]);
        let x = (offset - before.offset) / (after.offset - before.offset);

        Some(before.color.lerp(&after.color, x as f32))
    }
}

/// A fill or stroke style as the 2D context understands it.
#[derive(Debug, Clone, PartialEq)]
pub enum Style {
    Color(Color),
    Gradient(Gradient),
}

impl From<Color> for Style {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<Gradient> for Style {
    fn from(value: Gradient) -> Self {
        Self::Gradient(value)
    }
}

/// What the drawing helpers paint with. A missing fill or stroke skips that
/// pass entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    pub fill: Option<Style>,
    pub stroke: Option<Style>,
    pub thickness: f64,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: None,
            thickness: 1.0,
        }
    }
}

impl Brush {
    pub fn fill<S: Into<Style>>(style: S) -> Self {
        Self {
            fill: Some(style.into()),
            ..Self::default()
        }
    }

    pub fn stroke<S: Into<Style>>(style: S, thickness: f64) -> Self {
        Self {
            stroke: Some(style.into()),
            thickness,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_stroke<S: Into<Style>>(mut self, style: S, thickness: f64) -> Self {
        self.stroke = Some(style.into());
        self.thickness = thickness;

        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Gradient, GradientKind};
    use axt_easing::EasingCurve;
    use axt_shared::Color;
    use glam::DVec2;

    #[test]
    fn test_stops_stay_sorted_and_clamped() {
        let gradient = Gradient::linear(DVec2::ZERO, DVec2::X)
            .with_stop(0.8, Color::BLUE)
            .with_stop(-1.0, Color::RED)
            .with_stop(0.5, Color::GREEN)
            .with_stop(0.5, Color::WHITE);

        let offsets: Vec<_> = gradient.stops().iter().map(|stop| stop.offset).collect();

        assert_eq!(offsets, [0.0, 0.5, 0.5, 0.8]);
        assert_eq!(gradient.stops()[1].color, Color::GREEN);
        assert_eq!(gradient.stops()[2].color, Color::WHITE);
    }

    #[test]
    fn test_color_at() {
        let gradient = Gradient::linear(DVec2::ZERO, DVec2::X)
            .with_stop(0.0, Color::BLACK)
            .with_stop(1.0, Color::WHITE);

        assert_eq!(gradient.color_at(-1.0), Some(Color::BLACK));
        assert_eq!(gradient.color_at(0.5), Some(Color::new(128, 128, 128, 255)));
        assert_eq!(gradient.color_at(2.0), Some(Color::WHITE));
        assert_eq!(Gradient::linear(DVec2::ZERO, DVec2::X).color_at(0.5), None);
    }

    #[test]
    fn test_eased_gradient() {
        let kind = GradientKind::Linear {
            start: DVec2::ZERO,
            end: DVec2::new(0.0, 100.0),
        };
        let gradient = Gradient::eased(kind, Color::BLACK, Color::WHITE, EasingCurve::QuadIn, 4);

        assert_eq!(gradient.stops().len(), 5);
        assert_eq!(gradient.stops()[0].color, Color::BLACK);
        assert_eq!(gradient.stops()[2].color, Color::new(64, 64, 64, 255));
        assert_eq!(gradient.stops()[4].color, Color::WHITE);
    }
}
