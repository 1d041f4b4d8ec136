use std::f64::consts::PI;

/// Curve family. Each family is defined by its ease-in formula and that
/// formula's inverse; the out and in-out shapes are derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    Linear,
    Sine,
    Quad,
    Cubic,
    Quart,
    Expo,
    Circ,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    In,
    Out,
    InOut,
}

impl Family {
    pub const ALL: [Self; 7] = [
        Self::Linear,
        Self::Sine,
        Self::Quad,
        Self::Cubic,
        Self::Quart,
        Self::Expo,
        Self::Circ,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Sine => "Sine",
            Self::Quad => "Quad",
            Self::Cubic => "Cubic",
            Self::Quart => "Quart",
            Self::Expo => "Expo",
            Self::Circ => "Circ",
        }
    }

    /// Raw ease-in formula. Only meaningful on `[0, 1]`.
    pub fn ease_in(self, x: f64) -> f64 {
        match self {
            Self::Linear => x,
            Self::Sine => 1.0 - (x * PI / 2.0).cos(),
            Self::Quad => x.powi(2),
            Self::Cubic => x.powi(3),
            Self::Quart => x.powi(4),
            Self::Expo => 2f64.powf(10.0 * x - 10.0),
            Self::Circ => 1.0 - (1.0 - x.powi(2)).sqrt(),
        }
    }

    /// Inverse of [`Family::ease_in`].
    pub fn ease_in_inverse(self, y: f64) -> f64 {
        match self {
            Self::Linear => y,
            Self::Sine => 2.0 * (1.0 - y).acos() / PI,
            Self::Quad => y.sqrt(),
            Self::Cubic => y.cbrt(),
            Self::Quart => y.sqrt().sqrt(),
            Self::Expo => y.log2() / 10.0 + 1.0,
            Self::Circ => (2.0 * y - y.powi(2)).sqrt(),
        }
    }
}

impl Variant {
    pub const ALL: [Self; 3] = [Self::In, Self::Out, Self::InOut];

    pub const fn name(self) -> &'static str {
        match self {
            Self::In => "In",
            Self::Out => "Out",
            Self::InOut => "InOut",
        }
    }

    pub fn apply(self, family: Family, x: f64) -> f64 {
        match self {
            Self::In => family.ease_in(x),
            Self::Out => 1.0 - family.ease_in(1.0 - x),
            Self::InOut => {
                if x < 0.5 {
                    family.ease_in(2.0 * x) / 2.0
                } else {
                    1.0 - family.ease_in(2.0 - 2.0 * x) / 2.0
                }
            }
        }
    }

    pub fn apply_inverse(self, family: Family, y: f64) -> f64 {
        match self {
            Self::In => family.ease_in_inverse(y),
            Self::Out => 1.0 - family.ease_in_inverse(1.0 - y),
            Self::InOut => {
                if y < 0.5 {
                    family.ease_in_inverse(2.0 * y) / 2.0
                } else {
                    1.0 - family.ease_in_inverse(2.0 - 2.0 * y) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Family, Variant};
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_closed_forms() {
        let x = 0.3f64;

        let cases = [
            (Variant::Out, Family::Sine, x, (x * PI / 2.0).sin()),
            (Variant::InOut, Family::Sine, x, -((PI * x).cos() - 1.0) / 2.0),
            (Variant::InOut, Family::Cubic, x, 4.0 * x.powi(3)),
            (Variant::InOut, Family::Quart, 0.8, 1.0 - (-2.0f64 * 0.8 + 2.0).powi(4) / 2.0),
            (Variant::Out, Family::Expo, x, 1.0 - 2f64.powf(-10.0 * x)),
            (Variant::InOut, Family::Expo, 0.7, (2.0 - 2f64.powf(-20.0 * 0.7 + 10.0)) / 2.0),
            (Variant::Out, Family::Circ, x, (1.0 - (x - 1.0).powi(2)).sqrt()),
            (
                Variant::InOut,
                Family::Circ,
                0.2,
                (1.0 - (1.0 - (2.0f64 * 0.2).powi(2)).sqrt()) / 2.0,
            ),
        ];

        for (variant, family, x, expected) in cases {
            let actual = variant.apply(family, x);

            assert!(
                (actual - expected).abs() < EPSILON,
                "{family:?} {variant:?} at {x}: {actual} != {expected}"
            );
        }
    }

    #[test]
    fn test_in_out_meets_at_midpoint() {
        for family in Family::ALL {
            let left = family.ease_in(1.0) / 2.0;
            let right = Variant::InOut.apply(family, 0.5);

            assert!((left - 0.5).abs() < EPSILON, "{family:?} left half ends at {left}");
            assert!((right - 0.5).abs() < EPSILON, "{family:?} right half starts at {right}");
        }
    }
}
