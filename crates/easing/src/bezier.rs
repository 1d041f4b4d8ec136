use crate::ParametricCurve;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two inner control points of a cubic Bézier timing function. The outer
/// points are fixed at `(0, 0)` and `(1, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ControlPoints {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl ControlPoints {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub const fn to_array(self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }
}

impl From<[f64; 4]> for ControlPoints {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl From<ControlPoints> for [f64; 4] {
    fn from(value: ControlPoints) -> Self {
        value.to_array()
    }
}

/// CSS `cubic-bezier(...)` notation.
impl fmt::Display for ControlPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CubicBezier {
    points: ControlPoints,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            points: ControlPoints::new(x1, y1, x2, y2),
        }
    }

    pub const fn control_points(&self) -> ControlPoints {
        self.points
    }

    /// Samples the timing function the way browsers do: find the parameter
    /// `p` where `Bx(p) == t`, then return `By(p)`.
    ///
    /// Newton-Raphson first, bisection when the slope gets too flat. NaN
    /// samples as 0, like the catalog curves.
    pub fn sample(&self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }

        if t >= 1.0 {
            return 1.0;
        }

        let ControlPoints { x1, y1, x2, y2 } = self.points;
        let mut p = t;

        for _ in 0..8 {
            let err = bezier_sample(p, x1, x2) - t;

            if err.abs() < 1e-7 {
                return bezier_sample(p, y1, y2);
            }

            let slope = bezier_slope(p, x1, x2);

            if slope.abs() < 1e-7 {
                break;
            }

            p -= err / slope;
        }

        let mut lo = 0.0;
        let mut hi = 1.0;

        p = t;

        for _ in 0..30 {
            let value = bezier_sample(p, x1, x2);

            if (value - t).abs() < 1e-7 {
                break;
            }

            if value < t {
                lo = p;
            } else {
                hi = p;
            }

            p = (lo + hi) * 0.5;
        }

        bezier_sample(p, y1, y2)
    }
}

impl From<ControlPoints> for CubicBezier {
    fn from(points: ControlPoints) -> Self {
        Self { points }
    }
}

impl ParametricCurve for CubicBezier {
    fn transform_internal(&self, t: f64) -> f64 {
        self.sample(t)
    }
}

/// `B(t) = 3(1-t)²t·p1 + 3(1-t)t²·p2 + t³` in Horner form.
#[inline]
fn bezier_sample(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;

    ((a * t + b) * t + c) * t
}

#[inline]
fn bezier_slope(t: f64, p1: f64, p2: f64) -> f64 {
    let a = 1.0 - 3.0 * p2 + 3.0 * p1;
    let b = 3.0 * p2 - 6.0 * p1;
    let c = 3.0 * p1;

    (3.0 * a * t + 2.0 * b) * t + c
}

#[cfg(test)]
mod tests {
    use super::{ControlPoints, CubicBezier};

    #[test]
    fn test_identity_bezier() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);

        for step in 0..=20 {
            let t = f64::from(step) / 20.0;

            assert!((linear.sample(t) - t).abs() < 1e-6, "sample({t})");
        }
    }

    #[test]
    fn test_endpoints_are_exact() {
        let bezier = CubicBezier::new(0.87, 0.0, 0.13, 1.0);

        assert!(bezier.sample(0.0).abs() < f64::EPSILON);
        assert!((bezier.sample(1.0) - 1.0).abs() < f64::EPSILON);
        assert!(bezier.sample(-3.0).abs() < f64::EPSILON);
        assert!((bezier.sample(3.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nan_samples_as_zero() {
        let ease_in_out = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

        assert!(ease_in_out.sample(f64::NAN).abs() < f64::EPSILON);
    }

    #[test]
    fn test_css_notation() {
        let points = ControlPoints::new(0.45, 0.0, 0.55, 1.0);

        assert_eq!(points.to_string(), "cubic-bezier(0.45, 0, 0.55, 1)");
        assert_eq!(ControlPoints::from(points.to_array()), points);
    }
}
