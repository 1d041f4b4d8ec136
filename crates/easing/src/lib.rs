//! Easing curves for animation interpolation.
//!
//! Every curve in the catalog maps normalized time in `[0, 1]` to normalized
//! progress in `[0, 1]`, can be inverted analytically, and has a cubic-Bézier
//! approximation for consumers that only speak CSS timing functions.
//!
//! The typed API on [`EasingCurve`] is infallible. The `*_named` functions take
//! a curve name and report an unknown name as [`EasingError::CurveNotFound`].
//! [`convert_or_identity`] is the only entry point that swallows an unknown
//! name, and it says so in its name.

mod bezier;
mod curve;
mod error;
mod formula;

pub use self::{
    bezier::{ControlPoints, CubicBezier},
    curve::EasingCurve,
    error::EasingError,
    formula::{Family, Variant},
};

/// A curve over normalized time.
pub trait ParametricCurve {
    /// The raw formula, without any clamping.
    fn transform_internal(&self, t: f64) -> f64;

    /// Evaluates the curve, pinning the ends: `t <= 0` gives 0 and `t >= 1`
    /// gives 1.
    fn transform(&self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            0.0
        } else if t >= 1.0 {
            1.0
        } else {
            self.transform_internal(t)
        }
    }
}

/// Every catalog curve whose name contains `filter`, in catalog order. An empty
/// filter returns the whole catalog.
pub fn list_curves(filter: &str) -> Vec<EasingCurve> {
    EasingCurve::list(filter).collect()
}

pub fn convert(curve: EasingCurve, x: f64) -> f64 {
    curve.convert(x)
}

pub fn invert(curve: EasingCurve, y: f64) -> f64 {
    curve.invert(y)
}

pub fn convert_in_range(curve: EasingCurve, x: f64, min: f64, max: f64) -> f64 {
    curve.convert_in_range(x, min, max)
}

pub fn control_points(curve: EasingCurve) -> ControlPoints {
    curve.control_points()
}

pub fn convert_named(name: &str, x: f64) -> Result<f64, EasingError> {
    Ok(name.parse::<EasingCurve>()?.convert(x))
}

pub fn invert_named(name: &str, y: f64) -> Result<f64, EasingError> {
    Ok(name.parse::<EasingCurve>()?.invert(y))
}

pub fn convert_in_range_named(
    name: &str,
    x: f64,
    min: f64,
    max: f64,
) -> Result<f64, EasingError> {
    Ok(name.parse::<EasingCurve>()?.convert_in_range(x, min, max))
}

pub fn control_points_named(name: &str) -> Result<ControlPoints, EasingError> {
    Ok(name.parse::<EasingCurve>()?.control_points())
}

/// Like [`convert_named`], but an unknown name eases nothing: `x` is returned
/// as given (unclamped), and a warning is logged.
pub fn convert_or_identity(name: &str, x: f64) -> f64 {
    match name.parse::<EasingCurve>() {
        Ok(curve) => curve.convert(x),
        Err(err) => {
            tracing::warn!(%err, "falling back to identity easing");

            x
        }
    }
}
