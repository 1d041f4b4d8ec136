use crate::{
    ControlPoints, CubicBezier, EasingError, ParametricCurve,
    formula::{Family, Variant},
};
use serde::{
    Deserialize, Serialize,
    de::{Error, Visitor},
};
use std::{fmt, str::FromStr};

/// Every easing curve in the catalog.
///
/// The declaration order is the catalog order: families in the order
/// Linear, Sine, Quad, Cubic, Quart, Expo, Circ, each as In, Out, InOut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EasingCurve {
    LinearIn,
    LinearOut,
    LinearInOut,
    SineIn,
    SineOut,
    SineInOut,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    CircIn,
    CircOut,
    CircInOut,
}

struct Entry {
    name: &'static str,
    css_name: &'static str,
    family: Family,
    variant: Variant,
    control_points: ControlPoints,
}

const fn entry(
    name: &'static str,
    css_name: &'static str,
    family: Family,
    variant: Variant,
    [x1, y1, x2, y2]: [f64; 4],
) -> Entry {
    Entry {
        name,
        css_name,
        family,
        variant,
        control_points: ControlPoints::new(x1, y1, x2, y2),
    }
}

// Indexed by `EasingCurve as usize`.
#[rustfmt::skip]
static CATALOG: [Entry; 21] = [
    entry("Linear_In", "linear", Family::Linear, Variant::In, [0.0, 0.0, 1.0, 1.0]),
    entry("Linear_Out", "linear", Family::Linear, Variant::Out, [0.0, 0.0, 1.0, 1.0]),
    entry("Linear_InOut", "linear", Family::Linear, Variant::InOut, [0.0, 0.0, 1.0, 1.0]),
    entry("Sine_In", "easeInSine", Family::Sine, Variant::In, [0.12, 0.0, 0.39, 0.0]),
    entry("Sine_Out", "easeOutSine", Family::Sine, Variant::Out, [0.61, 1.0, 0.88, 1.0]),
    entry("Sine_InOut", "easeInOutSine", Family::Sine, Variant::InOut, [0.37, 0.0, 0.63, 1.0]),
    entry("Quad_In", "easeInQuad", Family::Quad, Variant::In, [0.11, 0.0, 0.5, 0.0]),
    entry("Quad_Out", "easeOutQuad", Family::Quad, Variant::Out, [0.5, 1.0, 0.89, 1.0]),
    entry("Quad_InOut", "easeInOutQuad", Family::Quad, Variant::InOut, [0.45, 0.0, 0.55, 1.0]),
    entry("Cubic_In", "easeInCubic", Family::Cubic, Variant::In, [0.32, 0.0, 0.67, 0.0]),
    entry("Cubic_Out", "easeOutCubic", Family::Cubic, Variant::Out, [0.33, 1.0, 0.68, 1.0]),
    entry("Cubic_InOut", "easeInOutCubic", Family::Cubic, Variant::InOut, [0.65, 0.0, 0.35, 1.0]),
    entry("Quart_In", "easeInQuart", Family::Quart, Variant::In, [0.5, 0.0, 0.75, 0.0]),
    entry("Quart_Out", "easeOutQuart", Family::Quart, Variant::Out, [0.25, 1.0, 0.5, 1.0]),
    entry("Quart_InOut", "easeInOutQuart", Family::Quart, Variant::InOut, [0.76, 0.0, 0.24, 1.0]),
    entry("Expo_In", "easeInExpo", Family::Expo, Variant::In, [0.7, 0.0, 0.84, 0.0]),
    entry("Expo_Out", "easeOutExpo", Family::Expo, Variant::Out, [0.16, 1.0, 0.3, 1.0]),
    entry("Expo_InOut", "easeInOutExpo", Family::Expo, Variant::InOut, [0.87, 0.0, 0.13, 1.0]),
    entry("Circ_In", "easeInCirc", Family::Circ, Variant::In, [0.55, 0.0, 1.0, 0.45]),
    entry("Circ_Out", "easeOutCirc", Family::Circ, Variant::Out, [0.0, 0.55, 0.45, 1.0]),
    entry("Circ_InOut", "easeInOutCirc", Family::Circ, Variant::InOut, [0.85, 0.0, 0.15, 1.0]),
];

impl EasingCurve {
    pub const ALL: [Self; 21] = [
        Self::LinearIn,
        Self::LinearOut,
        Self::LinearInOut,
        Self::SineIn,
        Self::SineOut,
        Self::SineInOut,
        Self::QuadIn,
        Self::QuadOut,
        Self::QuadInOut,
        Self::CubicIn,
        Self::CubicOut,
        Self::CubicInOut,
        Self::QuartIn,
        Self::QuartOut,
        Self::QuartInOut,
        Self::ExpoIn,
        Self::ExpoOut,
        Self::ExpoInOut,
        Self::CircIn,
        Self::CircOut,
        Self::CircInOut,
    ];

    fn entry(self) -> &'static Entry {
        &CATALOG[self as usize]
    }

    pub const fn from_parts(family: Family, variant: Variant) -> Self {
        Self::ALL[family as usize * 3 + variant as usize]
    }

    /// Canonical catalog name, e.g. `Quad_InOut`.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// The CSS/easings.net spelling, e.g. `easeInOutQuad`. All three linear
    /// variants share `linear`.
    pub fn css_name(self) -> &'static str {
        self.entry().css_name
    }

    pub fn family(self) -> Family {
        self.entry().family
    }

    pub fn variant(self) -> Variant {
        self.entry().variant
    }

    /// Catalog entries whose canonical name contains `filter`, in catalog order.
    pub fn list(filter: &str) -> impl Iterator<Item = Self> + '_ {
        Self::ALL
            .into_iter()
            .filter(move |curve| curve.name().contains(filter))
    }

    /// Eases `x`. Values at or below 0 map to 0, at or above 1 map to 1; NaN
    /// maps to 0.
    pub fn convert(self, x: f64) -> f64 {
        if x.is_nan() || x <= 0.0 {
            0.0
        } else if x >= 1.0 {
            1.0
        } else {
            let entry = self.entry();

            entry.variant.apply(entry.family, x)
        }
    }

    /// Inverse of [`EasingCurve::convert`]. The result is clamped to `[0, 1]`,
    /// which matters for Expo: its raw formula never quite reaches either end.
    pub fn invert(self, y: f64) -> f64 {
        if y.is_nan() || y <= 0.0 {
            0.0
        } else if y >= 1.0 {
            1.0
        } else {
            let entry = self.entry();

            entry.variant.apply_inverse(entry.family, y).clamp(0.0, 1.0)
        }
    }

    /// Eases a value that lives on `[min, max]` instead of `[0, 1]`. An empty
    /// range returns `min`.
    pub fn convert_in_range(self, x: f64, min: f64, max: f64) -> f64 {
        let span = max - min;

        if span == 0.0 {
            return min;
        }

        self.convert((x - min) / span).mul_add(span, min)
    }

    pub fn control_points(self) -> ControlPoints {
        self.entry().control_points
    }

    /// Cubic Bézier approximation of this curve.
    pub fn bezier(self) -> CubicBezier {
        let ControlPoints { x1, y1, x2, y2 } = self.control_points();

        CubicBezier::new(x1, y1, x2, y2)
    }
}

impl ParametricCurve for EasingCurve {
    fn transform_internal(&self, t: f64) -> f64 {
        let entry = self.entry();

        entry.variant.apply(entry.family, t)
    }

    fn transform(&self, t: f64) -> f64 {
        self.convert(t)
    }
}

impl fmt::Display for EasingCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the canonical name (`Sine_In`) or its CSS alias (`easeInSine`).
/// `linear` resolves to [`EasingCurve::LinearIn`].
impl FromStr for EasingCurve {
    type Err = EasingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|curve| curve.name() == value)
            .or_else(|| Self::ALL.into_iter().find(|curve| curve.css_name() == value))
            .ok_or_else(|| EasingError::CurveNotFound(value.to_string()))
    }
}

impl Serialize for EasingCurve {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for EasingCurve {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct EasingCurveVisitor;

        impl Visitor<'_> for EasingCurveVisitor {
            type Value = EasingCurve;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("easing curve name")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                v.parse().map_err(Error::custom)
            }
        }

        deserializer.deserialize_str(EasingCurveVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::EasingCurve;
    use crate::{
        EasingError,
        formula::{Family, Variant},
    };

    #[test]
    fn test_catalog_is_consistent() {
        for (index, curve) in EasingCurve::ALL.into_iter().enumerate() {
            assert_eq!(curve as usize, index);
            assert_eq!(
                curve.name(),
                format!("{}_{}", curve.family().name(), curve.variant().name())
            );
            assert_eq!(EasingCurve::from_parts(curve.family(), curve.variant()), curve);
        }

        for family in Family::ALL {
            for variant in Variant::ALL {
                let curve = EasingCurve::from_parts(family, variant);

                assert_eq!((curve.family(), curve.variant()), (family, variant));
            }
        }
    }

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!("Sine_In".parse(), Ok(EasingCurve::SineIn));
        assert_eq!("easeInOutCirc".parse(), Ok(EasingCurve::CircInOut));
        assert_eq!("linear".parse(), Ok(EasingCurve::LinearIn));
        assert_eq!(
            "sine_in".parse::<EasingCurve>(),
            Err(EasingError::CurveNotFound("sine_in".to_string()))
        );

        for curve in EasingCurve::ALL {
            assert_eq!(curve.to_string().parse(), Ok(curve));
        }
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&EasingCurve::ExpoOut).unwrap();

        assert_eq!(json, "\"Expo_Out\"");
        assert_eq!(
            serde_json::from_str::<EasingCurve>("\"easeOutExpo\"").unwrap(),
            EasingCurve::ExpoOut
        );
        assert!(serde_json::from_str::<EasingCurve>("\"Bounce_In\"").is_err());
    }

    #[test]
    fn test_convert_in_range() {
        let value = EasingCurve::QuadIn.convert_in_range(15.0, 10.0, 20.0);

        assert!((value - 12.5).abs() < 1e-12);
        assert!((EasingCurve::QuadIn.convert_in_range(25.0, 10.0, 20.0) - 20.0).abs() < 1e-12);
        assert!((EasingCurve::LinearIn.convert_in_range(5.0, 5.0, 5.0) - 5.0).abs() < 1e-12);
        // A reversed range still maps min to min and max to max.
        assert!((EasingCurve::QuadIn.convert_in_range(15.0, 20.0, 10.0) - 17.5).abs() < 1e-12);
    }
}
