use axt_shared::{Color, Lerp};
use serde::{Deserialize, Serialize};

/// Serialized externally tagged, with colours as hex strings:
/// `{"Color":"#ff0000ff"}` or `{"Float":0.5}`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum TweenValue {
    Color(Color),
    Float(f32),
}

impl Lerp for TweenValue {
    /// Values of different kinds can't be blended; they snap to `end` once
    /// `x` reaches 1.
    fn lerp(&self, end: &Self, x: f32) -> Self {
        match (self, end) {
            (Self::Color(a), Self::Color(b)) => Self::Color(a.lerp(b, x)),
            (Self::Float(a), Self::Float(b)) => Self::Float(a.lerp(b, x)),
            _ if x >= 1.0 => *end,
            _ => *self,
        }
    }
}

impl From<Color> for TweenValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<f32> for TweenValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl TryFrom<TweenValue> for Color {
    type Error = TweenValue;

    fn try_from(value: TweenValue) -> Result<Self, Self::Error> {
        match value {
            TweenValue::Color(value) => Ok(value),
            TweenValue::Float(_) => Err(value),
        }
    }
}

impl TryFrom<TweenValue> for f32 {
    type Error = TweenValue;

    fn try_from(value: TweenValue) -> Result<Self, Self::Error> {
        match value {
            TweenValue::Float(value) => Ok(value),
            TweenValue::Color(_) => Err(value),
        }
    }
}
