use crate::{CanvasError, TextAlign, TextBaseline};
use glam::DVec2;

/// Which point of a box its `(x, y)` refers to, numbered like a phone keypad:
/// 1–3 along the top, 4–6 through the middle, 7–9 along the bottom, each row
/// going left, center, right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Anchor {
    column: u8,
    row: u8,
}

impl Anchor {
    pub const TOP_LEFT: Self = Self::new(0, 0);
    pub const TOP: Self = Self::new(1, 0);
    pub const TOP_RIGHT: Self = Self::new(2, 0);
    pub const LEFT: Self = Self::new(0, 1);
    pub const CENTER: Self = Self::new(1, 1);
    pub const RIGHT: Self = Self::new(2, 1);
    pub const BOTTOM_LEFT: Self = Self::new(0, 2);
    pub const BOTTOM: Self = Self::new(1, 2);
    pub const BOTTOM_RIGHT: Self = Self::new(2, 2);

    const fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }

    pub fn from_dir(dir: u8) -> Result<Self, CanvasError> {
        match dir {
            1..=9 => Ok(Self::new((dir - 1) % 3, (dir - 1) / 3)),
            _ => Err(CanvasError::InvalidAnchor(dir)),
        }
    }

    pub const fn dir(self) -> u8 {
        self.row * 3 + self.column + 1
    }

    pub const fn text_align(self) -> TextAlign {
        match self.column {
            0 => TextAlign::Left,
            1 => TextAlign::Center,
            _ => TextAlign::Right,
        }
    }

    pub const fn text_baseline(self) -> TextBaseline {
        match self.row {
            0 => TextBaseline::Top,
            1 => TextBaseline::Middle,
            _ => TextBaseline::Bottom,
        }
    }

    /// Top-left corner of a `size` box whose anchor point sits at `position`.
    pub fn top_left(self, position: DVec2, size: DVec2) -> DVec2 {
        position - size * DVec2::new(f64::from(self.column), f64::from(self.row)) / 2.0
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Self::TOP_LEFT
    }
}

impl TryFrom<u8> for Anchor {
    type Error = CanvasError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_dir(value)
    }
}
