//! Drawing helpers over a host 2D context, plus a layer compositor for
//! flattening finished frames.

mod anchor;
mod context;
mod draw;
mod error;
mod layers;
mod recorder;
mod style;

pub use self::{
    anchor::Anchor,
    context::{Context2d, Surface, TextAlign, TextBaseline},
    draw::Draw,
    error::CanvasError,
    layers::{Layer, LayeredCanvas},
    recorder::{Command, Recorder, StyleState},
    style::{Brush, ColorStop, Gradient, GradientKind, Style},
};
