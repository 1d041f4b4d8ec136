mod color;
mod lerp;

pub use self::{
    color::{Color, ParseColorError},
    lerp::Lerp,
};
