use crate::CanvasError;
use image::{ImageFormat, RgbaImage, imageops};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum Layer {
    Image(RgbaImage),
    Canvas(LayeredCanvas),
}

impl From<RgbaImage> for Layer {
    fn from(value: RgbaImage) -> Self {
        Self::Image(value)
    }
}

impl From<LayeredCanvas> for Layer {
    fn from(value: LayeredCanvas) -> Self {
        Self::Canvas(value)
    }
}

/// A fixed-size target that flattens a stack of layers. Every layer is drawn
/// at the origin, first layer at the bottom; anything past the target's edge is
/// clipped.
#[derive(Debug, Clone)]
pub struct LayeredCanvas {
    pub layers: Vec<Layer>,
    target: RgbaImage,
}

impl LayeredCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            layers: Vec::new(),
            target: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.target.width()
    }

    pub fn height(&self) -> u32 {
        self.target.height()
    }

    pub fn push<L: Into<Layer>>(&mut self, layer: L) {
        self.layers.push(layer.into());
    }

    /// Clears the target and alpha-blends every layer onto it in order.
    pub fn composite(&mut self) -> &RgbaImage {
        tracing::trace!(
            layers = self.layers.len(),
            width = self.width(),
            height = self.height(),
            "compositing"
        );

        self.target.fill(0);

        for layer in &mut self.layers {
            match layer {
                Layer::Image(image) => imageops::overlay(&mut self.target, image, 0, 0),
                Layer::Canvas(canvas) => {
                    imageops::overlay(&mut self.target, canvas.composite(), 0, 0);
                }
            }
        }

        &self.target
    }

    pub fn into_image(mut self) -> RgbaImage {
        self.composite();

        self.target
    }

    pub fn save_png<P: AsRef<Path>>(&mut self, path: P) -> Result<(), CanvasError> {
        self.composite()
            .save_with_format(path.as_ref(), ImageFormat::Png)?;

        tracing::debug!(path = %path.as_ref().display(), "saved composite");

        Ok(())
    }
}
