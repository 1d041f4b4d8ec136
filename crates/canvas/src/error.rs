use thiserror::Error;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("anchor must be between 1 and 9, got {0}")]
    InvalidAnchor(u8),
    #[error("a path needs at least two points, got {0}")]
    EmptyPath(usize),
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
}
