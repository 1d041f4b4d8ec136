use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EasingError {
    #[error("easing curve not found: {0:?}")]
    CurveNotFound(String),
}
