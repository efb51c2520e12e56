use std::path::PathBuf;
use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// A pinned self-test value did not come out as expected.
    #[error("computation integrity check failed: {0}")]
    ComputationIntegrity(String),
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to load fonts: {0}")]
    Font(String),
    #[error("failed to render figure: {0}")]
    Plot(String),
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] png::EncodingError),
}
impl<E: std::error::Error + Send + Sync + 'static> From<DrawingAreaErrorKind<E>> for ReferenceError {
    fn from(value: DrawingAreaErrorKind<E>) -> Self {
        match value {
            DrawingAreaErrorKind::BackendError(err) => {
                ReferenceError::Plot(format!("drawing backend: {err}"))
            }
            other => ReferenceError::Plot(format!("drawing area: {other}")),
        }
    }
}
