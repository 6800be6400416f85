//! Contract failures raised by the stroke model.

use super::stroke::StrokeId;
use thiserror::Error;

/// Precondition violations in the stroke model.
///
/// These indicate a caller bug rather than bad user input; the input state
/// machine guards against them before calling in.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrokeError {
    #[error("stroke {0} is still live; commit or discard it before starting another")]
    LiveStrokeActive(StrokeId),

    #[error("path was extended before begin was called")]
    PathNotBegun,
}
