//! Bridge error types.

use thiserror::Error;

use crate::coord::CoordError;
use crate::foreign::ForeignMapError;

/// Errors surfaced to the host by the bridge.
///
/// The bridge performs no retries anywhere: configuration errors are
/// fatal at attach time, synchronization errors skip the current frame,
/// and the only retryable concern (resource loading) belongs to the
/// foreign renderer itself.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Host view or projection missing at attach time. Fatal: the
    /// foreign renderer cannot be constructed without an initial camera.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Coordinate conversion failed during render. The caller skips the
    /// frame rather than crashing the host's render loop.
    #[error("viewport sync failed: {0}")]
    Sync(#[from] CoordError),

    /// The foreign renderer failed to construct or redraw.
    #[error("foreign renderer error: {0}")]
    Renderer(#[from] ForeignMapError),

    /// Render was called before the layer was attached to a host map.
    #[error("layer is not attached to a host map")]
    NotAttached,
}
