//! Viewport synchronizer: pushes the host camera into the foreign camera.
//!
//! Runs on every host render request. The host is the sole source of
//! truth for the viewport, so the push is unconditional and always
//! instantaneous; the foreign renderer never animates toward the target
//! and never re-centers on its own (its interaction handling is disabled
//! at construction).
//!
//! Ordering matches the compositing contract: rotation first when
//! nonzero, then center+zoom as a single jump. A zero rotation issues no
//! rotate call at all.

use tracing::trace;

use crate::coord::{to_foreign_bearing, to_foreign_coordinates, to_foreign_zoom, CoordError};
use crate::foreign::{CameraJump, ForeignMap};
use crate::host::ViewState;

/// Stateless camera synchronizer.
///
/// Synchronizing twice with the same host view is idempotent: the second
/// pass re-issues the same instantaneous jump, leaving the foreign camera
/// unchanged.
#[derive(Debug, Default)]
pub struct ViewportSynchronizer;

impl ViewportSynchronizer {
    /// Create a synchronizer.
    pub fn new() -> Self {
        Self
    }

    /// Align the foreign camera with the given host view.
    ///
    /// On conversion failure the jump is not issued and the error
    /// propagates so the caller can skip the frame; the foreign camera's
    /// center and zoom are left untouched.
    pub fn apply(&self, foreign: &mut dyn ForeignMap, view: &ViewState) -> Result<(), CoordError> {
        if view.rotation != 0.0 {
            let bearing = to_foreign_bearing(view.rotation);
            trace!(bearing, "rotating foreign camera");
            foreign.rotate_to(bearing);
        }

        let center = to_foreign_coordinates(view.center, view.projection)?;
        let zoom = to_foreign_zoom(view.zoom);
        trace!(lon = center.lon, lat = center.lat, zoom, "jumping foreign camera");
        foreign.jump_to(CameraJump { center, zoom });

        Ok(())
    }
}
