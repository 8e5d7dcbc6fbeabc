//! Frame compositor: forces an in-phase redraw and hands back the raster.
//!
//! Left alone, the foreign renderer redraws on its own animation timer,
//! out of phase with the host's render loop; the composite would show a
//! stale or flickering frame. The compositor aligns the cameras, cancels
//! whatever the foreign scheduler already queued for this tick, then
//! forces one synchronous redraw so the returned surface reflects this
//! frame's camera exactly, with no dependence on the foreign timer
//! firing.
//!
//! The cancellation step reaches toward renderer internals and is
//! fail-open: a renderer that exposes no cancellation handle degrades to
//! potential one-frame lag, logged once, never an error.

use tracing::{trace, warn};

use crate::error::BridgeError;
use crate::foreign::{CanvasHandle, ForeignMap, FrameCancellation};
use crate::host::FrameState;
use crate::sync::ViewportSynchronizer;

/// Produces one composited raster per host frame.
#[derive(Debug, Default)]
pub struct FrameCompositor {
    synchronizer: ViewportSynchronizer,
    cancellation_warned: bool,
}

impl FrameCompositor {
    /// Create a compositor.
    pub fn new() -> Self {
        Self {
            synchronizer: ViewportSynchronizer::new(),
            cancellation_warned: false,
        }
    }

    /// Render one frame and return the foreign renderer's surface.
    ///
    /// Synchronizes the cameras, suppresses the foreign scheduler, and
    /// forces a synchronous redraw. Every call redraws, even when the
    /// camera is unchanged; there is deliberately no caching shortcut.
    pub fn render_frame(
        &mut self,
        foreign: &mut dyn ForeignMap,
        frame_state: &FrameState,
    ) -> Result<CanvasHandle, BridgeError> {
        self.synchronizer.apply(foreign, &frame_state.view_state)?;

        match foreign.cancel_pending_frame() {
            FrameCancellation::Cancelled => {
                trace!("cancelled the foreign renderer's queued frame");
            }
            FrameCancellation::NonePending => {}
            FrameCancellation::Unsupported => {
                if !self.cancellation_warned {
                    warn!(
                        "foreign renderer exposes no frame-cancellation handle; \
                         its own queued frames may lag the composite by one tick"
                    );
                    self.cancellation_warned = true;
                }
            }
        }

        foreign.render_sync()?;

        Ok(foreign.canvas())
    }
}
