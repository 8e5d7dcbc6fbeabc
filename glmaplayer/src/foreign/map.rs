//! The `ForeignMap` trait and its camera model.

use std::sync::Arc;

use thiserror::Error;

use crate::coord::LonLat;

use super::options::MapOptions;
use super::surface::{CanvasHandle, ControlsHandle};

/// Errors originating in the foreign renderer.
#[derive(Debug, Error)]
pub enum ForeignMapError {
    /// The renderer could not be constructed from the given options.
    #[error("failed to initialize foreign renderer: {0}")]
    Init(String),

    /// A forced synchronous redraw failed.
    #[error("foreign renderer redraw failed: {0}")]
    Render(String),
}

/// The foreign renderer's camera in its own conventions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ForeignCamera {
    /// Camera center as lon/lat.
    pub center: LonLat,
    /// Zoom level in the foreign convention (one coarser than the host).
    pub zoom: f64,
    /// Bearing in degrees, clockwise positive.
    pub bearing: f64,
}

/// An instantaneous center+zoom update.
///
/// There is deliberately no animation flag: the bridge only ever issues
/// non-animated jumps, so the type cannot express an eased transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraJump {
    /// New camera center.
    pub center: LonLat,
    /// New zoom level in the foreign convention.
    pub zoom: f64,
}

/// Outcome of asking the foreign renderer to cancel its queued frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameCancellation {
    /// A queued frame existed and was cancelled.
    Cancelled,
    /// The scheduler was reachable but no frame was queued.
    NonePending,
    /// The renderer exposes no cancellation handle.
    ///
    /// This is the fragile-internals case: the handle the bridge relies
    /// on may be absent or renamed across renderer versions. Callers must
    /// treat it as a swallowed, logged condition.
    Unsupported,
}

/// Observer for the foreign renderer's load-completion event.
///
/// Fired exactly once, when the style and initial resources finish
/// loading. Not cancelable and never retried by the bridge.
pub trait LoadObserver: Send + Sync {
    /// The foreign renderer finished loading.
    fn loaded(&self);
}

/// Interface the embedded renderer exposes to the bridge.
///
/// The bridge is the exclusive driver of an instance: the host never
/// mutates it directly, and its own interaction handling is disabled at
/// construction time through [`MapOptions`].
pub trait ForeignMap: Send {
    /// Move the camera to the given center and zoom, instantaneously.
    fn jump_to(&mut self, jump: CameraJump);

    /// Rotate the camera to the given bearing in degrees, instantaneously.
    fn rotate_to(&mut self, bearing: f64);

    /// Current camera state.
    fn camera(&self) -> ForeignCamera;

    /// Register the observer for the load-completion event.
    fn on_load(&mut self, observer: Arc<dyn LoadObserver>);

    /// Cancel the frame the renderer's internal scheduler has queued, if
    /// any. Best-effort; see [`FrameCancellation`].
    fn cancel_pending_frame(&mut self) -> FrameCancellation;

    /// Perform one synchronous redraw, bypassing the internal scheduler.
    fn render_sync(&mut self) -> Result<(), ForeignMapError>;

    /// Shared handle to the output canvas.
    fn canvas(&self) -> CanvasHandle;

    /// Shared handle to the default chrome container.
    fn controls(&self) -> ControlsHandle;
}

/// Constructs foreign renderer instances for the lifecycle adapter.
pub trait ForeignMapFactory: Send + Sync {
    /// Create a renderer from the given options.
    fn create(&self, options: MapOptions) -> Result<Box<dyn ForeignMap>, ForeignMapError>;
}
