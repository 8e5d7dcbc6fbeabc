//! Host map seam: the view state the host supplies and the handle the
//! bridge holds onto it.
//!
//! The host renderer owns the overall frame and all user interaction. The
//! bridge only ever reads from it (current view, container element) and
//! asks it for one thing: an extra render pass once the foreign renderer
//! finishes loading. Everything else flows the other way, host to bridge,
//! through [`FrameState`] on each render call.

use serde::{Deserialize, Serialize};

use crate::coord::{Point2, Projection};

/// Opaque handle to the host's container element.
///
/// The foreign renderer is configured to share this container instead of
/// creating its own, so both engines draw into the same region of the
/// page or window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerHandle(String);

impl ContainerHandle {
    /// Create a handle for the container with the given element id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The container element id.
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// The host camera: center, zoom, and rotation in host conventions.
///
/// `projection` describes how `center` is encoded. A host view without a
/// projection cannot be synchronized; the bridge surfaces that as an error
/// rather than guessing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// View center in the host's projected coordinate system.
    pub center: Point2,
    /// Host zoom level (one level finer than the foreign convention).
    pub zoom: f64,
    /// View rotation in radians, counter-clockwise positive.
    pub rotation: f64,
    /// Projection of `center`, `None` when the host view is not configured.
    pub projection: Option<Projection>,
}

/// Per-frame state the host hands to the layer on every render call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// The host camera for this frame.
    pub view_state: ViewState,
}

/// Interface the host map exposes to the bridge.
///
/// Implementations must be `Send + Sync`: the load-completion observer
/// holds a shared handle and may fire from whichever thread the foreign
/// renderer completes its resource load on.
pub trait HostMap: Send + Sync {
    /// Current view, or `None` if the host has no view configured yet.
    fn view(&self) -> Option<ViewState>;

    /// The container element the host renders into.
    fn container(&self) -> ContainerHandle;

    /// Ask the host to perform one render pass.
    ///
    /// Called exactly once by the bridge, when the foreign renderer
    /// becomes ready, so the new layer appears without waiting for a
    /// user-triggered redraw.
    fn request_render(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_handle_exposes_id() {
        let handle = ContainerHandle::new("map");
        assert_eq!(handle.id(), "map");
    }

    #[test]
    fn test_view_state_is_copyable_value_type() {
        let view = ViewState {
            center: Point2::new(1.0, 2.0),
            zoom: 4.0,
            rotation: 0.0,
            projection: Some(Projection::WebMercator),
        };
        let copy = view;
        assert_eq!(copy, view);
    }
}
