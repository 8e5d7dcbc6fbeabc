//! Readiness tracking for the foreign renderer's load lifecycle.
//!
//! The foreign renderer loads its style and initial resources
//! asynchronously; this is the only asynchronous boundary in the bridge.
//! Until the load completes the layer reports its source as undefined and
//! the host keeps the layer out of its composite. The transition fires
//! exactly once and never reverts while attached.
//!
//! Side effects on transition, in order:
//!
//! 1. Detach the bootstrap placeholder canvas from the shared container.
//! 2. Request one host render pass so the layer appears without a
//!    user-triggered redraw.
//! 3. Remove the renderer's default chrome container.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use crate::foreign::{CanvasHandle, ControlsHandle, LoadObserver};
use crate::host::HostMap;

/// Load state of the layer's source, as queried by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceState {
    /// The foreign renderer has not finished loading.
    Undefined,
    /// The foreign renderer is ready to be composited.
    Ready,
}

/// One-way readiness flag shared between the layer and the load observer.
///
/// Lock-free: the flag flips once and is read on every `source_state`
/// query, so an atomic is all the synchronization needed.
#[derive(Debug)]
pub struct ReadinessTracker {
    ready: AtomicBool,
}

impl ReadinessTracker {
    /// Create a tracker in the undefined state.
    pub fn new() -> Self {
        Self {
            ready: AtomicBool::new(false),
        }
    }

    /// Record the transition to ready.
    ///
    /// Returns `true` only for the call that performed the transition;
    /// later calls are no-ops.
    pub fn mark_ready(&self) -> bool {
        !self.ready.swap(true, Ordering::SeqCst)
    }

    /// Current state. Idempotent and side-effect free.
    pub fn source_state(&self) -> SourceState {
        if self.ready.load(Ordering::SeqCst) {
            SourceState::Ready
        } else {
            SourceState::Undefined
        }
    }
}

impl Default for ReadinessTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Load observer that performs the readiness transition.
///
/// Registered with the foreign renderer at attach time; holds shared
/// handles to everything the transition touches.
pub struct ReadyOnLoad {
    readiness: Arc<ReadinessTracker>,
    canvas: CanvasHandle,
    controls: ControlsHandle,
    host: Arc<dyn HostMap>,
}

impl ReadyOnLoad {
    /// Create the observer for one foreign renderer instance.
    pub fn new(
        readiness: Arc<ReadinessTracker>,
        canvas: CanvasHandle,
        controls: ControlsHandle,
        host: Arc<dyn HostMap>,
    ) -> Self {
        Self {
            readiness,
            canvas,
            controls,
            host,
        }
    }
}

impl LoadObserver for ReadyOnLoad {
    fn loaded(&self) {
        if !self.readiness.mark_ready() {
            debug!("duplicate load event ignored; source already ready");
            return;
        }

        self.canvas.lock().detach();
        info!("foreign renderer finished loading; requesting host render");
        self.host.request_render();
        self.controls.lock().remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::AtomicUsize;

    use parking_lot::Mutex;

    use crate::coord::Point2;
    use crate::foreign::{Canvas, ControlContainer};
    use crate::host::{ContainerHandle, ViewState};

    struct CountingHost {
        render_requests: AtomicUsize,
    }

    impl CountingHost {
        fn new() -> Self {
            Self {
                render_requests: AtomicUsize::new(0),
            }
        }
    }

    impl HostMap for CountingHost {
        fn view(&self) -> Option<ViewState> {
            Some(ViewState {
                center: Point2::new(0.0, 0.0),
                zoom: 1.0,
                rotation: 0.0,
                projection: None,
            })
        }

        fn container(&self) -> ContainerHandle {
            ContainerHandle::new("map")
        }

        fn request_render(&self) {
            self.render_requests.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn make_observer() -> (ReadyOnLoad, Arc<ReadinessTracker>, Arc<CountingHost>) {
        let readiness = Arc::new(ReadinessTracker::new());
        let host = Arc::new(CountingHost::new());
        let observer = ReadyOnLoad::new(
            Arc::clone(&readiness),
            Arc::new(Mutex::new(Canvas::new())),
            Arc::new(Mutex::new(ControlContainer::new())),
            Arc::clone(&host) as Arc<dyn HostMap>,
        );
        (observer, readiness, host)
    }

    #[test]
    fn test_state_is_undefined_before_load() {
        let tracker = ReadinessTracker::new();
        assert_eq!(tracker.source_state(), SourceState::Undefined);
        // Query is idempotent
        assert_eq!(tracker.source_state(), SourceState::Undefined);
    }

    #[test]
    fn test_transition_fires_once_and_never_reverts() {
        let tracker = ReadinessTracker::new();
        assert!(tracker.mark_ready());
        assert!(!tracker.mark_ready(), "Second call must not transition");
        assert_eq!(tracker.source_state(), SourceState::Ready);
        assert_eq!(tracker.source_state(), SourceState::Ready);
    }

    #[test]
    fn test_load_detaches_canvas_and_requests_render() {
        let (observer, readiness, host) = make_observer();

        observer.loaded();

        assert_eq!(readiness.source_state(), SourceState::Ready);
        assert!(!observer.canvas.lock().is_attached());
        assert!(!observer.controls.lock().is_present());
        assert_eq!(host.render_requests.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_duplicate_load_event_has_no_side_effects() {
        let (observer, _readiness, host) = make_observer();

        observer.loaded();
        observer.loaded();

        assert_eq!(
            host.render_requests.load(Ordering::SeqCst),
            1,
            "Only the transitioning event may request a render"
        );
    }
}
