//! Output surface model: the canvas the bridge composites and the chrome
//! it strips.
//!
//! Both types are shared between the layer, the compositor, and the load
//! observer through `Arc<parking_lot::Mutex<_>>` handles, since the load
//! event may be delivered from whichever thread the foreign renderer
//! completes on.

use std::sync::Arc;

use parking_lot::Mutex;

use super::map::ForeignCamera;

/// CSS-equivalent display state of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    /// Canvas participates in the composite.
    Block,
    /// Canvas is hidden entirely.
    None,
}

/// Visual styling mirrored from the host layer onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceStyle {
    /// Display state, `None` when the layer is invisible.
    pub display: Display,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Stacking order among the host's layers.
    pub z_index: i32,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            display: Display::Block,
            opacity: 1.0,
            z_index: 0,
        }
    }
}

/// The foreign renderer's raster output surface.
///
/// Starts life attached to the shared container as the renderer's
/// bootstrap placeholder; the readiness tracker detaches it on load so
/// the host alone decides where it appears in the composite.
#[derive(Debug)]
pub struct Canvas {
    style: SurfaceStyle,
    attached: bool,
    revision: u64,
    last_camera: Option<ForeignCamera>,
}

impl Canvas {
    /// Create a canvas in its bootstrap state: attached, default style,
    /// nothing rendered yet.
    pub fn new() -> Self {
        Self {
            style: SurfaceStyle::default(),
            attached: true,
            revision: 0,
            last_camera: None,
        }
    }

    /// Current style.
    pub fn style(&self) -> SurfaceStyle {
        self.style
    }

    /// Set the display state.
    pub fn set_display(&mut self, display: Display) {
        self.style.display = display;
    }

    /// Set the opacity.
    pub fn set_opacity(&mut self, opacity: f64) {
        self.style.opacity = opacity;
    }

    /// Set the stacking order.
    pub fn set_z_index(&mut self, z_index: i32) {
        self.style.z_index = z_index;
    }

    /// Whether the canvas still sits in the shared container.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Detach the canvas from the shared container.
    ///
    /// Done once, on load: afterwards the host composites the canvas
    /// itself instead of the container showing the bootstrap placeholder.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Record a completed redraw of the given camera.
    ///
    /// Called by renderer implementations from `render_sync`. The
    /// revision advances on every redraw, including redraws of an
    /// unchanged camera.
    pub fn mark_rendered(&mut self, camera: ForeignCamera) {
        self.revision += 1;
        self.last_camera = Some(camera);
    }

    /// Number of completed redraws.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Camera of the most recent redraw, `None` before the first.
    pub fn last_camera(&self) -> Option<ForeignCamera> {
        self.last_camera
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to a [`Canvas`].
pub type CanvasHandle = Arc<Mutex<Canvas>>;

/// The foreign renderer's built-in control chrome.
///
/// Present after construction even with attribution disabled; the
/// readiness tracker removes it on load since the host owns all
/// interaction.
#[derive(Debug)]
pub struct ControlContainer {
    present: bool,
}

impl ControlContainer {
    /// Create the chrome container in its bootstrap state.
    pub fn new() -> Self {
        Self { present: true }
    }

    /// Whether the chrome is still in the container.
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Remove the chrome from the container.
    pub fn remove(&mut self) {
        self.present = false;
    }
}

impl Default for ControlContainer {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to a [`ControlContainer`].
pub type ControlsHandle = Arc<Mutex<ControlContainer>>;
