//! The bridge layer: lifecycle adapter plus the host layer capability
//! interface.
//!
//! [`GlMapLayer`] is what the host map holds. It implements the host's
//! layer contract ([`Layer`]) by composition: behind it sits a foreign
//! renderer instance the layer creates at attach time, drives through the
//! [`crate::compositor::FrameCompositor`] on every render call, and
//! releases at detach. The host never touches the foreign renderer
//! directly.
//!
//! # Attach sequence
//!
//! 1. Read the host's current view; no view or an unconvertible center is
//!    a fatal configuration error.
//! 2. Construct the foreign renderer: shared host container, style,
//!    converted initial camera, every interaction affordance disabled.
//! 3. Register the load observer that performs the readiness transition.
//! 4. Mirror the layer's visual properties onto the fresh canvas.
//!
//! Detach releases the instance and resets readiness in one motion; no
//! partial-detach state is observable.

use std::sync::Arc;

use tracing::debug;

use crate::compositor::FrameCompositor;
use crate::coord::{to_foreign_coordinates, to_foreign_zoom};
use crate::error::BridgeError;
use crate::foreign::{
    CanvasHandle, ContainerStrategy, Display, ForeignMap, ForeignMapFactory, InteractionOptions,
    MapOptions, StyleSource,
};
use crate::host::{FrameState, HostMap};
use crate::readiness::{ReadinessTracker, ReadyOnLoad, SourceState};

/// Visual properties owned by the host layer model.
///
/// Mirrored onto the foreign renderer's canvas whenever changed; the
/// mirror happens in the mutator itself, no render pass required.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerVisualProps {
    /// Whether the layer participates in the composite.
    pub visible: bool,
    /// Layer opacity in `[0, 1]`.
    pub opacity: f64,
    /// Stacking order among the host's layers.
    pub z_index: i32,
}

impl Default for LayerVisualProps {
    fn default() -> Self {
        Self {
            visible: true,
            opacity: 1.0,
            z_index: 0,
        }
    }
}

/// The host's layer capability interface.
///
/// A composition-based adapter contract: the host calls these as ordinary
/// layer operations and never learns there is a second renderer behind
/// them.
pub trait Layer {
    /// Produce this layer's raster for the given host frame.
    fn render(&mut self, frame_state: &FrameState) -> Result<CanvasHandle, BridgeError>;

    /// Show or hide the layer.
    fn set_visible(&mut self, visible: bool);

    /// Set the layer opacity. Out-of-range values are clamped to `[0, 1]`.
    fn set_opacity(&mut self, opacity: f64);

    /// Set the stacking order.
    fn set_z_index(&mut self, z_index: i32);

    /// Load state of the layer's source.
    fn source_state(&self) -> SourceState;

    /// Attach to a host map, or detach with `None`.
    fn set_map(&mut self, map: Option<Arc<dyn HostMap>>) -> Result<(), BridgeError>;
}

/// A host layer backed by an embedded GL vector map renderer.
pub struct GlMapLayer {
    style: StyleSource,
    factory: Box<dyn ForeignMapFactory>,
    props: LayerVisualProps,
    host: Option<Arc<dyn HostMap>>,
    foreign: Option<Box<dyn ForeignMap>>,
    readiness: Arc<ReadinessTracker>,
    compositor: FrameCompositor,
}

impl GlMapLayer {
    /// Create a detached layer for the given style.
    ///
    /// The foreign renderer is not constructed until the layer is
    /// attached to a host map via [`Layer::set_map`].
    pub fn new(style: StyleSource, factory: Box<dyn ForeignMapFactory>) -> Self {
        Self {
            style,
            factory,
            props: LayerVisualProps::default(),
            host: None,
            foreign: None,
            readiness: Arc::new(ReadinessTracker::new()),
            compositor: FrameCompositor::new(),
        }
    }

    /// Current visual properties.
    pub fn visual_props(&self) -> LayerVisualProps {
        self.props
    }

    fn attach(&mut self, host: Arc<dyn HostMap>) -> Result<(), BridgeError> {
        // Re-attach replaces any previous instance cleanly.
        self.detach();

        let view = host
            .view()
            .ok_or_else(|| BridgeError::Configuration("host map has no view".to_string()))?;
        let center = to_foreign_coordinates(view.center, view.projection)
            .map_err(|e| BridgeError::Configuration(e.to_string()))?;

        let container = host.container();
        debug!(container = container.id(), "attaching foreign renderer");

        let mut foreign = self.factory.create(MapOptions {
            style: self.style.clone(),
            container,
            container_strategy: ContainerStrategy::SharedWithHost,
            center,
            zoom: to_foreign_zoom(view.zoom),
            bearing: 0.0,
            interaction: InteractionOptions::disabled(),
        })?;

        let readiness = Arc::new(ReadinessTracker::new());
        foreign.on_load(Arc::new(ReadyOnLoad::new(
            Arc::clone(&readiness),
            foreign.canvas(),
            foreign.controls(),
            Arc::clone(&host),
        )));

        self.mirror_props(&foreign.canvas());

        self.readiness = readiness;
        self.foreign = Some(foreign);
        self.host = Some(host);
        Ok(())
    }

    fn detach(&mut self) {
        if self.foreign.take().is_some() {
            debug!("released foreign renderer instance");
        }
        self.host = None;
        self.readiness = Arc::new(ReadinessTracker::new());
    }

    fn mirror_props(&self, canvas: &CanvasHandle) {
        let mut canvas = canvas.lock();
        canvas.set_display(if self.props.visible {
            Display::Block
        } else {
            Display::None
        });
        canvas.set_opacity(self.props.opacity);
        canvas.set_z_index(self.props.z_index);
    }
}

impl Layer for GlMapLayer {
    fn render(&mut self, frame_state: &FrameState) -> Result<CanvasHandle, BridgeError> {
        let foreign = self.foreign.as_deref_mut().ok_or(BridgeError::NotAttached)?;
        self.compositor.render_frame(foreign, frame_state)
    }

    fn set_visible(&mut self, visible: bool) {
        self.props.visible = visible;
        if let Some(foreign) = &self.foreign {
            foreign.canvas().lock().set_display(if visible {
                Display::Block
            } else {
                Display::None
            });
        }
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.props.opacity = opacity.clamp(0.0, 1.0);
        if let Some(foreign) = &self.foreign {
            foreign.canvas().lock().set_opacity(self.props.opacity);
        }
    }

    fn set_z_index(&mut self, z_index: i32) {
        self.props.z_index = z_index;
        if let Some(foreign) = &self.foreign {
            foreign.canvas().lock().set_z_index(z_index);
        }
    }

    fn source_state(&self) -> SourceState {
        self.readiness.source_state()
    }

    fn set_map(&mut self, map: Option<Arc<dyn HostMap>>) -> Result<(), BridgeError> {
        match map {
            Some(host) => self.attach(host),
            None => {
                self.detach();
                Ok(())
            }
        }
    }
}
