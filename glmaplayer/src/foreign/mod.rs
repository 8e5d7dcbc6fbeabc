//! Foreign renderer seam: traits and data types for the embedded engine.
//!
//! The bridge never talks to a concrete renderer. It drives anything that
//! implements [`ForeignMap`], constructed through a [`ForeignMapFactory`]
//! from a [`MapOptions`] description. The surface types model the pieces
//! of the renderer's output the bridge manipulates directly: the canvas it
//! composites and the chrome container it strips.
//!
//! # Design Principles
//!
//! - **Non-animated by contract**: `jump_to` and `rotate_to` are
//!   instantaneous. The bridge owns the redraw cadence; an eased
//!   transition would desynchronize intermediate frames from the host.
//! - **Exclusive driving**: once created, the foreign instance is owned
//!   and driven solely by the bridge. Its own scheduler is suppressed
//!   every frame via [`ForeignMap::cancel_pending_frame`].
//! - **Fail-open internals**: frame cancellation reaches toward renderer
//!   internals that upstream may change; [`FrameCancellation::Unsupported`]
//!   degrades to potential one-frame lag, never to a fault.

mod map;
mod options;
mod surface;

pub use map::{
    CameraJump, ForeignCamera, ForeignMap, ForeignMapError, ForeignMapFactory, FrameCancellation,
    LoadObserver,
};
pub use options::{ContainerStrategy, InteractionOptions, MapOptions, StyleSource};
pub use surface::{Canvas, CanvasHandle, ControlContainer, ControlsHandle, Display, SurfaceStyle};
