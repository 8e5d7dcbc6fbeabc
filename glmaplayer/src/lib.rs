//! GlMapLayer - viewport synchronization bridge between two map renderers.
//!
//! A host map renderer delegates a rectangular region of its frame to an
//! independently-running, embedded GL vector map renderer. This crate
//! keeps the two engines' cameras (center, zoom, rotation) in lock-step
//! frame-by-frame and composites the embedded renderer's raster into the
//! host's render pass as if it were a native layer.
//!
//! # Architecture
//!
//! ```text
//! Host render request
//!   └─► GlMapLayer::render(frame_state)
//!         └─► FrameCompositor
//!               ├─► ViewportSynchronizer ──► coord adapter ──► foreign camera
//!               ├─► cancel queued foreign frame (best-effort)
//!               └─► forced synchronous redraw ──► CanvasHandle ──► host composite
//! ```
//!
//! Both renderers are trait seams ([`host::HostMap`],
//! [`foreign::ForeignMap`]): the bridge owns only the synchronization
//! contract between the two camera models and the compositing contract
//! for producing one raster per host frame. Tile fetching, styling, GPU
//! work, and gesture handling all belong to the renderers themselves.
//!
//! # Example
//!
//! ```ignore
//! use glmaplayer::foreign::StyleSource;
//! use glmaplayer::layer::{GlMapLayer, Layer};
//!
//! let mut layer = GlMapLayer::new(
//!     StyleSource::Url("https://tiles.example.com/style.json".into()),
//!     Box::new(renderer_factory),
//! );
//!
//! // Attach to the host; the foreign renderer is constructed against the
//! // host's container, fully interaction-disabled.
//! layer.set_map(Some(host_map))?;
//!
//! // Per host frame: cameras align, foreign scheduler is suppressed,
//! // one synchronous redraw, raster handed back.
//! let canvas = layer.render(&frame_state)?;
//! ```

pub mod compositor;
pub mod coord;
pub mod error;
pub mod foreign;
pub mod host;
pub mod layer;
pub mod log;
pub mod readiness;
pub mod sync;

pub use compositor::FrameCompositor;
pub use error::BridgeError;
pub use layer::{GlMapLayer, Layer, LayerVisualProps};
pub use readiness::{ReadinessTracker, SourceState};
pub use sync::ViewportSynchronizer;
