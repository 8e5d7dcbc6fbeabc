//! Construction options for the foreign renderer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coord::LonLat;
use crate::host::ContainerHandle;

/// Where the foreign renderer loads its style from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StyleSource {
    /// URL of a style document to fetch.
    Url(String),
    /// Inline style JSON.
    Inline(Value),
}

/// Interaction affordances of the foreign renderer.
///
/// The bridge constructs the renderer with every affordance disabled:
/// the host is the sole interactive surface, and any gesture the foreign
/// renderer handled itself would move its camera out from under the
/// synchronizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionOptions {
    pub attribution_control: bool,
    pub box_zoom: bool,
    pub double_click_zoom: bool,
    pub drag_pan: bool,
    pub drag_rotate: bool,
    pub interactive: bool,
    pub keyboard: bool,
    pub pitch_with_rotate: bool,
    pub scroll_zoom: bool,
    pub touch_zoom_rotate: bool,
}

impl InteractionOptions {
    /// All affordances off. The only configuration the bridge ever uses.
    pub fn disabled() -> Self {
        Self {
            attribution_control: false,
            box_zoom: false,
            double_click_zoom: false,
            drag_pan: false,
            drag_rotate: false,
            interactive: false,
            keyboard: false,
            pitch_with_rotate: false,
            scroll_zoom: false,
            touch_zoom_rotate: false,
        }
    }

    /// True when every affordance is off.
    pub fn is_fully_disabled(&self) -> bool {
        !(self.attribution_control
            || self.box_zoom
            || self.double_click_zoom
            || self.drag_pan
            || self.drag_rotate
            || self.interactive
            || self.keyboard
            || self.pitch_with_rotate
            || self.scroll_zoom
            || self.touch_zoom_rotate)
    }
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self::disabled()
    }
}

/// How the foreign renderer obtains its container element.
///
/// Sharing the host's container replaces the original approach of
/// patching the renderer's container setup at runtime. Renderer upgrades
/// that change container handling remain a compatibility risk; the
/// strategy is an explicit construction option so the risk is visible at
/// the seam instead of buried in a patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerStrategy {
    /// Render directly into the host's container element.
    SharedWithHost,
    /// Create and own a separate container element (the renderer's
    /// default standalone behavior; unused by the bridge).
    OwnedElement,
}

/// Everything needed to construct a foreign renderer instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    /// Style document.
    pub style: StyleSource,
    /// Container element, shared with the host.
    pub container: ContainerHandle,
    /// Container handling strategy.
    pub container_strategy: ContainerStrategy,
    /// Initial camera center.
    pub center: LonLat,
    /// Initial zoom, already in the foreign convention.
    pub zoom: f64,
    /// Initial bearing in degrees.
    pub bearing: f64,
    /// Interaction affordances, all disabled for bridge use.
    pub interaction: InteractionOptions,
}
