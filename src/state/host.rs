//! Seams between the zoom state machine and whatever document hosts it.
//! The browser implementation lives in `crate::dom`; tests use an in-memory tree.

use crate::model::{Origin, PointerPosition, Rect, TogglePresentation};

/// Read-only structural queries the surface resolver needs.
pub trait SurfaceTree {
    type Node: Clone + PartialEq;

    /// Overlay panels containing `hit` (inclusive), innermost first.
    fn panel_ancestors(&self, hit: &Self::Node) -> Vec<Self::Node>;
    fn is_open(&self, panel: &Self::Node) -> bool;
    /// The panel's designated inner container, if it has one.
    fn content_region(&self, panel: &Self::Node) -> Option<Self::Node>;
    fn in_backdrop(&self, hit: &Self::Node) -> bool;
    fn closest_zoom_region(&self, hit: &Self::Node) -> Option<Self::Node>;
    /// First zoomable region in document order.
    fn first_zoom_region(&self) -> Option<Self::Node>;
    /// Current layout box; queried fresh on each call.
    fn bounds(&self, node: &Self::Node) -> Rect;
}

/// Side effects the controller publishes for the rendering layer.
pub trait Host: SurfaceTree {
    /// Every overlay panel in the document, open or not, in document order.
    fn panels(&self) -> Vec<Self::Node>;
    fn set_panel_flag(&mut self, panel: &Self::Node, flagged: bool);
    fn set_active_marker(&mut self, active: bool);
    fn publish_pointer(&mut self, pointer: PointerPosition);
    fn publish_origin(&mut self, origin: Origin);
    fn present_toggle(&mut self, presentation: &TogglePresentation);
    /// Without a lens indicator there is nothing to follow the pointer.
    fn has_lens(&self) -> bool;
    fn subscribe_pointer(&mut self);
    fn unsubscribe_pointer(&mut self);
}
