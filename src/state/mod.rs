pub mod controller;
pub mod editable;
pub mod geometry;
pub mod host;
pub mod panels;
pub mod resolver;
pub mod shortcut;

#[cfg(test)]
pub(crate) mod fake;

pub use controller::ZoomController;
pub use editable::{FocusTarget, is_editable_surface};
pub use geometry::compute_origin;
pub use host::{Host, SurfaceTree};
pub use panels::PanelStack;
pub use resolver::{Resolution, ResolvedBy, resolve_target};
pub use shortcut::{KeyIntent, classify_key};
