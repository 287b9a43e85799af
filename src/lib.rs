//! Pointer-following magnifier for a document page: a zoom-mode state machine,
//! the geometry mapping the pointer to a magnification origin, and the policy
//! picking which surface (page region or stacked overlay panel) is magnified.

pub mod components;
pub mod config;
pub mod dom;
pub mod model;
pub mod state;
pub mod util;
