pub mod app;
pub mod overlay_panel;

pub use app::App;
pub use overlay_panel::OverlayPanel;
