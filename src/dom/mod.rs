pub mod host;
pub mod wiring;

pub use host::DomHost;
pub use wiring::{ZoomHandle, install, install_from_page, load_config};
