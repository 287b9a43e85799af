// Logging setup shared by the binary and anything embedding the lens.

use std::sync::OnceLock;

/// Routes `log` records to the browser console and installs the panic hook.
/// A no-op off wasm, which leaves the `log` macros silent in unit tests.
pub fn init_logging() {
    static INIT: OnceLock<()> = OnceLock::new();
    INIT.get_or_init(|| {
        #[cfg(target_arch = "wasm32")]
        {
            console_error_panic_hook::set_once();
            wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
        }
    });
}
