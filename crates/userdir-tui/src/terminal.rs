//! Terminal setup and restoration

use ratatui::DefaultTerminal;
use userdir_core::prelude::*;

/// Install a panic hook that restores the terminal before the report prints
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}

/// Enter raw mode and the alternate screen
pub fn init() -> DefaultTerminal {
    install_panic_hook();
    ratatui::init()
}

/// Leave raw mode and the alternate screen
pub fn restore() {
    ratatui::restore();
    debug!("Terminal restored");
}
