use crate::ui::tui;

/// Restores the terminal before the default report is printed, so the
/// panic message is readable.
pub fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!("{}", panic_info);
        let _ = tui::Tui::restore();
        hook(panic_info);
    }));
}
