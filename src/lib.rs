#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod content;
pub mod glyph;
pub mod reveal;
#[cfg(feature = "ssr")]
pub mod server;
pub mod ticker;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_ok() {
        log::info!("hydrating portfolio");
    }
    leptos::mount::hydrate_body(App);
}
