#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod contact;
pub mod content;
pub mod email;
pub mod motion;
pub mod nav;
pub mod reveal;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init only happens on hot reload; the first logger stays
    let _ = console_log::init_with_level(log::Level::Debug);
    crate::email::EmailConfig::from_build_env().warn_if_incomplete();
    leptos::mount::hydrate_body(App);
}
