//! Wiring layer for a web panorama tour: pure interaction/animation core
//! plus wasm32 glue that binds DOM hotspot elements and a rAF loop to the
//! external cube-map renderer.
//!
//! The core modules are platform-free and compile (and are tested) on the
//! host; everything that touches the browser lives behind
//! `cfg(target_arch = "wasm32")`.

pub mod constants;
pub mod core;
pub mod data;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod viewer;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pano-tour starting");

    if let Err(e) = app::init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}
