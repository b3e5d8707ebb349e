//! Bridge to the external panorama renderer.
//!
//! The rendering engine is provided by the hosting page as
//! `window.panoBridge`. The bridge is looked up on every call and its
//! absence is tolerated, so the interaction layer keeps working headless.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::core::interact::Effect;
use crate::core::view::ViewParams;
use crate::data::preview_url;

fn bridge_fn(name: &str) -> Option<Function> {
    let window = web::window()?;
    let bridge = Reflect::get(&window, &JsValue::from_str("panoBridge")).ok()?;
    if bridge.is_undefined() || bridge.is_null() {
        return None;
    }
    Reflect::get(&bridge, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Push the authoritative view parameters to the renderer.
pub fn set_view(p: ViewParams) {
    if let Some(f) = bridge_fn("setView") {
        _ = f.call3(
            &JsValue::NULL,
            &JsValue::from_f64(p.yaw),
            &JsValue::from_f64(p.pitch),
            &JsValue::from_f64(p.fov),
        );
    }
}

/// Tell the renderer to display a scene; it resolves tiles itself from the
/// id and preview URL.
pub fn show_scene(scene_id: &str) {
    if let Some(f) = bridge_fn("switchScene") {
        _ = f.call2(
            &JsValue::NULL,
            &JsValue::from_str(scene_id),
            &JsValue::from_str(&preview_url(scene_id)),
        );
    }
}

/// Perform a side effect requested by a hotspot session.
pub fn perform(effect: Effect) {
    match effect {
        Effect::OpenUrl(url) => {
            if let Some(w) = web::window() {
                _ = w.open_with_url_and_target(&url, "_blank");
            }
        }
    }
}
