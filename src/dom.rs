use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::hotspot::sanitize;

#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_body_class(document: &web::Document, class: &str, on: bool) {
    if let Some(body) = document.body() {
        let cl = body.class_list();
        if on {
            _ = cl.add_1(class);
        } else {
            _ = cl.remove_1(class);
        }
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}

pub fn update_scene_name(document: &web::Document, name: &str) {
    if let Ok(Some(el)) = document.query_selector("#titleBar .sceneName") {
        el.set_inner_html(&sanitize(name));
    }
}

/// Build the DOM element for an info hotspot. The text is trusted tour
/// content and may carry markup (links); only the title is escaped.
pub fn create_info_hotspot_element(
    document: &web::Document,
    title: &str,
    text: &str,
) -> Option<web::HtmlElement> {
    let el = document.create_element("div").ok()?;
    _ = el.class_list().add_2("hotspot", "info-hotspot");
    el.set_inner_html(&format!(
        "<div class='info-hotspot-title'>{}</div><div class='info-hotspot-text'>{}</div>",
        sanitize(title),
        text
    ));
    el.dyn_into::<web::HtmlElement>().ok()
}

pub fn create_link_hotspot_element(
    document: &web::Document,
    target_name: &str,
) -> Option<web::HtmlElement> {
    let el = document.create_element("div").ok()?;
    _ = el.class_list().add_2("hotspot", "link-hotspot");
    el.set_inner_html(&format!(
        "<div class='link-hotspot-tooltip'>{}</div>",
        sanitize(target_name)
    ));
    el.dyn_into::<web::HtmlElement>().ok()
}

/// Position a hotspot element on the stage, or hide it when the projected
/// coordinate is behind the camera.
pub fn place_hotspot(el: &web::HtmlElement, projected: Option<(f64, f64)>) {
    match projected {
        Some((x, y)) => {
            _ = el
                .style()
                .set_property("transform", &format!("translate({x:.1}px, {y:.1}px)"));
            set_class(el, "hidden", false);
        }
        None => set_class(el, "hidden", true),
    }
}
