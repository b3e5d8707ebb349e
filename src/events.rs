//! Event wiring for hotspot DOM elements.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::interact::InteractionMode;
use crate::core::tour::Tour;
use crate::dom;
use crate::viewer;

/// Interacting with a hotspot must never also pan/zoom the panorama
/// surface underneath it.
pub fn stop_touch_and_scroll_propagation(el: &web::HtmlElement) {
    for name in ["touchstart", "touchmove", "touchend", "wheel", "mousewheel"] {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
            ev.stop_propagation();
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Attach the configured interaction variant to one info hotspot element.
pub fn wire_info_hotspot(
    el: &web::HtmlElement,
    tour: Rc<RefCell<Tour>>,
    index: usize,
    mode: InteractionMode,
) {
    stop_touch_and_scroll_propagation(el);
    match mode {
        InteractionMode::Hover => {
            let tour_enter = tour.clone();
            let enter = wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web::Event| {
                let effect = tour_enter.borrow_mut().hover_enter(index, dom::now_ms());
                if let Some(e) = effect {
                    viewer::perform(e);
                }
            }) as Box<dyn FnMut(_)>);
            _ = el.add_event_listener_with_callback("pointerenter", enter.as_ref().unchecked_ref());
            enter.forget();

            let tour_leave = tour;
            let leave = wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web::Event| {
                tour_leave.borrow_mut().hover_leave(index, dom::now_ms());
            }) as Box<dyn FnMut(_)>);
            _ = el.add_event_listener_with_callback("pointerleave", leave.as_ref().unchecked_ref());
            leave.forget();
        }
        InteractionMode::Click => {
            dom::add_click_listener(el, move || {
                let effect = tour.borrow_mut().click(index, dom::now_ms());
                if let Some(e) = effect {
                    viewer::perform(e);
                }
            });
        }
    }
}

/// Link hotspots switch scenes; `on_switch` rebuilds the scene DOM.
pub fn wire_link_hotspot(
    el: &web::HtmlElement,
    tour: Rc<RefCell<Tour>>,
    target_id: String,
    on_switch: Rc<dyn Fn()>,
) {
    stop_touch_and_scroll_propagation(el);
    dom::add_click_listener(el, move || {
        if tour.borrow_mut().switch_scene(&target_id) {
            viewer::show_scene(&target_id);
            on_switch();
        }
    });
}
