//! Browser bootstrap: DOM lookup, capability detection, hotspot element
//! construction, and the requestAnimationFrame driver.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{DEFAULT_STAGE_HEIGHT, DEFAULT_STAGE_WIDTH};
use crate::core::interact::{InteractionMode, SideEffectTiming};
use crate::core::tour::Tour;
use crate::data;
use crate::dom;
use crate::events;
use crate::viewer;

/// Hotspot elements of the current scene with their sphere coordinates,
/// repositioned every frame.
type SpotRegistry = Rc<RefCell<Vec<(web::HtmlElement, f64, f64)>>>;

pub fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let pano = document
        .get_element_by_id("pano")
        .ok_or_else(|| anyhow::anyhow!("missing #pano"))?;

    wire_device_mode(&window, &document);

    // Touch capability selects the interaction variant for every hotspot.
    let touch =
        js_sys::Reflect::has(window.as_ref(), &"ontouchstart".into()).unwrap_or(false);
    dom::set_body_class(&document, if touch { "touch" } else { "no-touch" }, true);
    let mode = if touch {
        InteractionMode::Click
    } else {
        InteractionMode::Hover
    };
    log::info!("[app] interaction mode: {:?}", mode);

    let rect = pano.get_bounding_client_rect();
    let stage = if rect.width() > 0.0 && rect.height() > 0.0 {
        (rect.width(), rect.height())
    } else {
        (DEFAULT_STAGE_WIDTH, DEFAULT_STAGE_HEIGHT)
    };

    let tour = Rc::new(RefCell::new(Tour::from_data(
        data::demo_tour(),
        mode,
        SideEffectTiming::OnArrival,
        stage,
    )));
    let spots: SpotRegistry = Rc::new(RefCell::new(Vec::new()));

    rebuild_scene_dom(&document, &tour, &spots, mode);
    {
        let t = tour.borrow();
        viewer::show_scene(&t.current_scene().data.id);
        dom::update_scene_name(&document, &t.current_scene().data.name);
    }

    wire_scene_list(&document, &tour, &spots, mode);
    wire_scene_list_toggle(&document);
    wire_autorotate_toggle(&document, &tour);
    wire_stage_resize(&window, &pano, &tour);

    start_loop(tour, spots);
    Ok(())
}

fn wire_device_mode(window: &web::Window, document: &web::Document) {
    fn apply(document: &web::Document, mobile: bool) {
        dom::set_body_class(document, "mobile", mobile);
        dom::set_body_class(document, "desktop", !mobile);
    }
    match window.match_media("(max-width: 500px), (max-height: 500px)") {
        Ok(Some(mql)) => {
            apply(document, mql.matches());
            let doc = document.clone();
            let mql_listen = mql.clone();
            let closure = Closure::wrap(Box::new(move |_: web::Event| {
                apply(&doc, mql_listen.matches());
            }) as Box<dyn FnMut(_)>);
            _ = mql.add_listener_with_opt_callback(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        }
        _ => apply(document, false),
    }
}

/// Recreate the hotspot DOM for the current scene. Called at startup and
/// after every scene switch.
fn rebuild_scene_dom(
    document: &web::Document,
    tour: &Rc<RefCell<Tour>>,
    spots: &SpotRegistry,
    mode: InteractionMode,
) {
    let Some(container) = document.get_element_by_id("hotspots") else {
        log::warn!("[app] missing #hotspots container");
        return;
    };
    container.set_inner_html("");
    spots.borrow_mut().clear();

    // Snapshot the hotspot data so no borrow is held while wiring closures.
    let (infos, links) = {
        let t = tour.borrow();
        let scene = t.current_scene();
        let infos: Vec<_> = scene
            .data
            .info_hotspots
            .iter()
            .map(|h| (h.yaw, h.pitch, h.title.clone(), h.text.clone()))
            .collect();
        let links: Vec<_> = scene
            .data
            .link_hotspots
            .iter()
            .map(|h| {
                let name = t
                    .scenes()
                    .iter()
                    .find(|s| s.data.id == h.target)
                    .map(|s| s.data.name.clone())
                    .unwrap_or_else(|| h.target.clone());
                (h.yaw, h.pitch, h.target.clone(), name)
            })
            .collect();
        (infos, links)
    };

    for (index, (yaw, pitch, title, text)) in infos.into_iter().enumerate() {
        if let Some(el) = dom::create_info_hotspot_element(document, &title, &text) {
            events::wire_info_hotspot(&el, tour.clone(), index, mode);
            _ = container.append_child(&el);
            spots.borrow_mut().push((el, yaw, pitch));
        }
    }
    for (yaw, pitch, target, name) in links {
        if let Some(el) = dom::create_link_hotspot_element(document, &name) {
            let doc = document.clone();
            let tour_sw = tour.clone();
            let spots_sw = spots.clone();
            let on_switch: Rc<dyn Fn()> = Rc::new(move || {
                after_scene_switch(&doc, &tour_sw, &spots_sw, mode);
            });
            events::wire_link_hotspot(&el, tour.clone(), target, on_switch);
            _ = container.append_child(&el);
            spots.borrow_mut().push((el, yaw, pitch));
        }
    }
}

fn after_scene_switch(
    document: &web::Document,
    tour: &Rc<RefCell<Tour>>,
    spots: &SpotRegistry,
    mode: InteractionMode,
) {
    rebuild_scene_dom(document, tour, spots, mode);
    let name = tour.borrow().current_scene().data.name.clone();
    dom::update_scene_name(document, &name);
}

fn wire_scene_list(
    document: &web::Document,
    tour: &Rc<RefCell<Tour>>,
    spots: &SpotRegistry,
    mode: InteractionMode,
) {
    let Ok(items) = document.query_selector_all("#sceneList .scene") else {
        return;
    };
    for i in 0..items.length() {
        let Some(el) = items.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let Some(id) = el.get_attribute("data-id") else {
            continue;
        };
        let doc = document.clone();
        let tour_sw = tour.clone();
        let spots_sw = spots.clone();
        dom::add_click_listener(&el, move || {
            if tour_sw.borrow_mut().switch_scene(&id) {
                viewer::show_scene(&id);
                after_scene_switch(&doc, &tour_sw, &spots_sw, mode);
            }
        });
    }
}

fn wire_scene_list_toggle(document: &web::Document) {
    let Some(toggle) = document.get_element_by_id("sceneListToggle") else {
        return;
    };
    let doc = document.clone();
    dom::add_click_listener(&toggle, move || {
        if let Some(list) = doc.get_element_by_id("sceneList") {
            let open = list.class_list().contains("enabled");
            dom::set_class(&list, "enabled", !open);
        }
        if let Some(t) = doc.get_element_by_id("sceneListToggle") {
            let on = t.class_list().contains("enabled");
            dom::set_class(&t, "enabled", !on);
        }
    });
}

fn wire_autorotate_toggle(document: &web::Document, tour: &Rc<RefCell<Tour>>) {
    let Some(toggle) = document.get_element_by_id("autorotateToggle") else {
        return;
    };
    dom::set_class(&toggle, "enabled", tour.borrow().rotate.enabled());
    let tour = tour.clone();
    let toggle_el = toggle.clone();
    dom::add_click_listener(&toggle, move || {
        let mut t = tour.borrow_mut();
        let enable = !t.rotate.enabled();
        t.rotate.set_enabled(enable);
        if enable {
            t.rotate.resume();
        }
        dom::set_class(&toggle_el, "enabled", enable);
    });
}

fn wire_stage_resize(window: &web::Window, pano: &web::Element, tour: &Rc<RefCell<Tour>>) {
    let pano = pano.clone();
    let tour = tour.clone();
    let closure = Closure::wrap(Box::new(move || {
        let rect = pano.get_bounding_client_rect();
        if rect.width() > 0.0 && rect.height() > 0.0 {
            tour.borrow_mut().set_stage_size(rect.width(), rect.height());
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn frame(tour: &Rc<RefCell<Tour>>, spots: &SpotRegistry) {
    let now = dom::now_ms();
    let effects = tour.borrow_mut().frame(now);
    for e in effects {
        viewer::perform(e);
    }
    let t = tour.borrow();
    viewer::set_view(t.view_parameters());
    let view = &t.current_scene().view;
    for (el, yaw, pitch) in spots.borrow().iter() {
        dom::place_hotspot(el, view.coordinates_to_screen(*yaw, *pitch));
    }
}

fn start_loop(tour: Rc<RefCell<Tour>>, spots: SpotRegistry) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame(&tour, &spots);
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
