use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{COUNT_UP_DURATION_MS, STATUS_REFRESH_MS};
use crate::core::progress;
use crate::dom;

/// Live status card: refresh the decorative server numbers on an interval,
/// counting each number up to its new value.
pub fn init(document: &web::Document) {
    let (Some(status), Some(players), Some(ping)) = (
        document.get_element_by_id("serverStatus"),
        document.get_element_by_id("playerCount"),
        document.get_element_by_id("serverPing"),
    ) else {
        return;
    };

    update_status(&status, &players, &ping);

    let tick = Closure::wrap(Box::new(move || {
        update_status(&status, &players, &ping);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            STATUS_REFRESH_MS,
        );
    }
    tick.forget();
}

fn update_status(status: &web::Element, players: &web::Element, ping: &web::Element) {
    let mut rng = rand::thread_rng();

    let online = rng.gen::<f32>() > 0.1;
    status.set_text_content(Some(if online { "オンライン" } else { "オフライン" }));
    dom::set_style(status, "color", if online { "#4caf50" } else { "#f44336" });

    if let Ok(Some(count)) = players.query_selector(".count-number") {
        animate_count(count, rng.gen_range(10..60));
    }
    if let Ok(Some(value)) = ping.query_selector(".ping-number") {
        animate_count(value, rng.gen_range(20..70));
    }
}

/// Count an element's text toward `end` over one second, one rAF at a time.
/// The closure releases itself once the count lands.
fn animate_count(el: web::Element, end: i32) {
    let start = el
        .text_content()
        .and_then(|t| t.trim().parse::<i32>().ok())
        .unwrap_or(0);
    let started = js_sys::Date::now();

    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |_now: f64| {
        let p = progress::time_progress(js_sys::Date::now() - started, COUNT_UP_DURATION_MS);
        el.set_text_content(Some(&progress::eased_count(start, end, p).to_string()));
        if p < 1.0 {
            if let Some(window) = web::window() {
                _ = window.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                );
            }
        } else {
            // done; drop the closure to break the self-reference
            tick_clone.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(window) = web::window() {
        _ = window.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
