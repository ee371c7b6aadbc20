use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::SLIDESHOW_INTERVAL_MS;
use crate::core::progress;
use crate::dom;

fn clear_interval(handle: &Cell<Option<i32>>) {
    if let Some(id) = handle.take() {
        if let Some(window) = web::window() {
            window.clear_interval_with_handle(id);
        }
    }
}

fn arm_interval(handle: &Cell<Option<i32>>, tick: &Closure<dyn FnMut()>, ms: i32) {
    if handle.get().is_some() {
        return;
    }
    if let Some(window) = web::window() {
        if let Ok(id) = window
            .set_interval_with_callback_and_timeout_and_arguments_0(tick.as_ref().unchecked_ref(), ms)
        {
            handle.set(Some(id));
        }
    }
}

/// Timers only run while their anchor is on screen: cleared on exit,
/// re-armed on re-entry.
fn gate_interval_on_visibility(
    anchor: &web::Element,
    tick: Rc<Closure<dyn FnMut()>>,
    handle: Rc<Cell<Option<i32>>>,
) {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    arm_interval(&handle, &tick, SLIDESHOW_INTERVAL_MS);
                } else {
                    clear_interval(&handle);
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    match web::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => observer.observe(anchor),
        Err(e) => log::warn!("[slideshow] intersection observer: {:?}", e),
    }
    callback.forget();
}

fn elements_within(el: &web::Element, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = el.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(item) = list.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(item);
            }
        }
    }
    out
}

fn set_active(items: &[web::Element], active: usize) {
    for (i, item) in items.iter().enumerate() {
        if i == active {
            _ = item.class_list().add_1("is-active");
        } else {
            _ = item.class_list().remove_1("is-active");
        }
    }
}

/// Day/night hero crossfade: cycle the slides while the hero is on screen.
pub fn init_hero_slideshow(document: &web::Document) {
    let Some(container) = document.get_element_by_id("heroSlideshow") else {
        return;
    };
    let slides = elements_within(&container, ".slide");
    if slides.len() < 2 {
        return;
    }

    let current = Rc::new(Cell::new(0usize));
    set_active(&slides, 0);

    let slides_tick = slides.clone();
    let current_tick = current.clone();
    let tick = Rc::new(Closure::wrap(Box::new(move || {
        let next = progress::next_slide(current_tick.get(), slides_tick.len());
        current_tick.set(next);
        set_active(&slides_tick, next);
    }) as Box<dyn FnMut()>));

    gate_interval_on_visibility(&container, tick, Rc::new(Cell::new(None)));
}

fn show_step(items: &[web::Element], buttons: &[web::Element], step: usize) {
    let matches_attr = |el: &web::Element, attr: &str| {
        el.get_attribute(attr)
            .and_then(|v| v.parse::<usize>().ok())
            .map(|v| v == step)
            .unwrap_or(false)
    };
    for item in items {
        if matches_attr(item, "data-step") {
            _ = item.class_list().add_1("active");
        } else {
            _ = item.class_list().remove_1("active");
        }
    }
    for btn in buttons {
        if matches_attr(btn, "data-target") {
            _ = btn.class_list().add_1("active");
        } else {
            _ = btn.class_list().remove_1("active");
        }
    }
}

/// "How to Join" steps: autoplay while visible, manual buttons stop the
/// autoplay until the section scrolls back into view.
pub fn init_step_navigation(document: &web::Document) {
    let items = dom::query_all(document, ".step-item");
    let buttons = dom::query_all(document, ".step-nav-btn");
    if items.is_empty() {
        return;
    }

    let current = Rc::new(Cell::new(1usize));
    show_step(&items, &buttons, 1);

    let handle = Rc::new(Cell::new(None::<i32>));

    let tick = {
        let items = items.clone();
        let buttons = buttons.clone();
        let current = current.clone();
        Rc::new(Closure::wrap(Box::new(move || {
            let next = if current.get() >= items.len() {
                1
            } else {
                current.get() + 1
            };
            current.set(next);
            show_step(&items, &buttons, next);
        }) as Box<dyn FnMut()>))
    };

    for btn in &buttons {
        let Some(target) = btn
            .get_attribute("data-target")
            .and_then(|v| v.parse::<usize>().ok())
        else {
            continue;
        };
        let items = items.clone();
        let buttons = buttons.clone();
        let current = current.clone();
        let handle = handle.clone();
        dom::on_element_click(btn, move |_ev| {
            current.set(target);
            show_step(&items, &buttons, target);
            clear_interval(&handle);
        });
    }

    if let Ok(Some(anchor)) = document.query_selector(".steps-container") {
        gate_interval_on_visibility(&anchor, tick, handle);
    }
}
