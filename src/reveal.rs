use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{
    CATCH_COPY_STAGGER_MS, REVEAL_BOTTOM_MARGIN, REVEAL_DURATION_MS, REVEAL_THRESHOLD,
};
use crate::dom;
use crate::tween::{Keyframes, Tweener};

const REVEAL_SELECTOR: &str =
    ".section, .section-title, .feature-card, .job-card, .rule-button, .status-card, .support-card, [data-reveal-title]";

/// One-shot entrance tween per section-level element the first time it
/// scrolls into view. Elements are unobserved after revealing; the rule text
/// itself never animates.
pub fn init_reveal(document: &web::Document, tweener: Rc<dyn Tweener>) {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let el = entry.target();
                tweener.animate(&el, &Keyframes::entrance(REVEAL_DURATION_MS, 0.0));
                _ = el.class_list().add_1("is-visible");
                observer.unobserve(&el);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_BOTTOM_MARGIN);
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    {
        Ok(observer) => {
            for el in &targets {
                observer.observe(el);
            }
        }
        Err(e) => log::warn!("[reveal] intersection observer: {:?}", e),
    }
    callback.forget();
}

/// Staggered hero catch-copy entrance at startup.
pub fn init_catch_copy(document: &web::Document, tweener: &dyn Tweener) {
    for (i, word) in dom::query_all(document, ".catch-word").iter().enumerate() {
        tweener.animate(
            word,
            &Keyframes::entrance(REVEAL_DURATION_MS, i as f64 * CATCH_COPY_STAGGER_MS),
        );
    }
}
