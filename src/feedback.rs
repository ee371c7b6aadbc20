use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::CLICK_RIPPLE_LIFETIME_MS;
use crate::dom;

const CLICKABLE_SELECTOR: &str = "button:not(#themeToggle), .hamburger, .job-card, .rule-button, .feature-card, .status-card, .support-card, .step-nav-btn";

/// Expanding ripple span inside any clickable element, removed after its
/// CSS animation finishes.
pub fn init_click_ripples(document: &web::Document) {
    for el in dom::query_all(document, CLICKABLE_SELECTOR) {
        let target = el.clone();
        dom::on_element_click(&el, move |ev| {
            spawn_click_ripple(&target, &ev);
        });
    }
}

fn spawn_click_ripple(el: &web::Element, ev: &web::MouseEvent) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Ok(span) = document.create_element("span") else {
        return;
    };
    span.set_class_name("click-ripple");

    let rect = el.get_bounding_client_rect();
    let size = rect.width().max(rect.height());
    let x = ev.client_x() as f64 - rect.left() - size / 2.0;
    let y = ev.client_y() as f64 - rect.top() - size / 2.0;
    dom::set_style(&span, "width", &format!("{:.0}px", size));
    dom::set_style(&span, "height", &format!("{:.0}px", size));
    dom::set_style(&span, "left", &format!("{:.0}px", x));
    dom::set_style(&span, "top", &format!("{:.0}px", y));

    // fixed-position hosts keep their positioning; everything else anchors
    // the ripple to itself
    let position = web::window()
        .and_then(|w| w.get_computed_style(el).ok())
        .flatten()
        .and_then(|s| s.get_property_value("position").ok())
        .unwrap_or_default();
    if position != "fixed" {
        dom::set_style(el, "position", "relative");
    }
    dom::set_style(el, "overflow", "hidden");

    _ = el.append_child(&span);
    remove_after(span, CLICK_RIPPLE_LIFETIME_MS);
}

fn remove_after(el: web::Element, ms: i32) {
    let cleanup = Closure::once_into_js(move || el.remove());
    if let Some(window) = web::window() {
        _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cleanup.unchecked_ref(), ms);
    }
}

/// Hovering one job card dims and shrinks the others; leaving restores them.
pub fn init_card_hover(document: &web::Document) {
    let cards = dom::query_all(document, ".job-card");
    if cards.len() < 2 {
        return;
    }
    for card in &cards {
        let others: Vec<web::Element> = cards.iter().filter(|c| *c != card).cloned().collect();
        let enter_others = others.clone();
        dom::listen_element(card, "mouseenter", move || {
            for other in &enter_others {
                dom::set_style(other, "opacity", "0.5");
                dom::set_style(other, "transform", "scale(0.95)");
            }
        });
        let leave_cards = cards.clone();
        dom::listen_element(card, "mouseleave", move || {
            for other in &leave_cards {
                dom::set_style(other, "opacity", "1");
                dom::set_style(other, "transform", "scale(1)");
            }
        });
    }
}
