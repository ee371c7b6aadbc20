use web_sys as web;

use crate::dom;

const HAMBURGER_ID: &str = "hamburger";
const NAV_ID: &str = "fullscreenNav";

fn nav_el(document: &web::Document) -> Option<web::Element> {
    document.get_element_by_id(NAV_ID)
}

pub fn is_open(document: &web::Document) -> bool {
    nav_el(document)
        .map(|el| el.class_list().contains("active"))
        .unwrap_or(false)
}

pub fn open(document: &web::Document) {
    if let Some(nav) = nav_el(document) {
        _ = nav.class_list().add_1("active");
    }
    if let Some(burger) = document.get_element_by_id(HAMBURGER_ID) {
        _ = burger.class_list().add_1("active");
    }
    lock_body_scroll(document, true);
}

pub fn close(document: &web::Document) {
    if let Some(nav) = nav_el(document) {
        _ = nav.class_list().remove_1("active");
    }
    if let Some(burger) = document.get_element_by_id(HAMBURGER_ID) {
        _ = burger.class_list().remove_1("active");
    }
    lock_body_scroll(document, false);
}

pub fn toggle(document: &web::Document) {
    if is_open(document) {
        close(document);
    } else {
        open(document);
    }
}

fn lock_body_scroll(document: &web::Document, locked: bool) {
    if let Some(body) = document.body() {
        let value = if locked { "hidden" } else { "" };
        _ = body.style().set_property("overflow", value);
    }
}

/// Hamburger toggles the nav; following any nav link closes it. No-op when
/// the page has no fullscreen nav.
pub fn init(document: &web::Document) {
    if nav_el(document).is_none() {
        return;
    }

    let doc = document.clone();
    dom::add_click_listener(document, HAMBURGER_ID, move |_ev| {
        toggle(&doc);
    });

    for link in dom::query_all(document, ".nav-link") {
        let doc = document.clone();
        dom::on_element_click(&link, move |_ev| {
            close(&doc);
        });
    }
}
