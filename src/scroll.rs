use web_sys as web;

use crate::constants::SURFBOARD_BOTTOM_GAP_PX;
use crate::core::progress;
use crate::dom;

/// Push the current scroll fraction into the progress bar, the surfboard
/// indicator and a root custom property. Missing elements are skipped.
fn update_progress(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(root) = document.document_element() else {
        return;
    };

    let scroll_top = window
        .page_y_offset()
        .unwrap_or_default()
        .max(root.scroll_top() as f64);
    let client_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let p = progress::scroll_fraction(scroll_top, root.scroll_height() as f64, client_height);

    if let Some(bar) = document.get_element_by_id("scrollProgressBar") {
        dom::set_style(&bar, "width", &format!("{:.2}%", p * 100.0));
    }
    if let Ok(Some(board)) = document.query_selector(".surfboard") {
        let top = p * (client_height - SURFBOARD_BOTTOM_GAP_PX).max(0.0);
        dom::set_style(&board, "top", &format!("{:.1}px", top));
    }
    dom::set_style(&root, "--scroll-progress", &format!("{:.4}", p));
}

pub fn init_progress(document: &web::Document) {
    update_progress(document);

    let doc = document.clone();
    dom::listen_window("scroll", move || update_progress(&doc));
    let doc = document.clone();
    dom::listen_window("resize", move || update_progress(&doc));
}
