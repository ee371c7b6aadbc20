use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use crate::constants::THEME_BURST_RINGS;
use crate::core::{Scene, SpawnRequest};
use crate::dom;

pub const THEME_KEY: &str = "oceanTheme";
const TOGGLE_ID: &str = "themeToggle";

fn apply(document: &web::Document, dark: bool) {
    if let Some(root) = document.document_element() {
        if dark {
            _ = root.set_attribute("data-theme", "dark");
        } else {
            _ = root.remove_attribute("data-theme");
        }
    }
    if let Some(toggle) = document.get_element_by_id(TOGGLE_ID) {
        _ = toggle.set_attribute("aria-pressed", if dark { "true" } else { "false" });
    }
}

pub fn is_dark(document: &web::Document) -> bool {
    document
        .document_element()
        .and_then(|root| root.get_attribute("data-theme"))
        .map(|v| v == "dark")
        .unwrap_or(false)
}

/// Restore the saved theme, then let the toggle flip it, persist the choice
/// and celebrate with a ripple burst on the water surface.
pub fn init(
    document: &web::Document,
    water: Option<(Rc<RefCell<Scene>>, web::HtmlCanvasElement)>,
) {
    if dom::local_storage_get(THEME_KEY).as_deref() == Some("dark") {
        apply(document, true);
    }

    let doc = document.clone();
    dom::add_click_listener(document, TOGGLE_ID, move |_ev| {
        let dark = !is_dark(&doc);
        apply(&doc, dark);
        dom::local_storage_set(THEME_KEY, if dark { "dark" } else { "light" });
        log::info!("[theme] switched to {}", if dark { "dark" } else { "light" });

        if let Some((scene, canvas)) = &water {
            if let Some(toggle) = doc.get_element_by_id(TOGGLE_ID) {
                let (cx, cy) = dom::element_center(&toggle);
                if let Some((x, y)) = client_to_canvas_px(canvas, cx, cy) {
                    scene.borrow_mut().enqueue(SpawnRequest::Burst {
                        x,
                        y,
                        rings: THEME_BURST_RINGS,
                    });
                }
            }
        }
    });
}

fn client_to_canvas_px(
    canvas: &web::HtmlCanvasElement,
    client_x: f32,
    client_y: f32,
) -> Option<(f32, f32)> {
    let rect = canvas.get_bounding_client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    let x = (client_x as f64 - rect.left()) / rect.width() * canvas.width() as f64;
    let y = (client_y as f64 - rect.top()) / rect.height() * canvas.height() as f64;
    Some((x as f32, y as f32))
}
