use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{Scene, SpawnRequest};

/// Shared handles the pointer closures need. Handlers only enqueue spawn
/// requests; the frame tick is the sole store writer.
#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
}

/// Client coordinates mapped into canvas backing pixels (the backing store
/// is scaled by devicePixelRatio, so CSS pixels do not map one-to-one).
fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Option<(f32, f32)> {
    let rect = canvas.get_bounding_client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    let x_css = ev.client_x() as f64 - rect.left();
    let y_css = ev.client_y() as f64 - rect.top();
    let x = (x_css / rect.width()) * canvas.width() as f64;
    let y = (y_css / rect.height()) * canvas.height() as f64;
    Some((x as f32, y as f32))
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some((x, y)) = pointer_canvas_px(&ev, &w.canvas) {
            w.scene
                .borrow_mut()
                .enqueue(SpawnRequest::PointerMove { x, y });
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some((x, y)) = pointer_canvas_px(&ev, &w.canvas) {
            w.scene.borrow_mut().enqueue(SpawnRequest::Press { x, y });
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// The logo canvas re-forms on click: scatter fresh targets and let the
/// pool converge again.
pub fn wire_reform_on_click(canvas: &web::HtmlCanvasElement, scene: Rc<RefCell<Scene>>) {
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let mut scene = scene.borrow_mut();
        let was_formed = scene.formation_complete();
        scene.reseed_formation();
        log::info!("[logo] formation reseeded (was formed: {})", was_formed);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}
