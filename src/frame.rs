use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{FrameThrottle, Scene};
use crate::dom;
use crate::render::CanvasRenderer;

/// Everything one animated surface needs per frame. The shared visibility
/// cell is written by visibility listeners and read here, keeping the frame
/// path free of re-entrant borrows.
pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub renderer: CanvasRenderer,
    pub canvas: web::HtmlCanvasElement,
    pub throttle: FrameThrottle,
    pub visible: Rc<Cell<bool>>,
}

impl FrameContext {
    /// One scheduler tick. The rAF loop re-arms regardless of what happens
    /// here; a hidden or rate-capped frame just skips the work.
    pub fn frame(&mut self, now_ms: f64) {
        self.throttle.set_visible(self.visible.get());
        if !self.throttle.should_run(now_ms) {
            return;
        }
        let mut scene = self.scene.borrow_mut();
        scene.resize(self.canvas.width() as f32, self.canvas.height() as f32);
        scene.tick();
        self.renderer.draw(&scene);
    }
}

/// Drive the context from requestAnimationFrame, re-arming on every exit
/// path until page teardown.
pub fn start_loop(ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let ctx_tick = ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        ctx_tick.borrow_mut().frame(now_ms);
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
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

/// Tab-visibility gate for surfaces that live the whole page.
pub fn wire_page_visibility(document: &web::Document, visible: Rc<Cell<bool>>) {
    let doc = document.clone();
    dom::listen_document(document, "visibilitychange", move || {
        visible.set(!doc.hidden());
    });
}

/// Viewport gate for surfaces that can scroll away.
pub fn observe_visibility(el: &web::Element, visible: Rc<Cell<bool>>) {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    visible.set(entry.is_intersecting());
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    match web::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => observer.observe(el),
        Err(e) => log::warn!("[frame] intersection observer: {:?}", e),
    }
    callback.forget();
}
