#![cfg(target_arch = "wasm32")]
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{
    FRAME_INTERVAL_MS_DESKTOP, FRAME_INTERVAL_MS_MOBILE, LOGO_CANVAS_HEIGHT, LOGO_CANVAS_WIDTH,
};
use crate::core::{EffectConfig, FrameThrottle, Scene};
use crate::frame::FrameContext;
use crate::render::CanvasRenderer;
use crate::tween::{StyleTweener, Tweener};

mod constants;
mod core;
mod dom;
mod events;
mod feedback;
mod frame;
mod nav;
mod render;
mod reveal;
mod scroll;
mod slideshow;
mod status;
mod theme;
mod tween;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ocean-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let reduced_motion = dom::prefers_reduced_motion();
    let is_mobile = dom::is_mobile_viewport();

    // structural features run regardless of motion preference
    nav::init(&document);
    events::wire_global_keydown(&document);
    scroll::init_progress(&document);
    status::init(&document);
    feedback::init_click_ripples(&document);
    feedback::init_card_hover(&document);

    if reduced_motion {
        // a static page is the accepted fallback
        log::info!("reduced motion requested; canvas engine disabled");
        theme::init(&document, None);
        return Ok(());
    }

    let tweener: Rc<dyn Tweener> = Rc::new(StyleTweener);
    reveal::init_reveal(&document, tweener.clone());
    reveal::init_catch_copy(&document, tweener.as_ref());
    slideshow::init_hero_slideshow(&document);
    slideshow::init_step_navigation(&document);

    let water = start_water_surface(&document, is_mobile)?;
    theme::init(&document, water);
    start_logo_surface(&document, is_mobile)?;

    Ok(())
}

fn frame_interval(is_mobile: bool) -> f64 {
    if is_mobile {
        FRAME_INTERVAL_MS_MOBILE
    } else {
        FRAME_INTERVAL_MS_DESKTOP
    }
}

fn seed_from_clock() -> u64 {
    js_sys::Date::now() as u64
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    dom::listen_window("resize", move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    });
}

/// Fullscreen water surface: pointer-fed ripples and cursor trails, paused
/// with the tab.
fn start_water_surface(
    document: &web::Document,
    is_mobile: bool,
) -> anyhow::Result<Option<(Rc<RefCell<Scene>>, web::HtmlCanvasElement)>> {
    let Some(canvas_el) = document.get_element_by_id("waterCanvas") else {
        return Ok(None);
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#waterCanvas is not a canvas"))?;

    wire_canvas_resize(&canvas);

    let scene = Rc::new(RefCell::new(Scene::new(
        EffectConfig::water(),
        canvas.width() as f32,
        canvas.height() as f32,
        seed_from_clock(),
    )));
    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
    });

    let visible = Rc::new(Cell::new(true));
    frame::wire_page_visibility(document, visible.clone());

    let ctx = Rc::new(RefCell::new(FrameContext {
        scene: scene.clone(),
        renderer: CanvasRenderer::new(canvas.clone())?,
        canvas: canvas.clone(),
        throttle: FrameThrottle::new(frame_interval(is_mobile)),
        visible,
    }));
    frame::start_loop(ctx);
    log::info!(
        "[water] surface started (population cap {})",
        scene.borrow().population_cap()
    );
    Ok(Some((scene, canvas)))
}

/// Logo surface: a fixed-size canvas whose particle pool converges on the
/// logo, paused while scrolled out of view.
fn start_logo_surface(document: &web::Document, is_mobile: bool) -> anyhow::Result<()> {
    let Some(canvas_el) = document.get_element_by_id("logoCanvas") else {
        return Ok(());
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#logoCanvas is not a canvas"))?;
    canvas.set_width(LOGO_CANVAS_WIDTH);
    canvas.set_height(LOGO_CANVAS_HEIGHT);

    let cfg = EffectConfig::logo(is_mobile);
    let pool = cfg.population_cap;
    let scene = Rc::new(RefCell::new(Scene::new(
        cfg,
        canvas.width() as f32,
        canvas.height() as f32,
        seed_from_clock(),
    )));
    scene.borrow_mut().seed_logo_pool(pool);
    log::info!("[logo] pool seeded: {} particles", scene.borrow().population());
    events::wire_reform_on_click(&canvas, scene.clone());

    let visible = Rc::new(Cell::new(true));
    frame::observe_visibility(&canvas, visible.clone());

    let ctx = Rc::new(RefCell::new(FrameContext {
        scene,
        renderer: CanvasRenderer::new(canvas.clone())?,
        canvas,
        throttle: FrameThrottle::new(frame_interval(is_mobile)),
        visible,
    }));
    frame::start_loop(ctx);
    log::info!("[logo] surface started");
    Ok(())
}
