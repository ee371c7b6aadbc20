use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Declarative from→to keyframes for an element entrance. This small surface
/// is all the engine asks of any animation backend, so swapping the backend
/// never touches callers.
#[derive(Clone, Debug)]
pub struct Keyframes {
    pub opacity: Option<(f32, f32)>,
    pub translate_y: Option<(f32, f32)>,
    pub scale: Option<(f32, f32)>,
    pub duration_ms: f64,
    pub delay_ms: f64,
}

impl Keyframes {
    /// The standard section entrance: fade up from slightly below.
    pub fn entrance(duration_ms: f64, delay_ms: f64) -> Self {
        Self {
            opacity: Some((0.0, 1.0)),
            translate_y: Some((50.0, 0.0)),
            scale: Some((0.9, 1.0)),
            duration_ms,
            delay_ms,
        }
    }
}

pub trait Tweener {
    fn animate(&self, target: &web::Element, frames: &Keyframes);
}

/// Backend built on CSS transitions: snap to the start state, then enable
/// the transition and apply the end state on the next frame.
pub struct StyleTweener;

impl Tweener for StyleTweener {
    fn animate(&self, target: &web::Element, frames: &Keyframes) {
        dom::set_style(target, "transition", "none");
        apply_phase(target, frames, false);

        let el = target.clone();
        let frames = frames.clone();
        let step = Closure::once_into_js(move |_now: f64| {
            dom::set_style(
                &el,
                "transition",
                &format!(
                    "opacity {}ms ease {}ms, transform {}ms ease {}ms",
                    frames.duration_ms, frames.delay_ms, frames.duration_ms, frames.delay_ms
                ),
            );
            apply_phase(&el, &frames, true);
        });
        if let Some(window) = web::window() {
            _ = window.request_animation_frame(step.unchecked_ref());
        }
    }
}

fn apply_phase(el: &web::Element, frames: &Keyframes, end: bool) {
    let pick = |pair: (f32, f32)| if end { pair.1 } else { pair.0 };
    if let Some(opacity) = frames.opacity {
        dom::set_style(el, "opacity", &format!("{:.3}", pick(opacity)));
    }
    let mut transform = String::new();
    if let Some(ty) = frames.translate_y {
        transform.push_str(&format!("translateY({:.1}px)", pick(ty)));
    }
    if let Some(scale) = frames.scale {
        if !transform.is_empty() {
            transform.push(' ');
        }
        transform.push_str(&format!("scale({:.3})", pick(scale)));
    }
    if !transform.is_empty() {
        dom::set_style(el, "transform", &transform);
    }
}
