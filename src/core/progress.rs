// Pure helpers behind the scroll, slideshow and status modules.

/// Fraction of the document scrolled, clamped to [0, 1]. The denominator is
/// floored at one pixel so a document shorter than the viewport reads zero
/// instead of dividing by zero.
pub fn scroll_fraction(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let max = (scroll_height - client_height).max(1.0);
    (scroll_top / max).clamp(0.0, 1.0)
}

/// Next slide index, wrapping at the end. Empty slideshows stay at zero.
pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + 1) % len
}

/// Linear progress through a fixed duration, clamped to [0, 1].
pub fn time_progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Integer count-up interpolation for the status card numbers.
pub fn eased_count(start: i32, end: i32, progress: f64) -> i32 {
    start + ((end - start) as f64 * progress).floor() as i32
}
