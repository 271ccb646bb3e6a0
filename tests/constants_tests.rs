// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use site_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_are_within_reasonable_bounds() {
    assert!(DEFAULT_REVEAL_THRESHOLD > 0.0 && DEFAULT_REVEAL_THRESHOLD <= 1.0);
    assert!(DEFAULT_PARALLAX_SPEED > 0.0 && DEFAULT_PARALLAX_SPEED <= 1.0);
    assert!(DEFAULT_OVERLAY_OPACITY >= 0.0 && DEFAULT_OVERLAY_OPACITY <= 1.0);
    assert!(DEFAULT_VIDEO_OVERLAY_OPACITY >= 0.0 && DEFAULT_VIDEO_OVERLAY_OPACITY <= 1.0);
    assert!(LOADING_PROGRESS_CAP < 100.0);
    assert!(CURSOR_SCALE_PRESSED < CURSOR_SCALE_IDLE && CURSOR_SCALE_IDLE < CURSOR_SCALE_HOVER);
}

#[test]
fn compact_query_uses_breakpoint() {
    assert_eq!(compact_viewport_query(), "(max-width: 768px)");
}

#[test]
fn selectors_are_attribute_hooks() {
    for sel in [
        REVEAL_SELECTOR,
        STAGGER_SELECTOR,
        IN_VIEW_SELECTOR,
        PARALLAX_SELECTOR,
        PARALLAX_BG_SELECTOR,
        MOUSE_PARALLAX_SELECTOR,
        MAGNETIC_SELECTOR,
        TILT_SELECTOR,
        PROTECTED_SELECTOR,
    ] {
        assert!(sel.starts_with("[data-") && sel.ends_with(']'), "{sel}");
    }
    assert!(CURSOR_STYLE_SHEET.contains(CURSOR_DOT_CLASS));
}
