//! Capabilities the trackers need from their host.
//!
//! The browser implementation lives in the web crate; tests supply fakes.

use glam::DVec2;

/// Axis-aligned box in viewport coordinates (CSS pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// A box with no area cannot be used as a reference for ratios.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Global viewport queries.
pub trait Environment {
    /// Current vertical document scroll offset.
    fn scroll_y(&self) -> f64;
    /// True when the viewport is at or below the compact breakpoint.
    fn is_compact_viewport(&self) -> bool;
}

/// Anything with a layout box.
pub trait Measure {
    fn bounding_rect(&self) -> Rect;
}

impl Measure for Rect {
    fn bounding_rect(&self) -> Rect {
        *self
    }
}
