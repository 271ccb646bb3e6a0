//! Custom cursor follower.
//!
//! Position and style are tracked separately: the position is written on every
//! animation frame, while the style only changes when the cursor mode does.

use crate::constants::{
    CURSOR_COLOR_ACCENT, CURSOR_COLOR_PRIMARY, CURSOR_SCALE_HOVER, CURSOR_SCALE_IDLE,
    CURSOR_SCALE_PRESSED,
};
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorMode {
    Idle,
    HoveringInteractive,
    Pressed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorVisibility {
    Shown,
    Hidden,
}

/// What the host knows about the element under the pointer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverTarget {
    /// Computed CSS `cursor` value.
    pub cursor: String,
    /// Upper-case tag name as reported by the DOM.
    pub tag_name: String,
    /// Some ancestor is a `button` or `a`.
    pub has_interactive_ancestor: bool,
}

impl HoverTarget {
    pub fn is_interactive(&self) -> bool {
        self.cursor == "pointer"
            || self.tag_name.eq_ignore_ascii_case("button")
            || self.tag_name.eq_ignore_ascii_case("a")
            || self.has_interactive_ancestor
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorStyle {
    pub scale: f64,
    pub color: &'static str,
}

impl CursorStyle {
    pub fn for_mode(mode: CursorMode) -> Self {
        match mode {
            CursorMode::Idle => Self {
                scale: CURSOR_SCALE_IDLE,
                color: CURSOR_COLOR_PRIMARY,
            },
            CursorMode::HoveringInteractive => Self {
                scale: CURSOR_SCALE_HOVER,
                color: CURSOR_COLOR_PRIMARY,
            },
            CursorMode::Pressed => Self {
                scale: CURSOR_SCALE_PRESSED,
                color: CURSOR_COLOR_ACCENT,
            },
        }
    }

    pub fn transform(&self) -> String {
        format!("scale({})", self.scale)
    }
}

#[derive(Clone, Debug)]
pub struct CursorFollower {
    position: DVec2,
    interactive: bool,
    pressed: bool,
    visibility: CursorVisibility,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            interactive: false,
            pressed: false,
            visibility: CursorVisibility::Shown,
        }
    }
}

impl CursorFollower {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    #[inline]
    pub fn visibility(&self) -> CursorVisibility {
        self.visibility
    }

    pub fn mode(&self) -> CursorMode {
        if self.pressed {
            CursorMode::Pressed
        } else if self.interactive {
            CursorMode::HoveringInteractive
        } else {
            CursorMode::Idle
        }
    }

    pub fn style(&self) -> CursorStyle {
        CursorStyle::for_mode(self.mode())
    }

    /// Record the pointer position and reclassify the hovered element.
    /// Returns the new mode when it changed.
    pub fn on_move(&mut self, pointer: DVec2, target: &HoverTarget) -> Option<CursorMode> {
        self.position = pointer;
        let before = self.mode();
        self.interactive = target.is_interactive();
        let after = self.mode();
        (before != after).then_some(after)
    }

    pub fn on_down(&mut self) -> Option<CursorMode> {
        let before = self.mode();
        self.pressed = true;
        (before != CursorMode::Pressed).then_some(CursorMode::Pressed)
    }

    /// Release falls back to whatever the last move classified.
    pub fn on_up(&mut self) -> Option<CursorMode> {
        let before = self.mode();
        self.pressed = false;
        let after = self.mode();
        (before != after).then_some(after)
    }

    pub fn on_document_enter(&mut self) -> bool {
        let changed = self.visibility != CursorVisibility::Shown;
        self.visibility = CursorVisibility::Shown;
        changed
    }

    pub fn on_document_leave(&mut self) -> bool {
        let changed = self.visibility != CursorVisibility::Hidden;
        self.visibility = CursorVisibility::Hidden;
        changed
    }
}
