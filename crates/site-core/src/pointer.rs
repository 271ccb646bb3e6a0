//! Pointer-relative displacement and rotation for hover effects.
//!
//! All trackers compute their output from the latest pointer position and the
//! element's bounding box. The ratio to the box size bounds the result, so no
//! explicit clamp is applied. A leave event restores the neutral value.

use crate::constants::{
    DEFAULT_MAGNETIC_STRENGTH, DEFAULT_MAX_TILT_DEG, DEFAULT_MOUSE_PARALLAX_INTENSITY,
    TILT_HOVER_SCALE, TILT_PERSPECTIVE_PX,
};
use crate::env::Rect;
use crate::error::ConfigError;
use crate::attrs::{read_bool, read_number};
use glam::DVec2;

/// `(pointer - center) / size`, or zero for a box without area.
#[inline]
pub fn normalized_from_center(pointer: DVec2, rect: &Rect) -> DVec2 {
    if rect.is_degenerate() {
        return DVec2::ZERO;
    }
    (pointer - rect.center()) / rect.size()
}

/// Displaces an element toward the pointer while hovered.
#[derive(Clone, Debug)]
pub struct MagneticPull {
    strength: f64,
    position: DVec2,
}

impl MagneticPull {
    pub fn new(strength: f64) -> Self {
        Self {
            strength,
            position: DVec2::ZERO,
        }
    }

    pub fn from_attributes<F>(attr: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut strength = DEFAULT_MAGNETIC_STRENGTH;
        let mut errors = Vec::new();
        read_number(&attr, "data-magnetic-strength", &mut strength, &mut errors);
        (Self::new(strength), errors)
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn on_move(&mut self, pointer: DVec2, rect: &Rect) -> DVec2 {
        self.position = normalized_from_center(pointer, rect) * self.strength;
        self.position
    }

    pub fn on_leave(&mut self) -> DVec2 {
        self.position = DVec2::ZERO;
        self.position
    }

    pub fn transform(&self) -> String {
        format!("translate({}px, {}px)", self.position.x, self.position.y)
    }
}

impl Default for MagneticPull {
    fn default() -> Self {
        Self::new(DEFAULT_MAGNETIC_STRENGTH)
    }
}

/// Follows the global pointer relative to an element's center.
#[derive(Clone, Debug)]
pub struct MouseParallax {
    intensity: f64,
    position: DVec2,
}

impl MouseParallax {
    pub fn new(intensity: f64) -> Self {
        Self {
            intensity,
            position: DVec2::ZERO,
        }
    }

    pub fn from_attributes<F>(attr: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut intensity = DEFAULT_MOUSE_PARALLAX_INTENSITY;
        let mut errors = Vec::new();
        read_number(&attr, "data-mouse-parallax-intensity", &mut intensity, &mut errors);
        (Self::new(intensity), errors)
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn on_move(&mut self, pointer: DVec2, rect: &Rect) -> DVec2 {
        self.position = normalized_from_center(pointer, rect) * self.intensity;
        self.position
    }

    pub fn on_leave(&mut self) -> DVec2 {
        self.position = DVec2::ZERO;
        self.position
    }

    pub fn transform(&self) -> String {
        format!("translate({}px, {}px)", self.position.x, self.position.y)
    }
}

impl Default for MouseParallax {
    fn default() -> Self {
        Self::new(DEFAULT_MOUSE_PARALLAX_INTENSITY)
    }
}

/// Highlight that follows the pointer across a tilted card.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Glare {
    /// Pointer position inside the card, in percent of its size.
    pub x_pct: f64,
    pub y_pct: f64,
    /// 0 at the center, 1 at a corner.
    pub intensity: f64,
}

impl Glare {
    pub fn background(&self) -> String {
        format!(
            "radial-gradient(circle at {}% {}%, rgba(255, 255, 255, {}), transparent 60%)",
            self.x_pct,
            self.y_pct,
            self.intensity * 0.35
        )
    }
}

/// 3D rotation toward the pointer, in degrees. `x` is rotateX, `y` rotateY.
#[derive(Clone, Debug)]
pub struct Tilt {
    max_tilt: f64,
    disabled: bool,
    rotation: DVec2,
    glare: Glare,
    hovered: bool,
}

impl Tilt {
    pub fn new(max_tilt: f64, disabled: bool) -> Self {
        Self {
            max_tilt,
            disabled,
            rotation: DVec2::ZERO,
            glare: Glare::default(),
            hovered: false,
        }
    }

    pub fn from_attributes<F>(attr: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut max_tilt = DEFAULT_MAX_TILT_DEG;
        let mut disabled = false;
        let mut errors = Vec::new();
        read_number(&attr, "data-tilt-max", &mut max_tilt, &mut errors);
        read_bool(&attr, "data-tilt-disabled", &mut disabled, &mut errors);
        (Self::new(max_tilt, disabled), errors)
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[inline]
    pub fn rotation(&self) -> DVec2 {
        self.rotation
    }

    #[inline]
    pub fn glare(&self) -> Glare {
        self.glare
    }

    pub fn on_move(&mut self, pointer: DVec2, rect: &Rect) -> DVec2 {
        if self.disabled {
            return self.rotation;
        }
        if rect.is_degenerate() {
            return self.on_leave();
        }
        let local = pointer - DVec2::new(rect.left, rect.top);
        let half = rect.size() / 2.0;
        let rel = (local - half) / half;
        self.rotation = DVec2::new(rel.y * -self.max_tilt, rel.x * self.max_tilt);
        self.glare = Glare {
            x_pct: local.x / rect.width * 100.0,
            y_pct: local.y / rect.height * 100.0,
            intensity: rel.length() / std::f64::consts::SQRT_2,
        };
        self.hovered = true;
        self.rotation
    }

    pub fn on_leave(&mut self) -> DVec2 {
        if self.disabled {
            return self.rotation;
        }
        self.rotation = DVec2::ZERO;
        self.glare = Glare::default();
        self.hovered = false;
        self.rotation
    }

    pub fn transform(&self) -> String {
        let scale = if self.hovered { TILT_HOVER_SCALE } else { 1.0 };
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) scale3d({}, {}, {})",
            TILT_PERSPECTIVE_PX, self.rotation.x, self.rotation.y, scale, scale, scale
        )
    }
}

impl Default for Tilt {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TILT_DEG, false)
    }
}
