//! Scroll-driven parallax offsets.

use crate::constants::{DEFAULT_OVERLAY_OPACITY, DEFAULT_PARALLAX_SPEED};
use crate::env::{Environment, Measure};
use crate::error::ConfigError;
use crate::attrs::read_number;
use std::str::FromStr;

/// `(scroll_y - element_top) * speed`, where `element_top` is the element's
/// position in document coordinates.
#[inline]
pub fn parallax_offset(scroll_y: f64, element_top: f64, speed: f64) -> f64 {
    (scroll_y - element_top) * speed
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(ConfigError::UnknownDirection(other.to_string())),
        }
    }
}

impl Direction {
    /// CSS transform moving content by `offset` along this direction.
    pub fn transform(self, offset: f64) -> String {
        match self {
            Direction::Up => format!("translateY({}px)", -offset),
            Direction::Down => format!("translateY({}px)", offset),
            Direction::Left => format!("translateX({}px)", -offset),
            Direction::Right => format!("translateX({}px)", offset),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub speed: f64,
    pub direction: Direction,
}

impl ParallaxConfig {
    /// `data-parallax` names the direction, `data-parallax-speed` the speed.
    pub fn from_attributes<F>(attr: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        let mut errors = Vec::new();
        if let Some(v) = attr("data-parallax").filter(|v| !v.trim().is_empty()) {
            match v.parse() {
                Ok(d) => cfg.direction = d,
                Err(e) => errors.push(e),
            }
        }
        read_number(&attr, "data-parallax-speed", &mut cfg.speed, &mut errors);
        (cfg, errors)
    }
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_PARALLAX_SPEED,
            direction: Direction::Up,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxBackgroundConfig {
    pub speed: f64,
    pub overlay_opacity: f64,
}

impl Default for ParallaxBackgroundConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_PARALLAX_SPEED,
            overlay_opacity: DEFAULT_OVERLAY_OPACITY,
        }
    }
}

impl ParallaxBackgroundConfig {
    pub fn from_attributes<F>(attr: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        let mut errors = Vec::new();
        read_number(&attr, "data-parallax-speed", &mut cfg.speed, &mut errors);
        read_number(&attr, "data-overlay-opacity", &mut cfg.overlay_opacity, &mut errors);
        (cfg, errors)
    }

    /// The background layer always moves down with the offset.
    pub fn background_transform(&self, offset: f64) -> String {
        Direction::Down.transform(offset)
    }
}

/// Tracks the parallax offset of one element against the document scroll.
#[derive(Clone, Debug)]
pub struct ScrollOffsetTracker {
    speed: f64,
    offset: f64,
}

impl ScrollOffsetTracker {
    pub fn new(speed: f64) -> Self {
        Self { speed, offset: 0.0 }
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Recompute from the current scroll position and the target's layout box.
    /// With no target the last offset is kept.
    pub fn update<E, M>(&mut self, env: &E, target: Option<&M>) -> f64
    where
        E: Environment + ?Sized,
        M: Measure + ?Sized,
    {
        if let Some(target) = target {
            let scrolled = env.scroll_y();
            // Viewport-relative top plus scroll gives the document position.
            let element_top = target.bounding_rect().top + scrolled;
            self.offset = parallax_offset(scrolled, element_top, self.speed);
        }
        self.offset
    }
}

impl Default for ScrollOffsetTracker {
    fn default() -> Self {
        Self::new(DEFAULT_PARALLAX_SPEED)
    }
}
