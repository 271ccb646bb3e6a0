//! Scroll-reveal sections: class names and transition timing per animation.

use crate::attrs::read_number;
use crate::constants::{DEFAULT_REVEAL_DURATION_MS, DEFAULT_REVEAL_THRESHOLD, DEFAULT_ROOT_MARGIN};
use crate::error::ConfigError;
use crate::visibility::VisibilityOptions;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Animation {
    #[default]
    FadeIn,
    SlideUp,
    SlideLeft,
    SlideRight,
    ScaleIn,
    BounceIn,
}

impl FromStr for Animation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "fade-in" => Ok(Animation::FadeIn),
            "slide-up" => Ok(Animation::SlideUp),
            "slide-left" => Ok(Animation::SlideLeft),
            "slide-right" => Ok(Animation::SlideRight),
            "scale-in" => Ok(Animation::ScaleIn),
            "bounce-in" => Ok(Animation::BounceIn),
            other => Err(ConfigError::UnknownAnimation(other.to_string())),
        }
    }
}

impl Animation {
    pub fn hidden_classes(self) -> &'static str {
        match self {
            Animation::FadeIn => "opacity-0 translate-y-8",
            Animation::SlideUp => "opacity-0 translate-y-16",
            Animation::SlideLeft => "opacity-0 -translate-x-16",
            Animation::SlideRight => "opacity-0 translate-x-16",
            Animation::ScaleIn => "opacity-0 scale-95",
            Animation::BounceIn => "opacity-0 scale-90",
        }
    }

    pub fn active_classes(self) -> &'static str {
        match self {
            Animation::FadeIn | Animation::SlideUp => "opacity-100 translate-y-0",
            Animation::SlideLeft | Animation::SlideRight => "opacity-100 translate-x-0",
            Animation::ScaleIn | Animation::BounceIn => "opacity-100 scale-100",
        }
    }

    pub fn transition_classes(self) -> &'static str {
        match self {
            Animation::BounceIn => "transition-all ease-[cubic-bezier(0.68,-0.55,0.265,1.55)]",
            _ => "transition-all ease-out",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub animation: Animation,
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub threshold: f64,
    pub class_name: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            animation: Animation::FadeIn,
            delay_ms: 0,
            duration_ms: DEFAULT_REVEAL_DURATION_MS,
            threshold: DEFAULT_REVEAL_THRESHOLD,
            class_name: String::new(),
        }
    }
}

impl RevealConfig {
    /// Read overrides through `attr`, which returns an attribute's raw value.
    /// Unreadable values keep the default and are reported alongside the config.
    pub fn from_attributes<F>(attr: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        let mut errors = Vec::new();

        if let Some(v) = attr("data-reveal").filter(|v| !v.trim().is_empty()) {
            match v.parse() {
                Ok(a) => cfg.animation = a,
                Err(e) => errors.push(e),
            }
        }
        read_number(&attr, "data-reveal-delay", &mut cfg.delay_ms, &mut errors);
        read_number(&attr, "data-reveal-duration", &mut cfg.duration_ms, &mut errors);
        read_number(&attr, "data-reveal-threshold", &mut cfg.threshold, &mut errors);
        (cfg, errors)
    }

    /// Reveal sections are always one-shot.
    pub fn visibility_options(&self) -> VisibilityOptions {
        VisibilityOptions {
            threshold: self.threshold,
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
            trigger_once: true,
        }
    }

    pub fn class_list(&self, visible: bool) -> String {
        let state = if visible {
            self.animation.active_classes()
        } else {
            self.animation.hidden_classes()
        };
        let mut out = format!("{} {}", self.animation.transition_classes(), state);
        if !self.class_name.is_empty() {
            out.push(' ');
            out.push_str(&self.class_name);
        }
        out
    }

    pub fn style(&self) -> String {
        format!(
            "transition-duration: {}ms; transition-delay: {}ms;",
            self.duration_ms, self.delay_ms
        )
    }
}

/// One config per child, each delayed `stagger_delay_ms` after the previous.
pub fn stagger(count: usize, stagger_delay_ms: u32, animation: Animation) -> Vec<RevealConfig> {
    (0..count)
        .map(|i| RevealConfig {
            animation,
            delay_ms: (i as u32).saturating_mul(stagger_delay_ms),
            ..RevealConfig::default()
        })
        .collect()
}
