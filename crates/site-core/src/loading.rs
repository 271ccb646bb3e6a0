//! Progress shown by the waiting indicator.
//!
//! The value creeps upward by a random step each tick and stalls once it has
//! reached the cap; it never reports completion on its own.

use crate::constants::{LOADING_MAX_STEP, LOADING_PROGRESS_CAP};
use rand::Rng;

pub const VERIFYING_MESSAGE: &str = "Verifying credentials...";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SpinnerSize {
    pub fn class(self) -> &'static str {
        match self {
            SpinnerSize::Small => "w-8 h-8",
            SpinnerSize::Medium => "w-16 h-16",
            SpinnerSize::Large => "w-24 h-24",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoadingProgress {
    percent: f64,
}

impl LoadingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        if self.percent < LOADING_PROGRESS_CAP {
            self.percent += rng.gen::<f64>() * LOADING_MAX_STEP;
        }
        self.percent
    }

    pub fn width_style(&self) -> String {
        format!("{}%", self.percent)
    }
}
