// Host-side stand-ins for the browser capabilities the trackers consume.
#![allow(dead_code)]

use site_core::{Environment, Navigator};
use std::cell::Cell;

pub struct FakeEnv {
    pub scroll_y: Cell<f64>,
    pub compact: bool,
}

impl FakeEnv {
    pub fn at(scroll_y: f64) -> Self {
        Self {
            scroll_y: Cell::new(scroll_y),
            compact: false,
        }
    }

    pub fn compact() -> Self {
        Self {
            scroll_y: Cell::new(0.0),
            compact: true,
        }
    }

    pub fn scroll_to(&self, y: f64) {
        self.scroll_y.set(y);
    }
}

impl Environment for FakeEnv {
    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn is_compact_viewport(&self) -> bool {
        self.compact
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visits: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, path: &str) {
        self.visits.push(path.to_string());
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
