//! Viewport visibility tracking for one observed element.
//!
//! The host owns the actual intersection observer. It calls [`VisibilityObserver::mount`]
//! once the target exists, forwards every intersection entry, and honours the
//! [`ObserverCommand`] returned so a one-shot observer detaches from its target
//! the moment it fires.

use crate::constants::{DEFAULT_REVEAL_THRESHOLD, DEFAULT_ROOT_MARGIN};

#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the target (0..=1) that must be visible.
    pub threshold: f64,
    /// CSS margin applied to the root's bounding box.
    pub root_margin: String,
    /// Stop observing after the first time the target becomes visible.
    pub trigger_once: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_REVEAL_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
            trigger_once: true,
        }
    }
}

/// The subset of an intersection observer entry the tracker consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn inside() -> Self {
        Self {
            is_intersecting: true,
        }
    }

    pub fn outside() -> Self {
        Self {
            is_intersecting: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObserverPhase {
    /// Not yet mounted, or mounted without a target.
    Idle,
    Observing,
    /// Released, either by unmount or by a one-shot trigger.
    Detached,
}

/// Instruction for the host observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObserverCommand {
    /// Keep delivering entries.
    Continue,
    /// Stop observing the target now.
    Unobserve,
}

#[derive(Clone, Debug)]
pub struct VisibilityObserver {
    options: VisibilityOptions,
    visible: bool,
    phase: ObserverPhase,
}

impl VisibilityObserver {
    pub fn new(options: VisibilityOptions) -> Self {
        Self {
            options,
            visible: false,
            phase: ObserverPhase::Idle,
        }
    }

    pub fn options(&self) -> &VisibilityOptions {
        &self.options
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn phase(&self) -> ObserverPhase {
        self.phase
    }

    #[inline]
    pub fn is_observing(&self) -> bool {
        self.phase == ObserverPhase::Observing
    }

    /// Begin observing. Returns false (and stays idle) when there is no target.
    pub fn mount(&mut self, has_target: bool) -> bool {
        if !has_target {
            log::debug!("[visibility] no target at mount, skipping");
            return false;
        }
        if self.phase == ObserverPhase::Idle {
            self.phase = ObserverPhase::Observing;
        }
        self.is_observing()
    }

    /// Apply one intersection entry. Entries delivered while not observing are
    /// ignored, so a fired one-shot observer can never revert.
    pub fn on_entry(&mut self, entry: IntersectionEntry) -> ObserverCommand {
        if !self.is_observing() {
            return ObserverCommand::Unobserve;
        }
        if entry.is_intersecting {
            self.visible = true;
            if self.options.trigger_once {
                self.phase = ObserverPhase::Detached;
                return ObserverCommand::Unobserve;
            }
        } else if !self.options.trigger_once {
            self.visible = false;
        }
        ObserverCommand::Continue
    }

    /// Release unconditionally. Visibility keeps its last value for rendering.
    pub fn unmount(&mut self) {
        self.phase = ObserverPhase::Detached;
    }
}

impl Default for VisibilityObserver {
    fn default() -> Self {
        Self::new(VisibilityOptions::default())
    }
}
