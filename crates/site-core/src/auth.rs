//! Gate in front of the admin area.
//!
//! The authentication context itself lives with the host; the gate only sees
//! its `is_loading` / `is_authenticated` pair and asks the router to navigate.

use crate::constants::DEFAULT_LOGIN_PATH;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_loading: bool,
    pub is_authenticated: bool,
}

impl AuthState {
    pub const LOADING: AuthState = AuthState {
        is_loading: true,
        is_authenticated: false,
    };

    pub fn settled(is_authenticated: bool) -> Self {
        Self {
            is_loading: false,
            is_authenticated,
        }
    }
}

/// Client-side routing.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate(&mut self, path: &str) {
        self(path)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateView {
    /// Auth state unknown; show the waiting indicator.
    Waiting,
    /// Settled and unauthenticated; nothing is rendered while redirecting.
    Hidden,
    Protected,
}

#[derive(Clone, Debug)]
pub struct AuthGate {
    redirect_to: String,
    last: Option<AuthState>,
}

impl AuthGate {
    pub fn new(redirect_to: impl Into<String>) -> Self {
        Self {
            redirect_to: redirect_to.into(),
            last: None,
        }
    }

    pub fn redirect_to(&self) -> &str {
        &self.redirect_to
    }

    pub fn view(state: AuthState) -> GateView {
        if state.is_loading {
            GateView::Waiting
        } else if state.is_authenticated {
            GateView::Protected
        } else {
            GateView::Hidden
        }
    }

    /// Reconcile with the latest auth state. The redirect runs only when the
    /// state differs from the last one synced, so repeated syncs with the
    /// same values never navigate twice.
    pub fn sync<N: Navigator + ?Sized>(&mut self, state: AuthState, navigator: &mut N) -> GateView {
        if self.last != Some(state) {
            self.last = Some(state);
            if !state.is_loading && !state.is_authenticated {
                log::info!("[auth] not authenticated, redirecting to {}", self.redirect_to);
                navigator.navigate(&self.redirect_to);
            }
        }
        Self::view(state)
    }
}

impl Default for AuthGate {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_PATH)
    }
}
