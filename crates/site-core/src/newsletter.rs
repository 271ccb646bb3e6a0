//! Newsletter subscription form state.
//!
//! There is no mailing-list backend: a submission waits a fixed delay and
//! then always succeeds.

use crate::constants::NEWSLETTER_SIMULATED_DELAY_MS;
use crate::error::NewsletterError;
use std::time::Duration;

/// Proof that a submission was accepted; hand it back to `complete`.
#[derive(Debug, PartialEq, Eq)]
pub struct Submission {
    pub email: String,
    pub delay: Duration,
}

#[derive(Clone, Debug, Default)]
pub struct NewsletterForm {
    email: String,
    subscribing: bool,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    #[inline]
    pub fn is_subscribing(&self) -> bool {
        self.subscribing
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn submit(&mut self) -> Result<Submission, NewsletterError> {
        if self.subscribing {
            return Err(NewsletterError::AlreadySubscribing);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(NewsletterError::EmptyEmail);
        }
        if !looks_like_email(email) {
            return Err(NewsletterError::InvalidEmail(email.to_string()));
        }
        self.subscribing = true;
        Ok(Submission {
            email: email.to_string(),
            delay: Duration::from_millis(NEWSLETTER_SIMULATED_DELAY_MS as u64),
        })
    }

    /// Finish a submission: the field is cleared and the button re-enabled.
    pub fn complete(&mut self, submission: Submission) {
        log::info!("[newsletter] subscribed {}", submission.email);
        self.email.clear();
        self.subscribing = false;
    }
}

/// Roughly the shape check a browser applies to `type="email"` inputs.
pub fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !s.chars().any(char::is_whitespace)
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}
