use thiserror::Error;

/// Failure to read a configuration value from its textual form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown animation `{0}`")]
    UnknownAnimation(String),
    #[error("unknown parallax direction `{0}`")]
    UnknownDirection(String),
    #[error("attribute `{attr}` has non-numeric value `{value}`")]
    InvalidNumber { attr: String, value: String },
    #[error("attribute `{attr}` has non-boolean value `{value}`")]
    InvalidBool { attr: String, value: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NewsletterError {
    #[error("email address is required")]
    EmptyEmail,
    #[error("`{0}` is not a valid email address")]
    InvalidEmail(String),
    #[error("a subscription is already in progress")]
    AlreadySubscribing,
}
