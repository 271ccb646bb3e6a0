//! Platform-free logic behind the site's visual effects.
//!
//! Nothing in this crate touches the browser. Trackers receive raw signals
//! (scroll position, pointer position, intersection entries) and produce the
//! derived state the web frontend writes into the DOM.

pub mod attrs;
pub mod auth;
pub mod constants;
pub mod cursor;
pub mod env;
pub mod error;
pub mod footer;
pub mod i18n;
pub mod loading;
pub mod newsletter;
pub mod parallax;
pub mod pointer;
pub mod reveal;
pub mod seo;
pub mod visibility;

pub use auth::*;
pub use constants::*;
pub use cursor::*;
pub use env::*;
pub use error::*;
pub use footer::*;
pub use i18n::*;
pub use loading::*;
pub use newsletter::*;
pub use parallax::*;
pub use pointer::*;
pub use reveal::*;
pub use seo::*;
pub use visibility::*;
