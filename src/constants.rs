// DOM hooks and visual tuning used by the web frontend.
// Components are discovered from these attributes when the module starts.

// Reveal and in-view tracking
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const STAGGER_SELECTOR: &str = "[data-stagger]";
pub const IN_VIEW_SELECTOR: &str = "[data-in-view]";
pub const IN_VIEW_STATE_ATTR: &str = "data-visible";

// Parallax
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const PARALLAX_BG_SELECTOR: &str = "[data-parallax-bg]";
pub const PARALLAX_LAYER_SELECTOR: &str = "[data-parallax-layer]";
pub const PARALLAX_OVERLAY_SELECTOR: &str = "[data-parallax-overlay]";
pub const PARALLAX_TRANSITION: &str = "transform 0.1s ease-out";
pub const PARALLAX_BG_SCALE: &str = "1.2"; // hides edges uncovered while translating
pub const MOUSE_PARALLAX_SELECTOR: &str = "[data-mouse-parallax]";

// Hover effects
pub const MAGNETIC_SELECTOR: &str = "[data-magnetic]";
pub const MAGNETIC_TRANSITION: &str = "transform 0.2s ease-out";
pub const TILT_SELECTOR: &str = "[data-tilt]";
pub const TILT_GLARE_SELECTOR: &str = "[data-tilt-glare]";
pub const TILT_TRANSITION: &str = "transform 0.2s cubic-bezier(0.23, 1, 0.32, 1)";

// Cursor follower (opt-in on <body>)
pub const CUSTOM_CURSOR_ATTR: &str = "data-custom-cursor";
pub const CURSOR_DOT_CLASS: &str = "custom-cursor-dot";
pub const INTERACTIVE_ANCESTOR_SELECTOR: &str = "button, a";
pub const CURSOR_STYLE_SHEET: &str = "* { cursor: none !important; }
.custom-cursor-dot {
  position: fixed;
  width: 8px;
  height: 8px;
  margin: -4px 0 0 -4px;
  border-radius: 50%;
  pointer-events: none;
  z-index: 9999;
  will-change: transform;
  transition: transform 0.15s cubic-bezier(0.33, 1, 0.68, 1), background-color 0.15s ease;
}";

// Admin gate
pub const PROTECTED_SELECTOR: &str = "[data-protected]";
pub const REDIRECT_ATTR: &str = "data-redirect-to";
pub const WAITING_INDICATOR_ID: &str = "auth-waiting";

// Footer
pub const FOOTER_SELECTOR: &str = "footer[data-site-footer]";
pub const NEWSLETTER_FORM_SELECTOR: &str = "form[data-newsletter]";

// Background video
pub const BACKGROUND_VIDEO_SELECTOR: &str = "video[data-background-video]";
pub const VIDEO_OVERLAY_SELECTOR: &str = "[data-video-overlay]";
pub const DEFAULT_VIDEO_OVERLAY_OPACITY: f64 = 0.6;

// Page metadata read from <body> at start
pub const SEO_TITLE_ATTR: &str = "data-seo-title";
pub const SEO_DESCRIPTION_ATTR: &str = "data-seo-description";
pub const SEO_MARKER_ATTR: &str = "data-seo";
