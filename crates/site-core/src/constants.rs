// Site-wide defaults shared by the core trackers and the web frontend.

// Branding
pub const SITE_NAME: &str = "Sakthi Sai Biotech";
pub const DEFAULT_OG_IMAGE: &str = "https://sakthisaibiotech.com/images/logo-preview.png";
pub const DEFAULT_ROBOTS: &str =
    "index, follow, max-image-preview:large, max-snippet:-1, max-video-preview:-1";

// Viewport
pub const COMPACT_VIEWPORT_MAX_WIDTH_PX: u32 = 768;

// Reveal
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_ROOT_MARGIN: &str = "0px";
pub const DEFAULT_REVEAL_DURATION_MS: u32 = 600;
pub const DEFAULT_STAGGER_DELAY_MS: u32 = 100;

// Parallax
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;
pub const DEFAULT_OVERLAY_OPACITY: f64 = 0.5;
pub const DEFAULT_MOUSE_PARALLAX_INTENSITY: f64 = 20.0;

// Pointer effects
pub const DEFAULT_MAGNETIC_STRENGTH: f64 = 20.0;
pub const DEFAULT_MAX_TILT_DEG: f64 = 8.0;
pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;
pub const TILT_HOVER_SCALE: f64 = 1.02;

// Cursor follower
pub const CURSOR_COLOR_PRIMARY: &str = "hsl(145, 63%, 42%)";
pub const CURSOR_COLOR_ACCENT: &str = "hsl(20, 90%, 55%)";
pub const CURSOR_SCALE_IDLE: f64 = 1.0;
pub const CURSOR_SCALE_HOVER: f64 = 2.0;
pub const CURSOR_SCALE_PRESSED: f64 = 0.5;

// Admin area
pub const DEFAULT_LOGIN_PATH: &str = "/admin/login";

// Loading indicator
pub const LOADING_TICK_MS: u32 = 200;
pub const LOADING_PROGRESS_CAP: f64 = 90.0;
pub const LOADING_MAX_STEP: f64 = 10.0;

// Newsletter
pub const NEWSLETTER_SIMULATED_DELAY_MS: u32 = 1000;

/// Media query matching the compact (mobile) viewport.
pub fn compact_viewport_query() -> String {
    format!("(max-width: {}px)", COMPACT_VIEWPORT_MAX_WIDTH_PX)
}
