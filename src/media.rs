use crate::constants::{DEFAULT_VIDEO_OVERLAY_OPACITY, VIDEO_OVERLAY_SELECTOR};
use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Start a muted background video. Browsers may refuse autoplay; that is
/// logged and the poster frame simply stays up.
pub fn autoplay(video: &web::Element) {
    let Some(video) = video.dyn_ref::<web::HtmlVideoElement>() else {
        return;
    };
    video.set_muted(true);
    video.set_loop(true);

    if let Some(overlay) = video
        .parent_element()
        .and_then(|p| p.query_selector(VIDEO_OVERLAY_SELECTOR).ok().flatten())
    {
        let mut opacity = DEFAULT_VIDEO_OVERLAY_OPACITY;
        let mut errors = Vec::new();
        site_core::attrs::read_number(
            &dom::attr_reader(&overlay),
            "data-overlay-opacity",
            &mut opacity,
            &mut errors,
        );
        dom::log_config_errors("video", &errors);
        dom::set_style(&overlay, "opacity", &opacity.to_string());
    }

    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::info!("[video] autoplay prevented: {:?}", e);
            }
        }),
        Err(e) => log::info!("[video] autoplay prevented: {:?}", e),
    }
}
