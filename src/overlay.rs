use crate::constants::WAITING_INDICATOR_ID;
use crate::dom::{self, Interval};
use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::{LoadingProgress, SpinnerSize, LOADING_TICK_MS, VERIFYING_MESSAGE};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Full-screen "verifying credentials" indicator shown while the auth state
/// is unknown. The progress bar only ticks while the indicator is shown.
pub struct WaitingIndicator {
    element: web::Element,
    bar: web::Element,
    ticker: Option<Interval>,
}

impl WaitingIndicator {
    pub fn attach(document: &web::Document) -> anyhow::Result<Self> {
        let js = |e: JsValue| anyhow::anyhow!("{:?}", e);
        let element = match document.get_element_by_id(WAITING_INDICATOR_ID) {
            Some(el) => el,
            None => {
                let el = document.create_element("div").map_err(js)?;
                el.set_id(WAITING_INDICATOR_ID);
                el.set_class_name(
                    "fixed inset-0 z-50 flex flex-col items-center justify-center bg-background/95",
                );
                let spinner = document.create_element("div").map_err(js)?;
                spinner.set_class_name(&format!(
                    "{} mb-4 animate-spin rounded-full border-4 border-primary border-t-transparent",
                    SpinnerSize::Large.class()
                ));
                el.append_child(&spinner).map_err(js)?;
                let message = document.create_element("p").map_err(js)?;
                message.set_class_name("text-lg font-semibold text-muted-foreground");
                message.set_text_content(Some(VERIFYING_MESSAGE));
                el.append_child(&message).map_err(js)?;
                document
                    .body()
                    .ok_or_else(|| anyhow::anyhow!("no body"))?
                    .append_child(&el)
                    .map_err(js)?;
                el
            }
        };
        let bar = match element.query_selector("[data-progress]").map_err(js)? {
            Some(bar) => bar,
            None => {
                let track = document.create_element("div").map_err(js)?;
                track.set_class_name("w-64 h-1.5 bg-muted rounded-full overflow-hidden");
                let bar = document.create_element("div").map_err(js)?;
                bar.set_class_name("h-full bg-primary rounded-full transition-all duration-300");
                _ = bar.set_attribute("data-progress", "");
                track.append_child(&bar).map_err(js)?;
                element.append_child(&track).map_err(js)?;
                bar
            }
        };
        Ok(Self {
            element,
            bar,
            ticker: None,
        })
    }

    pub fn show(&mut self) {
        dom::set_style(&self.element, "display", "flex");
        if self.ticker.is_none() {
            let progress = Rc::new(RefCell::new(LoadingProgress::new()));
            let mut rng = StdRng::from_entropy();
            let bar = self.bar.clone();
            dom::set_style(&bar, "width", &progress.borrow().width_style());
            self.ticker = Interval::new(LOADING_TICK_MS, move || {
                let mut p = progress.borrow_mut();
                p.tick(&mut rng);
                dom::set_style(&bar, "width", &p.width_style());
            });
        }
    }

    pub fn hide(&mut self) {
        dom::set_style(&self.element, "display", "none");
        self.ticker = None;
    }
}

impl Drop for WaitingIndicator {
    fn drop(&mut self) {
        self.hide();
    }
}
