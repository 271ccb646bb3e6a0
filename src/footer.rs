use crate::constants::NEWSLETTER_FORM_SELECTOR;
use crate::dom::{self, Listener};
use site_core::{FooterLink, FooterModel, FooterSection, NewsletterForm};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

fn node(document: &web::Document, tag: &str, class: &str) -> Result<web::Element, JsValue> {
    let el = document.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

fn text(document: &web::Document, tag: &str, class: &str, content: &str) -> Result<web::Element, JsValue> {
    let el = node(document, tag, class)?;
    el.set_text_content(Some(content));
    Ok(el)
}

fn link(document: &web::Document, link: &FooterLink, class: &str) -> Result<web::Element, JsValue> {
    let a = text(document, "a", class, &link.label)?;
    a.set_attribute("href", &link.href)?;
    a.set_attribute("data-testid", &link.test_id)?;
    Ok(a)
}

fn link_list(document: &web::Document, section: &FooterSection) -> Result<web::Element, JsValue> {
    let column = node(document, "div", "")?;
    column.append_child(&text(document, "h4", "text-lg font-bold mb-6", &section.title)?)?;
    let list = node(document, "ul", "space-y-3")?;
    for l in &section.links {
        let item = node(document, "li", "")?;
        item.append_child(&link(
            document,
            l,
            "opacity-80 hover:opacity-100 hover:text-primary transition-all",
        )?)?;
        list.append_child(&item)?;
    }
    column.append_child(&list)?;
    Ok(column)
}

/// Fill an empty footer placeholder from `model`. Footers that already have
/// markup are left alone.
pub fn render(document: &web::Document, footer: &web::Element, model: &FooterModel) -> Result<(), JsValue> {
    if footer.child_element_count() > 0 {
        return Ok(());
    }
    let grid = node(document, "div", "grid md:grid-cols-2 lg:grid-cols-4 gap-12 mb-12")?;

    let company = node(document, "div", "space-y-6")?;
    company.append_child(&text(document, "h3", "text-xl font-bold", &model.company_name)?)?;
    company.append_child(&text(document, "p", "text-sm opacity-70", &model.company_since)?)?;
    company.append_child(&text(document, "p", "opacity-80 leading-relaxed", &model.company_description)?)?;
    let social = node(document, "div", "flex space-x-4")?;
    for s in &model.social {
        let a = link(document, s, "w-10 h-10 rounded-lg flex items-center justify-center")?;
        a.set_attribute("aria-label", &s.label)?;
        social.append_child(&a)?;
    }
    company.append_child(&social)?;
    grid.append_child(&company)?;

    grid.append_child(&link_list(document, &model.quick_links)?)?;
    grid.append_child(&link_list(document, &model.products)?)?;

    let newsletter = node(document, "div", "")?;
    newsletter.append_child(&text(document, "h4", "text-lg font-bold mb-6", &model.newsletter_title)?)?;
    newsletter.append_child(&text(document, "p", "opacity-80 mb-4 text-sm", &model.newsletter_description)?)?;
    let form = node(document, "form", "space-y-3")?;
    form.set_attribute("data-newsletter", "")?;
    let input = node(document, "input", "")?;
    input.set_attribute("type", "email")?;
    input.set_attribute("required", "")?;
    input.set_attribute("placeholder", &model.newsletter_placeholder)?;
    input.set_attribute("data-testid", "newsletter-email-input")?;
    form.append_child(&input)?;
    let button = text(document, "button", "w-full font-semibold", &model.newsletter_submit)?;
    button.set_attribute("type", "submit")?;
    button.set_attribute("data-testid", "newsletter-submit-button")?;
    form.append_child(&button)?;
    newsletter.append_child(&form)?;
    grid.append_child(&newsletter)?;
    footer.append_child(&grid)?;

    let contacts = node(document, "div", "grid md:grid-cols-3 gap-8 border-t pt-8 pb-8")?;
    for block in &model.contacts {
        let col = node(document, "div", "")?;
        col.append_child(&text(document, "h5", "font-semibold mb-2", &block.title)?)?;
        for line in &block.lines {
            col.append_child(&text(document, "p", "text-sm opacity-80", line)?)?;
        }
        contacts.append_child(&col)?;
    }
    footer.append_child(&contacts)?;

    let bottom = node(document, "div", "border-t pt-8 flex flex-col md:flex-row justify-between")?;
    bottom.append_child(&text(document, "p", "opacity-70 text-sm", &model.copyright)?)?;
    bottom.append_child(&text(document, "p", "opacity-50 text-xs", &model.last_updated)?)?;
    let legal = node(document, "div", "flex space-x-6 text-sm")?;
    for l in &model.legal {
        legal.append_child(&link(document, l, "opacity-70 hover:opacity-100")?)?;
    }
    bottom.append_child(&legal)?;
    let admin = link(document, &model.admin_login, "px-4 py-2 rounded-lg")?;
    admin.set_attribute("data-in-view", "once")?;
    bottom.append_child(&admin)?;
    footer.append_child(&bottom)?;
    Ok(())
}

/// Newsletter signup form. Submission is simulated: after a fixed delay the
/// field clears and the button re-enables.
pub struct Newsletter {
    _listeners: [Listener; 2],
}

impl Newsletter {
    pub fn mount(root: &web::Element) -> Option<Self> {
        let form = if root.matches(NEWSLETTER_FORM_SELECTOR).unwrap_or(false) {
            root.clone()
        } else {
            root.query_selector(NEWSLETTER_FORM_SELECTOR).ok().flatten()?
        };
        let input: web::HtmlInputElement = form
            .query_selector("input[type=\"email\"]")
            .ok()
            .flatten()?
            .dyn_into()
            .ok()?;
        let button: Option<web::HtmlButtonElement> = form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|b| b.dyn_into().ok());

        let state = Rc::new(RefCell::new(NewsletterForm::new()));

        let (state_in, input_in) = (state.clone(), input.clone());
        let on_input = Listener::passive(&input, "input", move |_| {
            state_in.borrow_mut().set_email(input_in.value());
        });

        let on_submit = Listener::new(&form, "submit", move |ev| {
            ev.prevent_default();
            // Autofill may not fire `input`.
            state.borrow_mut().set_email(input.value());
            let submission = match state.borrow_mut().submit() {
                Ok(s) => s,
                Err(e) => {
                    log::warn!("[newsletter] {}", e);
                    return;
                }
            };
            if let Some(b) = &button {
                b.set_disabled(true);
            }
            let (state, input, button) = (state.clone(), input.clone(), button.clone());
            spawn_local(async move {
                dom::sleep(submission.delay).await;
                state.borrow_mut().complete(submission);
                input.set_value(state.borrow().email());
                if let Some(b) = &button {
                    b.set_disabled(false);
                }
            });
        });
        Some(Self {
            _listeners: [on_input, on_submit],
        })
    }
}
