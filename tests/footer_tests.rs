// Host-side tests for the footer model and the newsletter form.

use site_core::*;
use std::time::Duration;

#[test]
fn link_test_ids() {
    assert_eq!(quick_link_test_id("/"), "footer-link-home");
    assert_eq!(quick_link_test_id("/products"), "footer-link-products");
    assert_eq!(
        product_link_test_id("/products?category=plant-tonics"),
        "footer-product-link-plant-tonics"
    );
    assert_eq!(product_link_test_id("/products"), "footer-product-link-all");
}

#[test]
fn model_uses_fallback_text() {
    let model = FooterModel::build(&Untranslated);
    assert_eq!(model.company_name, SITE_NAME);
    assert_eq!(model.quick_links.links.len(), 6);
    assert_eq!(model.quick_links.links[0].label, "Home");
    assert_eq!(model.products.links[5].test_id, "footer-product-link-all");
    assert_eq!(model.social[1].test_id, "social-link-linkedin");
    assert_eq!(model.admin_login.href, DEFAULT_LOGIN_PATH);
    assert_eq!(model.contacts.len(), 3);
    assert!(model.copyright.contains("All rights reserved"));
}

#[test]
fn model_asks_translator_for_every_label() {
    let upper = |_key: &str, fallback: &str| fallback.to_uppercase();
    let model = FooterModel::build(&upper);
    assert_eq!(model.quick_links.title, "QUICK LINKS");
    assert_eq!(model.products.links[0].label, "MICRONUTRIENTS");
    assert_eq!(model.newsletter_submit, "SUBSCRIBE");
    // Hrefs and ids are not translated.
    assert_eq!(model.quick_links.links[2].href, "/about");
}

#[test]
fn newsletter_happy_path() {
    let mut form = NewsletterForm::new();
    form.set_email(" grower@farm.in ");
    let submission = form.submit().unwrap();
    assert!(form.is_subscribing());
    assert_eq!(submission.email, "grower@farm.in");
    assert_eq!(submission.delay, Duration::from_millis(1000));
    form.complete(submission);
    assert!(!form.is_subscribing());
    assert_eq!(form.email(), "");
}

#[test]
fn newsletter_rejects_double_submit() {
    let mut form = NewsletterForm::new();
    form.set_email("a@b.co");
    let first = form.submit().unwrap();
    assert_eq!(form.submit(), Err(NewsletterError::AlreadySubscribing));
    form.complete(first);
    form.set_email("a@b.co");
    assert!(form.submit().is_ok());
}

#[test]
fn newsletter_validates_email() {
    let mut form = NewsletterForm::new();
    assert_eq!(form.submit(), Err(NewsletterError::EmptyEmail));
    form.set_email("not-an-email");
    assert_eq!(
        form.submit(),
        Err(NewsletterError::InvalidEmail("not-an-email".into()))
    );
    assert!(!form.is_subscribing());
}

#[test]
fn email_shape() {
    assert!(looks_like_email("info@sakthisaibiotech.com"));
    assert!(looks_like_email("user@localhost"));
    assert!(!looks_like_email("@example.com"));
    assert!(!looks_like_email("a@"));
    assert!(!looks_like_email("a@b@c"));
    assert!(!looks_like_email("a b@c.d"));
    assert!(!looks_like_email("a@.com"));
    assert!(!looks_like_email("a@b..com"));
}
