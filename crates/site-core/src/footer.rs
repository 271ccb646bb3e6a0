//! Footer content: navigation groups, contact details and legal links.

use crate::constants::{DEFAULT_LOGIN_PATH, SITE_NAME};
use crate::i18n::Translate;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
    pub test_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterSection {
    pub title: String,
    pub links: Vec<FooterLink>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactBlock {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterModel {
    pub company_name: String,
    pub company_since: String,
    pub company_description: String,
    pub social: Vec<FooterLink>,
    pub quick_links: FooterSection,
    pub products: FooterSection,
    pub newsletter_title: String,
    pub newsletter_description: String,
    pub newsletter_placeholder: String,
    pub newsletter_submit: String,
    pub contacts: Vec<ContactBlock>,
    pub copyright: String,
    pub last_updated: String,
    pub legal: Vec<FooterLink>,
    pub admin_login: FooterLink,
}

const QUICK_LINKS: [(&str, &str, &str); 6] = [
    ("nav.home", "Home", "/"),
    ("nav.products", "Products", "/products"),
    ("nav.about", "About Us", "/about"),
    ("nav.exports", "Export Markets", "/exports"),
    ("nav.resources", "Resources", "/resources"),
    ("nav.contact", "Contact", "/contact"),
];

const PRODUCT_LINKS: [(&str, &str, &str); 6] = [
    ("products.micronutrients", "Micronutrients", "/products?category=micronutrients"),
    ("products.bactericides", "Bactericides", "/products?category=bactericides"),
    ("products.growth-promoters", "Growth Promoters", "/products?category=growth-promoters"),
    ("products.bio-fertilizers", "Bio-Fertilizers", "/products?category=bio-fertilizers"),
    ("products.plant-tonics", "Plant Tonics", "/products?category=plant-tonics"),
    ("products.view-all", "View All Products", "/products"),
];

const SOCIAL_LABELS: [&str; 4] = ["Facebook", "LinkedIn", "Twitter", "Instagram"];

const LEGAL_LINKS: [(&str, &str, &str); 3] = [
    ("footer.privacy", "Privacy Policy", "/privacy"),
    ("footer.terms", "Terms of Service", "/terms"),
    ("footer.sitemap", "Sitemap", "/sitemap"),
];

/// `footer-link-products` for `/products`, `footer-link-home` for `/`.
pub fn quick_link_test_id(href: &str) -> String {
    let slug = href.replacen('/', "", 1);
    let slug = if slug.is_empty() { "home" } else { slug.as_str() };
    format!("footer-link-{slug}")
}

/// `footer-product-link-bactericides` for a category link, `-all` otherwise.
pub fn product_link_test_id(href: &str) -> String {
    let category = href
        .split('=')
        .nth(1)
        .filter(|c| !c.is_empty())
        .unwrap_or("all");
    format!("footer-product-link-{category}")
}

impl FooterModel {
    pub fn build<T: Translate + ?Sized>(t: &T) -> Self {
        let company_name = t.t("company.name", SITE_NAME);

        let quick_links = FooterSection {
            title: t.t("footer.quickLinks.title", "Quick Links"),
            links: QUICK_LINKS
                .iter()
                .map(|(key, fallback, href)| FooterLink {
                    label: t.t(key, fallback),
                    href: href.to_string(),
                    test_id: quick_link_test_id(href),
                })
                .collect(),
        };

        let products = FooterSection {
            title: t.t("footer.products.title", "Products"),
            links: PRODUCT_LINKS
                .iter()
                .map(|(key, fallback, href)| FooterLink {
                    label: t.t(key, fallback),
                    href: href.to_string(),
                    test_id: product_link_test_id(href),
                })
                .collect(),
        };

        let social = SOCIAL_LABELS
            .iter()
            .map(|label| FooterLink {
                label: label.to_string(),
                href: "#".to_string(),
                test_id: format!("social-link-{}", label.to_lowercase()),
            })
            .collect();

        let contacts = vec![
            ContactBlock {
                title: t.t("contact.address.title", "Address"),
                lines: vec![
                    SITE_NAME.to_string(),
                    "Pollachi, Tamil Nadu 642001".to_string(),
                    "India".to_string(),
                ],
            },
            ContactBlock {
                title: t.t("contact.email.title", "Email"),
                lines: vec![
                    "info@sakthisaibiotech.com".to_string(),
                    "export@sakthisaibiotech.com".to_string(),
                ],
            },
            ContactBlock {
                title: t.t("contact.hours.title", "Business Hours"),
                lines: vec![
                    "Monday - Saturday: 9:00 AM - 6:00 PM".to_string(),
                    "Sunday: Closed".to_string(),
                ],
            },
        ];

        let legal = LEGAL_LINKS
            .iter()
            .map(|(key, fallback, href)| FooterLink {
                label: t.t(key, fallback),
                href: href.to_string(),
                test_id: format!("footer-legal-{}", href.trim_start_matches('/')),
            })
            .collect();

        Self {
            copyright: format!(
                "\u{a9} 2025 {}. {}.",
                company_name,
                t.t("footer.rights", "All rights reserved")
            ),
            company_name,
            company_since: t.t("company.since", "Since 1999"),
            company_description: t.t(
                "footer.company.description",
                "Leading manufacturer and exporter of premium agricultural products serving global markets.",
            ),
            social,
            quick_links,
            products,
            newsletter_title: t.t("footer.newsletter.title", "Newsletter"),
            newsletter_description: t.t(
                "footer.newsletter.description",
                "Subscribe to get updates on new products and market insights",
            ),
            newsletter_placeholder: t.t("footer.newsletter.placeholder", "Your email"),
            newsletter_submit: t.t("footer.newsletter.subscribe", "Subscribe"),
            contacts,
            last_updated: t.t("footer.lastUpdated", "Portal updated: October 2025"),
            legal,
            admin_login: FooterLink {
                label: t.t("footer.adminLogin", "Admin Login"),
                href: DEFAULT_LOGIN_PATH.to_string(),
                test_id: "admin-login-button".to_string(),
            },
        }
    }
}
