//! The blog's built-in configuration.
//!
//! Each record is built once on first access and never changes afterwards.
//! Consumers filter `socials()` on `active` before showing the links.

use once_cell::sync::Lazy;

use crate::config::{Config, Locale, LogoImage, Site, SocialLink};

static SITE: Lazy<Site> = Lazy::new(|| Site {
    website: "https://pratos.github.io".to_string(),
    author: "Pratos".to_string(),
    profile: "https://pratos.github.io".to_string(),
    desc: "pratos blog".to_string(),
    title: "pratos blog".to_string(),
    og_image: None,
    light_and_dark_mode: true,
    post_per_index: 4,
    post_per_page: 3,
    // 15 minutes
    scheduled_post_margin: 15 * 60 * 1000,
});

static LOCALE: Lazy<Locale> = Lazy::new(|| Locale {
    lang: "en".to_string(),
    lang_tag: vec!["en-EN".to_string()],
});

static LOGO_IMAGE: LogoImage = LogoImage {
    enable: false,
    svg: true,
    width: 216,
    height: 46,
};

// List order is display order.
static SOCIALS: Lazy<Vec<SocialLink>> = Lazy::new(|| {
    let title = &SITE.title;
    vec![
        SocialLink::new(
            "Github",
            "https://github.com/pratos",
            format!(" {} on Github", title),
            true,
        ),
        // NOTE: points at a Github repository, not a LinkedIn profile.
        SocialLink::new(
            "LinkedIn",
            "https://github.com/satnaing/astro-paper",
            format!("{} on LinkedIn", title),
            true,
        ),
        SocialLink::new(
            "Mail",
            "mailto:prthamesh.sarang@gmail.com",
            format!("Send an email to {}", title),
            false,
        ),
        SocialLink::new(
            "Twitter",
            "https://x.com/pratos_",
            format!("{} on Twitter", title),
            false,
        ),
    ]
});

pub fn site() -> &'static Site {
    &SITE
}

pub fn locale() -> &'static Locale {
    &LOCALE
}

pub fn logo_image() -> &'static LogoImage {
    &LOGO_IMAGE
}

pub fn socials() -> &'static [SocialLink] {
    &SOCIALS
}

pub fn active_socials() -> impl Iterator<Item = &'static SocialLink> {
    socials().iter().filter(|s| s.active)
}

/// All four records, owned.
pub fn config() -> Config {
    Config {
        site: site().clone(),
        locale: locale().clone(),
        logo_image: *logo_image(),
        socials: socials().to_vec(),
    }
}
