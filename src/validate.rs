//! Build-time checks for authored configuration.
//!
//! The records themselves carry no validation. This pass runs over a whole
//! [`Config`] and reports every malformed value at once, keyed by its field
//! path, so a broken config fails the build instead of a template.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};
use url::Url;

use crate::config::{Config, Locale, LogoImage, Site, SocialLink};
use crate::error::Diagnostics;

/// Schemes a social link may use.
pub const SOCIAL_SCHEMES: [&str; 2] = ["https", "mailto"];

// RFC 5646 langtag and privateuse productions. Grandfathered tags are not
// accepted.
static BCP47: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)^(?:
            (?:
                (?:[A-Za-z]{2,3}(?:-[A-Za-z]{3}){0,3}|[A-Za-z]{4}|[A-Za-z]{5,8})
                (?:-[A-Za-z]{4})?
                (?:-(?:[A-Za-z]{2}|[0-9]{3}))?
                (?:-(?:[A-Za-z0-9]{5,8}|[0-9][A-Za-z0-9]{3}))*
                (?:-[0-9A-WYZa-wyz](?:-[A-Za-z0-9]{2,8})+)*
                (?:-[Xx](?:-[A-Za-z0-9]{1,8})+)?
            )
            |[Xx](?:-[A-Za-z0-9]{1,8})+
        )$",
    )
    .expect("BCP 47 pattern is valid")
});

pub fn is_language_tag(tag: &str) -> bool {
    BCP47.is_match(tag)
}

/// Check every record of `config`, collecting all violations.
pub fn validate(config: &Config) -> Result<(), Diagnostics> {
    let mut diagnostics = Diagnostics::new();

    check_site(&config.site, &mut diagnostics);
    check_locale(&config.locale, &mut diagnostics);
    check_logo_image(&config.logo_image, &mut diagnostics);
    check_socials(&config.socials, &mut diagnostics);

    debug!("validation found {} problems", diagnostics.len());
    diagnostics.into_result()
}

fn check_site(site: &Site, diagnostics: &mut Diagnostics) {
    if site.post_per_index == 0 {
        diagnostics.error("site.postPerIndex", "must be greater than 0");
    }
    if site.post_per_page == 0 {
        diagnostics.error("site.postPerPage", "must be greater than 0");
    }
    if site.title.trim().is_empty() {
        diagnostics.error("site.title", "must not be empty");
    }
    check_web_url("site.website", &site.website, diagnostics);
    check_web_url("site.profile", &site.profile, diagnostics);
    if let Some(og_image) = &site.og_image {
        if og_image.trim().is_empty() {
            diagnostics.error("site.ogImage", "must be a file name when set");
        }
    }
}

fn check_web_url(field: &str, value: &str, diagnostics: &mut Diagnostics) {
    match Url::parse(value) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => diagnostics.error(field, format!("unsupported scheme `{}`", url.scheme())),
        Err(e) => diagnostics.error(field, format!("`{}` is not a valid URL: {}", value, e)),
    }
}

fn check_locale(locale: &Locale, diagnostics: &mut Diagnostics) {
    if !locale.lang.is_empty() && !is_language_tag(&locale.lang) {
        diagnostics.error("locale.lang", format!("`{}` is not a language code", locale.lang));
    }
    for (i, tag) in locale.lang_tag.iter().enumerate() {
        if !is_language_tag(tag) {
            diagnostics.error(
                format!("locale.langTag[{}]", i),
                format!("`{}` is not a BCP 47 language tag", tag),
            );
        }
    }
}

fn check_logo_image(logo: &LogoImage, diagnostics: &mut Diagnostics) {
    if logo.width == 0 {
        diagnostics.error("logoImage.width", "must be greater than 0");
    }
    if logo.height == 0 {
        diagnostics.error("logoImage.height", "must be greater than 0");
    }
}

fn check_socials(socials: &[SocialLink], diagnostics: &mut Diagnostics) {
    let mut seen = HashSet::new();

    for (i, social) in socials.iter().enumerate() {
        if social.name.trim().is_empty() {
            diagnostics.error(format!("socials[{}].name", i), "must not be empty");
        } else if !seen.insert(social.name.as_str()) {
            warn!("social link `{}` is listed more than once", social.name);
        }

        let field = format!("socials[{}].href", i);
        match Url::parse(&social.href) {
            Ok(url) if SOCIAL_SCHEMES.contains(&url.scheme()) => {}
            Ok(url) => diagnostics.error(field, format!("unsupported scheme `{}`", url.scheme())),
            Err(e) => diagnostics.error(field, format!("`{}` is not a valid URI: {}", social.href, e)),
        }
    }
}
