use serde::Serialize;

use crate::config::{to_toml, Config, Locale, LogoImage, Site, SocialLink};
use crate::error::Error;

// Context handed to the templating layer. Field names are what templates
// read, so renaming one breaks every template using it.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContext {
    pub html_lang: String,
    pub has_socials: bool,
    pub site: Site,
    pub locale: Locale,
    pub logo_image: LogoImage,
    /// Active links only, in list order.
    pub socials: Vec<SocialLink>,
}

impl SiteContext {
    pub fn new(config: &Config) -> SiteContext {
        let socials: Vec<SocialLink> = config.active_socials().cloned().collect();

        SiteContext {
            html_lang: config.locale.html_lang().to_string(),
            has_socials: !socials.is_empty(),
            site: config.site.clone(),
            locale: config.locale.clone(),
            logo_image: config.logo_image,
            socials,
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_toml_string(&self) -> Result<String, Error> {
        to_toml(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use crate::site_config;

    #[test]
    fn context_uses_template_field_names() {
        let context = SiteContext::new(&site_config::config());
        let value: Value = serde_json::from_str(&context.to_json().unwrap()).unwrap();

        assert_eq!(
            value["site"],
            json!({
                "website": "https://pratos.github.io",
                "author": "Pratos",
                "profile": "https://pratos.github.io",
                "desc": "pratos blog",
                "title": "pratos blog",
                "lightAndDarkMode": true,
                "postPerIndex": 4,
                "postPerPage": 3,
                "scheduledPostMargin": 900000
            })
        );
        assert_eq!(value["locale"], json!({ "lang": "en", "langTag": ["en-EN"] }));
        assert_eq!(value["htmlLang"], json!("en"));
        assert_eq!(
            value["logoImage"],
            json!({ "enable": false, "svg": true, "width": 216, "height": 46 })
        );
    }

    #[test]
    fn context_only_carries_active_socials() {
        let context = SiteContext::new(&site_config::config());
        let names: Vec<&str> = context.socials.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(names, ["Github", "LinkedIn"]);
        assert!(context.has_socials);

        let value: Value = serde_json::to_value(&context).unwrap();
        assert_eq!(value["socials"][0]["linkTitle"], json!(" pratos blog on Github"));
    }

    #[test]
    fn no_active_socials() {
        let mut config = site_config::config();
        for social in &mut config.socials {
            social.active = false;
        }

        let context = SiteContext::new(&config);
        assert!(context.socials.is_empty());
        assert!(!context.has_socials);

        let written: toml::Value = context.to_toml_string().unwrap().parse().unwrap();
        assert_eq!(written["hasSocials"].as_bool(), Some(false));
        assert_eq!(written["socials"].as_array().map(Vec::len), Some(0));
        assert_eq!(written["site"]["title"].as_str(), Some("pratos blog"));
    }
}
