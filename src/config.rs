use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Error;
use crate::site_config;

/// Placeholder in an authored `linkTitle` that expands to the site title.
pub const TITLE_PLACEHOLDER: &str = "{title}";

/// Every record the templating layer reads, as one document.
///
/// The TOML form has a `[site]`, `[locale]` and `[logoImage]` table and a
/// `[[socials]]` array. Sections, and keys inside a section, left out of a
/// file keep the built-in values. Social links have no defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub site: Site,
    pub locale: Locale,
    pub logo_image: LogoImage,
    pub socials: Vec<SocialLink>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Site {
    pub website: String,
    pub author: String,
    pub profile: String,
    pub desc: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
    pub light_and_dark_mode: bool,
    pub post_per_index: u32,
    pub post_per_page: u32,
    /// Milliseconds before `pubDatetime` at which a scheduled post shows up.
    pub scheduled_post_margin: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Locale {
    /// `lang` attribute of the html element. Empty means "en".
    pub lang: String,
    /// BCP 47 tags for date formatting. Empty means the environment default.
    pub lang_tag: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogoImage {
    pub enable: bool,
    pub svg: bool,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub name: String,
    pub href: String,
    pub link_title: String,
    pub active: bool,
}

impl Default for Config {
    fn default() -> Config {
        site_config::config()
    }
}

impl Default for Site {
    fn default() -> Site {
        site_config::site().clone()
    }
}

impl Default for Locale {
    fn default() -> Locale {
        site_config::locale().clone()
    }
}

impl Default for LogoImage {
    fn default() -> LogoImage {
        *site_config::logo_image()
    }
}

/// Serialize `value` as TOML.
///
/// Goes through `toml::Value` so plain keys, an empty `socials = []` among
/// them, are written before tables whatever the field order.
pub fn to_toml<T: Serialize>(value: &T) -> Result<String, Error> {
    let value = toml::Value::try_from(value)?;
    Ok(toml::to_string_pretty(&value)?)
}

impl Config {
    pub fn load(path: &Path) -> Result<Config, Error> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Io(path.to_path_buf(), e))?;
        let config = Config::from_toml_str(&content)?;
        info!("loaded configuration from {}", path.display());

        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Config, Error> {
        let mut config: Config = toml::from_str(content)?;
        config.expand_link_titles();

        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, Error> {
        to_toml(self)
    }

    /// Social links in list order, skipping the inactive ones.
    pub fn active_socials(&self) -> impl Iterator<Item = &SocialLink> {
        self.socials.iter().filter(|s| s.active)
    }

    fn expand_link_titles(&mut self) {
        for social in &mut self.socials {
            if social.link_title.contains(TITLE_PLACEHOLDER) {
                social.link_title = social
                    .link_title
                    .replace(TITLE_PLACEHOLDER, &self.site.title);
            }
        }
    }
}

impl Site {
    pub fn scheduled_post_margin(&self) -> Duration {
        let millis = i64::try_from(self.scheduled_post_margin).unwrap_or(i64::MAX);
        Duration::milliseconds(millis)
    }

    /// Whether a post published at `pub_datetime` is visible at `now`.
    /// Posts become visible `scheduledPostMargin` before their publish time.
    pub fn is_publish_time_passed(&self, pub_datetime: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match pub_datetime.checked_sub_signed(self.scheduled_post_margin()) {
            Some(visible_from) => now > visible_from,
            None => true,
        }
    }

    /// Number of paginated listing pages for `total_posts`. Always at least one.
    pub fn page_count(&self, total_posts: usize) -> usize {
        let per_page = (self.post_per_page as usize).max(1);
        total_posts.div_ceil(per_page).max(1)
    }
}

impl Locale {
    pub fn html_lang(&self) -> &str {
        if self.lang.is_empty() {
            "en"
        } else {
            &self.lang
        }
    }
}

impl SocialLink {
    pub fn new(name: &str, href: &str, link_title: String, active: bool) -> SocialLink {
        SocialLink {
            name: name.to_string(),
            href: href.to_string(),
            link_title,
            active,
        }
    }
}
