pub mod config;
pub mod contexts;
pub mod error;
pub mod site_config;
pub mod siteconf;
pub mod validate;

pub use config::{Config, Locale, LogoImage, Site, SocialLink};
pub use contexts::SiteContext;
pub use error::{Diagnostic, Diagnostics, Error};
pub use site_config::{active_socials, locale, logo_image, site, socials};
pub use validate::validate;
