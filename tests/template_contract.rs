use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;
use tinytemplate::TinyTemplate;

use siteconf::{site_config, validate, Config, Error, SiteContext};

static FOOTER: &str = r#"<html lang="{htmlLang}"><title>{site.title}</title>{{ for social in socials }}<a href="{social.href}" title="{social.linkTitle}">{social.name}</a>{{ endfor }}{{ if logoImage.enable }}<img/>{{ else }}{site.title}{{ endif }}<p>{site.postPerPage}</p></html>"#;

fn render(config: &Config) -> String {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("footer", FOOTER).unwrap();
    tt.render("footer", &SiteContext::new(config)).unwrap()
}

#[test]
fn templates_read_builtin_context() {
    let rendered = render(&site_config::config());

    assert_eq!(
        rendered,
        concat!(
            r#"<html lang="en"><title>pratos blog</title>"#,
            r#"<a href="https://github.com/pratos" title=" pratos blog on Github">Github</a>"#,
            r#"<a href="https://github.com/satnaing/astro-paper" title="pratos blog on LinkedIn">LinkedIn</a>"#,
            "pratos blog<p>3</p></html>",
        )
    );
}

#[test]
fn every_builtin_href_is_https_or_mailto() {
    for social in siteconf::socials() {
        let url = url::Url::parse(&social.href).unwrap();
        assert!(["https", "mailto"].contains(&url.scheme()), "{}", social.href);
    }
}

#[test]
fn every_builtin_lang_tag_is_bcp47() {
    for tag in &siteconf::locale().lang_tag {
        assert!(siteconf::validate::is_language_tag(tag), "{}", tag);
    }
}

#[test]
fn authored_file_drives_the_templates() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[site]
website = "https://example.org"
author = "Someone"
profile = "https://example.org/about"
desc = "notes"
title = "example notes"
lightAndDarkMode = true
postPerIndex = 4
postPerPage = 10
scheduledPostMargin = 0

[locale]
lang = ""
langTag = []

[logoImage]
enable = true
svg = true
width = 100
height = 40

[[socials]]
name = "Mail"
href = "mailto:someone@example.org"
linkTitle = "Send an email to {{title}}"
active = true
"#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(validate(&config), Ok(()));
    assert_eq!(config.socials[0].link_title, "Send an email to example notes");
    assert_eq!(
        render(&config),
        concat!(
            r#"<html lang="en"><title>example notes</title>"#,
            r#"<a href="mailto:someone@example.org" title="Send an email to example notes">Mail</a>"#,
            "<img/><p>10</p></html>",
        )
    );
}

#[test]
fn malformed_literals_fail_the_build() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[locale]
lang = "en"
langTag = ["en_EN"]

[[socials]]
name = "Github"
href = "github.com/pratos"
linkTitle = "{{title}} on Github"
active = true
"#
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    let err: Error = validate(&config).unwrap_err().into();
    let message = err.to_string();

    assert!(message.contains("[locale.langTag[0]]"), "{}", message);
    assert!(message.contains("[socials[0].href]"), "{}", message);
}
