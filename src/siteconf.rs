use std::io::Write;
use std::path::PathBuf;

use clap::{ArgEnum, Parser, Subcommand};
use tracing::{debug, info};

use crate::config::Config;
use crate::contexts::SiteContext;
use crate::error::Error;
use crate::validate::validate;

#[derive(Clone, Debug, Parser)]
#[clap(author = "Pratos", version, about)]
/// Site configuration for the blog's templating layer
pub struct Args {
    /// Authored config file to use instead of the built-in configuration
    #[clap(short, long, parse(from_os_str))]
    pub config: Option<PathBuf>,
    /// Log more, can be repeated
    #[clap(short, long, parse(from_occurrences))]
    pub verbose: u8,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Print the template context
    Show {
        #[clap(short, long, arg_enum, default_value = "json")]
        format: Format,
        /// Print the whole config, inactive social links included
        #[clap(short, long)]
        all: bool,
    },
    /// Validate the configuration
    Check,
    /// List the active social links
    Socials,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ArgEnum)]
pub enum Format {
    Json,
    Toml,
}

/// Pick the configuration: `--config` if given, then `siteconf/config.toml`
/// in the XDG config directories, then the built-in one.
pub fn find_config(args: &Args) -> Result<Config, Error> {
    if let Some(path) = &args.config {
        return Config::load(path);
    }

    match xdg::BaseDirectories::with_prefix("siteconf") {
        Ok(xdg_dirs) => {
            if let Some(path) = xdg_dirs.find_config_file("config.toml") {
                return Config::load(&path);
            }
            debug!("no config.toml in XDG config directories");
        }
        Err(e) => debug!("XDG directories unavailable: {}", e),
    }

    info!("using built-in configuration");
    Ok(Config::default())
}

pub struct SiteConf {
    config: Config,
}

impl SiteConf {
    pub fn new(config: Config) -> SiteConf {
        SiteConf { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run<W: Write>(&self, command: &Command, out: &mut W) -> Result<(), Error> {
        match command {
            Command::Show { format, all } => self.show(*format, *all, out),
            Command::Check => self.check(out),
            Command::Socials => self.socials(out),
        }
    }

    fn show<W: Write>(&self, format: Format, all: bool, out: &mut W) -> Result<(), Error> {
        let rendered = match (format, all) {
            (Format::Json, false) => SiteContext::new(&self.config).to_json()?,
            (Format::Json, true) => serde_json::to_string_pretty(&self.config)?,
            (Format::Toml, false) => SiteContext::new(&self.config).to_toml_string()?,
            (Format::Toml, true) => self.config.to_toml_string()?,
        };
        writeln!(out, "{}", rendered.trim_end())?;

        Ok(())
    }

    fn check<W: Write>(&self, out: &mut W) -> Result<(), Error> {
        validate(&self.config)?;
        writeln!(out, "Configuration is valid")?;

        Ok(())
    }

    fn socials<W: Write>(&self, out: &mut W) -> Result<(), Error> {
        for social in self.config.active_socials() {
            writeln!(out, "{}\t{}", social.name, social.href)?;
        }

        Ok(())
    }
}
