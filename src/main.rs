use std::io;
use std::process::exit;

use clap::Parser;
use tracing::Level;

use siteconf::siteconf::{find_config, Args, SiteConf};

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .compact()
        .init();

    let config = match find_config(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    let siteconf = SiteConf::new(config);
    let stdout = io::stdout();
    if let Err(e) = siteconf.run(&args.command, &mut stdout.lock()) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}
