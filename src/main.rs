//! seokit - an SEO sample site rendered from built-in posts and products.

mod build;
mod cli;
mod config;
mod data;
mod generator;
mod init;
mod meta;
mod pages;
mod router;
mod serve;
mod utils;
mod watch;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::{SiteConfig, cfg, init_config};
use init::new_site;
use serve::serve_site;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config = SiteConfig::load(cli)?;

    if let Commands::Init { .. } = cli.command {
        return new_site(&config);
    }

    config.validate()?;
    init_config(config);

    match &cli.command {
        Commands::Build { .. } => build_site(&cfg()).map(|_| ()),
        Commands::Serve { .. } => serve_site(),
        Commands::Init { .. } => Ok(()),
    }
}
