//! # CLI Layer
//!
//! This module is one possible UI client for crumb, not the application
//! itself. It is the only place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! `run()` wires everything together: parses flags, loads the display
//! config, constructs the session's API (and with it the inventory, which
//! lives exactly as long as the process), and hands control to the menu
//! loop.

mod menu;
mod print;
mod setup;

use clap::Parser;
use crumb::api::CrumbApi;
use crumb::config::{self, CrumbConfig};
use crumb::error::Result;
use log::warn;
use std::io;

pub fn run() -> Result<()> {
    let cli = setup::Cli::parse();

    if cli.plain {
        colored::control::set_override(false);
    }

    let mut config = match config::config_dir() {
        Some(dir) => CrumbConfig::load(&dir).unwrap_or_else(|err| {
            warn!("could not read config ({}), using defaults", err);
            CrumbConfig::default()
        }),
        None => CrumbConfig::default(),
    };
    if let Some(currency) = cli.currency {
        config.currency = currency;
    }

    let mut api = CrumbApi::new();
    let stdin = io::stdin();
    menu::run(&mut api, &config, &mut stdin.lock())
}
