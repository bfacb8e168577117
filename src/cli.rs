// CLI module - command-line argument parsing and handlers
//
// Top-level flags override the config file for a single run; the `config`
// subcommand manages the persisted configuration:
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --path: Show config file path

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};
use std::io::Write;

/// kiosk - terminal reader for a static-site content bundle
#[derive(Parser)]
#[command(name = "kiosk")]
#[command(version = VERSION)]
#[command(about = "Terminal reader for a static-site content bundle", long_about = None)]
pub struct Cli {
    /// Content bundle location (URL or file path), overrides config
    #[arg(long)]
    pub bundle: Option<String>,

    /// Render a built-in sample bundle (no network)
    #[arg(long)]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Parse arguments and handle subcommands.
/// Returns Some(cli) when the reader should run, None when a subcommand
/// was handled and the process should exit.
pub fn handle_cli() -> Option<Cli> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Config { show, reset, path }) => {
            if *path {
                handle_config_path();
            } else if *show {
                handle_config_show();
            } else if *reset {
                handle_config_reset();
            } else {
                // No flag provided, show usage
                println!("Usage: kiosk config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
            None
        }
        None => Some(cli),
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().unwrap();

        let mut input = String::new();
        std::io::stdin().read_line(&mut input).unwrap();

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    // Write the default config (using Config's single source of truth)
    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}
