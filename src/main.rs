// Copyright (c) 2025 Portfolio Showcase. All rights reserved.

mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod firestore;
mod logging;
mod model;
mod session;
mod store;
mod ui;
mod workers;

use crate::config::{Config, get_config_path, get_log_path, get_store_path};
use crate::environment::Environment;
use crate::logging::{LogSink, init_logging};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use crate::store::LocalStore;
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the portfolio view
    Start {
        /// Google Cloud project holding the Firestore collections
        #[arg(long, value_name = "PROJECT_ID")]
        project_id: Option<String>,

        /// Web API key sent with every Firestore request
        #[arg(long, value_name = "API_KEY")]
        api_key: Option<String>,

        /// Print the panels as text instead of opening the terminal UI
        #[arg(long)]
        headless: bool,

        /// Fill the terminal background with the view's colour
        #[arg(long = "with-background")]
        with_background: bool,
    },
    /// Save the Firestore project (and optional API key) for later runs
    Configure {
        /// Google Cloud project holding the Firestore collections
        #[arg(long, value_name = "PROJECT_ID")]
        project_id: String,

        /// Web API key sent with every Firestore request
        #[arg(long, value_name = "API_KEY")]
        api_key: Option<String>,
    },
    /// Print the collections mirrored in the local store
    ShowCache {
        /// Only print this key
        key: Option<String>,
    },
    /// Delete the local store
    ClearCache,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment = Environment::from_env();
    let config_path = get_config_path()?;
    let args = Args::parse();

    match args.command {
        Command::Start {
            project_id,
            api_key,
            headless,
            with_background,
        } => {
            let config = Config::resolve(&config_path, project_id, api_key)?;
            start(config, environment, headless, with_background).await
        }
        Command::Configure {
            project_id,
            api_key,
        } => {
            let config = Config::new(project_id, api_key);
            config.save(&config_path)?;
            print_cmd_success!(
                "Configuration saved",
                "{}",
                config_path.display()
            );
            Ok(())
        }
        Command::ShowCache { key } => {
            let store = LocalStore::open(get_store_path()?);
            match key {
                Some(key) => match store.get(&key)? {
                    Some(value) => println!("{}", value),
                    None => {
                        print_cmd_error!("No cached value", key.as_str());
                        return Err(format!("no cached value for key {}", key).into());
                    }
                },
                None => {
                    let entries = store.entries()?;
                    if entries.is_empty() {
                        print_cmd_info!("Local store is empty", "{}", store.path().display());
                    }
                    for (key, value) in entries {
                        println!("{}: {}", key, value);
                    }
                }
            }
            Ok(())
        }
        Command::ClearCache => {
            let store = LocalStore::open(get_store_path()?);
            store.clear()?;
            print_cmd_success!("Local store cleared", "{}", store.path().display());
            Ok(())
        }
    }
}

/// Starts the portfolio view.
///
/// # Arguments
/// * `config` - Resolved project and API key
/// * `env` - Firestore environment to read from
/// * `headless` - Print the panels instead of running the TUI
/// * `with_background` - Whether to paint the view background
async fn start(
    config: Config,
    env: Environment,
    headless: bool,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    init_logging(&LogSink::for_mode(headless, get_log_path()?))?;
    let session = setup_session(config, env, get_store_path()?)?;

    if headless {
        run_headless_mode(session).await
    } else {
        run_tui_mode(session, with_background).await
    }
}
