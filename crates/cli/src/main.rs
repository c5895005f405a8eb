use std::path::Path;

use clap::Parser;

mod cli_args;
mod logging;
mod prompting;
mod speak;
mod status;
mod voices;

use cli_args::{CliArgs, Commands};
use vox::config::{API_KEY_ENV, API_KEY_ENV_FALLBACK};

/// Load an env file: an explicit --env path always applies; otherwise a
/// local .env is only consulted when no key is already in the environment.
fn load_env(path: Option<&Path>) {
    match path {
        Some(path) => {
            let _ = dotenvy::from_path(path);
        }
        None => {
            let has_key = std::env::var(API_KEY_ENV).is_ok()
                || std::env::var(API_KEY_ENV_FALLBACK).is_ok();
            if !has_key {
                let _ = dotenvy::dotenv();
            }
        }
    }
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    load_env(args.env.as_deref());
    logging::setup_logging();

    let result = match &args.command {
        Some(Commands::Voices { search, limit }) => {
            voices::run(&args, search.as_deref(), *limit).await
        }
        Some(Commands::Prompting) => {
            prompting::print_guide();
            Ok(())
        }
        Some(Commands::Speak(speak_args)) => speak::run(&args, speak_args).await,
        None => speak::run(&args, &args.speak).await,
    };

    if let Err(err) = result {
        status::error(&err.to_string());
        std::process::exit(1);
    }
}
