//! Mestre IA CLI entry point

use std::process::ExitCode;

use clap::Parser;

use mestre_ia::cli::{
    app::{load_merged_config, run_oneshot, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    logging,
    presenter::Presenter,
    session::run_session,
    RunOptions, SessionOptions,
};
use mestre_ia::domain::config::{AppConfig, Endpoint};
use mestre_ia::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    logging::init(cli.verbose);

    let session = match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Session) => true,
        None => false,
    };

    // Build CLI config from args
    let cli_config = AppConfig {
        api_url: cli.api_url.clone(),
        clipboard: if cli.clipboard { Some(true) } else { None },
        notify: if cli.notify { Some(true) } else { None },
    };

    // Merge config
    let config = load_merged_config(cli_config).await;

    // Resolved once; everything downstream gets this value
    let endpoint = Endpoint::resolve(Some(config.api_url_or_default()));

    if session {
        let options = SessionOptions {
            endpoint,
            clipboard: config.clipboard_or_default(),
            notify: config.notify_or_default(),
        };

        run_session(options).await
    } else {
        let options = RunOptions {
            file: cli.file,
            drop: cli.drop,
            mime: cli.mime,
            endpoint,
            clipboard: config.clipboard_or_default(),
            notify: config.notify_or_default(),
        };

        run_oneshot(options).await
    }
}
