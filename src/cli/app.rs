//! App runner for one-shot mode and the wiring shared with sessions

use std::env;
use std::process::ExitCode;

use tracing::{debug, info, warn};

use crate::application::ports::{Clipboard, ConfigStore, Notifier};
use crate::application::{
    GenerateCallbacks, GenerateOutcome, JobController, ResultPresenter,
};
use crate::domain::config::{AppConfig, Endpoint};
use crate::domain::job::{InvalidStateTransition, JobPhase};
use crate::domain::upload::SelectedFile;
use crate::infrastructure::clipboard::create_clipboard;
use crate::infrastructure::{HttpSummarizer, LocalFileLoader, XdgConfigStore};

use super::args::RunOptions;
use super::console_notifier::build_notifier;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable overriding the service base URL
pub const API_URL_ENV: &str = "MESTRE_IA_API_URL";

/// Controller wired to the real adapters
pub type CliController = JobController<HttpSummarizer, Vec<Box<dyn Notifier>>>;

/// Result presenter wired to the system clipboard
pub type CliResults = ResultPresenter<Box<dyn Clipboard>>;

/// Build the session controller for a resolved endpoint
pub fn build_controller(endpoint: Endpoint, desktop_notify: bool) -> CliController {
    info!(url = endpoint.url(), "summarization endpoint resolved");
    JobController::new(HttpSummarizer::new(endpoint), build_notifier(desktop_notify))
}

/// Build the result presenter
pub fn build_results() -> CliResults {
    ResultPresenter::new(create_clipboard())
}

/// Run the generate action with a spinner, then print (and optionally copy) the summary
pub async fn generate_and_present(
    controller: &mut CliController,
    results: &CliResults,
    presenter: &Presenter,
    copy: bool,
) -> Result<GenerateOutcome, InvalidStateTransition> {
    let spinner = Presenter::spinner();
    let on_submit = spinner.clone();
    let on_resolve = spinner.clone();

    let callbacks = GenerateCallbacks {
        on_submitting: Some(Box::new(move |file: &SelectedFile| {
            Presenter::start_processing(&on_submit, file);
        })),
        on_resolved: Some(Box::new(move |_phase: JobPhase| {
            on_resolve.finish_and_clear();
        })),
    };

    let outcome = controller.generate(&callbacks).await?;

    if let GenerateOutcome::Summarized(ref summary) = outcome {
        presenter.output(&results.present(summary));
        if copy && results.copy(summary).await {
            presenter.info("Resumo copiado para a área de transferência");
        }
    }

    Ok(outcome)
}

/// Run the one-shot flow: select, generate once, print
pub async fn run_oneshot(options: RunOptions) -> ExitCode {
    let presenter = Presenter::new();
    let loader = LocalFileLoader::new();
    let mut controller = build_controller(options.endpoint, options.notify);
    let results = build_results();

    if let Some(path) = options.file.as_deref() {
        let file = match loader.load(path, options.mime.as_deref()).await {
            Ok(file) => file,
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        };
        presenter.selected(&file);
        if let Err(e) = controller.select_from_picker(file) {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    } else if let Some(path) = options.drop.first() {
        let file = match loader.load(path, options.mime.as_deref()).await {
            Ok(file) => file,
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        };
        match controller.select_from_drop(vec![file]) {
            Ok(true) => {
                if let Some(file) = controller.selected_file() {
                    presenter.selected(file);
                }
            }
            Ok(false) => debug!(path = %path.display(), "drop ignored"),
            Err(e) => {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
        }
    }

    match generate_and_present(&mut controller, &results, &presenter, options.clipboard).await {
        Ok(outcome) if outcome.is_success() => ExitCode::from(EXIT_SUCCESS),
        // The notification channel already reported the failure
        Ok(_) => ExitCode::from(EXIT_ERROR),
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Read the base URL override from the environment
pub fn env_config() -> AppConfig {
    AppConfig {
        api_url: env::var(API_URL_ENV).ok().filter(|s| !s.trim().is_empty()),
        ..Default::default()
    }
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config file");
        AppConfig::empty()
    });

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config())
        .merge(cli_config)
}
