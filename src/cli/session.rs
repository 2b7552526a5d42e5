//! Interactive session runner
//!
//! Keeps one controller alive and feeds it commands read from stdin. Each
//! `generate` is awaited before the next line is read, so a second request
//! can never start while one is in flight.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use crate::infrastructure::LocalFileLoader;

use super::app::{
    build_controller, build_results, generate_and_present, CliController, CliResults,
    EXIT_ERROR, EXIT_SUCCESS,
};
use super::args::SessionOptions;
use super::presenter::Presenter;

const PROMPT: &str = "mestre-ia> ";

const HELP: &str = "\
Comandos:
  pick <arquivo>       seleciona um arquivo (como o seletor de arquivos, filtro sugerido: {filter})
  drop <arquivo>...    solta arquivos; só o primeiro conta, e só se for áudio
  clear                limpa a seleção
  generate             envia o arquivo e gera o resumo
  copy                 copia o último resumo
  status               mostra o estado atual
  help                 mostra esta ajuda
  quit                 sai";

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Pick(PathBuf),
    Drop(Vec<PathBuf>),
    Clear,
    Generate,
    Copy,
    Status,
    Help,
    Quit,
}

/// Error parsing a session line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Comando desconhecido: {0} (digite 'help')")]
    Unknown(String),

    #[error("Uso: {0}")]
    MissingArgument(&'static str),
}

impl SessionCommand {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Result<Self, CommandError>> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_lowercase().as_str() {
            // The rest of the line is one path, spaces included
            "pick" if rest.is_empty() => Err(CommandError::MissingArgument("pick <arquivo>")),
            "pick" => Ok(Self::Pick(PathBuf::from(rest))),
            "drop" if rest.is_empty() => Err(CommandError::MissingArgument("drop <arquivo>...")),
            "drop" => Ok(Self::Drop(rest.split_whitespace().map(PathBuf::from).collect())),
            "clear" => Ok(Self::Clear),
            "generate" | "gen" => Ok(Self::Generate),
            "copy" => Ok(Self::Copy),
            "status" => Ok(Self::Status),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        };

        Some(command)
    }
}

/// Run the interactive session until `quit`, EOF, or Ctrl+C
pub async fn run_session(options: SessionOptions) -> ExitCode {
    let presenter = Presenter::new();
    let loader = LocalFileLoader::new();
    let mut controller = build_controller(options.endpoint, options.notify);
    let results = build_results();
    let interactive = std::io::stdin().is_terminal();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if interactive {
        presenter.info("Digite 'help' para ver os comandos");
    }

    loop {
        if interactive {
            presenter.output_inline(PROMPT);
        }

        let line = tokio::select! {
            line = lines.next_line() => line,
            _ = tokio::signal::ctrl_c() => {
                debug!("interrupted");
                break;
            }
        };

        let line = match line {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                presenter.error(&format!("Failed to read input: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
        };

        let command = match SessionCommand::parse(&line) {
            None => continue,
            Some(Ok(command)) => command,
            Some(Err(e)) => {
                presenter.warn(&e.to_string());
                continue;
            }
        };

        if command == SessionCommand::Quit {
            break;
        }

        execute(
            command,
            &mut controller,
            &results,
            &loader,
            &presenter,
            options.clipboard,
        )
        .await;
    }

    ExitCode::from(EXIT_SUCCESS)
}

async fn execute(
    command: SessionCommand,
    controller: &mut CliController,
    results: &CliResults,
    loader: &LocalFileLoader,
    presenter: &Presenter,
    auto_copy: bool,
) {
    match command {
        SessionCommand::Pick(path) => {
            let file = match loader.load(&path, None).await {
                Ok(file) => file,
                Err(e) => return presenter.error(&e.to_string()),
            };
            presenter.selected(&file);
            if let Err(e) = controller.select_from_picker(file) {
                presenter.error(&e.to_string());
            }
        }
        SessionCommand::Drop(paths) => {
            // Only the first dropped item is ever looked at
            let Some(path) = paths.first() else { return };
            let file = match loader.load(path, None).await {
                Ok(file) => file,
                Err(e) => return presenter.error(&e.to_string()),
            };
            match controller.select_from_drop(vec![file]) {
                Ok(true) => {
                    if let Some(file) = controller.selected_file() {
                        presenter.selected(file);
                    }
                }
                Ok(false) => debug!(path = %path.display(), "drop ignored"),
                Err(e) => presenter.error(&e.to_string()),
            }
        }
        SessionCommand::Clear => match controller.clear() {
            Ok(()) => presenter.info("Seleção limpa"),
            Err(e) => presenter.error(&e.to_string()),
        },
        SessionCommand::Generate => {
            if let Err(e) = generate_and_present(controller, results, presenter, auto_copy).await
            {
                warn!(error = %e, "generate rejected");
                presenter.error(&e.to_string());
            }
        }
        SessionCommand::Copy => match controller.summary() {
            Some(summary) => {
                if results.copy(summary).await {
                    presenter.success("Resumo copiado para a área de transferência");
                } else {
                    presenter.warn("Não foi possível copiar o resumo");
                }
            }
            None => presenter.warn("Nenhum resumo para copiar"),
        },
        SessionCommand::Status => presenter.output(&presenter.format_status(controller.state())),
        SessionCommand::Help => presenter.output(
            &HELP.replace("{filter}", controller.selector().picker_filter()),
        ),
        SessionCommand::Quit => {}
    }
}
