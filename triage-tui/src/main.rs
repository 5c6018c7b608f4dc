mod app;
mod error;
mod hit;
mod paths;
mod render;
mod settings;
mod stories;
mod table;
mod terminal;

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use simplelog::{Config, WriteLogger};
use triage_lib::source::hn::parse_page_param;

use crate::app::{App, DatasetSource};
use crate::error::AppError;
use crate::settings::Settings;

/// What to run, from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    /// `triage-tui [ISSUES.json]`
    Table { path: Option<PathBuf> },
    /// `triage-tui stories [PAGE]`
    Stories { page: usize },
}

impl Command {
    fn parse(mut args: impl Iterator<Item = String>) -> Self {
        match args.next() {
            Some(arg) if arg == "stories" => Command::Stories {
                page: parse_page_param(args.next().as_deref()),
            },
            Some(path) => Command::Table {
                path: Some(PathBuf::from(path)),
            },
            None => Command::Table { path: None },
        }
    }
}

fn init_logging(settings: &Settings) -> Result<(), AppError> {
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    paths::rotate_logs();

    let log_file = File::create(&path)?;
    WriteLogger::init(settings.log_level(), Config::default(), log_file)?;
    Ok(())
}

fn run(command: Command) -> Result<(), AppError> {
    let settings = Settings::load()?;
    init_logging(&settings)?;
    log::debug!("Starting with {:?}", command);

    match command {
        Command::Stories { page } => stories::run(page, settings.page_size()),
        Command::Table { path } => {
            let source = path
                .or(settings.issues_path)
                .map(DatasetSource::File)
                .unwrap_or(DatasetSource::Bundled);
            let app = App::load(source)?;
            app::run(app)
        }
    }
}

fn main() -> ExitCode {
    let command = Command::parse(std::env::args().skip(1));

    match run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
