mod errors;
mod locale;
mod replay;
mod script;
mod settings;

use std::error::Error as _;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use creator_ui_layout::{LayoutSession, ViewportSize};
use env_logger::Env;

use crate::errors::AppError;
use crate::locale::Localizer;
use crate::settings::{load_settings, save_settings_to_path, settings_path};

#[derive(Debug, Parser)]
#[command(name = "survey-creator-layout")]
#[command(about = "Replay editor input events through the layout policy")]
#[command(version)]
struct Cli {
    /// JSON array of layout events to replay
    #[arg(long)]
    script: PathBuf,

    /// Layout settings file (defaults to the user config directory)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Locale strings overriding the English titles
    #[arg(long)]
    locale: Option<PathBuf>,

    /// Print one JSON report per line instead of a text summary
    #[arg(long)]
    json: bool,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    write_settings: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            let mut source = err.source();
            while let Some(cause) = source {
                log::error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        },
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let path = cli.settings.clone().unwrap_or_else(settings_path);
    let settings = load_settings(&path)?;
    if cli.write_settings {
        save_settings_to_path(&path, &settings)?;
        log::info!("layout settings written to {}", path.display());
    }

    let localizer = match &cli.locale {
        Some(path) => Localizer::load(path)?,
        None => Localizer::default(),
    };
    let events = script::load_script(&cli.script)?;

    let mut session = LayoutSession::new(
        settings.layout(),
        settings.preferences(),
        ViewportSize::default(),
    );
    let reports = replay::replay(&mut session, events);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for report in &reports {
        if cli.json {
            serde_json::to_writer(&mut out, report)?;
            writeln!(out)?;
        } else {
            write!(out, "{}", replay::describe(report, &localizer))?;
        }
    }
    out.flush()?;

    Ok(())
}
