//! flowpager - Word-Wrapping Terminal Pager
//!
//! Shows a text file one page at a time. `f` shows the next page, `q` quits.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgMatches, Command};
use flowpager::input::{install_panic_hook, CrosstermModes, TerminalKeys};
use flowpager::render::CrlfWriter;
use flowpager::{Application, FileSession, PagerConfig, SessionEnd};
use std::io;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

fn cli() -> Command {
    Command::new("flowpager")
        .version(flowpager::VERSION)
        .about("A word-wrapping terminal pager")
        .long_about(
            "flowpager streams a text file through a fixed-size buffer, wraps it at word \
             boundaries and shows it one page at a time. Press 'f' for the next page and \
             'q' to quit.",
        )
        .arg(
            Arg::new("file")
                .help("Path to the text file to view")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("lines")
                .short('n')
                .long("lines")
                .help("Lines per page [default: 20]")
                .value_parser(value_parser!(NonZeroUsize)),
        )
        .arg(
            Arg::new("width")
                .short('w')
                .long("width")
                .help("Maximum line width in bytes [default: 80]")
                .value_parser(value_parser!(NonZeroUsize)),
        )
}

/// Base configuration (file, with the `config` feature) overridden by flags.
fn resolve_config(matches: &ArgMatches) -> Result<PagerConfig> {
    #[cfg(feature = "config")]
    let mut config = PagerConfig::load_default()?;
    #[cfg(not(feature = "config"))]
    let mut config = PagerConfig::default();

    if let Some(lines) = matches.get_one::<NonZeroUsize>("lines") {
        config = config.with_page_size(lines.get());
    }
    if let Some(width) = matches.get_one::<NonZeroUsize>("width") {
        config = config.with_line_width(width.get());
    }
    config.validate()?;
    Ok(config)
}

fn run(matches: &ArgMatches) -> Result<SessionEnd> {
    let config = resolve_config(matches)?;
    let file_path = PathBuf::from(
        matches
            .get_one::<String>("file")
            .context("file argument is required")?,
    );

    println!("Opening file {}...", file_path.display());
    let session = FileSession::open(&file_path, config.buffer_capacity())?;

    install_panic_hook();
    let out = CrlfWriter::new(io::stdout().lock());
    let mut app = Application::new(session, TerminalKeys::new(), out, config)?;
    let end = app.run_in_raw_mode(CrosstermModes)?;

    log::debug!("session ended: {:?}", end);
    Ok(end)
}

fn main() -> ExitCode {
    // Initialize logging for development
    env_logger::init();

    let matches = match cli().try_get_matches() {
        Ok(matches) => matches,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&matches) {
        Ok(SessionEnd::Quit | SessionEnd::InputClosed) => ExitCode::SUCCESS,
        Ok(SessionEnd::ReadFailed) => ExitCode::from(1),
        Err(e) => {
            eprintln!("flowpager: {:#}", e);
            if e
                .downcast_ref::<flowpager::PagerError>()
                .is_some_and(|e| e.is_usage())
            {
                eprintln!("Try 'flowpager --help' for more information.");
            }
            ExitCode::from(1)
        }
    }
}
