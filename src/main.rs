//! `kilo`: edit a file in the terminal.

use clap::Parser;
use kilo::{Editor, EditorConfig, FileStorage, InputActor, Session, TerminalGuard};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// A minimal terminal text editor.
#[derive(Debug, Parser)]
#[command(name = "kilo", version, about)]
struct Args {
    /// File to edit; created on first save if it does not exist.
    file: Option<PathBuf>,

    /// Distance between tab stops.
    #[arg(long, default_value_t = kilo::buffer::DEFAULT_TAB_STOP)]
    tab_stop: usize,

    /// Write logs to this file (the terminal belongs to the editor).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("kilo: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> kilo::Result<()> {
    if let Some(path) = &args.log_file {
        init_logging(File::create(path)?);
    }

    let (width, height) = crossterm::terminal::size()?;
    let config = EditorConfig {
        tab_stop: args.tab_stop,
        ..EditorConfig::default()
    }
    .with_terminal_size(width, height);

    let mut editor = Editor::new(config.clone());
    let storage = args.file.map(|path| {
        editor.set_filename(path.display().to_string());
        FileStorage::new(path)
    });

    let _guard = TerminalGuard::enter(config.alternate_screen)?;
    let input = InputActor::spawn(config.input_poll_timeout)?;
    let mut session = Session::new(editor, input, io::stdout(), storage);
    let result = session.open().and_then(|()| session.run());
    session.into_keys().join();
    result
}

fn init_logging(file: File) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}
