use anyhow::{Context, Result as AnyhowResult};
use bewitched::app::Editor;
use bewitched::config::Config;
use bewitched::services::{fs, tracing_setup};
use clap::Parser;
use crossterm::event::{
    poll as event_poll, read as event_read, Event as CrosstermEvent, KeyEventKind,
};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use std::time::Duration;

/// A terminal hex editor
#[derive(Parser, Debug)]
#[command(name = "bewitched")]
#[command(about = "Edit the bytes of a file in the terminal", long_about = None)]
#[command(version)]
struct Args {
    /// File to edit
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Path to log file for editor diagnostics (default: system temp dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> AnyhowResult<()> {
    let args = Args::parse();

    let Some(file) = args.file else {
        println!("Usage: bewitched <input file>");
        std::process::exit(1);
    };

    let log_file = args
        .log_file
        .unwrap_or_else(tracing_setup::default_log_path);
    tracing_setup::init_global(&log_file);
    tracing::info!("Editor starting");

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load_or_default(),
    };

    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let file_path = fs::resolve_path(&file, &cwd);

    let mut editor = Editor::new(&config, file_path);
    editor.start_loading();

    let terminal = ratatui::init();
    let result = run_event_loop(&mut editor, terminal);
    ratatui::restore();

    if let Err(e) = &result {
        tracing::error!("Editor exited with error: {:#}", e);
    } else {
        tracing::info!("Editor exiting");
    }
    result
}

fn run_event_loop(editor: &mut Editor, mut terminal: DefaultTerminal) -> AnyhowResult<()> {
    let mut needs_render = true;

    loop {
        if editor.process_async_messages()? {
            needs_render = true;
        }

        if editor.should_quit() {
            break;
        }

        if needs_render {
            terminal.draw(|frame| editor.render(frame))?;
            needs_render = false;
        }

        if !event_poll(POLL_INTERVAL)? {
            continue;
        }

        match event_read()? {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind != KeyEventKind::Release {
                    editor.handle_key(key_event.code, key_event.modifiers);
                    needs_render = true;
                }
            }
            CrosstermEvent::Resize(_, _) => needs_render = true,
            _ => {}
        }
    }

    Ok(())
}
