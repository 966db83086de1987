//! tocsmith: print or browse the heading hierarchy of marker-style documents.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, ValueEnum};
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tocsmith::app_state::{AppState, FileMode, View};
use tocsmith::config::Config;
use tocsmith::input::{self, FileSource};
use tocsmith::reindex::{self, DocumentSource, JsonLinesIndex};
use tocsmith::{render, ui, Forest};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tocsmith")]
#[command(about = "Heading hierarchy extraction for marker-style documents", long_about = None)]
struct Args {
    /// Files or directories to read
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Tree)]
    format: OutputFormat,

    /// Browse the outline interactively instead of printing it
    #[arg(long)]
    browse: bool,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Heading marker character
    #[arg(long, value_name = "CHAR")]
    marker: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Box-drawing tree of titles and slugs
    Tree,
    /// Nested Markdown list of anchor links
    Markdown,
    /// Nested JSON per file
    Json,
    /// Search index payloads, one JSON object per line
    Index,
}

#[derive(Serialize)]
struct FileToc<'a> {
    path: String,
    toc: &'a Forest,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> tocsmith::Result<()> {
    let mut cfg = Config::load()?;

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }
    if let Some(marker) = args.marker {
        cfg.marker = marker;
    }
    let pattern = cfg.heading_pattern()?;

    let files = input::find_documents(args.paths, &cfg.file_extensions)?;
    if files.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }
    tracing::debug!(files = files.len(), marker = %pattern.marker(), "scanning");

    let source = FileSource::new(&files, &pattern);

    if !args.browse && matches!(args.format, OutputFormat::Index) {
        let mut index = JsonLinesIndex::new(io::stdout().lock());
        reindex::reindex_all(&source, &mut index, &pattern)?;
        return Ok(());
    }

    let documents = source.documents()?;
    let forests = reindex::build_forests(&documents, &pattern);

    if args.browse {
        run_tui(AppState::new(files, forests))?;
        return Ok(());
    }

    let mut out = io::stdout().lock();
    if matches!(args.format, OutputFormat::Json) {
        let tocs: Vec<FileToc> = files
            .iter()
            .zip(&forests)
            .map(|(path, toc)| FileToc {
                path: path.display().to_string(),
                toc,
            })
            .collect();
        serde_json::to_writer_pretty(&mut out, &tocs)?;
        writeln!(out)?;
        return Ok(());
    }

    for (path, forest) in files.iter().zip(&forests) {
        if files.len() > 1 {
            writeln!(out, "== {} ==", path.display())?;
        }
        let text = match args.format {
            OutputFormat::Markdown => render::render_markdown(forest, cfg.indent_width),
            _ => render::render_tree(forest),
        };
        out.write_all(text.as_bytes())?;
    }
    Ok(())
}

fn run_tui(mut app: AppState) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match app.current_view {
            View::FileList => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up => {
                    app.current_file_index = app.current_file_index.saturating_sub(1);
                }
                KeyCode::Down => {
                    if app.current_file_index + 1 < app.files.len() {
                        app.current_file_index += 1;
                    }
                }
                KeyCode::Enter => app.open_file(),
                _ => {}
            },
            View::Outline => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    if app.file_mode == FileMode::Multi {
                        app.close_file();
                    } else {
                        return Ok(());
                    }
                }
                KeyCode::Up if shift => app.select(app.navigate_to_prev_sibling()),
                KeyCode::Up => app.select(app.find_prev_node()),
                KeyCode::Down if shift => app.select(app.navigate_to_next_sibling()),
                KeyCode::Down => app.select(app.find_next_node()),
                KeyCode::Left | KeyCode::Char('h') => app.select(app.navigate_to_parent()),
                KeyCode::Right | KeyCode::Char('l') => app.select(app.navigate_to_first_child()),
                KeyCode::Home if shift => app.select(app.navigate_to_first_at_level()),
                KeyCode::Home => app.select(app.navigate_to_first()),
                KeyCode::End if shift => app.select(app.navigate_to_last_at_level()),
                KeyCode::End => app.select(app.navigate_to_last()),
                _ => {}
            },
        }
    }
}
