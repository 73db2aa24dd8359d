use std::io::{self, stdout, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use ratatui::prelude::*;
use tracing::info;

use ccf_grid::app::App;
use ccf_grid::cli::{CellSelector, Cli, Commands, ViewConfig};
use ccf_grid::export::{self, ExportFormat};
use ccf_grid::terminal::{self, TerminalSession};
use ccf_grid::watcher::setup_dataset_watcher;
use ccf_grid::{flatten, logging, ui, Canvas, Dataset, GridController, GridError};

fn main() {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, Commands::View { .. });
    let target = logging::log_target(cli.log_file.as_deref(), interactive);
    if let Err(e) = logging::init(target, cli.verbose) {
        eprintln!("error: cannot open log file: {e}");
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::View { dataset, no_watch } => view(ViewConfig {
            dataset_path: dataset,
            watch: !no_watch,
        }),
        Commands::Export {
            dataset,
            output,
            format,
            open,
            title,
        } => export_grid(&dataset, output.as_deref(), format, open.as_ref(), &title),
        Commands::Cells { dataset } => print_cells(&dataset),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn view(config: ViewConfig) -> Result<()> {
    let mut app = App::new(&config)
        .with_context(|| format!("cannot load {}", config.dataset_path.display()))?;

    // Keep the watcher alive for the whole session
    let _watcher = if config.watch {
        setup_dataset_watcher(config.dataset_path.clone(), app.dataset_needs_reload.clone())
    } else {
        None
    };

    terminal::install_panic_hook();
    let mut session = TerminalSession::enter(stdout())?;
    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| run(&mut terminal, &mut app));

    // Restore before reporting, keeping the loop's error if both fail
    let restored = session.restore();
    result?;
    restored?;
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        app.reload_dataset_if_needed();
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }
    Ok(())
}

fn export_grid(
    dataset_path: &Path,
    output: Option<&Path>,
    format: ExportFormat,
    open: Option<&CellSelector>,
    title: &str,
) -> Result<()> {
    let dataset = Dataset::load(dataset_path)
        .with_context(|| format!("cannot load {}", dataset_path.display()))?;
    let mut grid = GridController::mount(&dataset, Canvas::default())?;

    if let Some(selector) = open {
        let index = grid
            .cell_index(&selector.stakeholder, selector.level)
            .ok_or_else(|| GridError::CellNotFound {
                stakeholder: selector.stakeholder.clone(),
                level: selector.level,
            })?;
        grid.click(index);
    }

    let rendered = export::render(&grid, format, title);
    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("cannot write {}", path.display()))?;
            info!(path = %path.display(), ?format, "exported grid");
        }
        None => {
            let mut out = stdout().lock();
            out.write_all(rendered.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}

fn print_cells(dataset_path: &Path) -> Result<()> {
    let dataset = Dataset::load(dataset_path)
        .with_context(|| format!("cannot load {}", dataset_path.display()))?;
    let cells = flatten(&dataset);
    println!("{}", serde_json::to_string_pretty(&cells)?);
    Ok(())
}
