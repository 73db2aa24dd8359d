//! Application state and core logic for the terminal viewer.
//!
//! This module contains the `App` struct which holds the mounted grid, the
//! keyboard pointer, dataset reload tracking and the geometry of the last
//! drawn frame (for mouse hit-testing).

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::{info, warn};

use crate::canvas::Canvas;
use crate::cli::ViewConfig;
use crate::controller::GridController;
use crate::error::Result;
use crate::interaction::PagePoint;
use crate::models::Dataset;

/// Application state
pub struct App {
    pub dataset_path: PathBuf,
    pub canvas: Canvas,
    pub grid: GridController,
    pub dataset_needs_reload: Arc<Mutex<bool>>,
    // Cell the keyboard pointer rests on (also the hovered cell once moved)
    pub cursor: usize,
    // Scroll offset of the detail modal, in wrapped lines
    pub modal_scroll: u16,
    // Last reload failure, shown in the bottom bar
    pub status_message: Option<String>,
    // Screen areas of the cells in the last frame
    pub cell_areas: Vec<(usize, Rect)>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &ViewConfig) -> Result<Self> {
        let canvas = Canvas::default();
        let dataset = Dataset::load(&config.dataset_path)?;
        let grid = GridController::mount(&dataset, canvas)?;

        Ok(Self {
            dataset_path: config.dataset_path.clone(),
            canvas,
            grid,
            dataset_needs_reload: Arc::new(Mutex::new(false)),
            cursor: 0,
            modal_scroll: 0,
            status_message: None,
            cell_areas: Vec::new(),
            should_quit: false,
        })
    }

    /// Hover `target` (or nothing), using the cell center as pointer position
    pub fn hover(&mut self, target: Option<usize>) {
        let at = target
            .and_then(|index| self.grid.cell_center(index))
            .unwrap_or(PagePoint { x: 0.0, y: 0.0 });
        self.grid.move_pointer(target, at);
        if let Some(index) = target {
            self.cursor = index;
        }
    }

    /// Move the pointer to the nearest cell in a direction, skipping holes
    pub fn move_cursor(&mut self, d_row: isize, d_col: isize) {
        if self.grid.cells().is_empty() {
            return;
        }
        // The first move only puts the pointer on the grid
        if self.grid.hovered().is_none() {
            self.hover(Some(self.cursor));
            return;
        }
        let Some((row, col)) = self.grid.grid_position(self.cursor) else {
            return;
        };

        let rows = self.grid.scales().y.len() as isize;
        let cols = self.grid.scales().x.len() as isize;
        let (mut r, mut c) = (row as isize, col as isize);
        loop {
            r += d_row;
            c += d_col;
            if r < 0 || c < 0 || r >= rows || c >= cols {
                return;
            }
            if let Some(index) = self.grid.cell_at(r as usize, c as usize) {
                self.hover(Some(index));
                return;
            }
        }
    }

    /// Click the cell under the pointer
    pub fn click_cursor(&mut self) {
        if let Some(index) = self.grid.hovered() {
            self.grid.click(index);
            self.modal_scroll = 0;
        }
    }

    pub fn close_modal(&mut self) {
        if self.grid.close_modal() {
            self.modal_scroll = 0;
        }
    }

    pub fn scroll_modal(&mut self, delta: i32) {
        let next = i32::from(self.modal_scroll) + delta;
        self.modal_scroll = next.clamp(0, i32::from(u16::MAX)) as u16;
    }

    /// Reload the dataset if the watcher flagged a change
    pub fn reload_dataset_if_needed(&mut self) {
        let needs_reload = {
            let Ok(mut flag) = self.dataset_needs_reload.lock() else {
                return;
            };
            std::mem::replace(&mut *flag, false)
        };

        if needs_reload {
            match self.reload_dataset() {
                Ok(()) => self.status_message = None,
                Err(err) => {
                    warn!(error = %err, "dataset reload failed, keeping current grid");
                    self.status_message = Some(format!("Reload failed: {}", err));
                }
            }
        }
    }

    /// Remount the grid from disk, keeping the pointer where possible
    pub fn reload_dataset(&mut self) -> Result<()> {
        let dataset = Dataset::load(&self.dataset_path)?;
        let grid = GridController::mount(&dataset, self.canvas)?;
        let was_hovering = self.grid.hovered().is_some();

        self.grid = grid;
        self.modal_scroll = 0;
        self.cursor = self.cursor.min(self.grid.cells().len().saturating_sub(1));
        if was_hovering && !self.grid.cells().is_empty() {
            self.hover(Some(self.cursor));
        }
        info!(path = %self.dataset_path.display(), "reloaded dataset");
        Ok(())
    }

    /// Cell drawn at a terminal position in the last frame
    pub fn cell_under(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.cell_areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(index, _)| *index)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.grid.modal().is_some() {
            match key.code {
                KeyCode::Esc | KeyCode::Char('x') => self.close_modal(),
                KeyCode::Up | KeyCode::Char('k') => self.scroll_modal(-1),
                KeyCode::Down | KeyCode::Char('j') => self.scroll_modal(1),
                KeyCode::PageUp => self.scroll_modal(-10),
                KeyCode::PageDown => self.scroll_modal(10),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.click_cursor(),
            KeyCode::Esc => self.hover(None),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp if self.grid.modal().is_some() => self.scroll_modal(-3),
            MouseEventKind::ScrollDown if self.grid.modal().is_some() => self.scroll_modal(3),
            _ if self.grid.modal().is_some() => {}
            MouseEventKind::Moved => {
                let target = self.cell_under(mouse.column, mouse.row);
                self.hover(target);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.cell_under(mouse.column, mouse.row) {
                    self.hover(Some(index));
                    self.click_cursor();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use std::io::Write;

    const DATA: &str = r#"[
        {"stakeholder": "Patients", "levels": [
            {"level": "Cognitive Companions", "similarWork": [
                {"name": "X", "link": "https://example.org/x", "benefits": "b", "challenges": "c",
                 "technologies": "t", "ethicalConsiderations": "e",
                 "implementationStatus": "Emerging", "impact": "i"}
            ]},
            {"level": "Cognitive Collectives", "similarWork": [
                {"name": "Y", "link": "https://example.org/y", "benefits": "b", "challenges": "c",
                 "technologies": "t", "ethicalConsiderations": "e",
                 "implementationStatus": "Widely adopted", "impact": "i"}
            ]}
        ]},
        {"stakeholder": "Clinicians", "levels": [
            {"level": "Cognitive Companions", "similarWork": [
                {"name": "Z", "link": "https://example.org/z", "benefits": "b", "challenges": "c",
                 "technologies": "t", "ethicalConsiderations": "e",
                 "implementationStatus": "Growing adoption", "impact": "i"}
            ]}
        ]}
    ]"#;

    fn create_app() -> (tempfile::NamedTempFile, App) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", DATA).unwrap();
        let config = ViewConfig {
            dataset_path: file.path().to_path_buf(),
            watch: false,
        };
        let app = App::new(&config).unwrap();
        (file, app)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_first_move_enters_grid() {
        let (_file, mut app) = create_app();
        assert_eq!(app.grid.hovered(), None);
        app.handle_key(press(KeyCode::Right));
        assert_eq!(app.grid.hovered(), Some(0));
    }

    #[test]
    fn test_move_skips_missing_cells() {
        let (_file, mut app) = create_app();
        app.handle_key(press(KeyCode::Right));
        // Patients has no Colleagues cell; the pointer jumps to Collectives
        app.handle_key(press(KeyCode::Right));
        assert_eq!(app.grid.hovered(), Some(1));
        // Nothing further right
        app.handle_key(press(KeyCode::Right));
        assert_eq!(app.grid.hovered(), Some(1));
    }

    #[test]
    fn test_move_down_between_rows() {
        let (_file, mut app) = create_app();
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.grid.hovered(), Some(2));
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn test_enter_opens_and_escape_closes_modal() {
        let (_file, mut app) = create_app();
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Enter));
        assert!(app.grid.modal().is_some());

        // Navigation keys scroll while the modal is open
        app.handle_key(press(KeyCode::Down));
        assert_eq!(app.modal_scroll, 1);
        assert_eq!(app.grid.hovered(), Some(0));

        app.handle_key(press(KeyCode::Esc));
        assert!(app.grid.modal().is_none());
        assert_eq!(app.modal_scroll, 0);
    }

    #[test]
    fn test_quit_key() {
        let (_file, mut app) = create_app();
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_mouse_hover_uses_cell_areas() {
        let (_file, mut app) = create_app();
        app.cell_areas = vec![(0, Rect::new(10, 2, 20, 5)), (2, Rect::new(10, 7, 20, 5))];
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 15,
            row: 8,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.grid.hovered(), Some(2));

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.grid.hovered(), None);
    }

    #[test]
    fn test_reload_failure_keeps_grid() {
        let (file, mut app) = create_app();
        std::fs::write(file.path(), "not json").unwrap();
        *app.dataset_needs_reload.lock().unwrap() = true;
        app.reload_dataset_if_needed();

        assert_eq!(app.grid.cells().len(), 3);
        assert!(app.status_message.as_deref().unwrap().starts_with("Reload failed"));
        assert!(!*app.dataset_needs_reload.lock().unwrap());
    }

    #[test]
    fn test_reload_picks_up_changes() {
        let (file, mut app) = create_app();
        app.handle_key(press(KeyCode::Down));
        let trimmed = DATA.replacen("\"Clinicians\"", "\"Caregivers\"", 1);
        std::fs::write(file.path(), trimmed).unwrap();
        *app.dataset_needs_reload.lock().unwrap() = true;
        app.reload_dataset_if_needed();

        assert!(app.status_message.is_none());
        assert_eq!(app.grid.scales().y.domain()[1], "Caregivers");
        assert_eq!(app.grid.hovered(), Some(0));
    }
}
