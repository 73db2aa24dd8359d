//! Terminal session for the viewer: raw mode, alternate screen and mouse
//! capture, undone on every exit path (error, early return or panic).

use std::io::{self, Write};
use std::panic;

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Restores the terminal when dropped
pub struct TerminalSession<W: Write> {
    out: W,
    active: bool,
}

impl<W: Write> TerminalSession<W> {
    /// Enter raw mode, the alternate screen and mouse capture on `out`.
    /// A failure part way leaves the terminal restored.
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut session = Self { out, active: true };
        execute!(session.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(session)
    }

    /// Undo `enter`. Every step is attempted; the first error is returned.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let raw = disable_raw_mode();
        let screen = execute!(self.out, DisableMouseCapture, LeaveAlternateScreen, Show);
        raw.and(screen)
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Restore stdout before the panic message is printed, so it lands on the
/// main screen instead of the discarded alternate one
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show);
        previous(info);
    }));
}
