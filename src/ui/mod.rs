pub mod street_scene;

pub use street_scene::{Screen, StreetWidget};

use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, ExecutableCommand};
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout};

/// Raw mode + alternate screen on stdout.
pub fn enter_terminal() -> io::Result<Screen<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    Screen::new(CrosstermBackend::new(stdout))
}

/// Undo `enter_terminal`. Safe to call more than once.
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(LeaveAlternateScreen)?;
    stdout.execute(cursor::Show)?;
    Ok(())
}
