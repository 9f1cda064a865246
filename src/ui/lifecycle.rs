use std::{error::Error, io};

use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::Terminal;

pub type UiTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw mode, alternate screen, mouse capture and a hidden cursor. Any step
/// that fails undoes the steps before it.
pub fn setup_terminal() -> Result<UiTerminal, Box<dyn Error>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(err.into());
    }

    let backend = CrosstermBackend::new(stdout);
    let terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(err.into());
        }
    };

    let terminal = hide_cursor_or_undo(terminal, |terminal| {
        let _ = restore_terminal(terminal);
    })?;
    Ok(terminal)
}

fn hide_cursor_or_undo<B, F>(mut terminal: Terminal<B>, undo: F) -> io::Result<Terminal<B>>
where
    B: Backend,
    F: FnOnce(&mut Terminal<B>),
{
    if let Err(err) = terminal.hide_cursor() {
        undo(&mut terminal);
        return Err(err);
    }
    Ok(terminal)
}

pub fn restore_terminal(terminal: &mut UiTerminal) -> Result<(), Box<dyn Error>> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}
