//! 终端初始化与恢复
//!
//! Raw mode is switched on first; any later setup failure switches it
//! back off before the error is returned.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen
pub fn init() -> io::Result<Tui> {
    enable_raw_mode()?;
    setup_or_restore(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        restore,
    )
}

/// Leave the alternate screen and raw mode
pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run `setup`; on failure run `restore` and return the setup error
fn setup_or_restore<T>(
    setup: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    setup().inspect_err(|e| {
        if let Err(restore_err) = restore() {
            tracing::warn!(error = %restore_err, setup_error = %e, "Failed to restore terminal");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores() {
        let restored = Cell::new(false);
        let result: io::Result<()> = setup_or_restore(
            || Err(io::Error::other("no tty")),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert_eq!(result.unwrap_err().to_string(), "no tty");
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_keeps_terminal() {
        let restored = Cell::new(false);
        let value = setup_or_restore(
            || Ok(7),
            || {
                restored.set(true);
                Ok(())
            },
        )
        .unwrap();
        assert_eq!(value, 7);
        assert!(!restored.get());
    }
}
