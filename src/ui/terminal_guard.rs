//! Raw-mode terminal setup for the phonebook screen.
//!
//! [`setup_terminal`] switches to the alternate screen and hands back a
//! [`TerminalGuard`]. The guard puts the user's shell back the way it was
//! when it is dropped, and also when the UI thread panics, so a crash never
//! leaves the terminal in raw mode.

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::{Arc, Mutex};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

type Restore = Box<dyn FnOnce() + Send + 'static>;

/// Runs its restore action exactly once: on drop or from the panic hook,
/// whichever comes first.
pub struct TerminalGuard {
    restore: Arc<Mutex<Option<Restore>>>,
}

impl TerminalGuard {
    fn with_restore<F: FnOnce() + Send + 'static>(restore: F) -> Self {
        Self {
            restore: Arc::new(Mutex::new(Some(Box::new(restore)))),
        }
    }

    fn restore_on_panic(&self) {
        let restore = Arc::clone(&self.restore);
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            run_once(&restore);
            previous(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        run_once(&self.restore);
    }
}

fn run_once(slot: &Mutex<Option<Restore>>) {
    let action = slot.lock().ok().and_then(|mut slot| slot.take());
    if let Some(action) = action {
        action();
    }
}

fn leave_screen() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

pub fn setup_terminal() -> io::Result<(Tui, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::with_restore(leave_screen);

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(TermClear(ClearType::All))?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    guard.restore_on_panic();

    Ok((terminal, guard))
}
