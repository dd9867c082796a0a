use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear as TermClear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

pub type QuizTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back into cooked mode when dropped or when the
/// process panics, whichever comes first. Restoring happens once.
pub struct TerminalGuard {
    raw: Arc<Mutex<bool>>,
}

impl TerminalGuard {
    fn engage() -> Self {
        let raw = Arc::new(Mutex::new(true));
        let hook_raw = Arc::clone(&raw);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            leave_raw(&hook_raw);
            default_hook(info);
        }));
        Self { raw }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        leave_raw(&self.raw);
    }
}

fn leave_raw(raw: &Mutex<bool>) {
    let mut raw = raw.lock();
    if !*raw {
        return;
    }
    *raw = false;
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
    tracing::debug!("Terminal restored");
}

/// Raw mode, alternate screen, hidden cursor.
pub fn setup_terminal() -> io::Result<(QuizTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::engage();
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(TermClear(ClearType::All))?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
