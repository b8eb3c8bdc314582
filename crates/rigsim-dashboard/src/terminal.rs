//! Terminal lifecycle management.
//!
//! The dashboard owns the terminal while it runs. Terminal state is restored on:
//! - Normal exit and early return (via `TerminalGuard` drop)
//! - Panic on the dashboard thread (via the panic hook)
//!
//! Panics on other threads, such as a failing updater tick on a runtime
//! worker, leave the terminal alone so the dashboard keeps drawing.

use std::cell::Cell;
use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::warn;

use crate::error::DashboardResult;

thread_local! {
    static OWNS_TERMINAL: Cell<bool> = const { Cell::new(false) };
}

/// Whether the current thread holds the dashboard terminal.
fn owns_terminal() -> bool {
    OWNS_TERMINAL.with(Cell::get)
}

/// Marks the current thread as the terminal owner until dropped.
struct TerminalClaim {
    // Not Send: the claim must be released on the thread that took it.
    _thread_bound: std::marker::PhantomData<*const ()>,
}

impl TerminalClaim {
    fn take() -> Self {
        OWNS_TERMINAL.with(|owns| owns.set(true));
        Self {
            _thread_bound: std::marker::PhantomData,
        }
    }
}

impl Drop for TerminalClaim {
    fn drop(&mut self) {
        OWNS_TERMINAL.with(|owns| owns.set(false));
    }
}

/// Terminal type the dashboard draws to.
pub type DashboardTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal in dashboard mode and restores it when dropped.
pub struct TerminalGuard {
    terminal: DashboardTerminal,
    _claim: TerminalClaim,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen with a hidden cursor.
    pub fn enter() -> DashboardResult<Self> {
        let claim = TerminalClaim::take();
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = restore_terminal();
            return Err(e.into());
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self {
                terminal,
                _claim: claim,
            }),
            Err(e) => {
                let _ = restore_terminal();
                Err(e.into())
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut DashboardTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore_terminal() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Restores terminal state.
///
/// Shows the cursor, leaves the alternate screen and disables raw mode.
/// Idempotent and safe to call multiple times.
pub fn restore_terminal() -> io::Result<()> {
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()
}

/// Run `restore` only on the thread that owns the terminal.
fn restore_if_owner(restore: impl FnOnce()) -> bool {
    if owns_terminal() {
        restore();
        true
    } else {
        false
    }
}

/// Installs a panic hook that restores the terminal before printing a panic
/// raised on the thread that owns it.
///
/// Only the first call installs the hook.
pub fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            restore_if_owner(|| {
                let _ = restore_terminal();
            });
            original_hook(panic_info);
        }));
    });
}
