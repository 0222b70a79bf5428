//! Terminal mode management
//!
//! Enables raw mode, the alternate screen and bracketed paste, and tracks
//! which of them succeeded so `undo()` restores exactly what was changed.

use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use std::io::{stdout, Write};

/// Tracks which terminal modes have been enabled and provides cleanup.
#[derive(Debug, Default)]
pub struct TerminalModes {
    raw_mode: bool,
    alternate_screen: bool,
    bracketed_paste: bool,
}

impl TerminalModes {
    /// Enable all terminal modes.
    ///
    /// On error, automatically undoes any partially enabled modes.
    pub fn enable() -> Result<Self> {
        let mut modes = Self::default();

        if let Err(e) = enable_raw_mode() {
            tracing::error!("Failed to enable raw mode: {}", e);
            return Err(e.into());
        }
        modes.raw_mode = true;
        tracing::debug!("Enabled raw mode");

        if let Err(e) = stdout().execute(EnterAlternateScreen) {
            tracing::error!("Failed to enter alternate screen: {}", e);
            modes.undo();
            return Err(e.into());
        }
        modes.alternate_screen = true;
        tracing::debug!("Entered alternate screen");

        // Paste arrives as one event instead of a key storm; non-fatal
        if let Err(e) = stdout().execute(EnableBracketedPaste) {
            tracing::warn!("Failed to enable bracketed paste: {}", e);
        } else {
            modes.bracketed_paste = true;
        }

        Ok(modes)
    }

    /// Restore the terminal to its original state
    pub fn undo(&mut self) {
        if self.bracketed_paste {
            let _ = stdout().execute(DisableBracketedPaste);
            self.bracketed_paste = false;
        }
        if self.alternate_screen {
            let _ = stdout().execute(LeaveAlternateScreen);
            self.alternate_screen = false;
        }
        if self.raw_mode {
            let _ = disable_raw_mode();
            self.raw_mode = false;
        }
        let _ = stdout().flush();
    }
}

/// Best-effort restore for paths that cannot reach a [`TerminalModes`],
/// such as the panic hook
pub fn emergency_cleanup() {
    let _ = stdout().execute(DisableBracketedPaste);
    let _ = stdout().execute(LeaveAlternateScreen);
    let _ = disable_raw_mode();
    let _ = stdout().flush();
}

impl Drop for TerminalModes {
    fn drop(&mut self) {
        self.undo();
    }
}
