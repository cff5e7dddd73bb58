//! ANSI coloring for table cells and the terminal reset scope.

use std::io::{self, IsTerminal, Write};

const BLUE: &str = "\x1b[34m";
const RED: &str = "\x1b[31m";
const FG_RESET: &str = "\x1b[39m";
const RESET_ALL: &str = "\x1b[0m";

/// Colors for the two-line station and time cells. A plain palette
/// leaves the text untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn ansi() -> Self {
        Self { enabled: true }
    }

    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Origin station and departure time.
    pub fn departure(&self, text: &str) -> String {
        self.paint(BLUE, text)
    }

    /// Destination station and arrival time.
    pub fn arrival(&self, text: &str) -> String {
        self.paint(RED, text)
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.enabled {
            format!("{color}{text}{FG_RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Colors are off for `NO_COLOR`, `TERM=dumb` and output that is not a terminal.
fn supports_color(no_color: bool, term: Option<&str>, is_terminal: bool) -> bool {
    if no_color {
        return false;
    }
    if term.map_or(false, |t| t.eq_ignore_ascii_case("dumb")) {
        return false;
    }
    is_terminal
}

/// Held for the lifetime of `main`. Color support is decided once at
/// acquisition; when colors are on, terminal attributes are reset on drop.
#[derive(Debug)]
pub struct ColorGuard {
    palette: Palette,
}

impl ColorGuard {
    pub fn acquire() -> Self {
        let term = std::env::var("TERM").ok();
        let enabled = supports_color(
            std::env::var_os("NO_COLOR").is_some(),
            term.as_deref(),
            io::stdout().is_terminal(),
        );
        tracing::debug!(enabled, "terminal colors");

        Self {
            palette: Palette { enabled },
        }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }
}

impl Drop for ColorGuard {
    fn drop(&mut self) {
        if !self.palette.enabled {
            return;
        }
        let mut stdout = io::stdout();
        let _ = stdout.write_all(RESET_ALL.as_bytes());
        let _ = stdout.flush();
    }
}
