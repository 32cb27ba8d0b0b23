//! Centralized warning and status messages for CLI output.

use std::sync::atomic::{AtomicBool, Ordering};

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Suppresses warnings and confirmations when set.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// True when stderr is a terminal, so ANSI colors render.
fn colored() -> bool {
    unsafe { libc::isatty(2) == 1 }
}

fn paint(color: &str, msg: &str) -> String {
    if colored() {
        format!("{color}{msg}{RESET}")
    } else {
        msg.to_string()
    }
}

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{}", paint(YELLOW, msg));
    }
}

/// Print an error message to stderr (red) - NOT suppressed
pub fn error(msg: &str) {
    eprintln!("{}", paint(RED, msg));
}

pub fn settings_unreadable(err: &str) {
    warn(&format!("Warning: failed to load settings, using defaults: {err}"));
}

pub fn settings_saved(path: &str) {
    if !quiet() {
        eprintln!("Settings saved \u{2192} {path}");
    }
}

pub fn clipboard_copied() {
    if !quiet() {
        eprintln!("*** -COPIED TO CLIPBOARD- ***");
    }
}

pub fn clipboard_unavailable(err: &str) {
    warn(&format!("Clipboard unavailable ({err}), printing to terminal instead"));
}

pub fn passwords_written(count: usize, path: &str) {
    if !quiet() {
        eprintln!("{count} password(s) \u{2192} {path}");
    }
}
