//! Terminal output with a colored `[module]` prefix.
//!
//! ```ignore
//! log!("migrate"; "copied {} files", count);
//! debug!("catalog"; "skipping hidden entry {}", path.display());
//! ```
//!
//! `warning`, `error` and `hint` lines go to stderr so that stdout stays a
//! clean run log. Colors respect `--color` through [`paint`].

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream, Style};
use std::{
    fmt::Display,
    io::{Write, stderr, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Set once from `--verbose` before any command runs.
static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Print `message` under a `[module]` prefix.
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Like [`log!`], but only under `--verbose`. Arguments are not formatted otherwise.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

pub fn log(module: &str, message: &str) {
    if goes_to_stderr(module) {
        let line = format!("{} {message}", prefix(module, Stream::Stderr));
        write_line(&mut stderr().lock(), &line);
    } else {
        let line = format!("{} {message}", prefix(module, Stream::Stdout));
        write_line(&mut stdout().lock(), &line);
    }
}

/// Apply `style` unless colors are disabled for `stream` (`--color never`, no TTY).
pub fn paint(text: impl Display, style: Style, stream: Stream) -> String {
    text.if_supports_color(stream, |t| t.style(style))
        .to_string()
}

fn write_line(out: &mut impl Write, line: &str) {
    execute!(out, Clear(ClearType::UntilNewLine)).ok();
    writeln!(out, "{line}").ok();
    out.flush().ok();
}

fn goes_to_stderr(module: &str) -> bool {
    matches!(
        module.to_ascii_lowercase().as_str(),
        "warning" | "error" | "hint"
    )
}

fn prefix(module: &str, stream: Stream) -> String {
    let color = match module.to_ascii_lowercase().as_str() {
        "migrate" => Style::new().bright_blue(),
        "catalog" => Style::new().bright_green(),
        "error" => Style::new().bright_red(),
        "warning" => Style::new().bright_magenta(),
        _ => Style::new().bright_yellow(),
    };
    paint(format_args!("[{module}]"), color.bold(), stream)
}
