//! User-facing status lines. Diagnostics go through `log` instead.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy)]
enum Kind {
    Info,
    Success,
    Warning,
    Error,
}

impl Kind {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Kind::Info => ("\x1b[34m", "ℹ️"),
            Kind::Success => ("\x1b[32m", "✅"),
            Kind::Warning => ("\x1b[33m", "⚠️"),
            Kind::Error => ("\x1b[31m", "❌"),
        }
    }
}

/// Colors are dropped when `NO_COLOR` is set.
fn line<T: fmt::Display>(kind: Kind, msg: T) -> String {
    let (color, icon) = kind.style();
    if std::env::var_os("NO_COLOR").is_some() {
        format!("{} {}", icon, msg)
    } else {
        format!("{}{}{} {}{}", color, BOLD, icon, RESET, msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Kind::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Kind::Success, msg));
}

/// Warnings go to stderr so piped JSON/CSV output stays clean.
pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Kind::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Kind::Error, msg));
}
