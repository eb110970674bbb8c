//! User-facing status messages.
//!
//! Everything here goes to stderr so that tables and agent lists on stdout
//! can be piped without noise.

use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn emit<T: fmt::Display>(color: &str, icon: &str, msg: T) {
    eprintln!("{}{}{} {}{}", color, BOLD, icon, RESET, msg);
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(FG_BLUE, ICON_INFO, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(FG_GREEN, ICON_OK, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(FG_YELLOW, ICON_WARN, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(FG_RED, ICON_ERR, msg);
}

/// Section header printed above a table
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}=== {} ==={}", FG_BLUE, BOLD, msg, RESET);
}
