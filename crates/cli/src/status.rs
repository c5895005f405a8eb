//! User-facing status lines on stderr, keeping stdout clean for data.

use colored::*;

pub fn info(msg: &str) {
    eprintln!("{} {}", "ℹ".bright_blue(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✖".bright_red(), msg);
}
