//! Terminal styling for avifbatch.
//!
//! Everything is printed through the `log` facade so that the log file gets
//! the same lines as the console; colors are stripped on the way to the file.

use avifbatch_core::config::utils::get_env_opt_string;
use log::{Level, error, info, warn};
use owo_colors::OwoColorize;
use std::sync::atomic::{AtomicBool, Ordering};
use supports_color::Stream;

static COLOR_ENABLED: AtomicBool = AtomicBool::new(false);

/// Decides once whether console output may be colored.
pub fn init_color(no_color_flag: bool) {
    let enabled = !no_color_flag
        && get_env_opt_string("NO_COLOR").is_none()
        && supports_color::on(Stream::Stdout).is_some();
    COLOR_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Check if color should be used
pub fn should_use_color() -> bool {
    COLOR_ENABLED.load(Ordering::Relaxed)
}

/// Styles a console log line according to its level.
pub fn style_for_level(level: Level, message: &str) -> String {
    if !should_use_color() {
        return message.to_string();
    }
    match level {
        Level::Error => message.red().bold().to_string(),
        Level::Warn => message.yellow().to_string(),
        Level::Info => message.to_string(),
        Level::Debug | Level::Trace => message.dimmed().to_string(),
    }
}

/// Print a section header for major workflow phases
pub fn print_section(title: &str) {
    info!("");
    if should_use_color() {
        info!("===== {} =====", title.to_uppercase().cyan());
    } else {
        info!("===== {} =====", title.to_uppercase());
    }
    info!("");
}

const STATUS_LABEL_WIDTH: usize = 15;

/// Spaces between a status label and its value, at least one.
fn status_padding(label: &str) -> usize {
    STATUS_LABEL_WIDTH
        .saturating_sub(label.chars().count())
        .max(1)
}

/// Print a status line (key-value pair)
pub fn print_status(label: &str, value: &str) {
    let padding = status_padding(label);
    let label = format!("{label}:");
    if should_use_color() {
        info!("  {}{} {}", label.bold(), " ".repeat(padding - 1), value);
    } else {
        info!("  {}{} {}", label, " ".repeat(padding - 1), value);
    }
}

/// Print a plain indented line
pub fn print_line(message: &str) {
    info!("  {message}");
}

/// Print a success message
pub fn print_success(message: &str) {
    info!("");
    if should_use_color() {
        info!("  ✓ {}", message.green());
    } else {
        info!("  ✓ {message}");
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    warn!("  ⚠ {message}");
}

/// Print an error message
pub fn print_error(message: &str) {
    error!("  ✗ {message}");
}
