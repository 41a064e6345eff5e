//! Output Rendering
//!
//! Renders fatal errors and config warnings for the terminal or as NDJSON.

use std::io::{self, Write};

use crossterm::style::Stylize;
use is_terminal::IsTerminal;

use crate::config::ConfigWarning;

/// Whether stderr output may carry ANSI colors
pub fn stderr_supports_color() -> bool {
    supports_color_with(|key| std::env::var(key).ok(), io::stderr().is_terminal())
}

fn supports_color_with(get_env: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    let term_is_dumb = get_env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
    is_tty && !term_is_dumb && get_env("NO_COLOR").is_none()
}

fn error_tag(color: bool) -> String {
    if color {
        "[ERROR]".red().to_string()
    } else {
        "[ERROR]".to_string()
    }
}

fn warn_tag(color: bool) -> String {
    if color {
        "[WARN]".yellow().to_string()
    } else {
        "[WARN]".to_string()
    }
}

/// Format an error and its cause chain
pub fn format_error(err: &anyhow::Error, color: bool) -> String {
    let mut out = format!("{} {}\n", error_tag(color), err);
    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {}\n", cause));
    }
    out
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
            "causes": err.chain().skip(1).map(|c| c.to_string()).collect::<Vec<_>>(),
        });
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", output);
        let _ = stdout.flush();
        return;
    }

    eprint!("{}", format_error(err, stderr_supports_color()));
}

pub fn format_config_warning(warning: &ConfigWarning, color: bool) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut out = format!(
        "{} Unknown config key '{}' in {}",
        warn_tag(color),
        warning.key,
        location
    );
    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    out.push('\n');
    out
}

/// Config warnings go to stderr so NDJSON on stdout stays parseable
pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    let color = stderr_supports_color();
    for warning in warnings {
        eprint!("{}", format_config_warning(warning, color));
    }
}
