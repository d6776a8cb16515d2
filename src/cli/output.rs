//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks, names only in the source
//! - Red: errors, failed items
//! - Yellow: warnings, names only in the target
//! - Cyan: paths, commands, secret names, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;

const RULE_WIDTH: usize = 56;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ copied 3 secrets`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ unknown environment: qa`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message to stderr (yellow).
///
/// Example: `⚠ could not load db-pass`
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ run: vaultsync init`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  source:  Production (prod)`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {}  {}", style(label).dim(), style(value).bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

/// Print a list item with bullet.
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Print a horizontal rule separator.
pub fn rule() {
    if colors_enabled() {
        println!("{}", style("─".repeat(RULE_WIDTH)).dim());
    } else {
        println!("{}", "─".repeat(RULE_WIDTH));
    }
}

/// Print an empty line.
pub fn blank() {
    println!();
}

/// Print raw data to stdout with no decoration.
pub fn data(msg: &str) {
    println!("{}", msg);
}

/// Format a path string in cyan.
pub fn path(p: &str) -> String {
    if colors_enabled() {
        style(p).cyan().to_string()
    } else {
        p.to_string()
    }
}

/// Format a command string in green.
pub fn cmd(c: &str) -> String {
    if colors_enabled() {
        style(c).green().to_string()
    } else {
        c.to_string()
    }
}

/// Format a secret name in cyan.
pub fn key(k: &str) -> String {
    if colors_enabled() {
        style(k).cyan().to_string()
    } else {
        k.to_string()
    }
}

/// Format a count in bold.
pub fn count(n: usize) -> String {
    if colors_enabled() {
        style(n).bold().to_string()
    } else {
        n.to_string()
    }
}

/// Color a label with the environment's configured color, if any.
///
/// Unknown color names fall back to plain bold.
pub fn env_label(label: &str, color: Option<&str>) -> String {
    if !colors_enabled() {
        return label.to_string();
    }
    let bold = style(label).bold();
    let colored = match color.map(str::to_ascii_lowercase).as_deref() {
        Some("red") => bold.red(),
        Some("green") => bold.green(),
        Some("yellow") => bold.yellow(),
        Some("blue") => bold.blue(),
        Some("magenta") => bold.magenta(),
        Some("cyan") => bold.cyan(),
        _ => bold,
    };
    colored.to_string()
}

/// Print one line of a comparison, marker first.
///
/// Example: `+ db-pass`
pub fn diff_line(marker: char, name: &str, note: &str) {
    if colors_enabled() {
        let marker = match marker {
            '+' => style(marker).green(),
            '-' => style(marker).yellow(),
            _ => style(marker).dim(),
        };
        println!("{} {} {}", marker, name, style(note).dim());
    } else {
        println!("{} {} {}", marker, name, note);
    }
}

/// Print one batch outcome line.
///
/// Example: `✓ db-pass  copied`
pub fn outcome(success: bool, name: &str, message: &str) {
    if colors_enabled() {
        let mark = if success {
            style("✓").green()
        } else {
            style("✗").red()
        };
        println!("{} {}  {}", mark, key(name), style(message).dim());
    } else {
        let mark = if success { "✓" } else { "✗" };
        println!("{} {}  {}", mark, name, message);
    }
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).dim());
    } else {
        println!("{}", msg);
    }
}

/// Print a section header with a separator line.
///
/// Example:
/// ```text
/// Only in source
/// ────────────────────────────────────────────────────────
/// ```
pub fn section(title: &str) {
    println!();
    header(title);
    rule();
}
