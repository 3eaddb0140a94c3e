//! Visual styling utilities for the CLI.
//!
//! Category colours are the official CPCB hex tokens rendered as 24-bit
//! terminal colours, so the terminal matches dashboards built on the API.

use airq_core::{AqiCategory, MAX_INDEX};
use owo_colors::OwoColorize;

// ============================================================================
// Colored Value Formatting
// ============================================================================

/// Format a category label in its own colour.
pub fn format_category_colored(category: AqiCategory, no_color: bool) -> String {
    if no_color {
        return category.label().to_string();
    }

    let (r, g, b) = category.rgb();
    format!("{}", category.label().truecolor(r, g, b).bold())
}

/// Format an index value in the colour of its category.
pub fn format_index_colored(index: u16, no_color: bool) -> String {
    if no_color {
        return index.to_string();
    }

    let (r, g, b) = AqiCategory::from_index(i32::from(index)).rgb();
    format!("{}", index.truecolor(r, g, b).bold())
}

/// Format a colour swatch followed by its hex token.
pub fn format_swatch(category: AqiCategory, no_color: bool) -> String {
    if no_color {
        return category.color().to_string();
    }

    let (r, g, b) = category.rgb();
    format!("{} {}", "██".truecolor(r, g, b), category.color())
}

/// Format a 0-500 index as a ten-cell bar.
pub fn format_index_bar(index: u16, no_color: bool) -> String {
    let filled = usize::from(index.min(MAX_INDEX)).div_ceil(50);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled));

    if no_color {
        bar
    } else {
        let (r, g, b) = AqiCategory::from_index(i32::from(index)).rgb();
        format!("{}", bar.truecolor(r, g, b))
    }
}

// ============================================================================
// Status Messages
// ============================================================================

/// Format a success message.
pub fn format_success(message: &str, no_color: bool) -> String {
    if no_color {
        format!("[OK] {}", message)
    } else {
        format!("{} {}", "[OK]".green(), message)
    }
}

/// Format a warning message.
pub fn format_warning(message: &str, no_color: bool) -> String {
    if no_color {
        format!("[!!] {}", message)
    } else {
        format!("{} {}", "[!!]".yellow(), message)
    }
}

// ============================================================================
// Section Headers
// ============================================================================

/// Format a title header.
pub fn format_title(title: &str, no_color: bool) -> String {
    let rule = "━".repeat(title.chars().count());
    if no_color {
        format!("{}\n{}", title, rule)
    } else {
        format!("{}\n{}", title.bold(), rule.dimmed())
    }
}
