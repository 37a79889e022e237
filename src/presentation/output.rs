//! Output Rendering
//!
//! Plain-text row formats for the query commands and config warnings.
//! Widths are measured in terminal columns, not bytes.

use unicode_width::UnicodeWidthStr;

use crate::config::ConfigWarning;
use crate::domain::entities::{StackOutput, StackParameter, StackSummary};

/// Column width of the stack name in `list`
pub const NAME_COLUMN: usize = 15;

/// Column width of the key in `parameters` / `outputs`
pub const KEY_COLUMN: usize = 35;

/// Pad `text` with spaces to `width` display columns (never truncates)
pub fn pad_right(text: &str, width: usize) -> String {
    let visible = UnicodeWidthStr::width(text);
    let mut padded = String::with_capacity(text.len() + width.saturating_sub(visible));
    padded.push_str(text);
    for _ in visible..width {
        padded.push(' ');
    }
    padded
}

pub fn summary_row(summary: &StackSummary) -> String {
    format!("{} {}", pad_right(&summary.name, NAME_COLUMN), summary.status)
}

pub fn key_value_row(key: &str, value: &str) -> String {
    format!("{}: {}", pad_right(key, KEY_COLUMN), value)
}

pub fn parameter_row(parameter: &StackParameter) -> String {
    key_value_row(&parameter.key, &parameter.value)
}

pub fn output_row(output: &StackOutput) -> String {
    key_value_row(&output.key, &output.value)
}

/// Human message for lookups against a missing stack
pub fn missing_stack_message(name: &str) -> String {
    format!("Stack `{}` does not exist.", name)
}

pub fn config_warning_lines(warnings: &[ConfigWarning]) -> Vec<String> {
    let mut lines = Vec::new();
    for w in warnings {
        match w.line {
            Some(line) => lines.push(format!(
                "⚠ Unknown config key '{}' in {}:{}",
                w.key,
                w.file.display(),
                line
            )),
            None => lines.push(format!(
                "⚠ Unknown config key '{}' in {}",
                w.key,
                w.file.display()
            )),
        }

        if let Some(suggestion) = &w.suggestion {
            lines.push(format!("   Did you mean '{}'?", suggestion));
        }
    }
    lines
}

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for line in config_warning_lines(warnings) {
        eprintln!("{}", line);
    }
}
