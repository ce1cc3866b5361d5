//! Terminal implementation of the installer's interaction capability.
//!
//! Uses dialoguer for prompts and console for styling.

use std::io::{self, Write};

use console::{measure_text_width, style};
use dialoguer::{Confirm, Input, theme::ColorfulTheme};

use install_mcp_core::error::InstallError;
use install_mcp_core::ui::Interaction;

/// Prompts on the terminal, messages to the given writers.
pub struct TerminalUi<W: Write = io::Stdout, E: Write = io::Stderr> {
    /// Informational and success output
    writer: W,
    /// Error output
    err_writer: E,
    /// Theme for dialoguer prompts
    theme: ColorfulTheme,
}

impl TerminalUi<io::Stdout, io::Stderr> {
    pub fn new() -> Self {
        Self {
            writer: io::stdout(),
            err_writer: io::stderr(),
            theme: ColorfulTheme::default(),
        }
    }
}

impl<W: Write, E: Write> TerminalUi<W, E> {
    /// Create a terminal UI with custom writers (for testing).
    #[cfg(test)]
    pub fn with_writers(writer: W, err_writer: E) -> Self {
        Self {
            writer,
            err_writer,
            theme: ColorfulTheme::default(),
        }
    }
}

impl<W: Write, E: Write> Interaction for TerminalUi<W, E> {
    fn prompt_text(&mut self, message: &str) -> Result<String, InstallError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .interact_text()
            .map_err(|e| InstallError::Prompt(e.to_string()))
    }

    fn prompt_confirm(&mut self, message: &str) -> Result<bool, InstallError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(style(message).green().to_string())
            .default(true)
            .interact()
            .map_err(|e| InstallError::Prompt(e.to_string()))
    }

    fn log_info(&mut self, message: &str) {
        let _ = writeln!(self.writer, "{} {}", style("ℹ").cyan(), message);
    }

    fn log_error(&mut self, message: &str) {
        let _ = writeln!(
            self.err_writer,
            "{} {}",
            style("✖").red(),
            style(message).red()
        );
    }

    fn log_success(&mut self, message: &str) {
        let _ = write!(self.writer, "{}", boxed(&style(message).green().to_string()));
    }
}

/// Frame `message` in a rounded box, one line per input line.
fn boxed(message: &str) -> String {
    let lines: Vec<&str> = message.lines().collect();
    let width = lines
        .iter()
        .map(|line| measure_text_width(line))
        .max()
        .unwrap_or(0);
    let horizontal = "─".repeat(width + 4);

    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("╭{horizontal}╮\n"));
    out.push_str(&format!("│{}│\n", " ".repeat(width + 4)));
    for line in lines {
        let padding = " ".repeat(width - measure_text_width(line));
        out.push_str(&format!("│  {line}{padding}  │\n"));
    }
    out.push_str(&format!("│{}│\n", " ".repeat(width + 4)));
    out.push_str(&format!("╰{horizontal}╯\n"));
    out.push('\n');
    out
}
