//! User interaction capability used by the installer.
//!
//! The terminal implementation lives in the CLI crate; tests supply a
//! scripted one.

use crate::error::InstallError;

/// Prompts and user-facing messages.
pub trait Interaction {
    /// Ask for a line of text.
    fn prompt_text(&mut self, message: &str) -> Result<String, InstallError>;

    /// Ask a yes/no question.
    fn prompt_confirm(&mut self, message: &str) -> Result<bool, InstallError>;

    fn log_info(&mut self, message: &str);

    fn log_error(&mut self, message: &str);

    /// Report a completed install, rendered prominently.
    fn log_success(&mut self, message: &str);
}
