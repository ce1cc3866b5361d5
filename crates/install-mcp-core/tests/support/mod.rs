#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use install_mcp_core::client::ClientDescriptor;
use install_mcp_core::config::{ClientConfig, ConfigStore};
use install_mcp_core::error::{ConfigError, InstallError};
use install_mcp_core::ui::Interaction;

/// Interaction that answers prompts from a script and records every call.
#[derive(Debug, Default)]
pub struct ScriptedUi {
    pub text_answers: VecDeque<String>,
    pub confirm_answers: VecDeque<bool>,
    pub prompts: Vec<String>,
    pub infos: Vec<String>,
    pub errors: Vec<String>,
    pub successes: Vec<String>,
}

impl ScriptedUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer_text(mut self, answer: &str) -> Self {
        self.text_answers.push_back(answer.to_string());
        self
    }

    pub fn answer_confirm(mut self, answer: bool) -> Self {
        self.confirm_answers.push_back(answer);
        self
    }
}

impl Interaction for ScriptedUi {
    fn prompt_text(&mut self, message: &str) -> Result<String, InstallError> {
        self.prompts.push(message.to_string());
        self.text_answers
            .pop_front()
            .ok_or_else(|| InstallError::Prompt(format!("unexpected prompt: {message}")))
    }

    fn prompt_confirm(&mut self, message: &str) -> Result<bool, InstallError> {
        self.prompts.push(message.to_string());
        self.confirm_answers
            .pop_front()
            .ok_or_else(|| InstallError::Prompt(format!("unexpected confirm: {message}")))
    }

    fn log_info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn log_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn log_success(&mut self, message: &str) {
        self.successes.push(message.to_string());
    }
}

/// In-memory config store that counts reads and writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub config: RefCell<ClientConfig>,
    pub reads: Cell<usize>,
    pub writes: Cell<usize>,
    pub fail_write: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_write: true,
            ..Default::default()
        }
    }
}

impl ConfigStore for MemoryStore {
    fn read_config(
        &self,
        _client: &ClientDescriptor,
        _local: bool,
    ) -> Result<ClientConfig, ConfigError> {
        self.reads.set(self.reads.get() + 1);
        Ok(self.config.borrow().clone())
    }

    fn write_config(
        &self,
        config: &ClientConfig,
        _client: &ClientDescriptor,
        _local: bool,
    ) -> Result<(), ConfigError> {
        self.writes.set(self.writes.get() + 1);
        if self.fail_write {
            return Err(ConfigError::Write {
                path: "/read-only/mcp.json".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        *self.config.borrow_mut() = config.clone();
        Ok(())
    }
}
