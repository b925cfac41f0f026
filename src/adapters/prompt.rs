use crate::domain::ports::Prompter;
use crate::utils::error::{Result, Site24x7Error};
use dialoguer::{Confirm, Input, Password};

fn prompt_error(e: dialoguer::Error) -> Site24x7Error {
    Site24x7Error::PromptError {
        message: e.to_string(),
    }
}

/// Interactive prompts on the controlling terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(prompt_error)
    }

    fn input(&self, prompt: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map(|s| s.trim().to_string())
            .map_err(prompt_error)
    }

    fn secret(&self, prompt: &str) -> Result<String> {
        Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map(|s| s.trim().to_string())
            .map_err(prompt_error)
    }
}
