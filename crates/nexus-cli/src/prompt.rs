//! Terminal prompter implementing the core `Prompter` port.
//!
//! Built on `dialoguer` behind the `interactive` feature. Without it the
//! CLI can still generate projects in direct mode.

use crate::error::CliResult;
use nexus_core::application::ports::Prompter;

/// The prompter used for interactive runs.
#[cfg(feature = "interactive")]
pub fn terminal_prompter() -> CliResult<Box<dyn Prompter>> {
    Ok(Box::new(terminal::DialoguerPrompter::default()))
}

#[cfg(not(feature = "interactive"))]
pub fn terminal_prompter() -> CliResult<Box<dyn Prompter>> {
    Err(crate::error::CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(feature = "interactive")]
mod terminal {
    use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

    use nexus_core::{
        application::{
            ApplicationError,
            ports::{Choice, Prompter},
        },
        error::NexusResult,
    };

    #[derive(Default)]
    pub struct DialoguerPrompter {
        theme: ColorfulTheme,
    }

    fn failed(key: &str, err: dialoguer::Error) -> ApplicationError {
        ApplicationError::Prompt {
            key: key.to_string(),
            reason: err.to_string(),
        }
    }

    impl Prompter for DialoguerPrompter {
        fn select(
            &self,
            key: &str,
            message: &str,
            choices: &[Choice],
            default: usize,
        ) -> NexusResult<String> {
            let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
            let index = Select::with_theme(&self.theme)
                .with_prompt(message)
                .items(&labels)
                .default(default)
                .interact()
                .map_err(|e| failed(key, e))?;

            choices.get(index).map(|c| c.value.clone()).ok_or_else(|| {
                ApplicationError::Prompt {
                    key: key.to_string(),
                    reason: format!("selection {index} is out of range"),
                }
                .into()
            })
        }

        fn input(&self, key: &str, message: &str, default: &str) -> NexusResult<String> {
            let answer: String = Input::with_theme(&self.theme)
                .with_prompt(message)
                .default(default.to_string())
                .interact_text()
                .map_err(|e| failed(key, e))?;
            Ok(answer.trim().to_string())
        }

        fn confirm(&self, key: &str, message: &str, default: bool) -> NexusResult<bool> {
            Ok(Confirm::with_theme(&self.theme)
                .with_prompt(message)
                .default(default)
                .interact()
                .map_err(|e| failed(key, e))?)
        }
    }
}
