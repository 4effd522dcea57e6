//! Scripted prompter: answers questions by key from a fixed table.
//!
//! Used by tests and by non-terminal front ends. Questions without a
//! scripted answer take their default, like pressing Enter.

use std::collections::HashMap;
use std::sync::Mutex;

use nexus_core::{
    application::{
        ApplicationError,
        ports::{Choice, Prompter},
    },
    error::NexusResult,
};

#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: HashMap<String, String>,
    asked: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the answer for `key`.
    pub fn answer(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.answers.insert(key.into(), value.into());
        self
    }

    /// Keys asked so far, in order.
    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().map(|a| a.clone()).unwrap_or_default()
    }

    fn record(&self, key: &str) -> Option<&str> {
        if let Ok(mut asked) = self.asked.lock() {
            asked.push(key.to_string());
        }
        self.answers.get(key).map(String::as_str)
    }
}

fn prompt_error(key: &str, reason: impl Into<String>) -> ApplicationError {
    ApplicationError::Prompt {
        key: key.to_string(),
        reason: reason.into(),
    }
}

impl Prompter for ScriptedPrompter {
    fn select(
        &self,
        key: &str,
        _message: &str,
        choices: &[Choice],
        default: usize,
    ) -> NexusResult<String> {
        match self.record(key) {
            Some(answer) => choices
                .iter()
                .find(|c| c.value.eq_ignore_ascii_case(answer))
                .map(|c| c.value.clone())
                .ok_or_else(|| prompt_error(key, format!("'{answer}' is not one of the choices")).into()),
            None => choices
                .get(default)
                .map(|c| c.value.clone())
                .ok_or_else(|| prompt_error(key, "no choices offered").into()),
        }
    }

    fn input(&self, key: &str, _message: &str, default: &str) -> NexusResult<String> {
        Ok(match self.record(key) {
            Some(answer) if !answer.trim().is_empty() => answer.to_string(),
            _ => default.to_string(),
        })
    }

    fn confirm(&self, key: &str, _message: &str, default: bool) -> NexusResult<bool> {
        match self.record(key).map(|a| a.trim().to_ascii_lowercase()) {
            None => Ok(default),
            Some(a) => match a.as_str() {
                "y" | "yes" | "true" => Ok(true),
                "n" | "no" | "false" => Ok(false),
                other => Err(prompt_error(key, format!("'{other}' is not yes or no")).into()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Vec<Choice> {
        vec![Choice::new("mvc", "MVC"), Choice::new("clean", "Clean")]
    }

    #[test]
    fn unscripted_questions_take_defaults() {
        let p = ScriptedPrompter::new();
        assert_eq!(p.select("architecture", "?", &choices(), 1).unwrap(), "clean");
        assert_eq!(p.input("name", "?", "my-app").unwrap(), "my-app");
        assert!(!p.confirm("confirm-non-empty", "?", false).unwrap());
        assert_eq!(p.asked(), ["architecture", "name", "confirm-non-empty"]);
    }

    #[test]
    fn scripted_answers_are_validated() {
        let p = ScriptedPrompter::new()
            .answer("architecture", "CLEAN")
            .answer("type", "microservice")
            .answer("confirm-non-empty", "yes");

        assert_eq!(p.select("architecture", "?", &choices(), 0).unwrap(), "clean");
        assert!(p.select("type", "?", &choices(), 0).is_err());
        assert!(p.confirm("confirm-non-empty", "?", false).unwrap());
    }
}
