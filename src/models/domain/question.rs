use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    /// Checks the structural invariants a playable question must hold:
    /// at least two options, no duplicate options (exact, case-sensitive
    /// match), and a correct answer that is one of the options.
    pub fn validate(&self) -> AppResult<()> {
        if self.options.len() < 2 {
            return Err(AppError::ValidationError(format!(
                "Question '{}' must have at least two options",
                self.id
            )));
        }

        for (index, option) in self.options.iter().enumerate() {
            if self.options[..index].contains(option) {
                return Err(AppError::ValidationError(format!(
                    "Question '{}' has duplicate option '{}'",
                    self.id, option
                )));
            }
        }

        if !self.options.contains(&self.correct_answer) {
            return Err(AppError::ValidationError(format!(
                "Question '{}' correct answer is not among its options",
                self.id
            )));
        }

        Ok(())
    }
}
