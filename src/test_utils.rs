pub mod fixtures {
    use crate::models::domain::Question;

    /// Builds a question with the given correct answer and distractors.
    pub fn question(id: &str, prompt: &str, correct: &str, wrong: &[&str]) -> Question {
        let mut options = vec![correct.to_string()];
        options.extend(wrong.iter().map(|w| w.to_string()));

        Question {
            id: id.to_string(),
            prompt: prompt.to_string(),
            options,
            correct_answer: correct.to_string(),
        }
    }

    /// A bank of `size` valid questions with distinct ids and answers.
    pub fn question_bank(size: usize) -> Vec<Question> {
        (0..size)
            .map(|index| Question {
                id: format!("q-{}", index),
                prompt: format!("Which country is cocktail {} from?", index),
                options: vec![
                    format!("Country {}", index),
                    format!("Country {}", index + 100),
                    format!("Country {}", index + 200),
                    format!("Country {}", index + 300),
                ],
                correct_answer: format!("Country {}", index),
            })
            .collect()
    }
}
