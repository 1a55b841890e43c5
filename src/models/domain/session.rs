use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::question::Question;
use crate::models::domain::quiz_result::QuizResult;

/// How many questions a play-through draws from the bank, at most.
pub const SESSION_QUESTION_COUNT: usize = 5;

/// Countdown budget per question, in seconds.
pub const QUESTION_TIME_LIMIT_SECONDS: i64 = 30;

/// One quiz play-through, from question selection to scored completion.
///
/// The session holds no timer of its own. The caller drives the countdown
/// through `tick` on a one-second signal and calls `advance` when the player
/// confirms an answer or the countdown reaches zero. A timed-out question is
/// graded with whatever answer is currently selected, including none.
#[derive(Clone, Debug)]
pub struct QuizSession {
    id: String,
    questions: Vec<Question>,
    current_index: usize,
    selected_answer: Option<String>,
    correct_count: i16,
    remaining_seconds: i64,
    started_at: DateTime<Utc>,
    completed: bool,
}

/// What an `advance` call produced: either the session moved on to the next
/// question, or it finished and yielded the final result.
#[derive(Clone, Debug)]
pub enum Advance {
    NextQuestion,
    Completed(QuizResult),
}

impl QuizSession {
    /// Starts a session by drawing up to [`SESSION_QUESTION_COUNT`] distinct
    /// questions from the bank via a uniform shuffle.
    ///
    /// An empty bank yields a session that is already complete: there is
    /// nothing to play and no countdown starts. The random source and the
    /// start instant are supplied by the caller so selection and timing stay
    /// deterministic under test.
    pub fn start<R: Rng + ?Sized>(
        bank: &[Question],
        rng: &mut R,
        started_at: DateTime<Utc>,
    ) -> Self {
        let mut questions: Vec<Question> = bank.to_vec();
        questions.shuffle(rng);
        questions.truncate(SESSION_QUESTION_COUNT);

        let completed = questions.is_empty();

        QuizSession {
            id: Uuid::new_v4().to_string(),
            questions,
            current_index: 0,
            selected_answer: None,
            correct_count: 0,
            remaining_seconds: QUESTION_TIME_LIMIT_SECONDS,
            started_at,
            completed,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question currently being played, or `None` once complete.
    pub fn current_question(&self) -> Option<&Question> {
        if self.completed {
            return None;
        }
        self.questions.get(self.current_index)
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    pub fn correct_count(&self) -> i16 {
        self.correct_count
    }

    pub fn remaining_seconds(&self) -> i64 {
        self.remaining_seconds
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Records the player's current pick for the active question. The last
    /// call before advancing wins. Arbitrary strings are tolerated; anything
    /// that does not match the correct answer exactly is graded wrong.
    pub fn select_answer(&mut self, answer: impl Into<String>) -> AppResult<()> {
        if self.completed {
            return Err(AppError::ValidationError(
                "Quiz session is already complete".to_string(),
            ));
        }

        self.selected_answer = Some(answer.into());
        Ok(())
    }

    /// Consumes one second of the active question's countdown, saturating at
    /// zero, and returns the remaining budget. When this reaches zero the
    /// caller is expected to `advance`.
    pub fn tick(&mut self) -> AppResult<i64> {
        if self.completed {
            return Err(AppError::ValidationError(
                "Quiz session is already complete".to_string(),
            ));
        }

        self.remaining_seconds = (self.remaining_seconds - 1).max(0);
        Ok(self.remaining_seconds)
    }

    /// Grades the active question and moves on.
    ///
    /// `question_index` must match the live question. A stale index means a
    /// second advance raced an earlier one for the same question (timeout
    /// versus click); the loser is rejected so no question is ever scored
    /// twice. Grading is exact string equality and a missing answer never
    /// scores.
    pub fn advance(&mut self, question_index: usize, now: DateTime<Utc>) -> AppResult<Advance> {
        if self.completed {
            return Err(AppError::ValidationError(
                "Quiz session is already complete".to_string(),
            ));
        }

        if question_index != self.current_index {
            return Err(AppError::ValidationError(format!(
                "Question {} is no longer active",
                question_index
            )));
        }

        let correct = self
            .questions
            .get(self.current_index)
            .map(|question| self.selected_answer.as_deref() == Some(question.correct_answer.as_str()))
            .unwrap_or(false);

        if correct {
            self.correct_count += 1;
        }

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.selected_answer = None;
            self.remaining_seconds = QUESTION_TIME_LIMIT_SECONDS;
            Ok(Advance::NextQuestion)
        } else {
            self.completed = true;
            Ok(Advance::Completed(QuizResult {
                score: self.correct_count,
                total_questions: self.questions.len() as i16,
                correct_answers: self.correct_count,
                time_taken_seconds: (now - self.started_at).num_seconds().max(0),
            }))
        }
    }
}
