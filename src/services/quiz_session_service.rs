use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{Advance, Question, QuizResult, QuizSession},
    repositories::QuestionRepository,
};

/// What advancing a stored session produced: the session moved to its next
/// question, or it finished and left the store.
#[derive(Clone, Debug)]
pub enum AdvanceOutcome {
    Next(QuizSession),
    Completed(QuizResult),
}

/// Owns the live play-throughs. Each session is an independent value keyed
/// by its id; all mutation funnels through one write lock, so a timeout and
/// a click advancing the same question serialize and the session's own index
/// guard rejects the loser.
pub struct QuizSessionService {
    question_repository: Arc<dyn QuestionRepository>,
    sessions: RwLock<HashMap<String, QuizSession>>,
}

impl QuizSessionService {
    pub fn new(question_repository: Arc<dyn QuestionRepository>) -> Self {
        Self {
            question_repository,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Fetches the bank and starts a new play-through. Returns `None` when
    /// no playable questions are available, including when the bank fetch
    /// fails; the player gets an empty state, never an error page.
    pub async fn start_session(&self) -> AppResult<Option<QuizSession>> {
        let bank = match self.question_repository.fetch_all().await {
            Ok(bank) => bank,
            Err(err) => {
                log::warn!("Question bank fetch failed: {}", err);
                return Ok(None);
            }
        };

        let playable = Self::playable_bank(bank);
        if playable.is_empty() {
            log::info!("No playable questions in the bank, not starting a session");
            return Ok(None);
        }

        let session = QuizSession::start(&playable, &mut rand::thread_rng(), Utc::now());

        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id().to_string(), session.clone());
        Ok(Some(session))
    }

    /// Drops questions that violate the bank invariants instead of letting
    /// one bad row break the whole quiz.
    fn playable_bank(bank: Vec<Question>) -> Vec<Question> {
        bank.into_iter()
            .filter(|question| match question.validate() {
                Ok(()) => true,
                Err(err) => {
                    log::warn!("Skipping unplayable question: {}", err);
                    false
                }
            })
            .collect()
    }

    pub async fn get_session(&self, session_id: &str) -> AppResult<QuizSession> {
        let sessions = self.sessions.read().await;
        sessions
            .get(session_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Quiz session '{}' not found", session_id)))
    }

    pub async fn select_answer(&self, session_id: &str, answer: &str) -> AppResult<QuizSession> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| AppError::NotFound(format!("Quiz session '{}' not found", session_id)))?;

        session.select_answer(answer)?;
        Ok(session.clone())
    }

    /// One second of countdown for the active question. Returns the
    /// remaining budget; at zero the client is expected to advance.
    pub async fn tick(&self, session_id: &str) -> AppResult<i64> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| AppError::NotFound(format!("Quiz session '{}' not found", session_id)))?;

        session.tick()
    }

    /// Grades the named question and either returns the next question or
    /// completes the session. Completed sessions leave the store, so a late
    /// duplicate advance surfaces as not-found rather than a second result.
    pub async fn advance(
        &self,
        session_id: &str,
        question_index: usize,
    ) -> AppResult<AdvanceOutcome> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| AppError::NotFound(format!("Quiz session '{}' not found", session_id)))?;

        match session.advance(question_index, Utc::now())? {
            Advance::NextQuestion => Ok(AdvanceOutcome::Next(session.clone())),
            Advance::Completed(result) => {
                sessions.remove(session_id);
                Ok(AdvanceOutcome::Completed(result))
            }
        }
    }

    pub async fn active_session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
