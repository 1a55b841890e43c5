use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::domain::{QuizResult, QuizResultRecord},
    repositories::QuizResultRepository,
    services::level_service::{LevelProgress, LevelService},
};

/// Whether a completed result was written, or suppressed because nobody was
/// signed in.
#[derive(Clone, Debug)]
pub enum SubmitOutcome {
    Saved(QuizResultRecord),
    NotSignedIn,
}

pub struct QuizResultService {
    repository: Arc<dyn QuizResultRepository>,
}

impl QuizResultService {
    pub fn new(repository: Arc<dyn QuizResultRepository>) -> Self {
        Self { repository }
    }

    /// Persists a completed result for a signed-in player. Without an
    /// identity nothing is written: anonymous play is allowed but never
    /// recorded. A storage failure propagates to the caller, who reports it
    /// without discarding the already-computed result.
    pub async fn submit(
        &self,
        result: &QuizResult,
        user_id: Option<&str>,
    ) -> AppResult<SubmitOutcome> {
        let Some(user_id) = user_id else {
            return Ok(SubmitOutcome::NotSignedIn);
        };

        let record = QuizResultRecord::from_result(user_id, result);
        let saved = self.repository.save(record).await?;
        log::info!(
            "Recorded quiz result {} for user {} ({}/{})",
            saved.id,
            user_id,
            saved.correct_answers,
            saved.total_questions
        );
        Ok(SubmitOutcome::Saved(saved))
    }

    pub async fn results_for_user(&self, user_id: &str) -> AppResult<Vec<QuizResultRecord>> {
        self.repository.find_by_user(user_id).await
    }

    /// Sums the player's recorded scores and places the total on the tier
    /// ladder.
    pub async fn progress_for_user(&self, user_id: &str) -> AppResult<(i64, LevelProgress)> {
        let results = self.results_for_user(user_id).await?;
        let total_points = LevelService::sum_scores(&results);
        Ok((total_points, LevelService::get_progress(total_points)))
    }
}
