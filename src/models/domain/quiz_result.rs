use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of one completed quiz play-through. Immutable once produced;
/// still shown to the player even when saving it fails.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizResult {
    pub score: i16,
    pub total_questions: i16,
    pub correct_answers: i16,
    pub time_taken_seconds: i64,
}

/// A quiz result attributed to a signed-in player, as persisted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizResultRecord {
    pub id: String,
    pub user_id: String,
    pub score: i16,
    pub total_questions: i16,
    pub correct_answers: i16,
    pub time_taken_seconds: i64,
    pub submitted_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl QuizResultRecord {
    pub fn from_result(user_id: &str, result: &QuizResult) -> Self {
        QuizResultRecord {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            score: result.score,
            total_questions: result.total_questions,
            correct_answers: result.correct_answers,
            time_taken_seconds: result.time_taken_seconds,
            submitted_at: Utc::now(),
            created_at: Some(Utc::now()),
        }
    }
}
