use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::level::Level;
use crate::models::domain::question::Question;
use crate::models::domain::quiz_result::{QuizResult, QuizResultRecord};
use crate::models::domain::session::QuizSession;

/// A question as the player sees it. The correct answer never leaves the
/// server before the question has been graded.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        QuestionView {
            id: question.id.clone(),
            prompt: question.prompt.clone(),
            options: question.options.clone(),
        }
    }
}

/// The live state of a play-through: which question is up, how far along the
/// session is and how much countdown is left.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveSessionView {
    pub session_id: String,
    pub question_number: usize,
    pub total_questions: usize,
    pub remaining_seconds: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_answer: Option<String>,
    pub question: QuestionView,
}

impl ActiveSessionView {
    /// Builds the player-facing view, or `None` once the session is complete.
    pub fn from_session(session: &QuizSession) -> Option<Self> {
        let question = session.current_question()?;

        Some(ActiveSessionView {
            session_id: session.id().to_string(),
            question_number: session.current_index() + 1,
            total_questions: session.question_count(),
            remaining_seconds: session.remaining_seconds(),
            selected_answer: session.selected_answer().map(str::to_string),
            question: QuestionView::from(question),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct StartQuizResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<ActiveSessionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TickResponse {
    pub remaining_seconds: i64,
    pub expired: bool,
}

/// A completed result as returned to the player, with the outcome of the
/// save attempt. A failed or suppressed save never hides the score.
#[derive(Debug, Clone, Serialize)]
pub struct ResultView {
    pub score: i16,
    pub total_questions: i16,
    pub correct_answers: i16,
    pub time_taken_seconds: i64,
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl ResultView {
    pub fn saved(result: &QuizResult) -> Self {
        Self::build(result, true, None)
    }

    pub fn unsaved(result: &QuizResult, notice: &str) -> Self {
        Self::build(result, false, Some(notice.to_string()))
    }

    fn build(result: &QuizResult, saved: bool, notice: Option<String>) -> Self {
        ResultView {
            score: result.score,
            total_questions: result.total_questions,
            correct_answers: result.correct_answers,
            time_taken_seconds: result.time_taken_seconds,
            saved,
            notice,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdvanceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_question: Option<ActiveSessionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultView>,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub total_points: i64,
    pub level: Level,
    pub progress_percent: f64,
    pub points_to_next: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_level: Option<Level>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultHistoryEntry {
    pub score: i16,
    pub total_questions: i16,
    pub correct_answers: i16,
    pub time_taken_seconds: i64,
    pub submitted_at: DateTime<Utc>,
}

impl From<QuizResultRecord> for ResultHistoryEntry {
    fn from(record: QuizResultRecord) -> Self {
        ResultHistoryEntry {
            score: record.score,
            total_questions: record.total_questions,
            correct_answers: record.correct_answers,
            time_taken_seconds: record.time_taken_seconds,
            submitted_at: record.submitted_at,
        }
    }
}
