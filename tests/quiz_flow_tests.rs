use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use lococktail_quiz::{
    errors::{AppError, AppResult},
    models::domain::{Question, QuizResult, QuizResultRecord},
    repositories::{QuestionRepository, QuizResultRepository},
    services::{
        AdvanceOutcome, LevelService, QuizResultService, QuizSessionService, SubmitOutcome,
    },
};

struct InMemoryQuestionRepository {
    questions: Vec<Question>,
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn fetch_all(&self) -> AppResult<Vec<Question>> {
        Ok(self.questions.clone())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.questions.len() as u64)
    }
}

#[derive(Default)]
struct InMemoryQuizResultRepository {
    records: RwLock<HashMap<String, QuizResultRecord>>,
}

#[async_trait]
impl QuizResultRepository for InMemoryQuizResultRepository {
    async fn save(&self, record: QuizResultRecord) -> AppResult<QuizResultRecord> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(AppError::AlreadyExists(format!(
                "Quiz result with id '{}' already exists",
                record.id
            )));
        }
        records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<QuizResultRecord>> {
        let records = self.records.read().await;
        let mut items: Vec<_> = records
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(items)
    }
}

fn make_bank(size: usize) -> Vec<Question> {
    (0..size)
        .map(|index| Question {
            id: format!("q-{}", index),
            prompt: format!("Which country is cocktail {} from?", index),
            options: vec![
                format!("Country {}", index),
                "Atlantis".to_string(),
                "Nowhere".to_string(),
            ],
            correct_answer: format!("Country {}", index),
        })
        .collect()
}

fn session_service(bank: Vec<Question>) -> QuizSessionService {
    QuizSessionService::new(Arc::new(InMemoryQuestionRepository { questions: bank }))
}

/// Plays every question of a live session, answering correctly for the
/// first `correct` questions and leaving the rest unanswered.
async fn play_through(
    service: &QuizSessionService,
    session_id: &str,
    correct: usize,
) -> QuizResult {
    let mut round = 0;
    loop {
        let session = service
            .get_session(session_id)
            .await
            .expect("session should exist");
        let index = session.current_index();

        if round < correct {
            let answer = session
                .current_question()
                .expect("question should be active")
                .correct_answer
                .clone();
            service
                .select_answer(session_id, &answer)
                .await
                .expect("answer should record");
        }

        match service
            .advance(session_id, index)
            .await
            .expect("advance should work")
        {
            AdvanceOutcome::Next(_) => round += 1,
            AdvanceOutcome::Completed(result) => return result,
        }
    }
}

#[tokio::test]
async fn signed_in_play_through_records_the_result() {
    let sessions = session_service(make_bank(9));
    let results_repo = Arc::new(InMemoryQuizResultRepository::default());
    let results = QuizResultService::new(results_repo.clone());

    let session = sessions
        .start_session()
        .await
        .expect("start should work")
        .expect("bank has questions");
    assert_eq!(session.question_count(), 5);

    let result = play_through(&sessions, session.id(), 3).await;
    assert_eq!(result.score, 3);
    assert_eq!(result.correct_answers, 3);
    assert_eq!(result.total_questions, 5);

    let outcome = results
        .submit(&result, Some("user-1"))
        .await
        .expect("submit should work");
    assert!(matches!(outcome, SubmitOutcome::Saved(_)));

    let history = results
        .results_for_user("user-1")
        .await
        .expect("history should load");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].score, 3);
}

#[tokio::test]
async fn anonymous_play_through_is_never_recorded() {
    let sessions = session_service(make_bank(5));
    let results_repo = Arc::new(InMemoryQuizResultRepository::default());
    let results = QuizResultService::new(results_repo.clone());

    let session = sessions
        .start_session()
        .await
        .expect("start should work")
        .expect("bank has questions");

    let result = play_through(&sessions, session.id(), 5).await;
    assert_eq!(result.score, 5);

    let outcome = results
        .submit(&result, None)
        .await
        .expect("submit should work");
    assert!(matches!(outcome, SubmitOutcome::NotSignedIn));

    // The result stays valid for display even though nothing was written.
    let history = results
        .results_for_user("user-1")
        .await
        .expect("history should load");
    assert!(history.is_empty());
}

#[tokio::test]
async fn timed_out_questions_grade_as_wrong() {
    let sessions = session_service(make_bank(2));

    let session = sessions
        .start_session()
        .await
        .expect("start should work")
        .expect("bank has questions");
    let id = session.id().to_string();

    // Run the first question's countdown all the way out, then advance with
    // nothing selected, as the frontend timer does.
    let mut remaining = i64::MAX;
    while remaining > 0 {
        remaining = sessions.tick(&id).await.expect("tick should work");
    }
    sessions.advance(&id, 0).await.expect("advance should work");

    let result = play_through(&sessions, &id, 1).await;
    assert_eq!(result.total_questions, 2);
    assert_eq!(result.score, 1);
}

#[tokio::test]
async fn empty_bank_never_starts_a_session() {
    let sessions = session_service(vec![]);

    let started = sessions.start_session().await.expect("start should work");
    assert!(started.is_none());
    assert_eq!(sessions.active_session_count().await, 0);
}

#[tokio::test]
async fn accumulated_scores_climb_the_ladder() {
    let results_repo = Arc::new(InMemoryQuizResultRepository::default());
    let results = QuizResultService::new(results_repo.clone());

    // Twelve perfect games: 60 points, into the second tier.
    for _ in 0..12 {
        let result = QuizResult {
            score: 5,
            total_questions: 5,
            correct_answers: 5,
            time_taken_seconds: 45,
        };
        results
            .submit(&result, Some("user-1"))
            .await
            .expect("submit should work");
    }

    let (total_points, progress) = results
        .progress_for_user("user-1")
        .await
        .expect("progress should load");

    assert_eq!(total_points, 60);
    assert_eq!(progress.level.name, "Aprendiz");
    assert_eq!(progress.points_to_next, 90);

    let history = results
        .results_for_user("user-1")
        .await
        .expect("history should load");
    assert_eq!(LevelService::sum_scores(&history), 60);
}
