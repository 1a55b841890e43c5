use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use lococktail_quiz::{
    errors::{AppError, AppResult},
    models::domain::{Question, QuizResultRecord},
    repositories::{QuestionRepository, QuizResultRepository},
};

struct InMemoryQuestionRepository {
    questions: Arc<RwLock<Vec<Question>>>,
}

impl InMemoryQuestionRepository {
    fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(RwLock::new(questions)),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn fetch_all(&self) -> AppResult<Vec<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.clone())
    }

    async fn count(&self) -> AppResult<u64> {
        let questions = self.questions.read().await;
        Ok(questions.len() as u64)
    }
}

struct InMemoryQuizResultRepository {
    records: Arc<RwLock<HashMap<String, QuizResultRecord>>>,
}

impl InMemoryQuizResultRepository {
    fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
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

fn make_question(id: &str) -> Question {
    Question {
        id: id.to_string(),
        prompt: format!("Prompt for {}", id),
        options: vec!["Right".to_string(), "Wrong".to_string()],
        correct_answer: "Right".to_string(),
    }
}

fn make_record(
    id: &str,
    user_id: &str,
    score: i16,
    submitted_at: DateTime<Utc>,
) -> QuizResultRecord {
    QuizResultRecord {
        id: id.to_string(),
        user_id: user_id.to_string(),
        score,
        total_questions: 5,
        correct_answers: score,
        time_taken_seconds: 74,
        submitted_at,
        created_at: Some(submitted_at),
    }
}

#[tokio::test]
async fn question_repository_returns_the_full_bank() {
    let repo = InMemoryQuestionRepository::new(vec![
        make_question("q-1"),
        make_question("q-2"),
        make_question("q-3"),
    ]);

    let bank = repo.fetch_all().await.expect("fetch should work");
    assert_eq!(bank.len(), 3);
    assert!(bank.iter().any(|q| q.id == "q-2"));

    let count = repo.count().await.expect("count should work");
    assert_eq!(count, 3);
}

#[tokio::test]
async fn empty_question_repository_is_an_empty_bank_not_an_error() {
    let repo = InMemoryQuestionRepository::new(vec![]);

    let bank = repo.fetch_all().await.expect("fetch should work");
    assert!(bank.is_empty());
    assert_eq!(repo.count().await.expect("count should work"), 0);
}

#[tokio::test]
async fn result_repository_save_find_and_error_paths() {
    let repo = InMemoryQuizResultRepository::new();
    let base = Utc::now();

    let oldest = make_record("r-1", "user-a", 3, base);
    let middle = make_record("r-2", "user-a", 5, base + Duration::minutes(5));
    let newest = make_record("r-3", "user-a", 1, base + Duration::minutes(10));
    let other_user = make_record("r-4", "user-b", 4, base + Duration::minutes(2));

    repo.save(oldest.clone()).await.expect("save oldest");
    repo.save(newest.clone()).await.expect("save newest");
    repo.save(middle.clone()).await.expect("save middle");
    repo.save(other_user.clone()).await.expect("save other user");

    let duplicate = repo.save(oldest.clone()).await;
    assert!(matches!(duplicate, Err(AppError::AlreadyExists(_))));

    let history = repo
        .find_by_user("user-a")
        .await
        .expect("find should work");
    assert_eq!(history.len(), 3);

    // Newest first, regardless of insertion order.
    assert_eq!(history[0].id, "r-3");
    assert_eq!(history[1].id, "r-2");
    assert_eq!(history[2].id, "r-1");

    let unknown = repo
        .find_by_user("user-z")
        .await
        .expect("find should work");
    assert!(unknown.is_empty());
}
