use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuestionRepository, MongoQuizResultRepository},
    services::{QuizResultService, QuizSessionService},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_session_service: Arc<QuizSessionService>,
    pub quiz_result_service: Arc<QuizResultService>,
    pub config: Arc<Config>,
    pub db: Database,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let question_repository = Arc::new(MongoQuestionRepository::new(
            &db,
            &config.questions_collection,
        ));
        question_repository.ensure_indexes().await?;
        let quiz_session_service = Arc::new(QuizSessionService::new(question_repository));

        let result_repository = Arc::new(MongoQuizResultRepository::new(
            &db,
            &config.results_collection,
        ));
        result_repository.ensure_indexes().await?;
        let quiz_result_service = Arc::new(QuizResultService::new(result_repository));

        Ok(Self {
            quiz_session_service,
            quiz_result_service,
            config: Arc::new(config),
            db,
        })
    }
}
