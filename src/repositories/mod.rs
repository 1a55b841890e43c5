pub mod question_repository;
pub mod quiz_result_repository;

pub use question_repository::{MongoQuestionRepository, QuestionRepository};
pub use quiz_result_repository::{MongoQuizResultRepository, QuizResultRepository};
