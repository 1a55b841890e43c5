pub mod level_service;
pub mod quiz_result_service;
pub mod quiz_session_service;

pub use level_service::{LevelProgress, LevelService};
pub use quiz_result_service::{QuizResultService, SubmitOutcome};
pub use quiz_session_service::{AdvanceOutcome, QuizSessionService};
