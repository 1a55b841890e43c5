pub mod health_handler;
pub mod level_handler;
pub mod quiz_handler;

pub use health_handler::health_check;
pub use level_handler::{get_levels, get_my_progress, get_my_results};
pub use quiz_handler::{advance, get_quiz_session, select_answer, start_quiz, tick};
