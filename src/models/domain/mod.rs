pub mod level;
pub mod question;
pub mod quiz_result;
pub mod session;

pub use level::{Level, LEVELS};
pub use question::Question;
pub use quiz_result::{QuizResult, QuizResultRecord};
pub use session::{Advance, QuizSession, QUESTION_TIME_LIMIT_SECONDS, SESSION_QUESTION_COUNT};
