pub mod request;
pub mod response;

pub use request::{AdvanceRequest, SelectAnswerRequest};
pub use response::{
    ActiveSessionView, AdvanceResponse, ProgressResponse, QuestionView, ResultHistoryEntry,
    ResultView, StartQuizResponse, TickResponse,
};
