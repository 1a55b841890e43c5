use serde::Deserialize;
use validator::Validate;

/// Body of the answer-selection call. The UI only offers the question's own
/// options, but the engine tolerates any string, so the only constraint here
/// is a sane length.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SelectAnswerRequest {
    #[validate(length(min = 1, max = 200))]
    pub answer: String,
}

/// Body of the advance call. `question_index` names the question the client
/// believes is active; a stale value is rejected instead of double-grading.
#[derive(Debug, Clone, Deserialize)]
pub struct AdvanceRequest {
    pub question_index: usize,
}
