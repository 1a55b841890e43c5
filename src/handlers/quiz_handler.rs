use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    auth::MaybeUser,
    errors::AppError,
    models::dto::request::{AdvanceRequest, SelectAnswerRequest},
    models::dto::response::{
        ActiveSessionView, AdvanceResponse, ResultView, StartQuizResponse, TickResponse,
    },
    services::{AdvanceOutcome, SubmitOutcome},
};

#[post("/api/quiz/sessions")]
async fn start_quiz(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    match state.quiz_session_service.start_session().await? {
        Some(session) => Ok(HttpResponse::Created().json(StartQuizResponse {
            session: ActiveSessionView::from_session(&session),
            notice: None,
        })),
        None => Ok(HttpResponse::Ok().json(StartQuizResponse {
            session: None,
            notice: Some("No questions available".to_string()),
        })),
    }
}

#[get("/api/quiz/sessions/{id}")]
async fn get_quiz_session(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let session = state.quiz_session_service.get_session(&id).await?;

    let view = ActiveSessionView::from_session(&session).ok_or_else(|| {
        AppError::ValidationError("Quiz session is already complete".to_string())
    })?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/quiz/sessions/{id}/answer")]
async fn select_answer(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SelectAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    request.validate()?;

    let session = state
        .quiz_session_service
        .select_answer(&id, &request.answer)
        .await?;

    let view = ActiveSessionView::from_session(&session).ok_or_else(|| {
        AppError::ValidationError("Quiz session is already complete".to_string())
    })?;
    Ok(HttpResponse::Ok().json(view))
}

#[post("/api/quiz/sessions/{id}/tick")]
async fn tick(state: web::Data<AppState>, id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let remaining_seconds = state.quiz_session_service.tick(&id).await?;

    Ok(HttpResponse::Ok().json(TickResponse {
        remaining_seconds,
        expired: remaining_seconds == 0,
    }))
}

/// Grades the named question and moves the session along. On completion the
/// result is submitted for a signed-in player; a failed or suppressed save
/// turns into a notice on the response, never into a lost score.
#[post("/api/quiz/sessions/{id}/advance")]
async fn advance(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<AdvanceRequest>,
    user: MaybeUser,
) -> Result<HttpResponse, AppError> {
    let outcome = state
        .quiz_session_service
        .advance(&id, request.question_index)
        .await?;

    match outcome {
        AdvanceOutcome::Next(session) => {
            let view = ActiveSessionView::from_session(&session).ok_or_else(|| {
                AppError::InternalError("Advanced session has no active question".to_string())
            })?;
            Ok(HttpResponse::Ok().json(AdvanceResponse {
                next_question: Some(view),
                result: None,
            }))
        }
        AdvanceOutcome::Completed(result) => {
            let view = match state
                .quiz_result_service
                .submit(&result, user.user_id())
                .await
            {
                Ok(SubmitOutcome::Saved(_)) => ResultView::saved(&result),
                Ok(SubmitOutcome::NotSignedIn) => {
                    ResultView::unsaved(&result, "Sign in to save your result")
                }
                Err(err) => {
                    log::error!("Failed to save quiz result: {}", err);
                    ResultView::unsaved(&result, "Your result could not be saved")
                }
            };

            Ok(HttpResponse::Ok().json(AdvanceResponse {
                next_question: None,
                result: Some(view),
            }))
        }
    }
}
