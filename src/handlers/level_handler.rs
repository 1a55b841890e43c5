use actix_web::{get, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::domain::LEVELS,
    models::dto::response::{ProgressResponse, ResultHistoryEntry},
};

#[get("/api/levels")]
async fn get_levels() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(&LEVELS))
}

#[get("/api/profile/progress")]
async fn get_my_progress(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let (total_points, progress) = state
        .quiz_result_service
        .progress_for_user(&auth.0.sub)
        .await?;

    Ok(HttpResponse::Ok().json(ProgressResponse {
        total_points,
        level: progress.level.clone(),
        progress_percent: progress.progress_percent,
        points_to_next: progress.points_to_next,
        next_level: progress.next_level.cloned(),
    }))
}

#[get("/api/profile/results")]
async fn get_my_results(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let results = state
        .quiz_result_service
        .results_for_user(&auth.0.sub)
        .await?;

    let entries: Vec<ResultHistoryEntry> = results.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(entries))
}
