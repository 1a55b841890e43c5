use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::{app_state::AppState, errors::AppError};

#[get("/health")]
async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.db.health_check().await?;

    Ok(HttpResponse::Ok().json(json!({
        "status": "ok",
        "database": state.db.db_name(),
    })))
}
