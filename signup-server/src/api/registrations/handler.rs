//! Registration API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::RegistrationRepository;
use crate::utils::AppResult;
use shared::models::{Registration, RegistrationCreate, RegistrationCreated};

/// POST /api/registrations - 创建报名记录
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RegistrationCreate>,
) -> AppResult<Json<RegistrationCreated>> {
    payload.validate()?;

    let repo = RegistrationRepository::new(state.get_db());
    let registration = repo.create(payload).await?;

    tracing::info!(id = %registration.id, email = %registration.email, "Registration created");

    Ok(Json(RegistrationCreated {
        id: registration.id,
    }))
}

/// GET /api/registrations - 获取所有报名记录（最新在前）
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Registration>>> {
    let repo = RegistrationRepository::new(state.get_db());
    let registrations = repo.find_all().await?;
    Ok(Json(registrations))
}
