use axum::{Json, extract::State};
use tracing::info;

use yearbook_types::api::{LoginRequest, LoginResponse};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::JsonBody;

/// Exchange an access code for its username. No token or session is
/// issued; the client keeps the username itself.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let username = state
        .with_store(move |store| store.authenticate(&req.code))
        .await?;

    Ok(Json(match username {
        Some(username) => {
            info!("Login accepted for {}", username);
            LoginResponse::accepted(username)
        }
        None => {
            info!("Login rejected: unknown code");
            LoginResponse::rejected()
        }
    }))
}
