use axum::{Json, extract::State};

use yearbook_types::models::Friend;

use crate::AppState;
use crate::error::ApiError;

pub async fn list_friends(State(state): State<AppState>) -> Result<Json<Vec<Friend>>, ApiError> {
    let friends = state.with_store(|store| store.list_friends()).await?;
    Ok(Json(friends))
}
