use axum::{
    Json,
    extract::{Path, State},
    extract::rejection::PathRejection,
};

use yearbook_types::api::NewComment;
use yearbook_types::models::Comment;

use crate::AppState;
use crate::error::ApiError;
use crate::extract::JsonBody;

pub async fn list_comments(
    State(state): State<AppState>,
    friend_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Comment>>, ApiError> {
    let Path(friend_id) = friend_id?;
    let comments = state
        .with_store(move |store| store.comments_for_friend(friend_id))
        .await?;
    Ok(Json(comments))
}

/// Append a comment and echo it back with its server-assigned `date`.
pub async fn create_comment(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<NewComment>,
) -> Result<Json<Comment>, ApiError> {
    let comment = state.with_store(move |store| store.append_comment(req)).await?;
    Ok(Json(comment))
}
