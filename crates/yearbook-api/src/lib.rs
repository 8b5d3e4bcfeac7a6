pub mod auth;
pub mod comments;
pub mod error;
pub mod extract;
pub mod friends;

use std::sync::Arc;

use axum::{
    Json, Router,
    routing::{get, post},
};

use yearbook_store::Store;
use yearbook_types::api::Banner;

use crate::error::ApiError;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Store,
}

impl AppStateInner {
    pub fn new(store: Store) -> AppState {
        Arc::new(Self { store })
    }

    /// Run a store call off the async runtime. Every store call does
    /// blocking file I/O on a whole collection.
    pub(crate) async fn with_store<F, T>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&Store) -> yearbook_store::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.store.clone();
        Ok(tokio::task::spawn_blocking(move || f(&store)).await??)
    }
}

/// All routes live under `/api`; `/api` and `/api/` both answer the banner.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/friends", get(friends::list_friends))
        .route("/api/login", post(auth::login))
        .route("/api/comments", post(comments::create_comment))
        .route("/api/comments/{friend_id}", get(comments::list_comments))
        .with_state(state)
}

pub async fn root() -> Json<Banner> {
    Json(Banner::default())
}
