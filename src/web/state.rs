use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sqlx::{Pool, Postgres};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: Pool<Postgres>,
    pub session_key: Key,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.session_key.clone()
    }
}
