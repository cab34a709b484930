use axum::Router;

use crate::state::AppState;

mod dto;
pub mod handlers;
pub mod password;
pub mod repo;
mod repo_types;
pub mod service;

pub use repo_types::User;

pub fn router() -> Router<AppState> {
    handlers::routes()
}
