use askama::Template;
use axum::{
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::state::AppState;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate;

#[derive(Template)]
#[template(path = "f_pass.html")]
struct ForgotPasswordTemplate;

#[derive(Template)]
#[template(path = "r_pass.html")]
struct ResetPasswordTemplate;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_page))
        .route("/f_pass", get(forgot_password_page))
        .route("/r_pass", get(reset_password_page))
}

pub async fn index_page() -> impl IntoResponse {
    Html(IndexTemplate.render().unwrap_or_default())
}

// Static render only, no backing logic behind these two.
pub async fn forgot_password_page() -> impl IntoResponse {
    Html(ForgotPasswordTemplate.render().unwrap_or_default())
}

pub async fn reset_password_page() -> impl IntoResponse {
    Html(ResetPasswordTemplate.render().unwrap_or_default())
}
