use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
    routing::get,
    Form, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginForm, SignupForm},
        service,
    },
    error::AuthError,
    state::AppState,
};

#[derive(Template)]
#[template(path = "signup.html")]
struct SignupTemplate;

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate;

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    email: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/signup", get(signup_page).post(signup_submit))
        .route("/login", get(login_page).post(login_submit))
}

pub async fn signup_page() -> impl IntoResponse {
    Html(SignupTemplate.render().unwrap_or_default())
}

pub async fn login_page() -> impl IntoResponse {
    Html(LoginTemplate.render().unwrap_or_default())
}

#[instrument(skip(state, form))]
pub async fn signup_submit(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<impl IntoResponse, AuthError> {
    if form.email.is_empty() || form.password.is_empty() {
        warn!("signup with missing fields");
        return Err(AuthError::MissingCredentials);
    }

    let user = service::register(&state.db, &form.email, &form.password).await?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok(Redirect::to("/login"))
}

#[instrument(skip(state, form))]
pub async fn login_submit(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, AuthError> {
    let user = service::authenticate(&state.db, &form.email, &form.password).await?;

    info!(user_id = user.id, "user logged in");
    let dashboard = DashboardTemplate { email: user.email };
    Ok(Html(dashboard.render().unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use sqlx::sqlite::SqlitePoolOptions;
    use tower::util::ServiceExt;

    use crate::{config::AppConfig, pages, state::AppState};

    async fn test_app() -> axum::Router {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory pool");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("migrations");

        let config = Arc::new(AppConfig {
            database_url: "sqlite::memory:".into(),
        });
        let state = AppState::from_parts(pool, config);

        axum::Router::new()
            .merge(pages::routes())
            .merge(super::routes())
            .with_state(state)
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    async fn body_string(res: axum::http::Response<Body>) -> String {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .expect("read body");
        String::from_utf8(bytes.to_vec()).expect("utf8 body")
    }

    #[tokio::test]
    async fn pages_render() {
        let app = test_app().await;
        for path in ["/", "/signup", "/login", "/f_pass", "/r_pass"] {
            let res = app
                .clone()
                .oneshot(Request::get(path).body(Body::empty()).expect("request"))
                .await
                .expect("response");
            assert_eq!(res.status(), StatusCode::OK, "GET {path}");
        }
    }

    #[tokio::test]
    async fn signup_redirects_to_login() {
        let app = test_app().await;

        let res = app
            .clone()
            .oneshot(form_post("/signup", "email=a%40x.com&password=secret1"))
            .await
            .expect("response");
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()[header::LOCATION], "/login");
    }

    #[tokio::test]
    async fn login_renders_dashboard_with_email() {
        let app = test_app().await;
        app.clone()
            .oneshot(form_post("/signup", "email=a%40x.com&password=secret1"))
            .await
            .expect("signup");

        let res = app
            .clone()
            .oneshot(form_post("/login", "email=a%40x.com&password=secret1"))
            .await
            .expect("login");
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_string(res).await;
        assert!(body.contains("a@x.com"));
    }

    #[tokio::test]
    async fn rejections_share_one_shape() {
        let app = test_app().await;
        app.clone()
            .oneshot(form_post("/signup", "email=a%40x.com&password=secret1"))
            .await
            .expect("signup");

        let wrong = app
            .clone()
            .oneshot(form_post("/login", "email=a%40x.com&password=wrong"))
            .await
            .expect("login wrong password");
        let unknown = app
            .clone()
            .oneshot(form_post("/login", "email=nobody%40x.com&password=x"))
            .await
            .expect("login unknown email");

        assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_string(wrong).await, body_string(unknown).await);
    }

    #[tokio::test]
    async fn duplicate_signup_conflicts() {
        let app = test_app().await;
        app.clone()
            .oneshot(form_post("/signup", "email=a%40x.com&password=secret1"))
            .await
            .expect("first signup");

        let res = app
            .clone()
            .oneshot(form_post("/signup", "email=a%40x.com&password=other"))
            .await
            .expect("second signup");
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn signup_requires_both_fields() {
        let app = test_app().await;

        let res = app
            .clone()
            .oneshot(form_post("/signup", "email=a%40x.com&password="))
            .await
            .expect("response");
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = app
            .clone()
            .oneshot(form_post("/signup", "email=&password=secret1"))
            .await
            .expect("response");
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
