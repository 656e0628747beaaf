//! Authentication route handlers.
//!
//! Login and signup run against the simulated backend: input is validated,
//! the configured latency elapses, and the flow succeeds. Failures redirect
//! back to the form with an error code the page translates into localized
//! copy; the URL never carries more than the code.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::filters;
use crate::locale::messages::AuthMessages;
use crate::routes::{Chrome, locale_session};
use crate::services::auth::AuthBackend;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember: Option<String>,
}

/// Signup form data.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    #[serde(default)]
    pub marketing: Option<String>,
}

/// Query parameters for error display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub chrome: Chrome,
    pub auth: &'static AuthMessages,
    pub error: Option<&'static str>,
}

/// Signup page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/signup.html")]
pub struct SignupTemplate {
    pub chrome: Chrome,
    pub auth: &'static AuthMessages,
    pub error: Option<&'static str>,
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
#[instrument(skip(session))]
pub async fn login_page(session: Session, Query(query): Query<MessageQuery>) -> impl IntoResponse {
    let locale = locale_session(&session).await.locale();
    let auth = &locale.messages.auth;

    LoginTemplate {
        chrome: Chrome::new(locale, "/auth/login"),
        auth,
        error: query.error.as_deref().map(|code| auth.error_message(code)),
    }
}

/// Handle login form submission.
#[instrument(skip(state, form))]
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    match state.auth().login(&form.email, &form.password).await {
        Ok(user) => {
            tracing::info!(email = %user.email, "simulated login succeeded");
            Redirect::to("/").into_response()
        }
        Err(e) => {
            tracing::warn!("Login failed: {e}");
            Redirect::to(&format!("/auth/login?error={}", e.as_code())).into_response()
        }
    }
}

// =============================================================================
// Signup Routes
// =============================================================================

/// Display the signup page.
#[instrument(skip(session))]
pub async fn signup_page(
    session: Session,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    let locale = locale_session(&session).await.locale();
    let auth = &locale.messages.auth;

    SignupTemplate {
        chrome: Chrome::new(locale, "/auth/signup"),
        auth,
        error: query.error.as_deref().map(|code| auth.error_message(code)),
    }
}

/// Handle signup form submission.
#[instrument(skip(state, form))]
pub async fn signup(State(state): State<AppState>, Form(form): Form<SignupForm>) -> Response {
    // Form-level validation the backend doesn't see
    if form.first_name.trim().is_empty() || form.last_name.trim().is_empty() {
        return Redirect::to("/auth/signup?error=missing_name").into_response();
    }
    if form.password != form.password_confirm {
        return Redirect::to("/auth/signup?error=password_mismatch").into_response();
    }

    match state.auth().signup(&form.email, &form.password).await {
        Ok(user) => {
            tracing::info!(email = %user.email, "simulated signup succeeded");
            Redirect::to("/").into_response()
        }
        Err(e) => {
            tracing::warn!("Signup failed: {e}");
            Redirect::to(&format!("/auth/signup?error={}", e.as_code())).into_response()
        }
    }
}
