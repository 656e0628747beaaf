//! Locale switching route handler.

use axum::{
    Form,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::locale::LocaleId;
use crate::routes::ACTIVE_LOCALE_KEY;

/// Locale selector form data.
#[derive(Debug, Deserialize)]
pub struct LocaleForm {
    pub locale: String,
    pub redirect_to: Option<String>,
}

/// Switch the active locale for the browsing session.
///
/// The switch is a single session write; every subsequent render sees the
/// new locale's full bundle. Already rendered pages are unaffected.
///
/// # Errors
///
/// Returns a `BadRequest` for a locale id outside the supported set; the
/// valid ids are statically known, so an unknown one is a caller defect.
#[instrument(skip(session))]
pub async fn set_locale(session: Session, Form(form): Form<LocaleForm>) -> Result<Response> {
    let id: LocaleId = form.locale.parse()?;

    session
        .insert(ACTIVE_LOCALE_KEY, id)
        .await
        .map_err(|e| AppError::Internal(format!("failed to store locale: {e}")))?;

    // Only same-site paths; anything else goes home.
    let target = form
        .redirect_to
        .filter(|path| path.starts_with('/') && !path.starts_with("//"))
        .unwrap_or_else(|| "/".to_string());

    Ok(Redirect::to(&target).into_response())
}
