//! Page and health handlers.

pub mod health;
pub mod home;
pub mod login;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

/// Turn a template result into a response; render failures become a bare 500.
pub(crate) fn html_response(rendered: askama::Result<String>) -> Response {
    match rendered {
        Ok(body) => Html(body).into_response(),
        Err(err) => {
            error!("Failed to render page: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
