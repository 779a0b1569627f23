//! `GET /login` renders the form behind the guest-only gate, `POST /login`
//! runs the form controller.

use super::html_response;
use crate::{
    api::{
        gate::{self, GateRule, PageContext},
        PanelState,
    },
    login::{view::render_login, LoginFormController, LoginFormState, Navigation},
    session::{forward_cookie, remove_admin_user_cookie, SessionApi},
};
use axum::{
    extract::{Extension, Form},
    http::{
        header::{LOCATION, SET_COOKIE},
        HeaderMap, StatusCode,
    },
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

/// Fields posted by the login form. Missing fields read as empty.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

pub async fn login_page<A: SessionApi>(
    Extension(state): Extension<Arc<PanelState<A>>>,
    headers: HeaderMap,
) -> Response {
    let mut ctx = PageContext::new(headers);
    gate::prepare(&state.session, GateRule::GuestOnly, &mut ctx).await;

    ctx.finish(|| {
        let mut response = html_response(render_login(&LoginFormState::new()));

        // Drop whatever session the browser still holds before the next attempt.
        match remove_admin_user_cookie(&state.cookie) {
            Ok(cookie) => {
                response.headers_mut().append(SET_COOKIE, cookie);
            }
            Err(err) => error!("Failed to build session teardown cookie: {err}"),
        }

        response
    })
}

pub async fn submit_login<A: SessionApi>(
    Extension(state): Extension<Arc<PanelState<A>>>,
    headers: HeaderMap,
    Form(input): Form<LoginForm>,
) -> Response {
    let mut form = LoginFormState::new();
    form.update_email_input_value(input.email);
    form.update_password_input_value(input.password);

    let controller = LoginFormController::new(&state.session, forward_cookie(&headers));

    match controller.submit(&mut form).await {
        Some(navigation) => {
            info!("Admin login succeeded");
            navigate(navigation)
        }
        None => html_response(render_login(&form)),
    }
}

/// Full-page navigation carrying the cookies the backend issued.
fn navigate(navigation: Navigation) -> Response {
    let mut response = (StatusCode::SEE_OTHER, [(LOCATION, navigation.location)]).into_response();
    for cookie in navigation.set_cookies {
        response.headers_mut().append(SET_COOKIE, cookie);
    }
    response
}
