use super::html_response;
use crate::{
    api::{
        gate::{self, GateRule, PageContext},
        PanelState,
    },
    session::SessionApi,
};
use askama::Template;
use axum::{extract::Extension, http::HeaderMap, response::Response};
use std::sync::Arc;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {}

/// Admin home page, only reachable with a valid session.
pub async fn home<A: SessionApi>(
    Extension(state): Extension<Arc<PanelState<A>>>,
    headers: HeaderMap,
) -> Response {
    let mut ctx = PageContext::new(headers);
    gate::prepare(&state.session, GateRule::SessionRequired, &mut ctx).await;

    ctx.finish(|| html_response(HomeTemplate {}.render()))
}
