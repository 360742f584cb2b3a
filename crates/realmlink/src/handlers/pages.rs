use askama::Template;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use realmlink_core::authorize::{CLIENT_ID_FIELD, REALM_NAME_FIELD};

use crate::{handlers::AppError, state::AppState};

/// Template wrapper that converts Askama templates into HTML responses.
struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => AppError::from(err).into_response(),
        }
    }
}

/// Form asking for the realm and client to authorize against.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    title: &'a str,
    action: &'a str,
    realm_field: &'a str,
    client_field: &'a str,
    issuer: &'a str,
}

/// Handler for the index page (GET /).
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    HtmlTemplate(IndexTemplate {
        title: "Keycloak Authorization",
        action: "/",
        realm_field: REALM_NAME_FIELD,
        client_field: CLIENT_ID_FIELD,
        issuer: &state.config.provider.issuer_base_url,
    })
    .into_response()
}
