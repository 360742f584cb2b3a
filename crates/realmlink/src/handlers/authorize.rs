//! Form submission handler that starts the authorization code flow.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form,
};
use realmlink_core::authorize::{authorization_url, location_header, AuthorizationRequest};

use crate::{handlers::AppError, state::AppState};

/// Handler for POST /
///
/// Responds `302 Found` pointing at the realm's authorization endpoint.
/// A missing form field is a `400`; a repeated one uses its first value.
pub async fn authorize(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let request = AuthorizationRequest::from_pairs(&pairs)?;
    let url = authorization_url(&state.config.provider, &request);
    let location = location_header(&url)?;

    tracing::info!(
        realm = %request.realm_name,
        client_id = %request.client_id,
        "Redirecting to authorization endpoint"
    );

    Ok((StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response())
}
