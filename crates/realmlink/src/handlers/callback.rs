//! Redirect target for the identity provider.

use axum::extract::Query;
use realmlink_core::authorize::{callback_message, CallbackParams};

/// Handler for GET /callback
///
/// Echoes the authorization code as plain text. A missing code is not an
/// error, and repeated keys resolve to their first value.
pub async fn callback(Query(pairs): Query<Vec<(String, String)>>) -> String {
    let params = CallbackParams::from_pairs(&pairs);

    if let Some(error) = &params.error {
        tracing::warn!(
            error = %error,
            description = params.error_description.as_deref().unwrap_or_default(),
            "Identity provider returned an error"
        );
    }

    tracing::info!(
        code_present = params.code.is_some(),
        state_present = params.state.is_some(),
        session_state = params.session_state.as_deref().unwrap_or_default(),
        iss = params.iss.as_deref().unwrap_or_default(),
        "Received authorization callback"
    );

    callback_message(params.code.as_deref())
}
