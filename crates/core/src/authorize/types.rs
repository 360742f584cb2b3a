use super::AuthorizeError;

/// Form field carrying the realm name.
pub const REALM_NAME_FIELD: &str = "realm-name";

/// Form field carrying the client identifier.
pub const CLIENT_ID_FIELD: &str = "client-id";

/// Return the value of the first pair named `key`.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

/// Parameters submitted through the authorization form.
///
/// Both fields are required by the form's `required` attribute only; empty
/// strings are accepted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRequest {
    pub realm_name: String,
    pub client_id: String,
}

impl AuthorizationRequest {
    /// Build from decoded form pairs. Repeated fields resolve to their first
    /// value; an absent field is an error.
    pub fn from_pairs(pairs: &[(String, String)]) -> Result<Self, AuthorizeError> {
        let realm_name = first_value(pairs, REALM_NAME_FIELD)
            .ok_or(AuthorizeError::MissingField(REALM_NAME_FIELD))?;
        let client_id = first_value(pairs, CLIENT_ID_FIELD)
            .ok_or(AuthorizeError::MissingField(CLIENT_ID_FIELD))?;

        Ok(Self {
            realm_name,
            client_id,
        })
    }
}

/// How user-supplied values are written into the authorization URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParamEncoding {
    /// Values are interpolated unmodified.
    #[default]
    Verbatim,
    /// Values are percent-encoded.
    Percent,
}

/// Where and how to send the browser for authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    /// Base URL of the identity provider, e.g. `http://localhost:8080`.
    pub issuer_base_url: String,
    /// Where the provider sends the browser back with the code.
    pub redirect_uri: String,
    pub scope: String,
    pub response_type: String,
    pub param_encoding: ParamEncoding,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            issuer_base_url: "http://localhost:8080".to_string(),
            redirect_uri: "http://127.0.0.1:5151/callback".to_string(),
            scope: "openid".to_string(),
            response_type: "code".to_string(),
            param_encoding: ParamEncoding::Verbatim,
        }
    }
}

/// Query parameters the provider appends to the callback redirect.
///
/// Only `code` ends up in the response; the rest are kept for logging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub session_state: Option<String>,
    pub iss: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl CallbackParams {
    /// Build from decoded query pairs, keeping the first value of each key.
    /// Never fails: unknown keys are ignored, absent keys stay `None`.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            code: first_value(pairs, "code"),
            state: first_value(pairs, "state"),
            session_state: first_value(pairs, "session_state"),
            iss: first_value(pairs, "iss"),
            error: first_value(pairs, "error"),
            error_description: first_value(pairs, "error_description"),
        }
    }
}
