use std::borrow::Cow;

use super::{AuthorizationRequest, AuthorizeError, ParamEncoding, ProviderSettings};

/// Apply the configured encoding to a single user-supplied value.
pub fn encode_param(value: &str, encoding: ParamEncoding) -> Cow<'_, str> {
    match encoding {
        ParamEncoding::Verbatim => Cow::Borrowed(value),
        ParamEncoding::Percent => urlencoding::encode(value),
    }
}

/// Build the OpenID Connect authorization endpoint URL for a realm.
///
/// The layout is `{issuer}/realms/{realm}/protocol/openid-connect/auth`
/// followed by `client_id`, `response_type`, `redirect_uri` and `scope`.
/// `redirect_uri` and `scope` come from configuration and are written as-is.
pub fn authorization_url(settings: &ProviderSettings, request: &AuthorizationRequest) -> String {
    let issuer = settings.issuer_base_url.trim_end_matches('/');
    let realm = encode_param(&request.realm_name, settings.param_encoding);
    let client_id = encode_param(&request.client_id, settings.param_encoding);

    format!(
        "{issuer}/realms/{realm}/protocol/openid-connect/auth?client_id={client_id}&response_type={}&redirect_uri={}&scope={}",
        settings.response_type, settings.redirect_uri, settings.scope,
    )
}

/// Check that a URL can be sent as a `Location` header value.
///
/// Visible ASCII, spaces and tabs pass; control characters such as CR/LF
/// and DEL are rejected.
pub fn location_header(url: &str) -> Result<&str, AuthorizeError> {
    let valid = url
        .bytes()
        .all(|b| b == b'\t' || (b' '..=b'~').contains(&b) || b >= 0x80);

    if valid {
        Ok(url)
    } else {
        Err(AuthorizeError::InvalidLocation(url.escape_debug().to_string()))
    }
}

/// Render the callback response body.
///
/// A missing code renders as `None`; an empty code renders as an empty value.
pub fn callback_message(code: Option<&str>) -> String {
    format!("Authorization Code: {}", code.unwrap_or("None"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(realm: &str, client: &str) -> AuthorizationRequest {
        AuthorizationRequest {
            realm_name: realm.to_string(),
            client_id: client.to_string(),
        }
    }

    #[test]
    fn authorization_url_matches_default_layout() {
        let url = authorization_url(
            &ProviderSettings::default(),
            &request("myrealm", "myclient"),
        );
        assert_eq!(
            url,
            "http://localhost:8080/realms/myrealm/protocol/openid-connect/auth?client_id=myclient&response_type=code&redirect_uri=http://127.0.0.1:5151/callback&scope=openid"
        );
    }

    #[test]
    fn authorization_url_keeps_values_verbatim_by_default() {
        let url = authorization_url(
            &ProviderSettings::default(),
            &request("a/b", "x&admin=1"),
        );
        assert!(url.starts_with("http://localhost:8080/realms/a/b/protocol/openid-connect/auth?"));
        assert!(url.contains("?client_id=x&admin=1&response_type=code"));
    }

    #[test]
    fn authorization_url_percent_encodes_when_configured() {
        let settings = ProviderSettings {
            param_encoding: ParamEncoding::Percent,
            ..ProviderSettings::default()
        };
        let url = authorization_url(&settings, &request("my realm", "a b&c"));
        assert!(url.contains("/realms/my%20realm/protocol/"));
        assert!(url.contains("?client_id=a%20b%26c&response_type=code"));
    }

    #[test]
    fn authorization_url_strips_trailing_slash_from_issuer() {
        let settings = ProviderSettings {
            issuer_base_url: "https://sso.example.com/".to_string(),
            ..ProviderSettings::default()
        };
        let url = authorization_url(&settings, &request("r", "c"));
        assert!(url.starts_with("https://sso.example.com/realms/r/"));
    }

    #[test]
    fn authorization_url_uses_configured_scope_and_redirect() {
        let settings = ProviderSettings {
            redirect_uri: "http://localhost:5000/callback".to_string(),
            scope: "openid profile".to_string(),
            ..ProviderSettings::default()
        };
        let url = authorization_url(&settings, &request("r", "c"));
        assert!(url.ends_with("&redirect_uri=http://localhost:5000/callback&scope=openid profile"));
    }

    #[test]
    fn location_header_accepts_plain_urls() {
        let url = "http://localhost:8080/realms/r/protocol/openid-connect/auth?client_id=c";
        assert_eq!(location_header(url), Ok(url));
    }

    #[test]
    fn location_header_rejects_line_breaks() {
        let result = location_header("http://localhost/\r\nSet-Cookie: x=1");
        assert!(matches!(result, Err(AuthorizeError::InvalidLocation(_))));
    }

    #[test]
    fn callback_message_renders_code() {
        assert_eq!(callback_message(Some("ABC123")), "Authorization Code: ABC123");
    }

    #[test]
    fn callback_message_renders_missing_code_as_none() {
        assert_eq!(callback_message(None), "Authorization Code: None");
    }

    #[test]
    fn callback_message_renders_empty_code_as_empty() {
        assert_eq!(callback_message(Some("")), "Authorization Code: ");
    }
}
