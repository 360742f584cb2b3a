use std::env;

use realmlink_core::authorize::{ParamEncoding, ProviderSettings};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a valid URL: {source}")]
    InvalidUrl {
        key: &'static str,
        #[source]
        source: url::ParseError,
    },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Authorization endpoint settings shared by every request.
    pub provider: ProviderSettings,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `IDP_BASE_URL` - Identity provider base URL (default: "http://localhost:8080")
    /// - `OIDC_REDIRECT_URI` - Callback sent to the provider (default: "http://127.0.0.1:5151/callback")
    /// - `OIDC_SCOPE` - Requested scope (default: "openid")
    /// - `ENCODE_AUTH_PARAMS` - Percent-encode realm and client id when "true" or "1" (default: off)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ProviderSettings::default();

        let issuer_base_url = lookup("IDP_BASE_URL").unwrap_or(defaults.issuer_base_url);
        validate_url("IDP_BASE_URL", &issuer_base_url)?;

        let redirect_uri = lookup("OIDC_REDIRECT_URI").unwrap_or(defaults.redirect_uri);
        validate_url("OIDC_REDIRECT_URI", &redirect_uri)?;

        let scope = lookup("OIDC_SCOPE")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.scope);

        let param_encoding = match lookup("ENCODE_AUTH_PARAMS").as_deref() {
            Some("true") | Some("1") => ParamEncoding::Percent,
            _ => ParamEncoding::Verbatim,
        };

        Ok(Self {
            provider: ProviderSettings {
                issuer_base_url,
                redirect_uri,
                scope,
                response_type: defaults.response_type,
                param_encoding,
            },
        })
    }
}

// Keeps the configured string; `Url` would normalize it.
fn validate_url(key: &'static str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|source| ConfigError::InvalidUrl { key, source })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.provider.issuer_base_url, "http://localhost:8080");
        assert_eq!(
            config.provider.redirect_uri,
            "http://127.0.0.1:5151/callback"
        );
        assert_eq!(config.provider.scope, "openid");
        assert_eq!(config.provider.response_type, "code");
        assert_eq!(config.provider.param_encoding, ParamEncoding::Verbatim);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("IDP_BASE_URL", "https://sso.example.com"),
            ("OIDC_REDIRECT_URI", "http://localhost:5000/callback"),
            ("OIDC_SCOPE", "openid email"),
            ("ENCODE_AUTH_PARAMS", "1"),
        ]))
        .unwrap();

        assert_eq!(config.provider.issuer_base_url, "https://sso.example.com");
        assert_eq!(
            config.provider.redirect_uri,
            "http://localhost:5000/callback"
        );
        assert_eq!(config.provider.scope, "openid email");
        assert_eq!(config.provider.param_encoding, ParamEncoding::Percent);
    }

    #[test]
    fn test_blank_scope_falls_back_to_default() {
        let config = Config::from_lookup(lookup_from(&[("OIDC_SCOPE", "  ")])).unwrap();
        assert_eq!(config.provider.scope, "openid");
    }

    #[test]
    fn test_invalid_issuer_url_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("IDP_BASE_URL", "not a url")])).unwrap_err();
        assert!(err.to_string().starts_with("IDP_BASE_URL must be a valid URL"));
    }

    #[test]
    fn test_unknown_encoding_flag_keeps_verbatim() {
        let config =
            Config::from_lookup(lookup_from(&[("ENCODE_AUTH_PARAMS", "yes please")])).unwrap();
        assert_eq!(config.provider.param_encoding, ParamEncoding::Verbatim);
    }
}
