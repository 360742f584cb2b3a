mod error;
mod functions;
mod types;

pub use error::AuthorizeError;
pub use functions::{authorization_url, callback_message, encode_param, location_header};
pub use types::{
    AuthorizationRequest, CallbackParams, ParamEncoding, ProviderSettings, CLIENT_ID_FIELD,
    REALM_NAME_FIELD,
};
