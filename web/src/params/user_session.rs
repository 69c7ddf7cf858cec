use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct LogoutParams {
    /// Where to send the browser after the session is destroyed.
    pub(crate) return_to: Option<String>,
}
