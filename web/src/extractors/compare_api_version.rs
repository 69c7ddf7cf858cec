use crate::extractors::RejectionType;
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use service::config::ApiVersion;

/// Extracts the `x-version` request header and checks it against the list of
/// API versions this server exposes. A request without the header is assumed
/// to want the current default version; a request for a version we do not
/// serve is rejected outright.
pub(crate) struct CompareApiVersion(pub ApiVersion);

#[async_trait]
impl<S> FromRequestParts<S> for CompareApiVersion
where
    S: Send + Sync,
{
    type Rejection = RejectionType;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let version_str = match parts.headers.get(ApiVersion::field_name()) {
            Some(value) => value
                .to_str()
                .map_err(|_| {
                    (
                        StatusCode::BAD_REQUEST,
                        format!("Invalid {} header", ApiVersion::field_name()),
                    )
                })?
                .to_string(),
            None => ApiVersion::default_version().to_string(),
        };

        if !ApiVersion::versions().contains(&version_str.as_str()) {
            return Err((
                StatusCode::BAD_REQUEST,
                format!("Unsupported API version: {version_str}"),
            ));
        }

        let version = version_str.parse().map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                format!("Unparseable API version: {version_str}"),
            )
        })?;

        Ok(CompareApiVersion(ApiVersion { version }))
    }
}
