use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct ResolveParams {
    /// A slug or slug prefix, matched case-insensitively.
    pub(crate) slug: String,
}
