use domain::Id;
use serde::Deserialize;
use utoipa::ToSchema;

/// A tenant reference for the embedding generation trigger. At least one of
/// the two fields must be present.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct GenerateParams {
    #[serde(alias = "tenantSlug")]
    pub(crate) tenant_slug: Option<String>,
    #[serde(alias = "tenantId")]
    pub(crate) tenant_id: Option<Id>,
}
