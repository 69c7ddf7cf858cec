use domain::{Id, WaitlistStatus};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct IndexParams {
    pub(crate) tenant_id: Id,
    pub(crate) status: Option<WaitlistStatus>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct UpdateStatusParams {
    pub(crate) status: WaitlistStatus,
}
