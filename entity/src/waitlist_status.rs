use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Eq, PartialEq, EnumIter, Deserialize, Default, Serialize, DeriveActiveEnum, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "waitlist_status")]
pub enum WaitlistStatus {
    #[sea_orm(string_value = "waiting")]
    #[default]
    Waiting,
    #[sea_orm(string_value = "notified")]
    Notified,
    #[sea_orm(string_value = "fulfilled")]
    Fulfilled,
    #[sea_orm(string_value = "removed")]
    Removed,
}

impl std::fmt::Display for WaitlistStatus {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WaitlistStatus::Waiting => write!(fmt, "waiting"),
            WaitlistStatus::Notified => write!(fmt, "notified"),
            WaitlistStatus::Fulfilled => write!(fmt, "fulfilled"),
            WaitlistStatus::Removed => write!(fmt, "removed"),
        }
    }
}
