use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The customer's answer to an appointment confirmation request.
/// `Confirmed` and `Declined` are terminal.
#[derive(
    Debug, Clone, Copy, Eq, PartialEq, EnumIter, Deserialize, Default, Serialize, DeriveActiveEnum, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "customer_response")]
pub enum CustomerResponse {
    #[sea_orm(string_value = "pending")]
    #[default]
    Pending,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "declined")]
    Declined,
}

impl CustomerResponse {
    pub fn is_terminal(&self) -> bool {
        matches!(self, CustomerResponse::Confirmed | CustomerResponse::Declined)
    }
}

impl std::fmt::Display for CustomerResponse {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CustomerResponse::Pending => write!(fmt, "pending"),
            CustomerResponse::Confirmed => write!(fmt, "confirmed"),
            CustomerResponse::Declined => write!(fmt, "declined"),
        }
    }
}
