use crate::appointment_status::AppointmentStatus;
use crate::customer_response::CustomerResponse;
use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, ToSchema, Serialize, Deserialize)]
#[schema(as = domain::appointments::Model)] // OpenAPI schema
#[sea_orm(schema_name = "glowdesk_platform", table_name = "appointments")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    pub tenant_id: Id,
    pub customer_id: Id,
    pub service_id: Id,
    pub employee_id: Option<Id>,
    #[schema(value_type = String, format = DateTime)] // Applies to OpenAPI schema
    pub starts_at: DateTimeWithTimeZone,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = DateTime)] // Applies to OpenAPI schema
    pub ends_at: Option<DateTimeWithTimeZone>,
    #[serde(skip_deserializing)]
    pub status: AppointmentStatus,
    #[serde(skip_deserializing)]
    pub customer_response: CustomerResponse,
    /// Opaque token mailed to the customer; grants confirm/decline access
    /// without a session.
    #[serde(skip_deserializing)]
    #[sea_orm(unique)]
    pub confirmation_token: Id,
    #[serde(skip_deserializing)]
    #[schema(value_type = Option<String>, format = DateTime)] // Applies to OpenAPI schema
    pub confirmed_at: Option<DateTimeWithTimeZone>,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)] // Applies to OpenAPI schema
    pub created_at: DateTimeWithTimeZone,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)] // Applies to OpenAPI schema
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tenants::Entity",
        from = "Column::TenantId",
        to = "super::tenants::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Tenants,
    #[sea_orm(
        belongs_to = "super::customers::Entity",
        from = "Column::CustomerId",
        to = "super::customers::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Customers,
    #[sea_orm(
        belongs_to = "super::services::Entity",
        from = "Column::ServiceId",
        to = "super::services::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Services,
    #[sea_orm(
        belongs_to = "super::employees::Entity",
        from = "Column::EmployeeId",
        to = "super::employees::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Employees,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::tenants::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tenants.def()
    }
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customers.def()
    }
}

impl Related<super::services::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Services.def()
    }
}

impl Related<super::employees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}
