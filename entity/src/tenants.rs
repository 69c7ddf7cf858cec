use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, ToSchema, Serialize, Deserialize)]
#[schema(as = domain::tenants::Model)] // OpenAPI schema
#[sea_orm(schema_name = "glowdesk_platform", table_name = "tenants")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    pub name: String,
    /// URL-safe identifier unique across all tenants, always lowercase.
    #[serde(skip_deserializing)]
    pub slug: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub logo: Option<String>,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)] // Applies to OpenAPI schema
    pub created_at: DateTimeWithTimeZone,
    #[serde(skip_deserializing)]
    #[schema(value_type = String, format = DateTime)] // Applies to OpenAPI schema
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::appointments::Entity")]
    Appointments,
    #[sea_orm(has_many = "super::customers::Entity")]
    Customers,
    #[sea_orm(has_many = "super::employees::Entity")]
    Employees,
    #[sea_orm(has_many = "super::packages::Entity")]
    Packages,
    #[sea_orm(has_many = "super::services::Entity")]
    Services,
    #[sea_orm(has_many = "super::social_accounts::Entity")]
    SocialAccounts,
    #[sea_orm(has_many = "super::social_reviews::Entity")]
    SocialReviews,
    #[sea_orm(has_many = "super::waitlist_entries::Entity")]
    WaitlistEntries,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::appointments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appointments.def()
    }
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customers.def()
    }
}

impl Related<super::employees::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}

impl Related<super::packages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Packages.def()
    }
}

impl Related<super::services::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Services.def()
    }
}

impl Related<super::social_accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SocialAccounts.def()
    }
}

impl Related<super::social_reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SocialReviews.def()
    }
}

impl Related<super::waitlist_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WaitlistEntries.def()
    }
}
