use crate::Id;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, ToSchema, Serialize, Deserialize)]
#[schema(as = domain::social_posts::Model)] // OpenAPI schema
#[sea_orm(schema_name = "glowdesk_platform", table_name = "social_posts")]
pub struct Model {
    #[serde(skip_deserializing)]
    #[sea_orm(primary_key)]
    pub id: Id,
    pub social_account_id: Id,
    pub caption: Option<String>,
    pub permalink: String,
    #[schema(value_type = String, format = DateTime)] // Applies to OpenAPI schema
    pub posted_at: DateTimeWithTimeZone,
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
        belongs_to = "super::social_accounts::Entity",
        from = "Column::SocialAccountId",
        to = "super::social_accounts::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    SocialAccounts,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::social_accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SocialAccounts.def()
    }
}
