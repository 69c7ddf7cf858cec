use super::error::{EntityApiErrorKind, Error};
use crate::social_account::Entity;
use chrono::Utc;
use entity::social_accounts::*;
use entity::Id;
use sea_orm::{entity::prelude::*, ActiveValue::Set, DatabaseConnection, QueryOrder};

pub async fn create(db: &DatabaseConnection, account_model: Model) -> Result<Model, Error> {
    let now = Utc::now();

    let account_active_model: ActiveModel = ActiveModel {
        tenant_id: Set(account_model.tenant_id),
        platform: Set(account_model.platform),
        handle: Set(account_model.handle),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(account_active_model.insert(db).await?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let account_model = find_by_id(db, id).await?;
    account_model.delete(db).await?;
    Ok(())
}

pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| Error {
        source: None,
        error_kind: EntityApiErrorKind::RecordNotFound,
    })
}

pub async fn find_by_tenant(db: &DatabaseConnection, tenant_id: Id) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::TenantId.eq(tenant_id))
        .order_by_asc(Column::Platform)
        .all(db)
        .await?)
}
