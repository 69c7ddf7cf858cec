use super::error::{EntityApiErrorKind, Error};
use crate::customer::Entity;
use chrono::Utc;
use entity::customers::*;
use entity::Id;
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, ActiveValue::Unchanged, DatabaseConnection, QueryOrder,
    TryIntoModel,
};

use log::*;

pub async fn create(db: &DatabaseConnection, customer_model: Model) -> Result<Model, Error> {
    debug!("New Customer Model to be inserted: {:?}", customer_model);

    let now = Utc::now();

    let customer_active_model: ActiveModel = ActiveModel {
        tenant_id: Set(customer_model.tenant_id),
        first_name: Set(customer_model.first_name),
        last_name: Set(customer_model.last_name),
        email: Set(customer_model.email.map(|email| email.to_lowercase())),
        phone: Set(customer_model.phone),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(customer_active_model.insert(db).await?)
}

pub async fn update(db: &DatabaseConnection, id: Id, model: Model) -> Result<Model, Error> {
    let customer = find_by_id(db, id).await?;

    let active_model: ActiveModel = ActiveModel {
        id: Unchanged(customer.id),
        tenant_id: Unchanged(customer.tenant_id),
        first_name: Set(model.first_name),
        last_name: Set(model.last_name),
        email: Set(model.email.map(|email| email.to_lowercase())),
        phone: Set(model.phone),
        created_at: Unchanged(customer.created_at),
        updated_at: Set(Utc::now().into()),
    };
    Ok(active_model.update(db).await?.try_into_model()?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let customer_model = find_by_id(db, id).await?;
    customer_model.delete(db).await?;
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
        .order_by_asc(Column::LastName)
        .all(db)
        .await?)
}
