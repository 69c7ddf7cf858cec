use super::error::{EntityApiErrorKind, Error};
use crate::employee::Entity;
use chrono::Utc;
use entity::employees::*;
use entity::Id;
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, ActiveValue::Unchanged, DatabaseConnection, QueryOrder,
    TryIntoModel,
};

pub async fn create(db: &DatabaseConnection, employee_model: Model) -> Result<Model, Error> {
    let now = Utc::now();

    let employee_active_model: ActiveModel = ActiveModel {
        tenant_id: Set(employee_model.tenant_id),
        first_name: Set(employee_model.first_name),
        last_name: Set(employee_model.last_name),
        role_title: Set(employee_model.role_title),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(employee_active_model.insert(db).await?)
}

pub async fn update(db: &DatabaseConnection, id: Id, model: Model) -> Result<Model, Error> {
    let employee = find_by_id(db, id).await?;

    let active_model: ActiveModel = ActiveModel {
        id: Unchanged(employee.id),
        tenant_id: Unchanged(employee.tenant_id),
        first_name: Set(model.first_name),
        last_name: Set(model.last_name),
        role_title: Set(model.role_title),
        created_at: Unchanged(employee.created_at),
        updated_at: Set(Utc::now().into()),
    };
    Ok(active_model.update(db).await?.try_into_model()?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let employee_model = find_by_id(db, id).await?;
    employee_model.delete(db).await?;
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
