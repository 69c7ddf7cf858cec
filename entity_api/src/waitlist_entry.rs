use super::error::{EntityApiErrorKind, Error};
use crate::waitlist_entry::Entity;
use chrono::Utc;
use entity::waitlist_entries::*;
use entity::waitlist_status::WaitlistStatus;
use entity::Id;
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, ActiveValue::Unchanged, DatabaseConnection, QueryOrder,
    TryIntoModel,
};

use log::*;

pub async fn create(db: &DatabaseConnection, entry_model: Model) -> Result<Model, Error> {
    debug!("New Waitlist Entry Model to be inserted: {:?}", entry_model);

    let now = Utc::now();

    let entry_active_model: ActiveModel = ActiveModel {
        tenant_id: Set(entry_model.tenant_id),
        customer_id: Set(entry_model.customer_id),
        service_id: Set(entry_model.service_id),
        requested_date: Set(entry_model.requested_date),
        status: Set(WaitlistStatus::Waiting),
        notes: Set(entry_model.notes),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(entry_active_model.insert(db).await?)
}

pub async fn update_status(
    db: &DatabaseConnection,
    id: Id,
    status: WaitlistStatus,
) -> Result<Model, Error> {
    let entry = find_by_id(db, id).await?;

    let active_model: ActiveModel = ActiveModel {
        id: Unchanged(entry.id),
        tenant_id: Unchanged(entry.tenant_id),
        customer_id: Unchanged(entry.customer_id),
        service_id: Unchanged(entry.service_id),
        requested_date: Unchanged(entry.requested_date),
        status: Set(status),
        notes: Unchanged(entry.notes),
        created_at: Unchanged(entry.created_at),
        updated_at: Set(Utc::now().into()),
    };
    Ok(active_model.update(db).await?.try_into_model()?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let entry_model = find_by_id(db, id).await?;
    entry_model.delete(db).await?;
    Ok(())
}

pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| Error {
        source: None,
        error_kind: EntityApiErrorKind::RecordNotFound,
    })
}

/// Waitlist entries for a tenant, oldest first so the queue order is stable.
/// An optional status narrows the result.
pub async fn find_by_tenant(
    db: &DatabaseConnection,
    tenant_id: Id,
    status: Option<WaitlistStatus>,
) -> Result<Vec<Model>, Error> {
    let mut query = Entity::find()
        .filter(Column::TenantId.eq(tenant_id))
        .order_by_asc(Column::CreatedAt);

    if let Some(status) = status {
        query = query.filter(Column::Status.eq(status));
    }

    Ok(query.all(db).await?)
}
