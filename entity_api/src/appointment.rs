use super::error::{EntityApiErrorKind, Error};
use crate::appointment::Entity;
use chrono::Utc;
use entity::appointment_status::AppointmentStatus;
use entity::appointments::*;
use entity::customer_response::CustomerResponse;
use entity::Id;
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, ActiveValue::Unchanged, DatabaseConnection, QueryOrder,
    TryIntoModel,
};

use log::*;

pub async fn create(db: &DatabaseConnection, appointment_model: Model) -> Result<Model, Error> {
    debug!(
        "New Appointment Model to be inserted: {:?}",
        appointment_model
    );

    let now = Utc::now();

    let appointment_active_model: ActiveModel = ActiveModel {
        tenant_id: Set(appointment_model.tenant_id),
        customer_id: Set(appointment_model.customer_id),
        service_id: Set(appointment_model.service_id),
        employee_id: Set(appointment_model.employee_id),
        starts_at: Set(appointment_model.starts_at),
        ends_at: Set(appointment_model.ends_at),
        status: Set(AppointmentStatus::Pending),
        customer_response: Set(CustomerResponse::Pending),
        // The token is the customer's only credential for the public
        // confirm/decline endpoints, so it must be unguessable.
        confirmation_token: Set(Id::new_v4()),
        confirmed_at: Set(None),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(appointment_active_model.insert(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| Error {
        source: None,
        error_kind: EntityApiErrorKind::RecordNotFound,
    })
}

/// Resolves a confirmation token to at most one appointment. An unknown token
/// is a `None`, not an error, so that callers can surface a "not found"
/// outcome distinctly from database failures.
pub async fn find_by_confirmation_token(
    db: &DatabaseConnection,
    token: Id,
) -> Result<Option<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::ConfirmationToken.eq(token))
        .one(db)
        .await?)
}

/// Appointments for a tenant inside a half-open `[from, to)` window, ordered
/// by start time.
pub async fn find_in_window(
    db: &DatabaseConnection,
    tenant_id: Id,
    from: DateTimeWithTimeZone,
    to: DateTimeWithTimeZone,
) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::TenantId.eq(tenant_id))
        .filter(Column::StartsAt.gte(from))
        .filter(Column::StartsAt.lt(to))
        .order_by_asc(Column::StartsAt)
        .all(db)
        .await?)
}

/// Persists a customer's response together with the derived appointment
/// status and stamps `confirmed_at`. Callers are responsible for the
/// transition guard; this function only writes.
pub async fn record_response(
    db: &DatabaseConnection,
    appointment: Model,
    response: CustomerResponse,
    status: AppointmentStatus,
) -> Result<Model, Error> {
    let now = Utc::now();

    let active_model: ActiveModel = ActiveModel {
        id: Unchanged(appointment.id),
        tenant_id: Unchanged(appointment.tenant_id),
        customer_id: Unchanged(appointment.customer_id),
        service_id: Unchanged(appointment.service_id),
        employee_id: Unchanged(appointment.employee_id),
        starts_at: Unchanged(appointment.starts_at),
        ends_at: Unchanged(appointment.ends_at),
        status: Set(status),
        customer_response: Set(response),
        confirmation_token: Unchanged(appointment.confirmation_token),
        confirmed_at: Set(Some(now.into())),
        created_at: Unchanged(appointment.created_at),
        updated_at: Set(now.into()),
    };

    Ok(active_model.update(db).await?.try_into_model()?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let appointment_model = find_by_id(db, id).await?;
    appointment_model.delete(db).await?;
    Ok(())
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn pending_appointment() -> Model {
        let now = Utc::now();
        Model {
            id: Id::new_v4(),
            tenant_id: Id::new_v4(),
            customer_id: Id::new_v4(),
            service_id: Id::new_v4(),
            employee_id: None,
            starts_at: now.into(),
            ends_at: None,
            status: AppointmentStatus::Pending,
            customer_response: CustomerResponse::Pending,
            confirmation_token: Id::new_v4(),
            confirmed_at: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn find_by_confirmation_token_returns_matching_record() -> Result<(), Error> {
        let appointment = pending_appointment();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[appointment.clone()]])
            .into_connection();

        let found = find_by_confirmation_token(&db, appointment.confirmation_token).await?;

        assert_eq!(found, Some(appointment));

        Ok(())
    }

    #[tokio::test]
    async fn find_by_confirmation_token_returns_none_for_unknown_token() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let found = find_by_confirmation_token(&db, Id::new_v4()).await?;

        assert_eq!(found, None);

        Ok(())
    }
}
