use crate::appointments::Model;
use crate::error::{DomainErrorKind, Error, InternalErrorKind};
use crate::{AppointmentStatus, CustomerResponse, Id};
use chrono::{DurationRound, TimeDelta};
use entity_api::{appointment, appointments, mutate, query, service, IntoQueryFilterMap};
use log::*;
use sea_orm::{DatabaseConnection, IntoActiveModel};

pub use entity_api::appointment::{delete_by_id, find_by_id, find_in_window};

pub async fn create(
    db: &DatabaseConnection,
    mut appointment_model: Model,
) -> Result<Model, Error> {
    // Remove seconds because all appointments are scheduled by the minute.
    let starts_at = appointment_model
        .starts_at
        .duration_trunc(TimeDelta::minutes(1))
        .map_err(|err| {
            warn!("Failed to truncate starts_at: {:?}", err);
            Error {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Other(
                    "Invalid start time".to_string(),
                )),
            }
        })?;
    appointment_model.starts_at = starts_at;

    // When the caller does not supply an end time, derive it from the booked
    // service's duration.
    if appointment_model.ends_at.is_none() {
        let booked_service = service::find_by_id(db, appointment_model.service_id).await?;
        appointment_model.ends_at =
            Some(starts_at + TimeDelta::minutes(booked_service.duration_minutes.into()));
    }

    Ok(appointment::create(db, appointment_model).await?)
}

pub async fn find_by(
    db: &DatabaseConnection,
    params: impl IntoQueryFilterMap,
) -> Result<Vec<Model>, Error> {
    let appointments = query::find_by::<appointments::Entity, appointments::Column>(
        db,
        params.into_query_filter_map(),
    )
    .await?;

    Ok(appointments)
}

pub async fn update(
    db: &DatabaseConnection,
    id: Id,
    params: impl mutate::IntoUpdateMap,
) -> Result<Model, Error> {
    let appointment = appointment::find_by_id(db, id).await?;
    let active_model = appointment.into_active_model();
    Ok(
        mutate::update::<appointments::ActiveModel, appointments::Column>(
            db,
            active_model,
            params.into_update_map(),
        )
        .await?,
    )
}

/// Resolves a confirmation token to its appointment, or `None` when the token
/// matches nothing. Callers decide how to surface the miss.
pub async fn find_by_confirmation_token(
    db: &DatabaseConnection,
    token: Id,
) -> Result<Option<Model>, Error> {
    Ok(appointment::find_by_confirmation_token(db, token).await?)
}

/// The customer accepts the appointment via their confirmation link.
pub async fn confirm(db: &DatabaseConnection, token: Id) -> Result<Model, Error> {
    respond(db, token, CustomerResponse::Confirmed).await
}

/// The customer declines the appointment via their confirmation link, which
/// cancels it.
pub async fn decline(db: &DatabaseConnection, token: Id) -> Result<Model, Error> {
    respond(db, token, CustomerResponse::Declined).await
}

async fn respond(
    db: &DatabaseConnection,
    token: Id,
    requested: CustomerResponse,
) -> Result<Model, Error> {
    let appointment = appointment::find_by_confirmation_token(db, token)
        .await?
        .ok_or_else(Error::not_found)?;

    match next_response_state(appointment.customer_response, requested)? {
        Some(status) => {
            info!(
                "Appointment {} transitioning to customer_response={requested}",
                appointment.id
            );
            Ok(appointment::record_response(db, appointment, requested, status).await?)
        }
        // Re-applying the same terminal response is a no-op.
        None => Ok(appointment),
    }
}

/// The confirmation workflow's transition guard.
///
/// Returns the appointment status to persist for a legal transition,
/// `None` when the requested response is already in effect, and a
/// validation error for any attempt to move out of a terminal state.
fn next_response_state(
    current: CustomerResponse,
    requested: CustomerResponse,
) -> Result<Option<AppointmentStatus>, Error> {
    if current == requested {
        return Ok(None);
    }

    if current.is_terminal() {
        return Err(Error::invalid());
    }

    let status = match requested {
        CustomerResponse::Confirmed => AppointmentStatus::Confirmed,
        CustomerResponse::Declined => AppointmentStatus::Cancelled,
        // A customer cannot un-answer; Pending is only ever the initial state.
        CustomerResponse::Pending => return Err(Error::invalid()),
    };

    Ok(Some(status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_appointment_can_be_confirmed() {
        let next =
            next_response_state(CustomerResponse::Pending, CustomerResponse::Confirmed).unwrap();

        assert_eq!(next, Some(AppointmentStatus::Confirmed));
    }

    #[test]
    fn pending_appointment_can_be_declined_which_cancels_it() {
        let next =
            next_response_state(CustomerResponse::Pending, CustomerResponse::Declined).unwrap();

        assert_eq!(next, Some(AppointmentStatus::Cancelled));
    }

    #[test]
    fn reapplying_the_same_response_is_a_noop() {
        let next =
            next_response_state(CustomerResponse::Confirmed, CustomerResponse::Confirmed).unwrap();

        assert_eq!(next, None);
    }

    #[test]
    fn confirmed_appointment_cannot_be_declined() {
        let result =
            next_response_state(CustomerResponse::Confirmed, CustomerResponse::Declined);

        assert!(result.is_err());
    }

    #[test]
    fn declined_appointment_cannot_be_confirmed() {
        let result =
            next_response_state(CustomerResponse::Declined, CustomerResponse::Confirmed);

        assert!(result.is_err());
    }

    #[test]
    fn no_response_can_return_to_pending() {
        assert!(next_response_state(CustomerResponse::Confirmed, CustomerResponse::Pending).is_err());
        assert!(next_response_state(CustomerResponse::Pending, CustomerResponse::Pending)
            .unwrap()
            .is_none());
    }
}
