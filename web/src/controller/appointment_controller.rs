use crate::controller::ApiResponse;
use crate::extractors::{
    authenticated_user::AuthenticatedUser, compare_api_version::CompareApiVersion,
};
use crate::params::appointment::{IndexParams, UpdateParams};
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{appointment as AppointmentApi, appointments, appointments::Model, Id};
use service::config::ApiVersion;

use log::*;

#[utoipa::path(
    get,
    path = "/appointments",
    params(
        ApiVersion,
        IndexParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved all Appointments", body = [appointments::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 405, description = "Method not allowed")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(_user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Appointments");
    debug!("Filter Params: {:?}", params);

    let appointments = AppointmentApi::find_by(app_state.db_conn_ref(), params).await?;

    debug!("Found Appointments: {:?}", appointments);

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), appointments)))
}

#[utoipa::path(
    get,
    path = "/appointments/{id}",
    params(
        ApiVersion,
        ("id" = Id, Path, description = "Appointment ID to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved an Appointment", body = [appointments::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Appointment not found"),
        (status = 405, description = "Method not allowed")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(_user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Appointment by id: {id}");

    let appointment = AppointmentApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), appointment)))
}

/// POST create a new Appointment.
///
/// Generates the appointment's confirmation token and, when no end time is
/// supplied, derives one from the booked service's duration.
#[utoipa::path(
    post,
    path = "/appointments",
    params(ApiVersion),
    request_body = appointments::Model,
    responses(
        (status = 201, description = "Successfully Created a new Appointment", body = [appointments::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Unprocessable Entity"),
        (status = 405, description = "Method not allowed")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn create(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(_user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Json(appointment_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!(
        "POST Create a new Appointment from: {:?}",
        appointment_model
    );

    let appointment = AppointmentApi::create(app_state.db_conn_ref(), appointment_model).await?;

    debug!("New Appointment: {:?}", appointment);

    Ok(Json(ApiResponse::new(
        StatusCode::CREATED.into(),
        appointment,
    )))
}

/// PUT update an Appointment (staff-side reschedule)
#[utoipa::path(
    put,
    path = "/appointments/{id}",
    params(
        ApiVersion,
        ("id" = Id, Path, description = "Appointment ID to Update")
    ),
    request_body = UpdateParams,
    responses(
        (status = 200, description = "Successfully updated an Appointment", body = [appointments::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Appointment not found")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn update(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(_user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(appointment_id): Path<Id>,
    Json(params): Json<UpdateParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Appointment with id: {appointment_id}");

    let appointment =
        AppointmentApi::update(app_state.db_conn_ref(), appointment_id, params).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), appointment)))
}

/// DELETE an Appointment
#[utoipa::path(
    delete,
    path = "/appointments/{id}",
    params(
        ApiVersion,
        ("id" = Id, Path, description = "Appointment ID to Delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted an Appointment"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Appointment not found")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn delete(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(_user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("DELETE Appointment by id: {id}");

    AppointmentApi::delete_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::<()>::no_content(StatusCode::OK.into())))
}
