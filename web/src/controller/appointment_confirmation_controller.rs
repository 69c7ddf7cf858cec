use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domain::{appointment as AppointmentApi, appointments, Id};
use service::config::ApiVersion;

use log::*;

/// The customer-facing confirmation endpoints.
///
/// These are deliberately unauthenticated: the opaque confirmation token the
/// customer received by email is the only credential required.

/// GET look up the appointment behind a confirmation token.
#[utoipa::path(
    get,
    path = "/appointments/confirmation/{token}",
    params(
        ApiVersion,
        ("token" = Id, Path, description = "Confirmation token from the customer's link")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the Appointment", body = [appointments::Model]),
        (status = 404, description = "No appointment matches the token"),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn show(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(token): Path<Id>,
) -> Result<Response, Error> {
    debug!("GET Appointment by confirmation token");

    match AppointmentApi::find_by_confirmation_token(app_state.db_conn_ref(), token).await? {
        Some(appointment) => {
            Ok(Json(ApiResponse::new(StatusCode::OK.into(), appointment)).into_response())
        }
        // An unknown token is an expected outcome, not a failure: the caller
        // gets an explicit null payload and a short message.
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "status_code": 404,
                "data": null,
                "message": "not found"
            })),
        )
            .into_response()),
    }
}

/// PUT the customer confirms the appointment.
#[utoipa::path(
    put,
    path = "/appointments/confirmation/{token}/confirm",
    params(
        ApiVersion,
        ("token" = Id, Path, description = "Confirmation token from the customer's link")
    ),
    responses(
        (status = 200, description = "Successfully confirmed the Appointment", body = [appointments::Model]),
        (status = 404, description = "No appointment matches the token"),
        (status = 422, description = "The appointment was already declined")
    )
)]
pub async fn confirm(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(token): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT confirm Appointment by confirmation token");

    let appointment = AppointmentApi::confirm(app_state.db_conn_ref(), token).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), appointment)))
}

/// PUT the customer declines the appointment, cancelling it.
#[utoipa::path(
    put,
    path = "/appointments/confirmation/{token}/decline",
    params(
        ApiVersion,
        ("token" = Id, Path, description = "Confirmation token from the customer's link")
    ),
    responses(
        (status = 200, description = "Successfully declined the Appointment", body = [appointments::Model]),
        (status = 404, description = "No appointment matches the token"),
        (status = 422, description = "The appointment was already confirmed")
    )
)]
pub async fn decline(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(token): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT decline Appointment by confirmation token");

    let appointment = AppointmentApi::decline(app_state.db_conn_ref(), token).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), appointment)))
}
