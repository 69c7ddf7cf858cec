use crate::controller::ApiResponse;
use crate::extractors::{
    authenticated_user::AuthenticatedUser, compare_api_version::CompareApiVersion,
};
use crate::params::dashboard::{CalendarParams, ViewParams};
use crate::response::dashboard::{CalendarView, PackagesView, WaitlistView};
use crate::{AppState, Error};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::dashboard as DashboardApi;
use service::config::ApiVersion;

use log::*;

/// GET the calendar view model: appointments in a date window plus the
/// tenant's employees and services, fetched concurrently.
#[utoipa::path(
    get,
    path = "/dashboard/calendar",
    params(
        ApiVersion,
        CalendarParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved the calendar view", body = CalendarView),
        (status = 401, description = "Unauthorized"),
        (status = 405, description = "Method not allowed")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn calendar(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(_user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Query(params): Query<CalendarParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET calendar dashboard view: {:?}", params);

    let (appointments, employees, services) = DashboardApi::calendar(
        app_state.db_conn_ref(),
        params.tenant_id,
        params.from_date,
        params.to_date,
    )
    .await?;

    let view = CalendarView {
        appointments,
        employees,
        services,
    };

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), view)))
}

/// GET the waitlist view model.
#[utoipa::path(
    get,
    path = "/dashboard/waitlist",
    params(
        ApiVersion,
        ViewParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved the waitlist view", body = WaitlistView),
        (status = 401, description = "Unauthorized"),
        (status = 405, description = "Method not allowed")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn waitlist(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(_user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET waitlist dashboard view: {:?}", params);

    let (entries, customers, services) =
        DashboardApi::waitlist(app_state.db_conn_ref(), params.tenant_id).await?;

    let view = WaitlistView {
        entries,
        customers,
        services,
    };

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), view)))
}

/// GET the packages view model.
#[utoipa::path(
    get,
    path = "/dashboard/packages",
    params(
        ApiVersion,
        ViewParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved the packages view", body = PackagesView),
        (status = 401, description = "Unauthorized"),
        (status = 405, description = "Method not allowed")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn packages(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(_user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET packages dashboard view: {:?}", params);

    let (packages, services) =
        DashboardApi::packages(app_state.db_conn_ref(), params.tenant_id).await?;

    let view = PackagesView { packages, services };

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), view)))
}
