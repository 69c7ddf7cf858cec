use crate::controller::ApiResponse;
use crate::extractors::{
    authenticated_user::AuthenticatedUser, compare_api_version::CompareApiVersion,
};
use crate::params::dashboard::ViewParams;
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{employee as EmployeeApi, employees, employees::Model, Id};
use service::config::ApiVersion;

use log::*;

#[utoipa::path(
    get,
    path = "/employees",
    params(
        ApiVersion,
        ViewParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved all Employees for a tenant", body = [employees::Model]),
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
    Query(params): Query<ViewParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Employees for tenant: {}", params.tenant_id);

    let employees =
        EmployeeApi::find_by_tenant(app_state.db_conn_ref(), params.tenant_id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), employees)))
}

/// POST create a new Employee
#[utoipa::path(
    post,
    path = "/employees",
    params(ApiVersion),
    request_body = employees::Model,
    responses(
        (status = 201, description = "Successfully Created a new Employee", body = [employees::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Unprocessable Entity")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn create(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(_user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Json(employee_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a new Employee from: {:?}", employee_model);

    let employee = EmployeeApi::create(app_state.db_conn_ref(), employee_model).await?;

    Ok(Json(ApiResponse::new(StatusCode::CREATED.into(), employee)))
}

/// PUT update an Employee
#[utoipa::path(
    put,
    path = "/employees/{id}",
    params(
        ApiVersion,
        ("id" = Id, Path, description = "Employee ID to Update")
    ),
    request_body = employees::Model,
    responses(
        (status = 200, description = "Successfully updated an Employee", body = [employees::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Employee not found")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn update(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(_user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(employee_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Employee with id: {id}");

    let employee = EmployeeApi::update(app_state.db_conn_ref(), id, employee_model).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), employee)))
}

/// DELETE an Employee
#[utoipa::path(
    delete,
    path = "/employees/{id}",
    params(
        ApiVersion,
        ("id" = Id, Path, description = "Employee ID to Delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted an Employee"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Employee not found")
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
    debug!("DELETE Employee by id: {id}");

    EmployeeApi::delete_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::<()>::no_content(StatusCode::OK.into())))
}
