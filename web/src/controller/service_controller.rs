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
use domain::{clinic_service as ClinicServiceApi, services, services::Model, Id};
use service::config::ApiVersion;

use log::*;

#[utoipa::path(
    get,
    path = "/services",
    params(
        ApiVersion,
        ViewParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved all Services for a tenant", body = [services::Model]),
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
    debug!("GET all Services for tenant: {}", params.tenant_id);

    let services =
        ClinicServiceApi::find_by_tenant(app_state.db_conn_ref(), params.tenant_id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), services)))
}

#[utoipa::path(
    get,
    path = "/services/{id}",
    params(
        ApiVersion,
        ("id" = Id, Path, description = "Service ID to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved a Service", body = [services::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Service not found")
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
    debug!("GET Service by id: {id}");

    let service = ClinicServiceApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), service)))
}

/// POST create a new Service
#[utoipa::path(
    post,
    path = "/services",
    params(ApiVersion),
    request_body = services::Model,
    responses(
        (status = 201, description = "Successfully Created a new Service", body = [services::Model]),
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
    Json(service_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a new Service from: {:?}", service_model);

    let service = ClinicServiceApi::create(app_state.db_conn_ref(), service_model).await?;

    Ok(Json(ApiResponse::new(StatusCode::CREATED.into(), service)))
}

/// PUT update a Service
#[utoipa::path(
    put,
    path = "/services/{id}",
    params(
        ApiVersion,
        ("id" = Id, Path, description = "Service ID to Update")
    ),
    request_body = services::Model,
    responses(
        (status = 200, description = "Successfully updated a Service", body = [services::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Service not found")
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
    Json(service_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Service with id: {id}");

    let service = ClinicServiceApi::update(app_state.db_conn_ref(), id, service_model).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), service)))
}

/// DELETE a Service
#[utoipa::path(
    delete,
    path = "/services/{id}",
    params(
        ApiVersion,
        ("id" = Id, Path, description = "Service ID to Delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted a Service"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Service not found")
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
    debug!("DELETE Service by id: {id}");

    ClinicServiceApi::delete_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::<()>::no_content(StatusCode::OK.into())))
}
