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
use domain::{package as PackageApi, packages, packages::Model, Id};
use service::config::ApiVersion;

use log::*;

#[utoipa::path(
    get,
    path = "/packages",
    params(
        ApiVersion,
        ViewParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved all Packages for a tenant", body = [packages::Model]),
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
    debug!("GET all Packages for tenant: {}", params.tenant_id);

    let packages = PackageApi::find_by_tenant(app_state.db_conn_ref(), params.tenant_id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), packages)))
}

/// POST create a new Package
#[utoipa::path(
    post,
    path = "/packages",
    params(ApiVersion),
    request_body = packages::Model,
    responses(
        (status = 201, description = "Successfully Created a new Package", body = [packages::Model]),
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
    Json(package_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a new Package from: {:?}", package_model);

    let package = PackageApi::create(app_state.db_conn_ref(), package_model).await?;

    Ok(Json(ApiResponse::new(StatusCode::CREATED.into(), package)))
}

/// PUT update a Package
#[utoipa::path(
    put,
    path = "/packages/{id}",
    params(
        ApiVersion,
        ("id" = Id, Path, description = "Package ID to Update")
    ),
    request_body = packages::Model,
    responses(
        (status = 200, description = "Successfully updated a Package", body = [packages::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Package not found")
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
    Json(package_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Package with id: {id}");

    let package = PackageApi::update(app_state.db_conn_ref(), id, package_model).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), package)))
}

/// DELETE a Package
#[utoipa::path(
    delete,
    path = "/packages/{id}",
    params(
        ApiVersion,
        ("id" = Id, Path, description = "Package ID to Delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted a Package"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Package not found")
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
    debug!("DELETE Package by id: {id}");

    PackageApi::delete_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::<()>::no_content(StatusCode::OK.into())))
}
