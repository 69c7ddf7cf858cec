use crate::controller::ApiResponse;
use crate::extractors::{
    authenticated_user::AuthenticatedUser, compare_api_version::CompareApiVersion,
};
use crate::params::tenant::ResolveParams;
use crate::{AppState, Error};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{tenant as TenantApi, tenants, tenants::Model, Id};
use service::config::ApiVersion;

use log::*;

#[utoipa::path(
    get,
    path = "/tenants",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved all Tenants", body = [tenants::Model]),
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
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Tenants");

    let tenants = TenantApi::find_all(app_state.db_conn_ref()).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), tenants)))
}

#[utoipa::path(
    get,
    path = "/tenants/{id}",
    params(
        ApiVersion,
        ("id" = Id, Path, description = "Tenant ID to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved a Tenant", body = [tenants::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tenant not found"),
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
    debug!("GET Tenant by id: {id}");

    let tenant = TenantApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), tenant)))
}

/// GET resolve a slug fragment to a single tenant.
///
/// An exact slug match wins; otherwise the first tenant (by slug order) whose
/// slug starts with the fragment is returned.
#[utoipa::path(
    get,
    path = "/tenants/resolve/{slug}",
    params(
        ApiVersion,
        ("slug" = String, Path, description = "Slug or slug prefix to resolve")
    ),
    responses(
        (status = 200, description = "Successfully resolved the slug to a Tenant", body = [tenants::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No tenant matches the slug"),
        (status = 405, description = "Method not allowed")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn resolve(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(_user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(params): Path<ResolveParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET resolve Tenant by slug fragment: {:?}", params.slug);

    let tenant = TenantApi::resolve(app_state.db_conn_ref(), &params.slug)
        .await?
        .ok_or_else(domain::error::Error::not_found)?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), tenant)))
}

/// POST create a new Tenant
#[utoipa::path(
    post,
    path = "/tenants",
    params(ApiVersion),
    request_body = tenants::Model,
    responses(
        (status = 201, description = "Successfully Created a new Tenant", body = [tenants::Model]),
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
    Json(tenant_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a new Tenant from: {:?}", tenant_model);

    let tenant = TenantApi::create(app_state.db_conn_ref(), tenant_model).await?;

    debug!("New Tenant: {:?}", tenant);

    Ok(Json(ApiResponse::new(StatusCode::CREATED.into(), tenant)))
}

/// PUT update a Tenant
#[utoipa::path(
    put,
    path = "/tenants/{id}",
    params(
        ApiVersion,
        ("id" = Id, Path, description = "Tenant ID to Update")
    ),
    request_body = tenants::Model,
    responses(
        (status = 200, description = "Successfully updated a Tenant", body = [tenants::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tenant not found")
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
    Json(tenant_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Tenant with id: {id}");

    let tenant = TenantApi::update(app_state.db_conn_ref(), id, tenant_model).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), tenant)))
}

/// DELETE a Tenant
#[utoipa::path(
    delete,
    path = "/tenants/{id}",
    params(
        ApiVersion,
        ("id" = Id, Path, description = "Tenant ID to Delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted a Tenant"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tenant not found")
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
    debug!("DELETE Tenant by id: {id}");

    TenantApi::delete_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::<()>::no_content(StatusCode::OK.into())))
}
