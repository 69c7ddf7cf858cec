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
use domain::{customer as CustomerApi, customers, customers::Model, Id};
use service::config::ApiVersion;

use log::*;

#[utoipa::path(
    get,
    path = "/customers",
    params(
        ApiVersion,
        ViewParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved all Customers for a tenant", body = [customers::Model]),
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
    debug!("GET all Customers for tenant: {}", params.tenant_id);

    let customers =
        CustomerApi::find_by_tenant(app_state.db_conn_ref(), params.tenant_id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), customers)))
}

#[utoipa::path(
    get,
    path = "/customers/{id}",
    params(
        ApiVersion,
        ("id" = Id, Path, description = "Customer ID to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved a Customer", body = [customers::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Customer not found")
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
    debug!("GET Customer by id: {id}");

    let customer = CustomerApi::find_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), customer)))
}

/// POST create a new Customer
#[utoipa::path(
    post,
    path = "/customers",
    params(ApiVersion),
    request_body = customers::Model,
    responses(
        (status = 201, description = "Successfully Created a new Customer", body = [customers::Model]),
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
    Json(customer_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a new Customer from: {:?}", customer_model);

    let customer = CustomerApi::create(app_state.db_conn_ref(), customer_model).await?;

    Ok(Json(ApiResponse::new(StatusCode::CREATED.into(), customer)))
}

/// PUT update a Customer
#[utoipa::path(
    put,
    path = "/customers/{id}",
    params(
        ApiVersion,
        ("id" = Id, Path, description = "Customer ID to Update")
    ),
    request_body = customers::Model,
    responses(
        (status = 200, description = "Successfully updated a Customer", body = [customers::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Customer not found")
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
    Json(customer_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Customer with id: {id}");

    let customer = CustomerApi::update(app_state.db_conn_ref(), id, customer_model).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), customer)))
}

/// DELETE a Customer
#[utoipa::path(
    delete,
    path = "/customers/{id}",
    params(
        ApiVersion,
        ("id" = Id, Path, description = "Customer ID to Delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted a Customer"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Customer not found")
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
    debug!("DELETE Customer by id: {id}");

    CustomerApi::delete_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::<()>::no_content(StatusCode::OK.into())))
}
