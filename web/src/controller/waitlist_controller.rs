use crate::controller::ApiResponse;
use crate::extractors::{
    authenticated_user::AuthenticatedUser, compare_api_version::CompareApiVersion,
};
use crate::params::waitlist::{IndexParams, UpdateStatusParams};
use crate::{AppState, Error};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use domain::{waitlist as WaitlistApi, waitlist_entries, waitlist_entries::Model, Id};
use service::config::ApiVersion;

use log::*;

#[utoipa::path(
    get,
    path = "/waitlist_entries",
    params(
        ApiVersion,
        IndexParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved the tenant's Waitlist Entries", body = [waitlist_entries::Model]),
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
    debug!("GET Waitlist Entries for tenant: {}", params.tenant_id);

    let entries =
        WaitlistApi::find_by_tenant(app_state.db_conn_ref(), params.tenant_id, params.status)
            .await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), entries)))
}

/// POST create a new Waitlist Entry
#[utoipa::path(
    post,
    path = "/waitlist_entries",
    params(ApiVersion),
    request_body = waitlist_entries::Model,
    responses(
        (status = 201, description = "Successfully Created a new Waitlist Entry", body = [waitlist_entries::Model]),
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
    Json(entry_model): Json<Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Create a new Waitlist Entry from: {:?}", entry_model);

    let entry = WaitlistApi::create(app_state.db_conn_ref(), entry_model).await?;

    Ok(Json(ApiResponse::new(StatusCode::CREATED.into(), entry)))
}

/// PUT move a Waitlist Entry through its lifecycle
#[utoipa::path(
    put,
    path = "/waitlist_entries/{id}/status",
    params(
        ApiVersion,
        ("id" = Id, Path, description = "Waitlist Entry ID to Update")
    ),
    request_body = UpdateStatusParams,
    responses(
        (status = 200, description = "Successfully updated the Waitlist Entry status", body = [waitlist_entries::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Waitlist Entry not found")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn update_status(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(_user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
    Json(params): Json<UpdateStatusParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("PUT Update Waitlist Entry {id} status to {}", params.status);

    let entry = WaitlistApi::update_status(app_state.db_conn_ref(), id, params.status).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), entry)))
}

/// DELETE a Waitlist Entry
#[utoipa::path(
    delete,
    path = "/waitlist_entries/{id}",
    params(
        ApiVersion,
        ("id" = Id, Path, description = "Waitlist Entry ID to Delete")
    ),
    responses(
        (status = 200, description = "Successfully deleted a Waitlist Entry"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Waitlist Entry not found")
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
    debug!("DELETE Waitlist Entry by id: {id}");

    WaitlistApi::delete_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::<()>::no_content(StatusCode::OK.into())))
}
