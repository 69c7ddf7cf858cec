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
use domain::{social, social_accounts, social_posts, social_reviews, Id};
use service::config::ApiVersion;

use log::*;

/// GET a tenant's linked social accounts
#[utoipa::path(
    get,
    path = "/social_accounts",
    params(
        ApiVersion,
        ViewParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved the tenant's Social Accounts", body = [social_accounts::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 405, description = "Method not allowed")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn account_index(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(_user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Social Accounts for tenant: {}", params.tenant_id);

    let accounts =
        social::account::find_by_tenant(app_state.db_conn_ref(), params.tenant_id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), accounts)))
}

/// POST link a new social account
#[utoipa::path(
    post,
    path = "/social_accounts",
    params(ApiVersion),
    request_body = social_accounts::Model,
    responses(
        (status = 201, description = "Successfully linked a Social Account", body = [social_accounts::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Unprocessable Entity")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn account_create(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(_user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Json(account_model): Json<social_accounts::Model>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Link a new Social Account: {:?}", account_model);

    let account = social::account::create(app_state.db_conn_ref(), account_model).await?;

    Ok(Json(ApiResponse::new(StatusCode::CREATED.into(), account)))
}

/// DELETE a social account link
#[utoipa::path(
    delete,
    path = "/social_accounts/{id}",
    params(
        ApiVersion,
        ("id" = Id, Path, description = "Social Account ID to Delete")
    ),
    responses(
        (status = 200, description = "Successfully unlinked a Social Account"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Social Account not found")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn account_delete(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(_user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("DELETE Social Account by id: {id}");

    social::account::delete_by_id(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::<()>::no_content(StatusCode::OK.into())))
}

/// GET the posts synced for one social account, newest first
#[utoipa::path(
    get,
    path = "/social_accounts/{id}/posts",
    params(
        ApiVersion,
        ("id" = Id, Path, description = "Social Account ID whose posts to list")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the account's Social Posts", body = [social_posts::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 405, description = "Method not allowed")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn post_index(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(_user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Social Posts for account: {id}");

    let posts = social::post::find_by_account(app_state.db_conn_ref(), id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), posts)))
}

/// GET a tenant's reviews, newest first
#[utoipa::path(
    get,
    path = "/social_reviews",
    params(
        ApiVersion,
        ViewParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved the tenant's Social Reviews", body = [social_reviews::Model]),
        (status = 401, description = "Unauthorized"),
        (status = 405, description = "Method not allowed")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn review_index(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(_user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Social Reviews for tenant: {}", params.tenant_id);

    let reviews =
        social::review::find_by_tenant(app_state.db_conn_ref(), params.tenant_id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), reviews)))
}
