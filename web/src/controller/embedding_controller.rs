use crate::extractors::{
    authenticated_user::AuthenticatedUser, compare_api_version::CompareApiVersion,
};
use crate::params::embedding::GenerateParams;
use crate::{AppState, Error};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use domain::tenant as TenantApi;
use service::config::ApiVersion;

use log::*;

/// POST trigger embedding generation for one tenant's content.
///
/// The tenant may be referenced by id or by slug (prefix-resolved); the
/// request is rejected before any backend call when neither is supplied.
#[utoipa::path(
    post,
    path = "/embeddings/generate",
    params(ApiVersion),
    request_body = GenerateParams,
    responses(
        (status = 200, description = "Embedding generation ran to completion"),
        (status = 400, description = "Neither tenant_slug nor tenant_id supplied"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Tenant not found"),
        (status = 500, description = "Internal Server Error")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn generate(
    CompareApiVersion(_v): CompareApiVersion,
    AuthenticatedUser(_user): AuthenticatedUser,
    State(app_state): State<AppState>,
    Json(params): Json<GenerateParams>,
) -> Result<Response, Error> {
    debug!("POST generate embeddings: {:?}", params);

    // Validate before touching the backend at all.
    if params.tenant_slug.is_none() && params.tenant_id.is_none() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "success": false,
                "message": "tenant_slug or tenant_id is required",
                "processed": 0,
                "errors": 0
            })),
        )
            .into_response());
    }

    let tenant = match TenantApi::resolve_reference(
        app_state.db_conn_ref(),
        params.tenant_id,
        params.tenant_slug.as_deref(),
    )
    .await?
    {
        Some(tenant) => tenant,
        None => {
            return Ok((
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({
                    "success": false,
                    "message": "tenant not found",
                    "processed": 0,
                    "errors": 0
                })),
            )
                .into_response());
        }
    };

    let summary =
        domain::embedding::generate_for_tenant(app_state.db_conn_ref(), &app_state.config, &tenant)
            .await?;

    info!(
        "Embedding generation for tenant {} finished: processed={}, errors={}",
        tenant.slug, summary.processed, summary.errors
    );

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "embedding generation completed",
        "processed": summary.processed,
        "errors": summary.errors
    }))
    .into_response())
}

#[cfg(test)]
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::post,
        Router,
    };
    use axum_login::{
        tower_sessions::{Expiry, MemoryStore, SessionManagerLayer},
        AuthManagerLayerBuilder,
    };
    use chrono::Utc;
    use domain::user::Backend;
    use domain::{users, Id};
    use password_auth::generate_hash;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use service::config::Config;
    use std::sync::Arc;
    use time::Duration;
    use tower::ServiceExt;

    // The validation runs before any backend call, so beyond the two queries
    // the login flow itself needs, the MockDatabase holds no prepared
    // results: a tenant lookup would make the test fail loudly.
    #[tokio::test]
    async fn generate_without_tenant_reference_returns_400_before_any_backend_call() {
        let test_user = users::Model {
            id: Id::new_v4(),
            email: "reception@glowandco.example".to_string(),
            password: generate_hash("password2"),
            first_name: "Dana".to_string(),
            last_name: "Reyes".to_string(),
            display_name: None,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        };

        let config = Config::default();
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_user.clone()]]) // find_by_email during login
                .append_query_results([[test_user.clone()]]) // session user lookup on the protected call
                .into_connection(),
        );
        let app_state = crate::AppState::new(config, &db);

        let session_store = MemoryStore::default();
        let session_layer = SessionManagerLayer::new(session_store)
            .with_secure(false)
            .with_expiry(Expiry::OnInactivity(Duration::days(1)))
            .with_always_save(true);
        let backend = Backend::new(&db);
        let auth_layer = AuthManagerLayerBuilder::new(backend, session_layer).build();

        let app = Router::new()
            .route(
                "/login",
                post(crate::controller::user_session_controller::login),
            )
            .route("/embeddings/generate", post(generate))
            .layer(auth_layer)
            .with_state(app_state);

        let login_request = Request::builder()
            .uri("/login")
            .method("POST")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(
                "email=reception@glowandco.example&password=password2",
            ))
            .unwrap();
        let login_response = app.clone().oneshot(login_request).await.unwrap();
        let cookie = login_response
            .headers()
            .get("set-cookie")
            .and_then(|c| c.to_str().ok())
            .expect("Login should return session cookie")
            .to_string();

        let request = Request::builder()
            .uri("/embeddings/generate")
            .method("POST")
            .header("content-type", "application/json")
            .header("cookie", cookie)
            .body(Body::from("{}"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["success"], false);
        assert_eq!(parsed["processed"], 0);
    }
}
