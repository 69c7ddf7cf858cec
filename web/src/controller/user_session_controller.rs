use crate::controller::ApiResponse;
use crate::params::user_session::LogoutParams;
use axum::extract::Query;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use domain::user::{AuthSession, Credentials};
use log::*;
use serde_json::json;

/// Logs the user into the platform and returns a new session cookie.
///
/// Successful login will return a session cookie with id, e.g.:
/// set-cookie: id=07bbbe54-bd35-425f-8e63-618a8d8612df; HttpOnly; SameSite=Strict; Path=/; Max-Age=86399
///
/// After logging in successfully, you must pass the session id back to the server for
/// every API call, e.g.:
/// curl -v --header "Cookie: id=07bbbe54-bd35-425f-8e63-618a8d8612df" --request GET http://localhost:4000/tenants
#[utoipa::path(
    post,
    path = "/login",
    request_body(content = domain::user::Credentials, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Logs in and returns session authentication cookie"),
        (status = 400, description = "Wrong credentials"),
        (status = 405, description = "Method not allowed"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn login(
    mut auth_session: AuthSession,
    Form(creds): Form<Credentials>,
) -> Response {
    let user = match auth_session.authenticate(creds.clone()).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            warn!("Authentication failed, invalid user: {:?}", creds.email);
            return (StatusCode::BAD_REQUEST, "wrong credentials").into_response();
        }
        Err(auth_error) => {
            // A wrong password surfaces here as an unauthenticated backend
            // error; anything else is a real backend failure.
            warn!("Authentication failed with error: {auth_error:?}");
            return (StatusCode::BAD_REQUEST, "wrong credentials").into_response();
        }
    };

    if let Err(login_error) = auth_session.login(&user).await {
        error!("Session login failed: {login_error:?}");
        return (StatusCode::INTERNAL_SERVER_ERROR, "login failed").into_response();
    }

    let user_session_json = json!({
            "id": user.id,
            "email": user.email,
            "first_name": user.first_name,
            "last_name": user.last_name,
            "display_name": user.display_name
    });

    debug!("user_session_json: {user_session_json}");

    Json(ApiResponse::new(
        StatusCode::OK.into(),
        user_session_json,
    ))
    .into_response()
}

/// Logs the user out of the platform by destroying their session, then
/// redirects the browser. The target is the `return_to` query parameter when
/// present, otherwise the Referer header, otherwise `/`.
#[utoipa::path(
    get,
    path = "/logout",
    params(LogoutParams),
    responses(
        (status = 303, description = "Session destroyed, redirecting"),
        (status = 405, description = "Method not allowed"),
        (status = 503, description = "Service temporarily unavailable")
    ),
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn logout(
    mut auth_session: AuthSession,
    Query(params): Query<LogoutParams>,
    headers: HeaderMap,
) -> impl IntoResponse {
    trace!("UserSessionController::logout()");

    if let Err(logout_error) = auth_session.logout().await {
        // The redirect still happens; a half-destroyed session is not the
        // browser's problem.
        error!("Session logout failed: {logout_error:?}");
    }

    let target = params
        .return_to
        .or_else(|| {
            headers
                .get(header::REFERER)
                .and_then(|referer| referer.to_str().ok())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "/".to_string());

    Redirect::to(&target)
}

#[cfg(test)]
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::{get, post},
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
    use std::sync::Arc;
    use time::Duration;
    use tower::ServiceExt;

    fn test_user() -> users::Model {
        users::Model {
            id: Id::new_v4(),
            email: "reception@glowandco.example".to_string(),
            password: generate_hash("password2"),
            first_name: "Dana".to_string(),
            last_name: "Reyes".to_string(),
            display_name: Some("Dana R".to_string()),
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    fn session_app(db: Arc<sea_orm::DatabaseConnection>) -> Router {
        let session_store = MemoryStore::default();
        let session_layer = SessionManagerLayer::new(session_store)
            .with_secure(false)
            .with_expiry(Expiry::OnInactivity(Duration::days(1)));

        let backend = Backend::new(&db);
        let auth_layer = AuthManagerLayerBuilder::new(backend, session_layer).build();

        Router::new()
            .route("/login", post(login))
            .route("/logout", get(logout))
            .layer(auth_layer)
    }

    #[tokio::test]
    async fn login_with_wrong_password_returns_400_wrong_credentials() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_user()]])
                .into_connection(),
        );
        let app = session_app(db);

        let request = Request::builder()
            .uri("/login")
            .method("POST")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(
                "email=reception@glowandco.example&password=nope",
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"wrong credentials");
    }

    #[tokio::test]
    async fn login_returns_user_summary_with_lowercased_email() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[test_user()]]) // find_by_email during authenticate
                .append_query_results([[test_user()]]) // get_user after login
                .into_connection(),
        );
        let app = session_app(db);

        let request = Request::builder()
            .uri("/login")
            .method("POST")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(
                "email=Reception@GlowAndCo.example&password=password2",
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed["data"]["email"], "reception@glowandco.example");
    }

    #[tokio::test]
    async fn logout_redirects_to_root_by_default() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        );
        let app = session_app(db);

        let request = Request::builder()
            .uri("/logout")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get("location").unwrap(), "/");
    }

    #[tokio::test]
    async fn logout_prefers_the_return_to_parameter() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        );
        let app = session_app(db);

        let request = Request::builder()
            .uri("/logout?return_to=/goodbye")
            .header("referer", "https://dashboard.glowdesk.app/settings")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get("location").unwrap(), "/goodbye");
    }

    #[tokio::test]
    async fn logout_falls_back_to_the_referer_header() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        );
        let app = session_app(db);

        let request = Request::builder()
            .uri("/logout")
            .header("referer", "https://dashboard.glowdesk.app/settings")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get("location").unwrap(),
            "https://dashboard.glowdesk.app/settings"
        );
    }
}
