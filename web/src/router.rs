use crate::{controller::health_check_controller, middleware::auth::require_auth, params, response, AppState};
use axum::{
    middleware::from_fn,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::services::ServeDir;

use crate::controller::{
    appointment_confirmation_controller, appointment_controller, customer_controller,
    dashboard_controller, embedding_controller, employee_controller, package_controller,
    service_controller, social_controller, tenant_controller, user_session_controller,
    waitlist_controller,
};

use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Glowdesk Platform API"
        ),
        paths(
            appointment_controller::create,
            appointment_controller::update,
            appointment_controller::index,
            appointment_controller::read,
            appointment_controller::delete,
            appointment_confirmation_controller::show,
            appointment_confirmation_controller::confirm,
            appointment_confirmation_controller::decline,
            customer_controller::create,
            customer_controller::update,
            customer_controller::index,
            customer_controller::read,
            customer_controller::delete,
            dashboard_controller::calendar,
            dashboard_controller::waitlist,
            dashboard_controller::packages,
            embedding_controller::generate,
            employee_controller::create,
            employee_controller::update,
            employee_controller::index,
            employee_controller::delete,
            package_controller::create,
            package_controller::update,
            package_controller::index,
            package_controller::delete,
            service_controller::create,
            service_controller::update,
            service_controller::index,
            service_controller::read,
            service_controller::delete,
            social_controller::account_index,
            social_controller::account_create,
            social_controller::account_delete,
            social_controller::post_index,
            social_controller::review_index,
            tenant_controller::index,
            tenant_controller::read,
            tenant_controller::resolve,
            tenant_controller::create,
            tenant_controller::update,
            tenant_controller::delete,
            user_session_controller::login,
            user_session_controller::logout,
            waitlist_controller::create,
            waitlist_controller::update_status,
            waitlist_controller::index,
            waitlist_controller::delete,
        ),
        components(
            schemas(
                domain::appointments::Model,
                domain::customers::Model,
                domain::employees::Model,
                domain::packages::Model,
                domain::services::Model,
                domain::social_accounts::Model,
                domain::social_posts::Model,
                domain::social_reviews::Model,
                domain::tenants::Model,
                domain::users::Model,
                domain::user::Credentials,
                params::appointment::UpdateParams,
                params::embedding::GenerateParams,
                params::waitlist::UpdateStatusParams,
                response::dashboard::CalendarView,
                response::dashboard::WaitlistView,
                response::dashboard::PackagesView,
            )
        ),
        modifiers(&SecurityAddon),
        tags(
            (name = "glowdesk_platform", description = "Glowdesk Booking & Clinic Management API")
        )
    )]
struct ApiDoc;

struct SecurityAddon;

// Defines our cookie session based authentication requirement for gaining access to our
// API endpoints for OpenAPI.
impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "id",
                    "Session id value returned from successful login via Set-Cookie header",
                ))),
            )
        }
    }
}

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(appointment_routes(app_state.clone()))
        .merge(appointment_confirmation_routes(app_state.clone()))
        .merge(customer_routes(app_state.clone()))
        .merge(dashboard_routes(app_state.clone()))
        .merge(embedding_routes(app_state.clone()))
        .merge(employee_routes(app_state.clone()))
        .merge(health_routes())
        .merge(package_routes(app_state.clone()))
        .merge(service_routes(app_state.clone()))
        .merge(social_routes(app_state.clone()))
        .merge(tenant_routes(app_state.clone()))
        .merge(user_session_routes())
        .merge(waitlist_routes(app_state))
        // **** FIXME: protect the OpenAPI web UI
        .merge(RapiDoc::with_openapi("/api-docs/openapi2.json", ApiDoc::openapi()).path("/rapidoc"))
        .fallback_service(static_routes())
}

fn appointment_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/appointments", post(appointment_controller::create))
        .route("/appointments", get(appointment_controller::index))
        .route("/appointments/:id", get(appointment_controller::read))
        .route("/appointments/:id", put(appointment_controller::update))
        .route("/appointments/:id", delete(appointment_controller::delete))
        .route_layer(from_fn(require_auth))
        .with_state(app_state)
}

// The confirmation endpoints are public: the unguessable token in the URL is
// the customer's credential.
fn appointment_confirmation_routes(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/appointments/confirmation/:token",
            get(appointment_confirmation_controller::show),
        )
        .route(
            "/appointments/confirmation/:token/confirm",
            put(appointment_confirmation_controller::confirm),
        )
        .route(
            "/appointments/confirmation/:token/decline",
            put(appointment_confirmation_controller::decline),
        )
        .with_state(app_state)
}

fn customer_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/customers", post(customer_controller::create))
        .route("/customers", get(customer_controller::index))
        .route("/customers/:id", get(customer_controller::read))
        .route("/customers/:id", put(customer_controller::update))
        .route("/customers/:id", delete(customer_controller::delete))
        .route_layer(from_fn(require_auth))
        .with_state(app_state)
}

fn dashboard_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/dashboard/calendar", get(dashboard_controller::calendar))
        .route("/dashboard/waitlist", get(dashboard_controller::waitlist))
        .route("/dashboard/packages", get(dashboard_controller::packages))
        .route_layer(from_fn(require_auth))
        .with_state(app_state)
}

fn embedding_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/embeddings/generate", post(embedding_controller::generate))
        .route_layer(from_fn(require_auth))
        .with_state(app_state)
}

fn employee_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/employees", post(employee_controller::create))
        .route("/employees", get(employee_controller::index))
        .route("/employees/:id", put(employee_controller::update))
        .route("/employees/:id", delete(employee_controller::delete))
        .route_layer(from_fn(require_auth))
        .with_state(app_state)
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

fn package_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/packages", post(package_controller::create))
        .route("/packages", get(package_controller::index))
        .route("/packages/:id", put(package_controller::update))
        .route("/packages/:id", delete(package_controller::delete))
        .route_layer(from_fn(require_auth))
        .with_state(app_state)
}

fn service_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/services", post(service_controller::create))
        .route("/services", get(service_controller::index))
        .route("/services/:id", get(service_controller::read))
        .route("/services/:id", put(service_controller::update))
        .route("/services/:id", delete(service_controller::delete))
        .route_layer(from_fn(require_auth))
        .with_state(app_state)
}

fn social_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/social_accounts", get(social_controller::account_index))
        .route("/social_accounts", post(social_controller::account_create))
        .route(
            "/social_accounts/:id",
            delete(social_controller::account_delete),
        )
        .route(
            "/social_accounts/:id/posts",
            get(social_controller::post_index),
        )
        .route("/social_reviews", get(social_controller::review_index))
        .route_layer(from_fn(require_auth))
        .with_state(app_state)
}

fn tenant_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/tenants", post(tenant_controller::create))
        .route("/tenants", get(tenant_controller::index))
        .route("/tenants/resolve/:slug", get(tenant_controller::resolve))
        .route("/tenants/:id", get(tenant_controller::read))
        .route("/tenants/:id", put(tenant_controller::update))
        .route("/tenants/:id", delete(tenant_controller::delete))
        .route_layer(from_fn(require_auth))
        .with_state(app_state)
}

fn user_session_routes() -> Router {
    Router::new()
        .route("/login", post(user_session_controller::login))
        .route(
            "/logout",
            get(user_session_controller::logout).post(user_session_controller::logout),
        )
}

fn waitlist_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/waitlist_entries", post(waitlist_controller::create))
        .route("/waitlist_entries", get(waitlist_controller::index))
        .route(
            "/waitlist_entries/:id/status",
            put(waitlist_controller::update_status),
        )
        .route(
            "/waitlist_entries/:id",
            delete(waitlist_controller::delete),
        )
        .route_layer(from_fn(require_auth))
        .with_state(app_state)
}

fn static_routes() -> ServeDir {
    ServeDir::new("public")
}
