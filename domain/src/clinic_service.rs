//! Domain surface for a tenant's bookable services (treatments).

pub use entity_api::service::{create, delete_by_id, find_by_id, find_by_tenant, update};
