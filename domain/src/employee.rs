pub use entity_api::employee::{create, delete_by_id, find_by_id, find_by_tenant, update};
