pub use entity_api::package::{create, delete_by_id, find_by_id, find_by_tenant, update};
