//! Domain surface for social media content synced from external platforms.

pub mod account {
    pub use entity_api::social_account::{create, delete_by_id, find_by_id, find_by_tenant};
}

pub mod post {
    pub use entity_api::social_post::{create, delete_by_id, find_by_account};
}

pub mod review {
    pub use entity_api::social_review::{create, delete_by_id, find_by_tenant};
}
