//! Domain surface for the appointment waitlist.
//!
//! Notification of waitlisted customers happens outside this platform; the
//! status column only records where each entry is in its lifecycle.

pub use entity_api::waitlist_entry::{
    create, delete_by_id, find_by_id, find_by_tenant, update_status,
};
