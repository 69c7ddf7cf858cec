use uuid::Uuid;

pub mod prelude;

// Core entities
pub mod appointments;
pub mod customers;
pub mod employees;
pub mod packages;
pub mod services;
pub mod tenants;
pub mod users;
pub mod waitlist_entries;

// Social media integration entities
pub mod social_accounts;
pub mod social_posts;
pub mod social_reviews;

// Column enum types
pub mod appointment_status;
pub mod customer_response;
pub mod waitlist_status;

/// A type alias that represents any Entity's internal id field data type.
/// Aliased so that it's easy to change the underlying type if necessary.
pub type Id = Uuid;
