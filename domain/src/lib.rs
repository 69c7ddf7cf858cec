//! This module re-exports various items from the `entity_api` crate.
//!
//! The purpose of this re-export is to ensure that consumers of the `domain` crate do not need to
//! directly depend on the `entity_api` crate. By re-exporting these items, we provide a clear and
//! consistent interface for working with query filters within the domain layer, while encapsulating
//! the underlying implementation details remain in the `entity_api` crate.
pub use entity_api::{
    mutate::{IntoUpdateMap, UpdateMap},
    IntoQueryFilterMap, QueryFilterMap,
};

// Re-exports from `entity` crate via `entity_api`
pub use entity_api::{
    appointments, customers, employees, packages, services, social_accounts, social_posts,
    social_reviews, tenants, users, waitlist_entries, AppointmentStatus, CustomerResponse, Id,
    WaitlistStatus,
};

pub mod appointment;
pub mod clinic_service;
pub mod customer;
pub mod dashboard;
pub mod embedding;
pub mod employee;
pub mod error;
pub mod package;
pub mod social;
pub mod tenant;
pub mod user;
pub mod waitlist;

pub mod gateway;
