use chrono::{Days, Utc};
use password_auth::generate_hash;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, Value};
use std::collections::HashMap;

pub use entity::{
    appointment_status::AppointmentStatus, appointments, customer_response::CustomerResponse,
    customers, employees, packages, services, social_accounts, social_posts, social_reviews,
    tenants, users, waitlist_entries, waitlist_status::WaitlistStatus, Id,
};

pub mod appointment;
pub mod customer;
pub mod employee;
pub mod error;
pub mod mutate;
pub mod package;
pub mod query;
pub mod service;
pub mod social_account;
pub mod social_post;
pub mod social_review;
pub mod tenant;
pub mod user;
pub mod waitlist_entry;

pub(crate) fn uuid_parse_str(uuid_str: &str) -> Result<Id, error::Error> {
    Id::parse_str(uuid_str).map_err(|_| error::Error {
        source: None,
        error_kind: error::EntityApiErrorKind::InvalidQueryTerm,
    })
}

/// `QueryFilterMap` is a data structure that serves as a bridge for translating filter parameters
/// between different layers of the application. It is essentially a wrapper around a `HashMap`
/// where the keys are filter parameter names (as `String`) and the values are optional `Value` types
/// from `sea_orm`.
///
/// This structure is particularly useful in scenarios where you need to pass filter parameters
/// from a web request down to the database query layer in a type-safe and organized manner.
///
/// # Example
///
/// ```
/// use sea_orm::Value;
/// use entity_api::QueryFilterMap;
///
/// let mut query_filter_map = QueryFilterMap::new();
/// query_filter_map.insert("tenant_id".to_string(), Some(Value::String(Some(Box::new("a_tenant_id".to_string())))));
/// let filter_value = query_filter_map.get("tenant_id");
/// ```
pub struct QueryFilterMap {
    map: HashMap<String, Option<Value>>,
}

impl QueryFilterMap {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        // HashMap.get returns an Option and so we need to "flatten" this to a single Option
        self.map
            .get(key)
            .and_then(|inner_option| inner_option.clone())
    }

    pub fn insert(&mut self, key: String, value: Option<Value>) {
        self.map.insert(key, value);
    }
}

impl Default for QueryFilterMap {
    fn default() -> Self {
        Self::new()
    }
}

/// `IntoQueryFilterMap` is a trait that provides a method for converting a struct into a `QueryFilterMap`.
/// This is particularly useful for translating data between different layers of the application,
/// such as from web request parameters to database query filters.
///
/// # Example
///
/// ```
/// use entity_api::QueryFilterMap;
/// use entity_api::IntoQueryFilterMap;
///
/// #[derive(Debug)]
/// struct MyParams {
///     tenant_id: String,
/// }
///
/// impl IntoQueryFilterMap for MyParams {
///     fn into_query_filter_map(self) -> QueryFilterMap {
///         let mut query_filter_map = QueryFilterMap::new();
///         query_filter_map.insert(
///             "tenant_id".to_string(),
///             Some(sea_orm::Value::String(Some(Box::new(self.tenant_id)))),
///         );
///         query_filter_map
///     }
/// }
/// ```
pub trait IntoQueryFilterMap {
    fn into_query_filter_map(self) -> QueryFilterMap;
}

pub async fn seed_database(db: &DatabaseConnection) {
    let now = Utc::now();

    let _admin_user: users::ActiveModel = users::ActiveModel {
        email: Set("admin@glowdesk.app".to_owned()),
        first_name: Set("Admin".to_owned()),
        last_name: Set("User".to_owned()),
        display_name: Set(Some("Admin User".to_owned())),
        password: Set(generate_hash("k7mPx&4wNq!2vZr8sTby3c")),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .save(db)
    .await
    .unwrap();

    let _front_desk: users::ActiveModel = users::ActiveModel {
        email: Set("reception@glowandco.example".to_owned()),
        first_name: Set("Dana".to_owned()),
        last_name: Set("Reyes".to_owned()),
        display_name: Set(Some("Dana R".to_owned())),
        password: Set(generate_hash("password")),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .save(db)
    .await
    .unwrap();

    let glow_and_co = tenants::ActiveModel {
        name: Set("Glow & Co".to_owned()),
        slug: Set("glow-co".to_owned()),
        contact_email: Set(Some("hello@glowandco.example".to_owned())),
        contact_phone: Set(Some("+1-555-0134".to_owned())),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .save(db)
    .await
    .unwrap();

    let _acme_clinic = tenants::ActiveModel {
        name: Set("Acme Clinic".to_owned()),
        slug: Set("acme-clinic".to_owned()),
        contact_email: Set(Some("desk@acmeclinic.example".to_owned())),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .save(db)
    .await
    .unwrap();

    let tenant_id = glow_and_co.id.clone().unwrap();

    let mia = customers::ActiveModel {
        tenant_id: Set(tenant_id),
        first_name: Set("Mia".to_owned()),
        last_name: Set("Tanaka".to_owned()),
        email: Set(Some("mia.tanaka@example.com".to_owned())),
        phone: Set(Some("+1-555-0178".to_owned())),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .save(db)
    .await
    .unwrap();

    let stylist = employees::ActiveModel {
        tenant_id: Set(tenant_id),
        first_name: Set("Noor".to_owned()),
        last_name: Set("Haddad".to_owned()),
        role_title: Set(Some("Senior Stylist".to_owned())),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .save(db)
    .await
    .unwrap();

    let balayage = services::ActiveModel {
        tenant_id: Set(tenant_id),
        name: Set("Balayage".to_owned()),
        description: Set(Some("Full balayage with toner and blowout".to_owned())),
        duration_minutes: Set(150),
        price_cents: Set(22000),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .save(db)
    .await
    .unwrap();

    packages::ActiveModel {
        tenant_id: Set(tenant_id),
        name: Set("Glow Pass".to_owned()),
        description: Set(Some("Five facials, valid for six months".to_owned())),
        session_count: Set(5),
        price_cents: Set(45000),
        valid_for_days: Set(Some(180)),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .save(db)
    .await
    .unwrap();

    appointments::ActiveModel {
        tenant_id: Set(tenant_id),
        customer_id: Set(mia.id.clone().unwrap()),
        service_id: Set(balayage.id.clone().unwrap()),
        employee_id: Set(Some(stylist.id.clone().unwrap())),
        starts_at: Set((now + chrono::Duration::days(3)).into()),
        ends_at: Set(Some((now + chrono::Duration::days(3) + chrono::Duration::minutes(150)).into())),
        status: Set(AppointmentStatus::Pending),
        customer_response: Set(CustomerResponse::Pending),
        confirmation_token: Set(Id::new_v4()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .save(db)
    .await
    .unwrap();

    waitlist_entries::ActiveModel {
        tenant_id: Set(tenant_id),
        customer_id: Set(mia.id.clone().unwrap()),
        service_id: Set(balayage.id.clone().unwrap()),
        requested_date: Set(now.date_naive().checked_add_days(Days::new(10))),
        status: Set(WaitlistStatus::Waiting),
        notes: Set(Some("Prefers weekday mornings".to_owned())),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .save(db)
    .await
    .unwrap();

    let instagram = social_accounts::ActiveModel {
        tenant_id: Set(tenant_id),
        platform: Set("instagram".to_owned()),
        handle: Set("@glowandco".to_owned()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .save(db)
    .await
    .unwrap();

    social_posts::ActiveModel {
        social_account_id: Set(instagram.id.clone().unwrap()),
        caption: Set(Some("Fresh balayage for the weekend".to_owned())),
        permalink: Set("https://instagram.example/p/abc123".to_owned()),
        posted_at: Set(now.into()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .save(db)
    .await
    .unwrap();

    social_reviews::ActiveModel {
        tenant_id: Set(tenant_id),
        author: Set("J. Morales".to_owned()),
        rating: Set(5),
        body: Set("Best balayage in town, Noor is fantastic.".to_owned()),
        reviewed_at: Set(now.into()),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    }
    .save(db)
    .await
    .unwrap();
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;

    #[tokio::test]
    async fn uuid_parse_str_parses_valid_uuid() {
        let uuid_str = "a98c3295-0933-44cb-89db-7db0f7250fb1";
        let uuid = uuid_parse_str(uuid_str).unwrap();
        assert_eq!(uuid.to_string(), uuid_str);
    }

    #[tokio::test]
    async fn uuid_parse_str_returns_error_for_invalid_uuid() {
        let uuid_str = "invalid";
        let result = uuid_parse_str(uuid_str);
        assert!(result.is_err());
    }
}
