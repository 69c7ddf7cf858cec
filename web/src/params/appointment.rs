use chrono::{DateTime, FixedOffset};
use domain::Id;
use domain::{IntoQueryFilterMap, IntoUpdateMap, QueryFilterMap, UpdateMap};
use sea_orm::Value;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct IndexParams {
    pub(crate) tenant_id: Id,
    pub(crate) customer_id: Option<Id>,
    pub(crate) employee_id: Option<Id>,
    pub(crate) service_id: Option<Id>,
}

impl IntoQueryFilterMap for IndexParams {
    fn into_query_filter_map(self) -> QueryFilterMap {
        let mut query_filter_map = QueryFilterMap::new();
        query_filter_map.insert(
            "tenant_id".to_string(),
            Some(Value::Uuid(Some(Box::new(self.tenant_id)))),
        );
        query_filter_map.insert(
            "customer_id".to_string(),
            self.customer_id
                .map(|customer_id| Value::Uuid(Some(Box::new(customer_id)))),
        );
        query_filter_map.insert(
            "employee_id".to_string(),
            self.employee_id
                .map(|employee_id| Value::Uuid(Some(Box::new(employee_id)))),
        );
        query_filter_map.insert(
            "service_id".to_string(),
            self.service_id
                .map(|service_id| Value::Uuid(Some(Box::new(service_id)))),
        );
        query_filter_map
    }
}

/// Staff-side rescheduling. Status changes are not accepted here; the
/// confirmation workflow owns those transitions.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct UpdateParams {
    #[schema(value_type = Option<String>, format = DateTime)]
    pub(crate) starts_at: Option<DateTime<FixedOffset>>,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub(crate) ends_at: Option<DateTime<FixedOffset>>,
    pub(crate) employee_id: Option<Id>,
}

impl IntoUpdateMap for UpdateParams {
    fn into_update_map(self) -> UpdateMap {
        let mut update_map = UpdateMap::new();
        update_map.insert(
            "starts_at".to_string(),
            self.starts_at
                .map(|starts_at| Value::ChronoDateTimeWithTimeZone(Some(Box::new(starts_at)))),
        );
        update_map.insert(
            "ends_at".to_string(),
            self.ends_at
                .map(|ends_at| Value::ChronoDateTimeWithTimeZone(Some(Box::new(ends_at)))),
        );
        update_map.insert(
            "employee_id".to_string(),
            self.employee_id
                .map(|employee_id| Value::Uuid(Some(Box::new(employee_id)))),
        );
        update_map
    }
}
