use chrono::NaiveDate;
use domain::Id;
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct CalendarParams {
    pub(crate) tenant_id: Id,
    pub(crate) from_date: NaiveDate,
    pub(crate) to_date: NaiveDate,
}

#[derive(Debug, Deserialize, IntoParams)]
pub(crate) struct ViewParams {
    pub(crate) tenant_id: Id,
}
