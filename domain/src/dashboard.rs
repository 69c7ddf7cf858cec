use crate::error::Error;
use crate::{appointments, customers, employees, packages, services, waitlist_entries, Id};
use chrono::{Days, NaiveDate, NaiveTime};
use entity_api::{appointment, customer, employee, package, service, waitlist_entry};
use sea_orm::DatabaseConnection;

/// Dashboard data loaders.
///
/// Each view issues its backend reads concurrently and fails as a whole if
/// any single read fails; there is no ordering dependency between the reads.

pub async fn calendar(
    db: &DatabaseConnection,
    tenant_id: Id,
    from: NaiveDate,
    to: NaiveDate,
) -> Result<
    (
        Vec<appointments::Model>,
        Vec<employees::Model>,
        Vec<services::Model>,
    ),
    Error,
> {
    let from_dt = from.and_time(NaiveTime::MIN).and_utc();
    let to_dt = to
        .checked_add_days(Days::new(1))
        .ok_or_else(Error::invalid)?
        .and_time(NaiveTime::MIN)
        .and_utc();

    let (appointments, employees, services) = tokio::try_join!(
        appointment::find_in_window(db, tenant_id, from_dt.into(), to_dt.into()),
        employee::find_by_tenant(db, tenant_id),
        service::find_by_tenant(db, tenant_id),
    )?;

    Ok((appointments, employees, services))
}

pub async fn waitlist(
    db: &DatabaseConnection,
    tenant_id: Id,
) -> Result<
    (
        Vec<waitlist_entries::Model>,
        Vec<customers::Model>,
        Vec<services::Model>,
    ),
    Error,
> {
    let (entries, customers, services) = tokio::try_join!(
        waitlist_entry::find_by_tenant(db, tenant_id, None),
        customer::find_by_tenant(db, tenant_id),
        service::find_by_tenant(db, tenant_id),
    )?;

    Ok((entries, customers, services))
}

pub async fn packages(
    db: &DatabaseConnection,
    tenant_id: Id,
) -> Result<(Vec<packages::Model>, Vec<services::Model>), Error> {
    let (packages, services) = tokio::try_join!(
        package::find_by_tenant(db, tenant_id),
        service::find_by_tenant(db, tenant_id),
    )?;

    Ok((packages, services))
}
