use crate::customers;
use crate::error::Error;
use entity_api::{query, IntoQueryFilterMap};
use sea_orm::DatabaseConnection;

pub use entity_api::customer::{create, delete_by_id, find_by_id, find_by_tenant, update};

pub async fn find_by(
    db: &DatabaseConnection,
    params: impl IntoQueryFilterMap,
) -> Result<Vec<customers::Model>, Error> {
    let customers = query::find_by::<customers::Entity, customers::Column>(
        db,
        params.into_query_filter_map(),
    )
    .await?;

    Ok(customers)
}
