use super::error::{EntityApiErrorKind, Error};
use crate::{tenant::Entity, uuid_parse_str};
use chrono::Utc;
use entity::{tenants::*, Id};
use sea_orm::{
    entity::prelude::*, ActiveValue::Set, ActiveValue::Unchanged, DatabaseConnection, QueryOrder,
    TryIntoModel,
};
use slugify::slugify;
use std::collections::HashMap;

use log::*;

pub async fn create(db: &DatabaseConnection, tenant_model: Model) -> Result<Model, Error> {
    debug!("New Tenant Model to be inserted: {:?}", tenant_model);

    let now = Utc::now();
    let name = tenant_model.name;

    let tenant_active_model: ActiveModel = ActiveModel {
        name: Set(name.clone()),
        slug: Set(slugify!(name.as_str())),
        contact_email: Set(tenant_model.contact_email),
        contact_phone: Set(tenant_model.contact_phone),
        logo: Set(tenant_model.logo),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(tenant_active_model.insert(db).await?)
}

pub async fn update(db: &DatabaseConnection, id: Id, model: Model) -> Result<Model, Error> {
    let tenant = find_by_id(db, id).await?;

    let active_model: ActiveModel = ActiveModel {
        id: Unchanged(tenant.id),
        name: Set(model.name),
        slug: Unchanged(tenant.slug),
        contact_email: Set(model.contact_email),
        contact_phone: Set(model.contact_phone),
        logo: Set(model.logo),
        updated_at: Set(Utc::now().into()),
        created_at: Unchanged(tenant.created_at),
    };
    Ok(active_model.update(db).await?.try_into_model()?)
}

pub async fn delete_by_id(db: &DatabaseConnection, id: Id) -> Result<(), Error> {
    let tenant_model = find_by_id(db, id).await?;
    tenant_model.delete(db).await?;
    Ok(())
}

/// All tenants ordered by slug so that prefix resolution is deterministic.
pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Model>, Error> {
    Ok(Entity::find().order_by_asc(Column::Slug).all(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| Error {
        source: None,
        error_kind: EntityApiErrorKind::RecordNotFound,
    })
}

pub async fn find_by_slug(db: &DatabaseConnection, slug: &str) -> Result<Option<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::Slug.eq(slug))
        .one(db)
        .await?)
}

pub async fn find_by(
    db: &DatabaseConnection,
    params: HashMap<String, String>,
) -> Result<Vec<Model>, Error> {
    let mut query = Entity::find();

    for (key, value) in params {
        match key.as_str() {
            "id" => {
                let tenant_uuid = uuid_parse_str(&value)?;
                query = query.filter(Column::Id.eq(tenant_uuid));
            }
            "slug" => {
                query = query.filter(Column::Slug.eq(value));
            }
            _ => {
                return Err(Error {
                    source: None,
                    error_kind: EntityApiErrorKind::InvalidQueryTerm,
                });
            }
        }
    }

    Ok(query.all(db).await?)
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use entity::{tenants, Id};
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn find_all_returns_a_list_of_records_when_present() -> Result<(), Error> {
        let now = Utc::now();
        let tenants = vec![vec![
            tenants::Model {
                id: Id::new_v4(),
                name: "Acme Clinic".to_owned(),
                slug: "acme-clinic".to_owned(),
                contact_email: None,
                contact_phone: None,
                logo: None,
                created_at: now.into(),
                updated_at: now.into(),
            },
            tenants::Model {
                id: Id::new_v4(),
                name: "Glow & Co".to_owned(),
                slug: "glow-co".to_owned(),
                contact_email: None,
                contact_phone: None,
                logo: None,
                created_at: now.into(),
                updated_at: now.into(),
            },
        ]];
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(tenants.clone())
            .into_connection();

        assert_eq!(find_all(&db).await?, tenants[0]);

        Ok(())
    }

    #[tokio::test]
    async fn find_by_slug_returns_none_when_absent() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<tenants::Model>::new()])
            .into_connection();

        assert_eq!(find_by_slug(&db, "no-such-clinic").await?, None);

        Ok(())
    }
}
