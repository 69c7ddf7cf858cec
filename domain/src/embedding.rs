use crate::error::{DomainErrorKind, Error, InternalErrorKind};
use crate::gateway::embedding as embedding_gateway;
use crate::tenants;
use entity_api::{service as service_api, social_review};
use log::*;
use sea_orm::DatabaseConnection;
use serde::Serialize;
use service::config::Config;

/// Aggregate outcome of one embedding generation run.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct Summary {
    pub processed: u32,
    pub errors: u32,
}

/// Regenerates embeddings for all of a tenant's embeddable content: service
/// descriptions and social review bodies. Items are submitted one by one and
/// a failed item only increments the error count; the run itself keeps going.
pub async fn generate_for_tenant(
    db: &DatabaseConnection,
    config: &Config,
    tenant: &tenants::Model,
) -> Result<Summary, Error> {
    let embedding_url = config.embedding_url().ok_or_else(|| {
        warn!("No embedding service URL configured");
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
        }
    })?;

    let (services, reviews) = tokio::try_join!(
        service_api::find_by_tenant(db, tenant.id),
        social_review::find_by_tenant(db, tenant.id),
    )?;

    let items = collect_items(&services, &reviews);

    info!(
        "Generating embeddings for tenant {} ({} items)",
        tenant.slug,
        items.len()
    );

    let client = embedding_gateway::client(config).await?;
    let mut summary = Summary::default();

    for (source_id, text) in items {
        match embedding_gateway::embed(&client, &embedding_url, &source_id, &text).await {
            Ok(()) => summary.processed += 1,
            Err(err) => {
                warn!("Embedding failed for {source_id}: {err}");
                summary.errors += 1;
            }
        }
    }

    Ok(summary)
}

/// Pairs each embeddable text with a stable source identifier the embedding
/// service can upsert by. Services without a description carry no signal and
/// are skipped.
fn collect_items(
    services: &[crate::services::Model],
    reviews: &[crate::social_reviews::Model],
) -> Vec<(String, String)> {
    let mut items = Vec::with_capacity(services.len() + reviews.len());

    for service in services {
        if let Some(description) = &service.description {
            items.push((format!("service:{}", service.id), description.clone()));
        }
    }

    for review in reviews {
        items.push((format!("review:{}", review.id), review.body.clone()));
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Id;
    use chrono::Utc;

    fn service_model(description: Option<&str>) -> crate::services::Model {
        let now = Utc::now();
        crate::services::Model {
            id: Id::new_v4(),
            tenant_id: Id::new_v4(),
            name: "Balayage".to_owned(),
            description: description.map(|d| d.to_owned()),
            duration_minutes: 90,
            price_cents: 12000,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    fn review_model(body: &str) -> crate::social_reviews::Model {
        let now = Utc::now();
        crate::social_reviews::Model {
            id: Id::new_v4(),
            tenant_id: Id::new_v4(),
            author: "J. Morales".to_owned(),
            rating: 5,
            body: body.to_owned(),
            reviewed_at: now.into(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[test]
    fn collect_items_skips_services_without_descriptions() {
        let services = vec![service_model(None), service_model(Some("With toner"))];
        let reviews = vec![review_model("Loved it")];

        let items = collect_items(&services, &reviews);

        assert_eq!(items.len(), 2);
        assert!(items[0].0.starts_with("service:"));
        assert!(items[1].0.starts_with("review:"));
    }

    // We need to gate seaORM's mock feature behind conditional compilation because
    // the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
    // see https://github.com/SeaQL/sea-orm/issues/830
    #[cfg(feature = "mock")]
    #[tokio::test]
    async fn generate_for_tenant_counts_processed_and_failed_items() {
        use sea_orm::{DatabaseBackend, MockDatabase};

        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/embeddings")
            .with_status(200)
            .expect(2)
            .create_async()
            .await;

        let now = Utc::now();
        let tenant = crate::tenants::Model {
            id: Id::new_v4(),
            name: "Glow & Co".to_owned(),
            slug: "glow-co".to_owned(),
            contact_email: None,
            contact_phone: None,
            logo: None,
            created_at: now.into(),
            updated_at: now.into(),
        };

        // One embeddable service and one review; the undescribed service is skipped.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                service_model(Some("Full balayage with toner")),
                service_model(None),
            ]])
            .append_query_results([vec![review_model("Best balayage in town")]])
            .into_connection();

        let mut config = service::config::Config::default();
        config.set_embedding_url(server.url());

        let summary = generate_for_tenant(&db, &config, &tenant).await.unwrap();

        assert_eq!(
            summary,
            Summary {
                processed: 2,
                errors: 0
            }
        );
        mock.assert_async().await;
    }
}
