use crate::error::Error;
use crate::tenants::Model;
use crate::Id;
use entity_api::tenant;
use log::*;
use sea_orm::DatabaseConnection;

pub use entity_api::tenant::{create, delete_by_id, find_all, find_by_id, update};

/// Resolves a human-readable slug fragment to a single tenant.
///
/// An exact slug match always wins. Failing that, the first tenant whose slug
/// starts with the fragment is taken; `find_all` returns tenants ordered by
/// slug, so an ambiguous fragment resolves to the lexicographically first
/// candidate rather than an arbitrary one.
pub async fn resolve(db: &DatabaseConnection, fragment: &str) -> Result<Option<Model>, Error> {
    let needle = fragment.trim().to_lowercase();
    if needle.is_empty() {
        return Ok(None);
    }

    if let Some(tenant) = tenant::find_by_slug(db, &needle).await? {
        return Ok(Some(tenant));
    }

    let tenants = tenant::find_all(db).await?;
    let resolved = match_slug(&tenants, fragment).cloned();

    if resolved.is_none() {
        debug!("No tenant resolved for slug fragment: {:?}", fragment);
    }

    Ok(resolved)
}

/// Resolves a tenant from an id or a slug fragment, preferring the id when
/// both are supplied.
pub async fn resolve_reference(
    db: &DatabaseConnection,
    tenant_id: Option<Id>,
    tenant_slug: Option<&str>,
) -> Result<Option<Model>, Error> {
    if let Some(id) = tenant_id {
        return match tenant::find_by_id(db, id).await {
            Ok(tenant) => Ok(Some(tenant)),
            Err(err)
                if err.error_kind == entity_api::error::EntityApiErrorKind::RecordNotFound =>
            {
                Ok(None)
            }
            Err(err) => Err(err.into()),
        };
    }

    match tenant_slug {
        Some(slug) => resolve(db, slug).await,
        None => Ok(None),
    }
}

/// Case-insensitive slug matching over an already-sorted tenant directory.
pub fn match_slug<'a>(tenants: &'a [Model], fragment: &str) -> Option<&'a Model> {
    let needle = fragment.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    tenants
        .iter()
        .find(|tenant| tenant.slug == needle)
        .or_else(|| tenants.iter().find(|tenant| tenant.slug.starts_with(&needle)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn tenant_with_slug(slug: &str) -> Model {
        let now = Utc::now();
        Model {
            id: Id::new_v4(),
            name: slug.to_owned(),
            slug: slug.to_owned(),
            contact_email: None,
            contact_phone: None,
            logo: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[test]
    fn match_slug_prefers_exact_match_over_prefix() {
        let tenants = vec![tenant_with_slug("acme-clinic"), tenant_with_slug("acme")];

        let matched = match_slug(&tenants, "acme").unwrap();

        assert_eq!(matched.slug, "acme");
    }

    #[test]
    fn match_slug_falls_back_to_prefix_match() {
        let tenants = vec![tenant_with_slug("acme-clinic"), tenant_with_slug("glow-co")];

        let matched = match_slug(&tenants, "acme").unwrap();

        assert_eq!(matched.slug, "acme-clinic");
    }

    #[test]
    fn match_slug_is_case_insensitive() {
        let tenants = vec![tenant_with_slug("glow-co")];

        assert!(match_slug(&tenants, "GLOW").is_some());
    }

    #[test]
    fn match_slug_takes_first_candidate_for_ambiguous_prefix() {
        // The directory arrives sorted by slug, so "acme-aesthetics" is the
        // deterministic winner.
        let tenants = vec![
            tenant_with_slug("acme-aesthetics"),
            tenant_with_slug("acme-clinic"),
        ];

        let matched = match_slug(&tenants, "acme").unwrap();

        assert_eq!(matched.slug, "acme-aesthetics");
    }

    #[test]
    fn match_slug_returns_none_for_no_match_or_empty_fragment() {
        let tenants = vec![tenant_with_slug("glow-co")];

        assert!(match_slug(&tenants, "acme").is_none());
        assert!(match_slug(&tenants, "").is_none());
        assert!(match_slug(&tenants, "   ").is_none());
    }
}
