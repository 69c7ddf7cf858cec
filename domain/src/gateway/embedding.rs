use crate::error::{DomainErrorKind, Error, ExternalErrorKind, InternalErrorKind};
use log::*;
use reqwest::header;
use serde_json::json;
use service::config::Config;

/// Builds a reqwest client pre-configured for the external embedding service.
/// The API key travels as a bearer token on every request.
pub async fn client(config: &Config) -> Result<reqwest::Client, Error> {
    let mut headers = header::HeaderMap::new();

    if let Some(api_key) = config.embedding_api_key() {
        let mut auth_value =
            header::HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|err| Error {
                source: Some(Box::new(err)),
                error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
            })?;
        auth_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_value);
    }

    Ok(reqwest::Client::builder()
        .default_headers(headers)
        .build()?)
}

/// Submits a single text to the embedding service. The service persists the
/// resulting vector itself; we only care whether the submission was accepted.
pub async fn embed(
    client: &reqwest::Client,
    base_url: &str,
    source_id: &str,
    text: &str,
) -> Result<(), Error> {
    let full_url = format!("{base_url}/embeddings");

    let response = client
        .post(full_url)
        .json(&json!({ "source_id": source_id, "input": text }))
        .send()
        .await?;

    if response.status().is_success() {
        Ok(())
    } else {
        warn!(
            "Embedding service rejected item {source_id}: {}",
            response.status()
        );
        Err(Error {
            source: None,
            error_kind: DomainErrorKind::External(ExternalErrorKind::Network),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn embed_succeeds_on_2xx_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/embeddings")
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let config = Config::default();
        let client = client(&config).await.unwrap();

        let result = embed(&client, &server.url(), "service:1", "Full balayage").await;

        assert!(result.is_ok());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn embed_surfaces_server_errors_as_network_errors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/embeddings")
            .with_status(500)
            .create_async()
            .await;

        let config = Config::default();
        let client = client(&config).await.unwrap();

        let result = embed(&client, &server.url(), "service:1", "Full balayage").await;

        assert_eq!(
            result.unwrap_err().error_kind,
            DomainErrorKind::External(ExternalErrorKind::Network)
        );
    }
}
