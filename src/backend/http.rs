//! HTTP implementation of the search backend.
//!
//! Thin `reqwest` client over the scholarly-publication API. Maps HTTP 404 to
//! the distinguished not-found case, every other non-success status to a
//! generic backend failure carrying a body snippet, and transport or decode
//! failures to the network error variant.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{ArticleSearch, SearchBackend, SemanticSearch};
use crate::domain::{
    Article, Researcher, ResearcherProfile, ResearcherSummary, Result, SearchError,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Maximum body bytes preserved in backend error messages.
const ERROR_SNIPPET_CHARS: usize = 200;

/// `reqwest`-based [`SearchBackend`] implementation.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpBackend {
    /// Creates a backend client for the given base URL.
    #[must_use]
    pub fn new(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        resource: &str,
    ) -> Result<T> {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, resource, "backend request");

        let response = self
            .http
            .get(&url)
            .query(query)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(resource, "backend returned 404");
            return Err(SearchError::NotFound {
                resource: resource.to_string(),
            });
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let snippet: String = text.chars().take(ERROR_SNIPPET_CHARS).collect();
            warn!(status = %status, resource, "backend request failed");
            return Err(SearchError::Backend {
                status: status.as_u16(),
                message: snippet,
            });
        }

        Ok(response.json().await?)
    }

    /// Converts a not-found error into `Ok(None)` for point lookups.
    fn optional<T>(result: Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl SearchBackend for HttpBackend {
    async fn search_articles(&self, term: &str, include_summary: bool) -> Result<ArticleSearch> {
        self.get_json(
            "/artigos/buscar",
            &[
                ("termo", term.to_string()),
                ("incluir_resumo", include_summary.to_string()),
            ],
            "article search",
        )
        .await
    }

    async fn search_articles_semantic(&self, term: &str, k: usize) -> Result<SemanticSearch> {
        self.get_json(
            "/artigos/busca_semantica",
            &[("termo", term.to_string()), ("k", k.to_string())],
            "semantic article search",
        )
        .await
    }

    async fn search_researchers(&self, term: &str) -> Result<Vec<Researcher>> {
        self.get_json(
            "/pesquisadores/buscar",
            &[("termo", term.to_string())],
            "researcher search",
        )
        .await
    }

    async fn researcher_profile(&self, id: &str) -> Result<ResearcherProfile> {
        self.get_json(
            &format!("/pesquisadores/{id}/perfil"),
            &[],
            &format!("researcher profile {id}"),
        )
        .await
    }

    async fn researcher_summary(&self, id: &str) -> Result<ResearcherSummary> {
        self.get_json(
            &format!("/pesquisadores/{id}/resumo"),
            &[],
            &format!("researcher summary {id}"),
        )
        .await
    }

    async fn article_by_id(&self, id: &str) -> Result<Option<Article>> {
        Self::optional(
            self.get_json(&format!("/artigos/{id}"), &[], &format!("article {id}"))
                .await,
        )
    }

    async fn researcher_by_id(&self, id: &str) -> Result<Option<Researcher>> {
        Self::optional(
            self.get_json(
                &format!("/pesquisadores/{id}"),
                &[],
                &format!("researcher {id}"),
            )
            .await,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn article_json(id: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": "Machine Learning Applications in Healthcare Diagnostics",
            "journal": "Nature Medicine",
            "year": 2023,
            "abstract": "Recent developments in machine learning...",
            "doi": "10.1038/s41591-023-01234-5",
            "qualis": "A1",
            "authors": [
                { "id": "r-1", "name": "Dr. Maria Silva Santos" }
            ]
        })
    }

    #[tokio::test]
    async fn article_search_decodes_wire_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/artigos/buscar"))
            .and(query_param("termo", "machine learning"))
            .and(query_param("incluir_resumo", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "resultados": [article_json("a-1")],
                "resumo_ia": "Esta busca retornou 1 artigo relevante.",
                "tags": ["machine learning", "healthcare"]
            })))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(Client::new(), &server.uri());
        let result = backend.search_articles("machine learning", true).await.unwrap();

        assert_eq!(result.results.len(), 1);
        assert_eq!(result.results[0].id, "a-1");
        assert_eq!(result.ai_summary, "Esta busca retornou 1 artigo relevante.");
        assert_eq!(result.tags, ["machine learning", "healthcare"]);
    }

    #[tokio::test]
    async fn semantic_search_decodes_scored_documents() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/artigos/busca_semantica"))
            .and(query_param("k", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "query": "ml",
                "resultados": [
                    { "documento": article_json("a-2"), "score": 0.91 }
                ]
            })))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(Client::new(), &server.uri());
        let result = backend.search_articles_semantic("ml", 10).await.unwrap();

        assert_eq!(result.results.len(), 1);
        assert_eq!(result.results[0].article.id, "a-2");
        assert!((result.results[0].score - 0.91).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn researcher_search_decodes_flat_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pesquisadores/buscar"))
            .and(query_param("termo", "silva"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "id": "r-1",
                    "name": "Dr. Maria Silva Santos",
                    "title": "Doutora em Ciência da Computação",
                    "photo": "https://example.com/r-1.jpg"
                }
            ])))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(Client::new(), &server.uri());
        let result = backend.search_researchers("silva").await.unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Dr. Maria Silva Santos");
    }

    #[tokio::test]
    async fn profile_404_is_distinguished_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pesquisadores/missing/perfil"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(Client::new(), &server.uri());
        let result = backend.researcher_profile("missing").await;
        assert!(matches!(result, Err(SearchError::NotFound { .. })));
    }

    #[tokio::test]
    async fn point_lookup_404_is_explicit_absence() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/artigos/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(Client::new(), &server.uri());
        let result = backend.article_by_id("missing").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn server_error_carries_status_and_body_snippet() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/artigos/buscar"))
            .respond_with(ResponseTemplate::new(500).set_body_string("index unavailable"))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(Client::new(), &server.uri());
        let result = backend.search_articles("ml", false).await;
        match result {
            Err(SearchError::Backend { status, message }) => {
                assert_eq!(status, 500);
                assert!(message.contains("index unavailable"));
            }
            other => panic!("expected backend error, got {other:?}"),
        }
    }
}
