//! HTTP backend for `GET /api/places/autocomplete`.

use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use url::Url;

use super::{PlaceSearch, SearchRequest};
use crate::error_handling::SearchError;
use crate::models::Prediction;

/// Calls the places autocomplete endpoint with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpPlaceSearch {
    client: Arc<reqwest::Client>,
    endpoint: Url,
}

impl HttpPlaceSearch {
    /// Creates a backend for a fully resolved endpoint URL.
    ///
    /// See [`crate::initialization::init_search_client`] to build one from
    /// widget options.
    pub fn new(client: Arc<reqwest::Client>, endpoint: Url) -> Self {
        HttpPlaceSearch { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Builds the request URL with `query`, `sessionToken`, `types` and `limit`.
    pub fn request_url(&self, request: &SearchRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("query", &request.query)
            .append_pair("sessionToken", &request.session_token)
            .append_pair("types", &request.types)
            .append_pair("limit", &request.limit.to_string());
        url
    }
}

impl PlaceSearch for HttpPlaceSearch {
    fn autocomplete(
        &self,
        request: SearchRequest,
    ) -> BoxFuture<'static, Result<Vec<Prediction>, SearchError>> {
        let client = Arc::clone(&self.client);
        let url = self.request_url(&request);

        async move {
            log::debug!("GET {}", url);
            let response = client.get(url).send().await?;

            let status = response.status().as_u16();
            if status != 200 {
                return Err(SearchError::Status(status));
            }

            let body = response.text().await?;
            parse_predictions(&body)
        }
        .boxed()
    }
}

/// Parses a `{ "predictions": [...] }` body.
///
/// A missing or non-array `predictions` field counts as malformed; an empty
/// array is a valid "no results" answer.
pub fn parse_predictions(body: &str) -> Result<Vec<Prediction>, SearchError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| SearchError::MalformedBody(e.to_string()))?;

    let predictions = value
        .get("predictions")
        .filter(|p| p.is_array())
        .cloned()
        .ok_or_else(|| SearchError::MalformedBody("missing predictions array".to_string()))?;

    serde_json::from_value(predictions).map_err(|e| SearchError::MalformedBody(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlaceType;
    use httptest::{matchers::*, responders::*, Expectation, Server};
    use serde_json::json;

    fn request(query: &str) -> SearchRequest {
        SearchRequest {
            query: query.to_string(),
            session_token: "tok-1".to_string(),
            types: "city,state,country".to_string(),
            limit: 8,
        }
    }

    fn backend_for(server: &Server) -> HttpPlaceSearch {
        let endpoint = Url::parse(&server.url_str("/api/places/autocomplete"))
            .expect("httptest url is valid");
        HttpPlaceSearch::new(Arc::new(reqwest::Client::new()), endpoint)
    }

    #[test]
    fn test_parse_predictions_ok() {
        let body = r#"{"predictions":[{"place_id":"p1","description":"Paris, France","type":"city"}]}"#;
        let predictions = parse_predictions(body).expect("valid body");
        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].main_text, "Paris");
    }

    #[test]
    fn test_parse_predictions_empty_array_is_ok() {
        let predictions = parse_predictions(r#"{"predictions":[]}"#).expect("valid body");
        assert!(predictions.is_empty());
    }

    #[test]
    fn test_parse_predictions_missing_field() {
        let result = parse_predictions(r#"{"results":[]}"#);
        assert!(matches!(result, Err(SearchError::MalformedBody(_))));
    }

    #[test]
    fn test_parse_predictions_not_json() {
        let result = parse_predictions("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(SearchError::MalformedBody(_))));
    }

    #[test]
    fn test_request_url_encodes_parameters() {
        let backend = HttpPlaceSearch::new(
            Arc::new(reqwest::Client::new()),
            Url::parse("http://localhost:3000/api/places/autocomplete").expect("valid"),
        );
        let url = backend.request_url(&request("São Paulo"));
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("query".to_string(), "São Paulo".to_string()),
                ("sessionToken".to_string(), "tok-1".to_string()),
                ("types".to_string(), "city,state,country".to_string()),
                ("limit".to_string(), "8".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_autocomplete_success() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/places/autocomplete"),
                request::query(url_decoded(contains(("query", "par")))),
                request::query(url_decoded(contains(("sessionToken", "tok-1")))),
                request::query(url_decoded(contains(("limit", "8")))),
            ])
            .respond_with(json_encoded(json!({
                "predictions": [
                    {"place_id": "p1", "description": "Paris, France", "main_text": "Paris",
                     "secondary_text": "France", "type": "city", "lat": 48.85, "lon": 2.35}
                ]
            }))),
        );

        let predictions = backend_for(&server)
            .autocomplete(request("par"))
            .await
            .expect("search succeeds");
        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].place_type, PlaceType::City);
        assert_eq!(predictions[0].lon, Some(2.35));
    }

    #[tokio::test]
    async fn test_autocomplete_non_200_is_error() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/places/autocomplete"))
                .respond_with(status_code(503)),
        );

        let result = backend_for(&server).autocomplete(request("par")).await;
        assert!(matches!(result, Err(SearchError::Status(503))));
    }

    #[tokio::test]
    async fn test_autocomplete_malformed_body_is_error() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/api/places/autocomplete"))
                .respond_with(status_code(200).body(r#"{"error":"quota"}"#)),
        );

        let result = backend_for(&server).autocomplete(request("par")).await;
        assert!(matches!(result, Err(SearchError::MalformedBody(_))));
    }
}
