//! Minimal GraphQL-over-HTTP client.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::{FetchClient, FetchError};

#[derive(Serialize)]
struct GraphqlRequest<'a, V: Serialize> {
    query: &'a str,
    variables: &'a V,
}

/// The envelope is read before `data` is decoded, so an `errors` array
/// survives a `data` member of the wrong shape.
#[derive(Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<Vec<GraphqlErrorEntry>>,
}

#[derive(Deserialize)]
struct GraphqlErrorEntry {
    message: String,
}

/// Sends documents to a single GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    fetch: FetchClient,
    endpoint: String,
}

impl GraphqlClient {
    /// Create a client posting to `endpoint`.
    pub fn new(fetch: FetchClient, endpoint: impl Into<String>) -> Self {
        Self {
            fetch,
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a query or mutation and decode its `data` member.
    ///
    /// An `errors` array in the body wins over the HTTP status so the
    /// server's own messages reach the caller.
    pub async fn execute<V, T>(
        &self,
        document: &str,
        variables: &V,
        bearer: Option<&str>,
    ) -> Result<T, FetchError>
    where
        V: Serialize + Sync,
        T: DeserializeOwned,
    {
        let mut request = self.fetch.post(self.endpoint.as_str()).json(&GraphqlRequest {
            query: document,
            variables,
        })?;
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let envelope = serde_json::from_slice::<GraphqlResponse>(&response.body);

        if let Ok(GraphqlResponse {
            errors: Some(errors),
            ..
        }) = &envelope
        {
            if !errors.is_empty() {
                return Err(FetchError::Graphql(
                    errors.iter().map(|e| e.message.clone()).collect(),
                ));
            }
        }

        if !response.is_success() {
            return Err(FetchError::HttpError {
                status: response.status,
                message: response.error_message(),
            });
        }

        let data = envelope
            .map_err(|e| FetchError::ParseError(e.to_string()))?
            .data
            .filter(|data| !data.is_null())
            .ok_or_else(|| FetchError::ParseError("response carried no data".to_string()))?;
        serde_json::from_value(data).map_err(|e| FetchError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::testing::ScriptedTransport;
    use crate::Response;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Created {
        #[serde(rename = "createBooking")]
        create_booking: Id,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Id {
        id: String,
    }

    fn client(transport: Arc<ScriptedTransport>) -> GraphqlClient {
        GraphqlClient::new(FetchClient::new(transport), "http://localhost:8000/graphql")
    }

    #[tokio::test]
    async fn test_execute_posts_query_and_variables() {
        let transport = Arc::new(ScriptedTransport::replying(vec![Response::json_body(
            200,
            &json!({ "data": { "createBooking": { "id": "b1" } } }),
        )]));
        let gql = client(transport.clone());

        let out: Created = gql
            .execute("mutation X { createBooking { id } }", &json!({ "totalPrice": 500000.0 }), Some("jwt"))
            .await
            .unwrap();

        assert_eq!(out.create_booking.id, "b1");
        let sent = &transport.sent()[0];
        assert_eq!(sent.url, "http://localhost:8000/graphql");
        assert_eq!(sent.headers.get("Authorization").unwrap(), "Bearer jwt");
        let body = sent.json_body().unwrap();
        assert_eq!(body["variables"]["totalPrice"], 500000.0);
        assert!(body["query"].as_str().unwrap().contains("createBooking"));
    }

    #[tokio::test]
    async fn test_errors_array_becomes_graphql_error() {
        let transport = Arc::new(ScriptedTransport::replying(vec![Response::json_body(
            200,
            &json!({ "data": null, "errors": [{ "message": "Vehicle not found" }] }),
        )]));

        let err = client(transport)
            .execute::<_, Created>("query", &json!({}), None)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Graphql(ref m) if m == &vec!["Vehicle not found".to_string()]));
    }

    #[tokio::test]
    async fn test_http_failure_without_errors_array() {
        let transport = Arc::new(ScriptedTransport::replying(vec![Response::new(
            503,
            Default::default(),
            b"upstream down".to_vec(),
        )]));

        let err = client(transport)
            .execute::<_, Created>("query", &json!({}), None)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::HttpError { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_missing_data_is_parse_error() {
        let transport = Arc::new(ScriptedTransport::replying(vec![Response::json_body(
            200,
            &json!({ "data": null }),
        )]));

        let err = client(transport)
            .execute::<_, Created>("query", &json!({}), None)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_errors_win_over_undecodable_data() {
        let transport = Arc::new(ScriptedTransport::replying(vec![Response::json_body(
            200,
            &json!({
                "data": { "createBooking": "not an object" },
                "errors": [{ "message": "Vehicle is sold out" }]
            }),
        )]));

        let err = client(transport)
            .execute::<_, Created>("query", &json!({}), None)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Graphql(ref m) if m == &vec!["Vehicle is sold out".to_string()]));
    }
}
