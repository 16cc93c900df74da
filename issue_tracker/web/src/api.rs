//! `reqwest` implementation of the issue API.

use issue_tracker_core::{ApiError, Issue, IssueApi, IssueDraft, IssueFilter};
use reqwest::StatusCode;
use serde::Deserialize;

/// HTTP client for the issue REST API. Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct HttpIssueApi {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

impl HttpIssueApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn issue_url(&self, id: &str) -> String {
        self.url(&format!("/issues/{id}"))
    }

    /// Builds the list request without sending it.
    pub fn list_request(&self, filter: &IssueFilter) -> Result<reqwest::Request, ApiError> {
        self.client
            .get(self.url("/issues"))
            .query(&filter.query_pairs())
            .build()
            .map_err(transport)
    }

    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response, ApiError> {
        let response = self.client.execute(request).await.map_err(transport)?;
        check_response(response).await
    }

    async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let request = request.build().map_err(transport)?;
        let response = self.send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

/// Maps non-success responses onto [`ApiError`]; successful responses pass through unchanged.
pub async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: response.text().await.unwrap_or_default(),
        });
    }
    Ok(response)
}

impl IssueApi for HttpIssueApi {
    #[tracing::instrument(skip(self))]
    async fn list_issues(&self, filter: &IssueFilter) -> Result<Vec<Issue>, ApiError> {
        let request = self.list_request(filter)?;
        let response = self.send(request).await?;
        response
            .json::<Vec<Issue>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[tracing::instrument(skip(self))]
    async fn get_issue(&self, id: &str) -> Result<Issue, ApiError> {
        self.send_json(self.client.get(self.issue_url(id))).await
    }

    #[tracing::instrument(skip(self))]
    async fn create_issue(&self, draft: &IssueDraft) -> Result<Issue, ApiError> {
        self.send_json(self.client.post(self.url("/issues")).json(draft))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn update_issue<'api, 'id, 'draft>(
        &'api self,
        id: &'id str,
        draft: &'draft IssueDraft,
    ) -> Result<Issue, ApiError> {
        self.send_json(self.client.put(self.issue_url(id)).json(draft))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn health(&self) -> Result<(), ApiError> {
        let health: HealthResponse = self.send_json(self.client.get(self.url("/health"))).await?;
        if health.status == "ok" {
            Ok(())
        } else {
            Err(ApiError::Decode(format!(
                "unexpected health status '{}'",
                health.status
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use issue_tracker_core::{IssuePriority, IssueStatus};

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    mod list_request_tests {
        use super::*;

        #[test]
        fn empty_filter_sends_no_query() {
            let api = HttpIssueApi::new("http://127.0.0.1:5000");

            let request = api.list_request(&IssueFilter::default()).unwrap();

            assert_eq!(request.method(), reqwest::Method::GET);
            assert_eq!(request.url().as_str(), "http://127.0.0.1:5000/issues");
            assert_eq!(request.url().query(), None);
        }

        #[test]
        fn only_non_empty_keys_are_sent() {
            let api = HttpIssueApi::new("http://127.0.0.1:5000");
            let filter = IssueFilter {
                search: String::new(),
                status: Some(IssueStatus::Open),
                priority: None,
                assignee: String::new(),
            };

            let request = api.list_request(&filter).unwrap();

            assert_eq!(request.url().query(), Some("status=Open"));
        }

        #[test]
        fn text_constraints_are_url_encoded() {
            let api = HttpIssueApi::new("http://127.0.0.1:5000/");
            let filter = IssueFilter {
                search: "login page".to_string(),
                status: None,
                priority: Some(IssuePriority::High),
                assignee: "a&b".to_string(),
            };

            let request = api.list_request(&filter).unwrap();

            assert_eq!(
                request.url().as_str(),
                "http://127.0.0.1:5000/issues?search=login+page&priority=High&assignee=a%26b"
            );
        }
    }

    #[test]
    fn issue_urls_use_base_url() {
        let api = HttpIssueApi::new("https://issues.example.com/");

        assert_eq!(api.base_url(), "https://issues.example.com");
        assert_eq!(api.issue_url("42"), "https://issues.example.com/issues/42");
    }

    #[tokio::test]
    async fn check_response_success() {
        let response = mock_response(200, "[]");

        assert!(check_response(response).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_not_found() {
        let response = mock_response(404, r#"{"error": "Issue not found"}"#);

        let err = check_response(response).await.unwrap_err();

        assert_eq!(err, ApiError::NotFound);
    }

    #[tokio::test]
    async fn check_response_api_error_keeps_body() {
        let response = mock_response(400, r#"{"error": "Title is required"}"#);

        let err = check_response(response).await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: r#"{"error": "Title is required"}"#.to_string(),
            }
        );
    }
}
