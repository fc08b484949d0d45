use graphql_client::GraphQLQuery;
use log::debug;
use reqwest::Client;
use url::Url;

use crate::auth::Token;
use crate::error::{Result, StreakError};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("streakcard/", env!("CARGO_PKG_VERSION"));

pub struct GitHubClient {
    pub client: Client,
    pub graphql_url: Url,
    pub token: Option<Token>,
}

impl GitHubClient {
    pub fn new(base_url: &str, token: Option<Token>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| StreakError::Config(format!("Failed to create HTTP client: {e}")))?;

        // Keep any path prefix (GitHub Enterprise serves `/api/graphql`).
        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let graphql_url = Url::parse(&base_url)
            .map_err(|e| StreakError::Config(format!("Invalid base URL: {e}")))?
            .join("graphql")
            .map_err(|e| StreakError::Config(format!("Invalid GraphQL URL: {e}")))?;

        Ok(Self {
            client,
            graphql_url,
            token,
        })
    }

    pub fn auth_request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(token) = &self.token {
            request.bearer_auth(token.as_str())
        } else {
            request
        }
    }

    /// Posts `Q` with `variables` and returns the response data.
    ///
    /// Fails on non-success HTTP status, on any GraphQL error, and on a
    /// response without data.
    pub async fn post_query<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData> {
        let request_body = Q::build_query(variables);
        debug!("POST {} ({})", self.graphql_url, request_body.operation_name);

        let request = self
            .client
            .post(self.graphql_url.clone())
            .json(&request_body);
        let request = self.auth_request(request);

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StreakError::Api(format!("HTTP {status}: {body}")));
        }

        let response_body: graphql_client::Response<Q::ResponseData> = response.json().await?;

        if let Some(errors) = response_body.errors.filter(|errors| !errors.is_empty()) {
            let error_messages: Vec<String> = errors.iter().map(|e| e.message.clone()).collect();
            let joined_errors = error_messages.join(", ");
            return Err(StreakError::Api(format!("GraphQL errors: {joined_errors}")));
        }

        response_body
            .data
            .ok_or_else(|| StreakError::Api("GraphQL response contained no data".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_graphql_url() {
        let client = GitHubClient::new(DEFAULT_API_URL, None).unwrap();

        assert_eq!(client.graphql_url.as_str(), "https://api.github.com/graphql");
    }

    #[test]
    fn test_enterprise_graphql_url_keeps_path_prefix() {
        let client = GitHubClient::new("https://github.example.com/api", None).unwrap();

        assert_eq!(
            client.graphql_url.as_str(),
            "https://github.example.com/api/graphql"
        );
    }

    #[test]
    fn test_trailing_slash_is_accepted() {
        let client = GitHubClient::new("https://api.github.com/", None).unwrap();

        assert_eq!(client.graphql_url.as_str(), "https://api.github.com/graphql");
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let result = GitHubClient::new("not a url", None);

        assert!(matches!(result, Err(StreakError::Config(_))));
    }
}
