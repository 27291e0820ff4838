use reqwest::{header, Client, Url};
use thiserror::Error;

use crate::config::Config;
use crate::model::movie::{DiscoverResponse, Movie};

/// How a discovery fetch can fail. The consumer can branch on the variant
/// (retry prompt vs. "nothing found" vs. generic error) instead of receiving
/// a single undifferentiated empty signal.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("response body was empty")]
    EmptyBody,
    #[error("could not parse discovery response: {0}")]
    Parse(String),
}

#[derive(Debug, Clone)]
pub struct TmdbClient {
    client: Client,
    config: Config,
}

impl TmdbClient {
    pub fn new(config: Config) -> Self {
        let user_agent = header::HeaderValue::from_static("moviegrid/0.1");
        Self {
            client: Client::builder().user_agent(user_agent).build().unwrap(),
            config,
        }
    }

    /// Performs one GET against the discovery endpoint and decodes the body.
    /// A single attempt, no retries; an empty `results` array is a valid
    /// zero-movie success, distinct from every error variant.
    pub async fn discover(&self, sort_by: &str) -> Result<Vec<Movie>, FetchError> {
        let url = self.discover_url(sort_by)?;
        let body = self.get_body(url).await?;
        Self::parse_discover_body(&body)
    }

    /// Discovery URL with exactly two query parameters: the caller-supplied
    /// sort criterion and the configured API key.
    fn discover_url(&self, sort_by: &str) -> Result<Url, FetchError> {
        Url::parse_with_params(
            &self.config.discover_url,
            &[("sort_by", sort_by), ("api_key", self.config.api_key.as_str())],
        )
        .map_err(|e| FetchError::Network(format!("malformed discovery url: {}", e)))
    }

    async fn get_body(&self, url: Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!("server answered {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("failed to read response body: {}", e)))?;

        if body.trim().is_empty() {
            return Err(FetchError::EmptyBody);
        }

        Ok(body)
    }

    /// Decodes the whole body or nothing: a missing key or wrong type in any
    /// entry fails the entire parse, never yielding partial records.
    pub fn parse_discover_body(body: &str) -> Result<Vec<Movie>, FetchError> {
        let response: DiscoverResponse =
            serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;
        Ok(response.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str) -> String {
        format!(
            r#"{{"original_title":"{}","poster_path":"/{}.jpg","overview":"o","vote_average":7.5,"release_date":"2020-01-01"}}"#,
            title,
            title.to_lowercase()
        )
    }

    #[test]
    fn parses_all_entries_in_original_order() {
        let body = format!(r#"{{"results":[{},{},{}]}}"#, entry("A"), entry("B"), entry("C"));

        let movies = TmdbClient::parse_discover_body(&body).unwrap();

        assert_eq!(movies.len(), 3);
        let titles: Vec<&str> = movies.iter().map(|m| m.original_title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn parses_single_entry_with_all_fields() {
        let body = r#"{"results":[{"original_title":"A","poster_path":"/a.jpg","overview":"o","vote_average":7.5,"release_date":"2020-01-01"}]}"#;

        let movies = TmdbClient::parse_discover_body(body).unwrap();

        assert_eq!(
            movies,
            vec![Movie {
                original_title: "A".to_string(),
                poster_path: "/a.jpg".to_string(),
                overview: "o".to_string(),
                vote_average: 7.5,
                release_date: "2020-01-01".to_string(),
            }]
        );
    }

    #[test]
    fn empty_results_array_is_a_zero_movie_success() {
        let movies = TmdbClient::parse_discover_body(r#"{"results":[]}"#).unwrap();
        assert!(movies.is_empty());
    }

    #[test]
    fn missing_key_in_any_entry_fails_the_whole_parse() {
        // Second entry has no release_date; the first must not survive either.
        let body = format!(
            r#"{{"results":[{},{{"original_title":"B","poster_path":"/b.jpg","overview":"o","vote_average":1.0}}]}}"#,
            entry("A")
        );

        assert!(matches!(
            TmdbClient::parse_discover_body(&body),
            Err(FetchError::Parse(_))
        ));
    }

    #[test]
    fn type_mismatch_fails_the_whole_parse() {
        let body = r#"{"results":[{"original_title":"A","poster_path":"/a.jpg","overview":"o","vote_average":"high","release_date":"2020-01-01"}]}"#;

        assert!(matches!(
            TmdbClient::parse_discover_body(body),
            Err(FetchError::Parse(_))
        ));
    }

    #[test]
    fn body_that_is_not_json_fails_as_parse_error() {
        assert!(matches!(
            TmdbClient::parse_discover_body("<html>offline</html>"),
            Err(FetchError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn empty_response_body_is_its_own_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = tokio::io::AsyncReadExt::read(&mut socket, &mut buf).await;
            let _ = tokio::io::AsyncWriteExt::write_all(
                &mut socket,
                b"HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n",
            )
            .await;
        });

        let mut config = Config::new("test-key".to_string());
        config.discover_url = format!("http://{}/3/discover/movie", addr);
        let client = TmdbClient::new(config);

        assert!(matches!(
            client.discover("popularity.desc").await,
            Err(FetchError::EmptyBody)
        ));
    }

    #[test]
    fn missing_results_key_fails_as_parse_error() {
        assert!(matches!(
            TmdbClient::parse_discover_body(r#"{"page":1}"#),
            Err(FetchError::Parse(_))
        ));
    }
}
