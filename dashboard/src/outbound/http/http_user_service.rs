//! Reqwest-backed user service adapter.
//!
//! This adapter owns transport details only: URL construction, timeout and
//! HTTP status mapping, and JSON encoding and decoding of user records.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

use super::dto::UserDto;
use crate::domain::ports::{UserService, UserServiceError};
use crate::domain::{User, UserId};

const DEFAULT_USER_AGENT: &str = "user-dashboard/0.1";
const USERS_COLLECTION: &str = "users";

/// Errors raised while building an [`HttpUserService`].
#[derive(Debug, Error)]
pub enum HttpUserServiceError {
    /// The base URL cannot carry path segments (for example `mailto:`).
    #[error("base URL {url} cannot be used as an API root")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: Url,
    },
    /// The reqwest client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// User service adapter talking to a REST collection at `<base>/users`.
pub struct HttpUserService {
    client: Client,
    base_url: Url,
}

impl HttpUserService {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    /// ```rust,ignore
    /// let service = HttpUserService::new(base_url, Duration::from_secs(10))?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when `base_url` cannot hold path segments or the
    /// reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, HttpUserServiceError> {
        if base_url.cannot_be_a_base() {
            return Err(HttpUserServiceError::InvalidBaseUrl { url: base_url });
        }
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self { client, base_url })
    }

    fn collection_url(&self) -> Url {
        endpoint(&self.base_url, &[USERS_COLLECTION])
    }

    fn member_url(&self, id: UserId) -> Url {
        endpoint(&self.base_url, &[USERS_COLLECTION, id.to_string().as_str()])
    }
}

#[async_trait]
impl UserService for HttpUserService {
    async fn list_users(&self) -> Result<Vec<User>, UserServiceError> {
        let response = self
            .client
            .get(self.collection_url())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status));
        }
        parse_users(body.as_ref())
    }

    async fn create_user(&self, user: &User) -> Result<(), UserServiceError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(&UserDto::from(user))
            .send()
            .await
            .map_err(map_transport_error)?;
        ensure_success(response.status())
    }

    async fn delete_user(&self, id: UserId) -> Result<(), UserServiceError> {
        let response = self
            .client
            .delete(self.member_url(id))
            .send()
            .await
            .map_err(map_transport_error)?;
        ensure_success(response.status())
    }
}

/// Append `segments` to the base path, tolerating a trailing slash.
fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

fn parse_users(body: &[u8]) -> Result<Vec<User>, UserServiceError> {
    let decoded: Vec<UserDto> = serde_json::from_slice(body).map_err(|error| {
        UserServiceError::decode(format!("invalid user list payload: {error}"))
    })?;
    Ok(decoded.into_iter().map(User::from).collect())
}

fn ensure_success(status: StatusCode) -> Result<(), UserServiceError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(map_status_error(status))
    }
}

fn map_transport_error(error: reqwest::Error) -> UserServiceError {
    if error.is_timeout() {
        UserServiceError::timeout(error.to_string())
    } else if error.is_decode() {
        UserServiceError::decode(error.to_string())
    } else {
        UserServiceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode) -> UserServiceError {
    let reason = status.canonical_reason().unwrap_or("unexpected status");
    UserServiceError::rejected(status.as_u16(), reason)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for mapping helpers and for the requests sent to
    //! a loopback server.

    use super::*;
    use rstest::rstest;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    /// Answer one request with `status` and `body`, returning the raw request.
    async fn serve_once(status: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind loopback listener");
        let address = listener.local_addr().expect("listener address");
        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept connection");
            let request = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream
                .write_all(response.as_bytes())
                .await
                .expect("write response");
            stream.shutdown().await.ok();
            request
        });
        (url(&format!("http://{address}/")), server)
    }

    async fn read_request(stream: &mut TcpStream) -> String {
        let mut raw = Vec::new();
        let mut chunk = [0_u8; 1024];
        loop {
            let read = stream.read(&mut chunk).await.expect("read request");
            raw.extend_from_slice(chunk.get(..read).unwrap_or_default());
            let text = String::from_utf8_lossy(&raw).into_owned();
            if let Some((head, body)) = text.split_once("\r\n\r\n") {
                if body.len() >= content_length(head) {
                    return text;
                }
            }
            if read == 0 {
                return text;
            }
        }
    }

    fn content_length(head: &str) -> usize {
        head.lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse().ok())
            .unwrap_or(0)
    }

    fn service_at(base: Url) -> HttpUserService {
        HttpUserService::new(base, Duration::from_secs(5)).expect("client")
    }

    #[tokio::test]
    async fn create_user_posts_the_record_as_json() {
        let (base, server) = serve_once("201 Created", "{}").await;

        service_at(base)
            .create_user(&User::new(UserId::new(5), "Ann", "a@x.com"))
            .await
            .expect("create succeeds");

        let request = server.await.expect("server task");
        assert!(request.starts_with("POST /users HTTP/1.1\r\n"), "{request}");
        assert!(
            request
                .to_ascii_lowercase()
                .contains("content-type: application/json"),
            "{request}"
        );
        assert!(
            request.ends_with(r#"{"id":5,"name":"Ann","email":"a@x.com"}"#),
            "{request}"
        );
    }

    #[tokio::test]
    async fn delete_user_targets_the_member_url() {
        let (base, server) = serve_once("200 OK", "{}").await;

        service_at(base)
            .delete_user(UserId::new(7))
            .await
            .expect("delete succeeds");

        let request = server.await.expect("server task");
        assert!(request.starts_with("DELETE /users/7 HTTP/1.1\r\n"), "{request}");
    }

    #[tokio::test]
    async fn list_users_decodes_the_collection() {
        let (base, server) = serve_once(
            "200 OK",
            r#"[{"id":-4,"name":"Ann","email":"a@x.com","phone":"555"}]"#,
        )
        .await;

        let users = service_at(base).list_users().await.expect("list succeeds");

        assert_eq!(users, vec![User::new(UserId::new(-4), "Ann", "a@x.com")]);
        let request = server.await.expect("server task");
        assert!(request.starts_with("GET /users HTTP/1.1\r\n"), "{request}");
    }

    #[rstest]
    #[case("500 Internal Server Error", 500, "Internal Server Error")]
    #[case("404 Not Found", 404, "Not Found")]
    #[tokio::test]
    async fn list_users_rejects_error_statuses(
        #[case] status: &'static str,
        #[case] code: u16,
        #[case] reason: &str,
    ) {
        let (base, server) = serve_once(status, "{}").await;

        let error = service_at(base)
            .list_users()
            .await
            .expect_err("error status should fail");

        assert_eq!(error, UserServiceError::rejected(code, reason));
        server.await.expect("server task");
    }

    fn url(raw: &str) -> Url {
        Url::parse(raw).expect("valid test URL")
    }

    #[rstest]
    #[case("https://api.example.com", "https://api.example.com/users")]
    #[case("https://api.example.com/", "https://api.example.com/users")]
    #[case("https://api.example.com/v1", "https://api.example.com/v1/users")]
    #[case("https://api.example.com/v1/", "https://api.example.com/v1/users")]
    fn builds_collection_url_under_base(#[case] base: &str, #[case] expected: &str) {
        let service = HttpUserService::new(url(base), Duration::from_secs(1)).expect("client");
        assert_eq!(service.collection_url().as_str(), expected);
    }

    #[test]
    fn builds_member_url_with_id() {
        let service = HttpUserService::new(url("https://api.example.com/"), Duration::from_secs(1))
            .expect("client");
        assert_eq!(
            service.member_url(UserId::new(7)).as_str(),
            "https://api.example.com/users/7"
        );
    }

    #[test]
    fn rejects_base_urls_without_paths() {
        let result = HttpUserService::new(url("mailto:ops@example.com"), Duration::from_secs(1));
        assert!(matches!(
            result,
            Err(HttpUserServiceError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn parses_user_lists_ignoring_extra_fields() {
        let body = r#"[
            {
                "id": 1,
                "name": "Leanne Graham",
                "username": "Bret",
                "email": "Sincere@april.biz",
                "address": { "city": "Gwenborough" }
            },
            { "id": 2, "name": "Ervin Howell", "email": "Shanna@melissa.tv", "bio": "Writer" }
        ]"#;

        let users = parse_users(body.as_bytes()).expect("JSON should decode");
        assert_eq!(users.len(), 2);
        assert_eq!(users[0], User::new(UserId::new(1), "Leanne Graham", "Sincere@april.biz"));
        assert_eq!(users[1].bio(), Some("Writer"));
    }

    #[rstest]
    #[case::object("{}")]
    #[case::missing_email(r#"[{ "id": 1, "name": "Ann" }]"#)]
    #[case::text("<html>oops</html>")]
    fn rejects_malformed_user_lists(#[case] body: &str) {
        let error = parse_users(body.as_bytes()).expect_err("decode should fail");
        assert!(
            matches!(error, UserServiceError::Decode { .. }),
            "malformed payloads should map to Decode, got {error:?}",
        );
    }

    #[rstest]
    #[case(StatusCode::OK, true)]
    #[case(StatusCode::CREATED, true)]
    #[case(StatusCode::NO_CONTENT, true)]
    #[case(StatusCode::NOT_FOUND, false)]
    #[case(StatusCode::INTERNAL_SERVER_ERROR, false)]
    fn accepts_only_success_statuses(#[case] status: StatusCode, #[case] accepted: bool) {
        assert_eq!(ensure_success(status).is_ok(), accepted);
    }

    #[test]
    fn status_errors_carry_code_and_reason() {
        let error = map_status_error(StatusCode::NOT_FOUND);
        assert_eq!(error, UserServiceError::rejected(404_u16, "Not Found"));
    }

    #[test]
    fn create_payload_omits_missing_bio() {
        let payload = serde_json::to_value(UserDto::from(&User::new(
            UserId::new(5),
            "Ann",
            "a@x.com",
        )))
        .expect("serialises");
        assert_eq!(
            payload,
            serde_json::json!({ "id": 5, "name": "Ann", "email": "a@x.com" })
        );
    }
}
