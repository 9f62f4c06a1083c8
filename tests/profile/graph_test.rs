//! Graph provider against an in-process HTTP server.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use sedc_signature::profile::graph::GraphProfileProvider;
use sedc_signature::profile::{ProfileError, ProfileProvider, UserProfile};

const USER_JSON: &str = r#"{
    "displayName": "Aminah Binti Ali",
    "jobTitle": "Senior Executive",
    "mail": "aminah@sedc.com.my",
    "mobilePhone": "+60 19-000 0000",
    "businessPhones": ["+60 82-416 777"],
    "officeLocation": "Menara SEDC",
    "department": "Group Digital and Technology",
    "companyName": null
}"#;

/// What the mock directory answers for one route.
#[derive(Clone)]
struct Reply {
    status_line: &'static str,
    content_type: &'static str,
    body: Vec<u8>,
}

impl Reply {
    fn ok(content_type: &'static str, body: &[u8]) -> Self {
        Self {
            status_line: "200 OK",
            content_type,
            body: body.to_vec(),
        }
    }

    fn status(status_line: &'static str, body: &str) -> Self {
        Self {
            status_line,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
        }
    }
}

/// Serves `/me` and `/me/photo/$value`; returns the base URL and the raw
/// request heads received.
async fn serve_graph(user: Reply, photo: Reply) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = match TcpListener::bind("127.0.0.1:0").await {
        Ok(listener) => listener,
        Err(err) => panic!("listener should bind: {err}"),
    };
    let addr = match listener.local_addr() {
        Ok(addr) => addr,
        Err(err) => panic!("listener should expose local addr: {err}"),
    };

    let seen = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&seen);
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut head = Vec::new();
            let mut buf = [0_u8; 1024];
            loop {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        head.extend_from_slice(&buf[..n]);
                        if head.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                }
            }
            let head = String::from_utf8_lossy(&head).into_owned();
            let path = head.split_whitespace().nth(1).unwrap_or("/").to_owned();
            if let Ok(mut log) = recorded.lock() {
                log.push(head);
            }

            let reply = if path.starts_with("/me/photo/") {
                photo.clone()
            } else if path.starts_with("/me") {
                user.clone()
            } else {
                Reply::status("404 Not Found", "{}")
            };
            let mut response = format!(
                "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                reply.status_line,
                reply.content_type,
                reply.body.len()
            )
            .into_bytes();
            response.extend_from_slice(&reply.body);
            let _ = socket.write_all(&response).await;
        }
    });

    (format!("http://{addr}"), seen)
}

fn provider(base_url: &str) -> GraphProfileProvider {
    match GraphProfileProvider::new(base_url, "test-token-123".to_owned(), Duration::from_secs(5)) {
        Ok(provider) => provider,
        Err(err) => panic!("provider should build: {err}"),
    }
}

async fn fetch(base_url: &str) -> Result<UserProfile, ProfileError> {
    provider(base_url).fetch_profile().await
}

#[tokio::test]
async fn missing_photo_is_not_an_error() {
    let (url, _) = serve_graph(
        Reply::ok("application/json", USER_JSON.as_bytes()),
        Reply::status("404 Not Found", r#"{"error":{"code":"ImageNotFound"}}"#),
    )
    .await;

    let profile = match fetch(&url).await {
        Ok(profile) => profile,
        Err(err) => panic!("profile should load without photo: {err}"),
    };
    assert_eq!(profile.display_name, "Aminah Binti Ali");
    assert_eq!(profile.primary_phone(), Some("+60 82-416 777"));
    assert_eq!(profile.company_name, "SEDC");
    assert_eq!(profile.photo, None);
}

#[tokio::test]
async fn photo_is_embedded_as_data_uri() {
    let (url, _) = serve_graph(
        Reply::ok("application/json", USER_JSON.as_bytes()),
        Reply::ok("image/png", b"\x89PNG"),
    )
    .await;

    let profile = match fetch(&url).await {
        Ok(profile) => profile,
        Err(err) => panic!("profile should load: {err}"),
    };
    assert_eq!(profile.photo.as_deref(), Some("data:image/png;base64,iVBORw=="));
}

#[tokio::test]
async fn requests_carry_bearer_token_and_select() {
    let (url, seen) = serve_graph(
        Reply::ok("application/json", USER_JSON.as_bytes()),
        Reply::status("404 Not Found", "{}"),
    )
    .await;

    assert!(fetch(&url).await.is_ok());

    let heads = match seen.lock() {
        Ok(heads) => heads.clone(),
        Err(err) => panic!("request log should be readable: {err}"),
    };
    assert_eq!(heads.len(), 2);
    for head in &heads {
        assert!(head.to_ascii_lowercase().contains("authorization: bearer test-token-123"));
    }
    assert!(heads[0].starts_with("GET /me?"));
    assert!(heads[0].contains("displayName"));
    assert!(heads[1].starts_with("GET /me/photo/$value"));
}

#[tokio::test]
async fn unauthorized_is_permission_denied() {
    let (url, _) = serve_graph(
        Reply::status(
            "401 Unauthorized",
            r#"{"error":{"message":"Bearer eyJhbGciOiJIUzI1NiJ9 invalid"}}"#,
        ),
        Reply::status("401 Unauthorized", "{}"),
    )
    .await;

    let err = match fetch(&url).await {
        Ok(profile) => panic!("401 should fail, got {profile:?}"),
        Err(err) => err,
    };
    assert!(err.is_permission_denied());
    match err {
        ProfileError::HttpStatus { status, body } => {
            assert_eq!(status, 401);
            assert!(!body.contains("eyJhbGciOiJIUzI1NiJ9"));
        }
        other => panic!("expected http status error, got: {other}"),
    }
}

#[tokio::test]
async fn server_error_is_not_permission_denied() {
    let (url, _) = serve_graph(
        Reply::status("503 Service Unavailable", "{}"),
        Reply::status("503 Service Unavailable", "{}"),
    )
    .await;

    match fetch(&url).await {
        Ok(profile) => panic!("503 should fail, got {profile:?}"),
        Err(err) => assert!(!err.is_permission_denied()),
    }
}

#[tokio::test]
async fn non_json_user_body_is_parse_error() {
    let (url, _) = serve_graph(
        Reply::ok("text/html", b"<html>login</html>"),
        Reply::status("404 Not Found", "{}"),
    )
    .await;

    assert!(matches!(fetch(&url).await, Err(ProfileError::Parse(_))));
}

#[tokio::test]
async fn unreachable_directory_is_request_error() {
    let listener = match TcpListener::bind("127.0.0.1:0").await {
        Ok(listener) => listener,
        Err(err) => panic!("listener should bind: {err}"),
    };
    let url = match listener.local_addr() {
        Ok(addr) => format!("http://{addr}"),
        Err(err) => panic!("listener should expose local addr: {err}"),
    };
    drop(listener);

    assert!(matches!(fetch(&url).await, Err(ProfileError::Request(_))));
}

#[test]
fn empty_token_is_rejected_up_front() {
    let result = GraphProfileProvider::new("http://localhost", "  ".to_owned(), Duration::from_secs(1));
    assert!(matches!(result, Err(ProfileError::Unavailable(_))));
}

#[test]
fn trailing_slash_is_trimmed_from_base_url() {
    assert_eq!(provider("http://localhost/v1.0/").base_url, "http://localhost/v1.0");
}
