mod common;

use std::sync::Arc;

use common::{AlwaysInvalid, AlwaysValid, StubTransport};
use shortlink::BitlyClient;
use shortlink::domain::ShortLinkProvider;
use shortlink::error::Error;

const TOKEN: &str = "d4f9b3a0c1e2";

const SHORTEN_RESPONSE: &str = r#"{
  "data": {
    "global_hash": "900913",
    "hash": "ze6poY",
    "long_url": "http://google.com/",
    "new_hash": 0,
    "url": "http://bit.ly/ze6poY"
  },
  "status_code": 200,
  "status_txt": "OK"
}"#;

const EXPAND_RESPONSE: &str = r#"{
  "data": {
    "expand": [
      {
        "global_hash": "900913",
        "long_url": "http://google.com/",
        "short_url": "http://bit.ly/ze6poY",
        "user_hash": "ze6poY"
      }
    ]
  },
  "status_code": 200,
  "status_txt": "OK"
}"#;

async fn connect(
    transport: Arc<StubTransport>,
) -> BitlyClient<StubTransport, AlwaysValid> {
    BitlyClient::connect(transport, Arc::new(AlwaysValid), "user", "pass")
        .await
        .unwrap()
}

#[tokio::test]
async fn test_connect_fails_on_invalid_login_body() {
    let transport = Arc::new(StubTransport::new(["INVALID_LOGIN"]));

    let result =
        BitlyClient::connect(transport, Arc::new(AlwaysValid), "fakeuser", "fakepassword").await;

    assert!(matches!(result, Err(Error::InvalidCredentials { .. })));
}

#[tokio::test]
async fn test_connect_accepts_any_other_body_as_token() {
    let transport = Arc::new(StubTransport::new([TOKEN, SHORTEN_RESPONSE]));
    let client = connect(transport.clone()).await;

    client.shorten("http://google.com/").await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[1].url.contains(&format!("access_token={TOKEN}")));
}

#[tokio::test]
async fn test_shorten_returns_short_url() {
    let transport = Arc::new(StubTransport::new([TOKEN, SHORTEN_RESPONSE]));
    let client = connect(transport).await;

    let short = client.shorten("http://google.com/").await.unwrap();
    assert_eq!(short, "http://bit.ly/ze6poY");
}

#[tokio::test]
async fn test_shorten_uses_default_domain() {
    let transport = Arc::new(StubTransport::new([TOKEN, SHORTEN_RESPONSE]));
    let client = connect(transport.clone()).await;

    client.shorten("http://google.com/").await.unwrap();

    assert!(transport.requests()[1].url.contains("domain=bit.ly"));
}

#[tokio::test]
async fn test_shorten_rejects_invalid_url_without_request() {
    let transport = Arc::new(StubTransport::new([TOKEN]));
    let client = BitlyClient::connect(transport.clone(), Arc::new(AlwaysInvalid), "user", "pass")
        .await
        .unwrap();

    let result = client.shorten("./hello/world").await;

    assert!(matches!(result, Err(Error::InvalidRequest { .. })));
    // Only the token exchange reached the transport.
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_shorten_fails_on_plain_text_body() {
    let transport = Arc::new(StubTransport::new([TOKEN, "Some random string"]));
    let client = connect(transport).await;

    let result = client.shorten("http://google.com/").await;
    assert!(matches!(result, Err(Error::UnusableResponse { .. })));
}

#[tokio::test]
async fn test_shorten_fails_when_data_missing() {
    let transport = Arc::new(StubTransport::new([
        TOKEN,
        r#"{"status_code": 500, "status_txt": "KO"}"#,
    ]));
    let client = connect(transport).await;

    let result = client.shorten("http://www.google.com/").await;
    assert!(matches!(result, Err(Error::UnusableResponse { .. })));
}

#[tokio::test]
async fn test_shorten_surfaces_non_200_status() {
    let transport = Arc::new(StubTransport::new([
        TOKEN,
        r#"{"data": {"url": "http://bit.ly/ze6poY"}, "status_code": 500, "status_txt": "KO"}"#,
    ]));
    let client = connect(transport).await;

    let err = client.shorten("http://google.com/").await.unwrap_err();
    match err {
        Error::Provider { message, .. } => {
            assert!(message.contains("500"));
            assert!(message.contains("KO"));
        }
        other => panic!("expected provider error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_shorten_fails_when_short_url_missing() {
    let transport = Arc::new(StubTransport::new([
        TOKEN,
        r#"{"data": {"hash": "ze6poY"}, "status_code": 200, "status_txt": "OK"}"#,
    ]));
    let client = connect(transport).await;

    let result = client.shorten("http://google.com/").await;
    assert!(matches!(result, Err(Error::UnusableResponse { .. })));
}

#[tokio::test]
async fn test_expand_returns_long_url() {
    let transport = Arc::new(StubTransport::new([TOKEN, EXPAND_RESPONSE]));
    let client = connect(transport.clone()).await;

    let long = client.expand("http://bit.ly/ze6poY").await.unwrap();

    assert_eq!(long, "http://google.com/");
    assert!(transport.requests()[1].url.contains("hash=ze6poY"));
}

#[tokio::test]
async fn test_expand_fails_when_expansion_missing() {
    let transport = Arc::new(StubTransport::new([
        TOKEN,
        r#"{"data": {"expand": []}, "status_code": 200, "status_txt": "OK"}"#,
    ]));
    let client = connect(transport).await;

    let result = client.expand("http://bit.ly/ze6poY").await;
    assert!(matches!(result, Err(Error::UnusableResponse { .. })));
}

#[tokio::test]
async fn test_shorten_is_idempotent_across_calls() {
    let transport = Arc::new(StubTransport::new([
        TOKEN,
        SHORTEN_RESPONSE,
        SHORTEN_RESPONSE,
    ]));
    let client = connect(transport.clone()).await;

    let first = client.shorten("http://google.com/").await.unwrap();
    let second = client.shorten("http://google.com/").await.unwrap();

    assert_eq!(first, second);
    // Both calls built the same request: no state leaked between them.
    let requests = transport.requests();
    assert_eq!(requests[1].url, requests[2].url);
}
