#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use shortlink::domain::{HttpRequest, Transport, UrlChecker};
use shortlink::error::Error;

/// Transport double that replays canned response bodies in order and records
/// every request it receives.
pub struct StubTransport {
    responses: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub fn new<I>(responses: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests seen so far, in dispatch order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<String, Error> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::transport("no stubbed response left"))
    }
}

/// URL checker that accepts everything.
pub struct AlwaysValid;

#[async_trait]
impl UrlChecker for AlwaysValid {
    async fn check(&self, _url: &str) -> bool {
        true
    }
}

/// URL checker that rejects everything.
pub struct AlwaysInvalid;

#[async_trait]
impl UrlChecker for AlwaysInvalid {
    async fn check(&self, _url: &str) -> bool {
        false
    }
}
