//! Scripted transport for service tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use super::transport::{ApiRequest, ApiResponse, Method, Transport};

/// Replays queued responses in order and records every request it receives.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, String>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with `status` and a JSON body.
    pub fn respond(self, status: u16, body: serde_json::Value) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse { status, body: body.to_string() }));
        self
    }

    /// Queue a response with a raw, possibly non-JSON body.
    pub fn respond_raw(self, status: u16, body: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse { status, body: body.to_owned() }));
        self
    }

    /// Queue a transport failure.
    pub fn fail(self, error: &str) -> Self {
        self.responses.borrow_mut().push_back(Err(error.to_owned()));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    /// `(method, url)` pairs in send order.
    pub fn calls(&self) -> Vec<(Method, String)> {
        self.requests.borrow().iter().map(|r| (r.method, r.url.clone())).collect()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, String> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err("no scripted response".to_owned()))
    }
}
