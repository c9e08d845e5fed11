//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::fmt;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use partner_center::clients::{Transport, TransportRequest, TransportResponse};
use partner_center::{PartnerClient, PartnerConfig, TransportError};

type Responder =
    Box<dyn Fn(&TransportRequest) -> Result<TransportResponse, TransportError> + Send + Sync>;

/// A transport that records every request and answers with a closure.
pub struct FakeTransport {
    responder: Responder,
    requests: Mutex<Vec<TransportRequest>>,
}

impl FakeTransport {
    /// Answers every request with `responder`.
    pub fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&TransportRequest) -> Result<TransportResponse, TransportError>
            + Send
            + Sync
            + 'static,
    {
        Arc::new(Self {
            responder: Box::new(responder),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Answers every request with `status` and `body`.
    pub fn replying(status: u16, body: &str) -> Arc<Self> {
        let body = body.to_string();
        Self::new(move |_| Ok(TransportResponse::new(status, body.clone())))
    }

    /// Answers every request with its own body.
    pub fn echo() -> Arc<Self> {
        Self::new(|request| {
            Ok(TransportResponse::new(
                200,
                request.body.clone().unwrap_or_default(),
            ))
        })
    }

    /// Returns the requests sent so far.
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Returns the number of requests sent so far.
    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl fmt::Debug for FakeTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeTransport")
            .field("calls", &self.calls())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let response = (self.responder)(&request);
        self.requests.lock().unwrap().push(request);
        response
    }
}

/// Creates a partner client over `transport` with the embedded registry.
pub fn partner_with(transport: Arc<FakeTransport>) -> PartnerClient {
    PartnerClient::builder(PartnerConfig::default())
        .transport(transport)
        .build()
        .unwrap()
}
