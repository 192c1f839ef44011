use std::error::Error as StdError;
use std::io;
use std::sync::{Arc, Mutex};

use super::{BoxFuture, HttpRequest, HttpResponse, HttpTransport, PingenClient};
use crate::domain::{PostEncoding, Token};

#[derive(Debug, Clone)]
pub(super) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    last_request: Option<HttpRequest>,
    response: Result<HttpResponse, String>,
}

impl FakeTransport {
    pub(super) fn new(response_status: u16, response_body: impl Into<String>) -> Self {
        Self::with_bytes(response_status, response_body.into().into_bytes())
    }

    pub(super) fn with_bytes(response_status: u16, response_body: Vec<u8>) -> Self {
        Self::with_response(Ok(HttpResponse {
            status: response_status,
            body: response_body,
        }))
    }

    pub(super) fn failing(message: impl Into<String>) -> Self {
        Self::with_response(Err(message.into()))
    }

    fn with_response(response: Result<HttpResponse, String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                last_request: None,
                response,
            })),
        }
    }

    pub(super) fn last_request(&self) -> Option<HttpRequest> {
        self.state.lock().unwrap().last_request.clone()
    }
}

impl HttpTransport for FakeTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = {
                let mut state = self.state.lock().unwrap();
                state.last_request = Some(request);
                state.response.clone()
            };
            response.map_err(|message| {
                Box::new(io::Error::new(io::ErrorKind::ConnectionRefused, message))
                    as Box<dyn StdError + Send + Sync>
            })
        })
    }
}

pub(super) fn make_client(transport: FakeTransport) -> PingenClient {
    PingenClient {
        token: Token::new("test_token").unwrap(),
        base_url: "https://example.invalid".to_owned(),
        post_encoding: PostEncoding::default(),
        http: Arc::new(transport),
    }
}
