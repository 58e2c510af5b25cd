//! Recording transport for API tests

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use super::{ApiClient, ApiRequest, ApiResponse, SyncError, Transport};

/// Replies with queued responses and remembers every request
#[derive(Default)]
pub struct MockTransport {
    replies: RefCell<VecDeque<Result<ApiResponse, SyncError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn reply(self, status: u16, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(ApiResponse { status, body: body.to_string() }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies.borrow_mut().push_back(Err(SyncError::Transport(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, SyncError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(SyncError::Transport("no reply queued".to_string())))
    }
}

pub fn client(transport: MockTransport) -> ApiClient<MockTransport> {
    ApiClient::new(transport)
}
