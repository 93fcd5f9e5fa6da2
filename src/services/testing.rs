// Scripted transport for exercising the client stack without a browser

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::models::{Role, TokenPayload};
use crate::state::{MemoryPersistence, TokenStore};

use super::api_client::{ApiClient, ApiRequest, HttpTransport, RawResponse};
use super::error::{ApiError, ApiResult};

pub const TEST_BASE_URL: &str = "http://api.test";

#[derive(Default)]
struct Script {
    replies: VecDeque<ApiResult<RawResponse>>,
    requests: Vec<ApiRequest>,
    held: HashMap<usize, Gate>,
}

/// Keeps one scripted reply from resolving until `open` is called
#[derive(Clone, Default)]
pub struct Gate(Rc<Cell<bool>>);

impl Gate {
    pub fn open(&self) {
        self.0.set(true);
    }

    async fn wait(&self) {
        while !self.0.get() {
            tokio::task::yield_now().await;
        }
    }
}

/// Replies are consumed in order; every request is recorded
#[derive(Clone, Default)]
pub struct MockTransport {
    script: Rc<RefCell<Script>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, status: u16, body: &str) {
        self.script.borrow_mut().replies.push_back(Ok(RawResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn push_network_error(&self, reason: &str) {
        self.script
            .borrow_mut()
            .replies
            .push_back(Err(ApiError::Network(reason.to_string())));
    }

    /// The `index`-th request (0-based) takes its reply immediately but
    /// only returns once the gate opens
    pub fn hold_request(&self, index: usize) -> Gate {
        let gate = Gate::default();
        self.script.borrow_mut().held.insert(index, gate.clone());
        gate
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.script.borrow().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.script.borrow().requests.len()
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: &ApiRequest) -> ApiResult<RawResponse> {
        let (reply, gate) = {
            let mut script = self.script.borrow_mut();
            let index = script.requests.len();
            script.requests.push(request.clone());
            let reply = script
                .replies
                .pop_front()
                .unwrap_or_else(|| panic!("no scripted reply for {} {}", request.method, request.url));
            (reply, script.held.get(&index).cloned())
        };
        if let Some(gate) = gate {
            gate.wait().await;
        }
        reply
    }
}

pub fn empty_store() -> TokenStore {
    TokenStore::new(Rc::new(MemoryPersistence::default()))
}

pub fn logged_in_store(access: &str, refresh: Option<&str>) -> TokenStore {
    let store = empty_store();
    store.set_credentials(&TokenPayload {
        access: access.to_string(),
        refresh: refresh.map(str::to_string),
        role: Some(Role::Admin),
        employee_id: Some(1),
    });
    store
}

pub fn client_with(transport: &MockTransport, store: TokenStore) -> ApiClient<MockTransport> {
    ApiClient::new(TEST_BASE_URL, transport.clone(), store)
}
