//! Scripted transport shared by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::Value;

use crate::client::{HttpReply, Transport, TransportError};

/// Replays queued replies in order and records every request it receives.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<HttpReply, TransportError>>>,
    pub requests: RefCell<Vec<(String, Value)>>,
}

impl ScriptedTransport {
    pub fn replying(status: u16, body: Value) -> Self {
        let transport = Self::default();
        transport.push(status, body);
        transport
    }

    pub fn failing(reason: &str) -> Self {
        let transport = Self::default();
        transport.replies.borrow_mut().push_back(Err(TransportError(reason.to_owned())));
        transport
    }

    pub fn push(&self, status: u16, body: Value) {
        let body = if body.is_null() { String::new() } else { body.to_string() };
        self.replies.borrow_mut().push_back(Ok(HttpReply { status, body }));
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl Transport for ScriptedTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpReply, TransportError> {
        self.requests.borrow_mut().push((url.to_owned(), body.clone()));
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted reply".to_owned())))
    }
}
