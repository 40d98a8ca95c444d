use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use drive_cache::Cache;
use drive_data::{FetchClient, FetchError, GraphqlClient, RequestBuilder, Response, Transport};
use serde_json::Value;

use crate::RentalGateway;

/// Replays canned JSON bodies and records every request.
#[derive(Clone, Default)]
pub struct StubTransport {
    replies: Arc<Mutex<VecDeque<(u16, Value)>>>,
    requests: Arc<Mutex<Vec<RequestBuilder>>>,
}

impl StubTransport {
    pub fn replying(bodies: Vec<Value>) -> Self {
        Self::replying_with_status(bodies.into_iter().map(|b| (200, b)).collect())
    }

    pub fn replying_with_status(replies: Vec<(u16, Value)>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            requests: Arc::default(),
        }
    }

    pub fn sent(&self) -> Vec<RequestBuilder> {
        self.requests.lock().unwrap().clone()
    }

    pub fn client(&self) -> FetchClient {
        FetchClient::new(Arc::new(self.clone()))
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        self.requests.lock().unwrap().push(request);
        let (status, body) = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| FetchError::RequestError("no scripted reply".into()))?;
        Ok(Response::new(
            status,
            HashMap::new(),
            serde_json::to_vec(&body).unwrap(),
        ))
    }
}

pub fn gateway(transport: &StubTransport) -> (RentalGateway, Cache) {
    let cache = Cache::in_memory();
    let graphql = GraphqlClient::new(transport.client(), "http://api.test/graphql");
    (RentalGateway::new(graphql, cache.clone()), cache)
}
