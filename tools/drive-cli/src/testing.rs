use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use drive_data::{FetchClient, FetchError, RequestBuilder, Response, Transport};
use serde_json::Value;
use tempfile::TempDir;

use crate::config::CliConfig;
use crate::context::Context;
use crate::output::Output;

/// Replays canned JSON bodies and records every request.
#[derive(Clone, Default)]
pub struct StubTransport {
    replies: Arc<Mutex<VecDeque<Value>>>,
    requests: Arc<Mutex<Vec<RequestBuilder>>>,
}

impl StubTransport {
    pub fn replying(bodies: Vec<Value>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(bodies.into())),
            requests: Arc::default(),
        }
    }

    pub fn sent(&self) -> Vec<RequestBuilder> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        self.requests.lock().unwrap().push(request);
        let body = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| FetchError::RequestError("no scripted reply".into()))?;
        Ok(Response::new(200, HashMap::new(), serde_json::to_vec(&body).unwrap()))
    }
}

/// A quiet JSON-mode context whose session storage lives in a temp dir.
pub fn context(transport: &StubTransport) -> (Context, TempDir) {
    let storage = tempfile::tempdir().unwrap();
    let mut config = CliConfig::default();
    config.api.graphql_url = "http://api.test/graphql".to_string();
    config.payment.publishable_key = Some("pk_test".to_string());
    config.storage.dir = Some(storage.path().to_path_buf());

    let fetch = FetchClient::new(Arc::new(transport.clone()));
    (Context::with_fetch(config, Output::new(false, true), fetch), storage)
}

pub fn astra() -> Value {
    serde_json::json!({
        "id": "V1",
        "name": "Astra",
        "availableQuantity": 3,
        "manufacturer": {"name": "Opel"},
        "model": {"name": "Astra K"},
        "vehicleTypes": [{"id": "t1", "name": "Base"}],
        "features": [{
            "id": "F1",
            "engineType": "Petrol",
            "horsepower": 110,
            "vehicleType": {"id": "t1"}
        }],
        "vehiclePrices": [
            {"id": "P1", "price": 500000, "vehicleType": {"id": "t1", "name": "Base"}}
        ]
    })
}
