// iPay88 Verification API Stub
//
// Serves POST /payment/verify on a random local port with a canned answer and
// records every request body it receives.

use actix_test::TestServer;
use actix_web::{web, App, HttpResponse};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// What the stub answers to every verification request
#[derive(Debug, Clone)]
pub enum StubVerdict {
    /// 200 with this JSON body
    Json(Value),
    /// This status code with a plain-text body
    Status(u16, String),
    /// 200 with a body that is not JSON
    Text(String),
}

pub struct GatewayStubState {
    verdict: StubVerdict,
    received: Mutex<Vec<Value>>,
}

/// Running stub plus access to what it received
pub struct GatewayStub {
    pub server: TestServer,
    state: Arc<GatewayStubState>,
}

impl GatewayStub {
    /// Base URL to use as `IPAY88_BASE_URL`
    pub fn base_url(&self) -> String {
        self.server.url("/").trim_end_matches('/').to_string()
    }

    /// Request bodies received so far
    pub fn received(&self) -> Vec<Value> {
        self.state.received.lock().unwrap().clone()
    }
}

async fn verify(state: web::Data<GatewayStubState>, body: web::Json<Value>) -> HttpResponse {
    state.received.lock().unwrap().push(body.into_inner());

    match &state.verdict {
        StubVerdict::Json(value) => HttpResponse::Ok().json(value),
        StubVerdict::Status(code, text) => {
            HttpResponse::build(actix_web::http::StatusCode::from_u16(*code).unwrap())
                .body(text.clone())
        }
        StubVerdict::Text(text) => HttpResponse::Ok()
            .content_type("text/html")
            .body(text.clone()),
    }
}

/// Spawn a stub gateway answering every verification with `verdict`
pub fn spawn_gateway_stub(verdict: StubVerdict) -> GatewayStub {
    let state = Arc::new(GatewayStubState {
        verdict,
        received: Mutex::new(Vec::new()),
    });

    let app_state = state.clone();
    let server = actix_test::start(move || {
        App::new()
            .app_data(web::Data::from(app_state.clone()))
            .route("/payment/verify", web::post().to(verify))
    });

    GatewayStub { server, state }
}
