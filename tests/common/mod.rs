#![allow(dead_code)]

use axum_test::TestServer;
use ib_engine::controller::{Controller, EchoController};
use ib_engine::routes::app_router;
use ib_engine::routing::{Mount, RouteSet, engine_routes};
use ib_engine::state::AppState;
use std::sync::Arc;

pub fn routes() -> RouteSet {
    engine_routes().unwrap()
}

pub fn create_test_state(mount: &str, controller: Arc<dyn Controller>) -> AppState {
    AppState::new(routes(), Mount::new(mount).unwrap(), controller)
}

pub fn make_server(mount: &str) -> TestServer {
    let state = create_test_state(mount, Arc::new(EchoController::new()));
    TestServer::new(app_router(state)).unwrap()
}
