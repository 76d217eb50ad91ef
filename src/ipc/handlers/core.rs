use serde_json::json;

use crate::ipc::error::ok;
use crate::ipc::types::{AppState, Request};

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "recordCount": state.store.len(),
        }),
    )
}

fn handle_state_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, state.session.view(&state.store))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "state.get" => Some(handle_state_get(state, req)),
        _ => None,
    }
}
