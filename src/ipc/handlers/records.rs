use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};

fn require_record_id<'a>(req: &'a Request) -> Result<&'a str, serde_json::Value> {
    req.params
        .get("recordId")
        .and_then(|v| v.as_str())
        .ok_or_else(|| err(&req.id, "bad_params", "missing params.recordId", None))
}

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({ "records": state.session.filtered(&state.store) }),
    )
}

fn handle_start_edit(state: &mut AppState, req: &Request) -> serde_json::Value {
    let record_id = match require_record_id(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match state.session.start_edit(record_id, &state.store) {
        Ok(()) => ok(&req.id, state.session.view(&state.store)),
        Err(_) => err(
            &req.id,
            "not_found",
            "record not found",
            Some(json!({ "recordId": record_id })),
        ),
    }
}

fn handle_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let record_id = match require_record_id(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match state.session.delete(record_id, &mut state.store) {
        Ok(_) => ok(&req.id, state.session.view(&state.store)),
        Err(_) => err(
            &req.id,
            "not_found",
            "record not found",
            Some(json!({ "recordId": record_id })),
        ),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "records.list" => Some(handle_list(state, req)),
        "records.startEdit" => Some(handle_start_edit(state, req)),
        "records.delete" => Some(handle_delete(state, req)),
        _ => None,
    }
}
