use serde_json::json;

use crate::calc::MARK_COUNT;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::session::{Field, SubmitError};

fn handle_set_field(state: &mut AppState, req: &Request) -> serde_json::Value {
    let field = match req.params.get("field").and_then(|v| v.as_str()) {
        Some(v) => v,
        None => return err(&req.id, "bad_params", "missing params.field", None),
    };
    let Some(field) = Field::from_name(field) else {
        return err(
            &req.id,
            "bad_params",
            "field must be one of: name, age",
            Some(json!({ "field": field })),
        );
    };
    let value = match req.params.get("value").and_then(|v| v.as_str()) {
        Some(v) => v,
        None => return err(&req.id, "bad_params", "missing params.value", None),
    };

    state.session.set_field(field, value);
    ok(&req.id, state.session.view(&state.store))
}

fn handle_set_mark(state: &mut AppState, req: &Request) -> serde_json::Value {
    let slot = match req.params.get("slot").and_then(|v| v.as_u64()) {
        Some(v) => v as usize,
        None => return err(&req.id, "bad_params", "missing params.slot", None),
    };
    if slot >= MARK_COUNT {
        return err(
            &req.id,
            "bad_params",
            format!("slot must be < {}", MARK_COUNT),
            Some(json!({ "slot": slot })),
        );
    }
    let value = match req.params.get("value").and_then(|v| v.as_str()) {
        Some(v) => v,
        None => return err(&req.id, "bad_params", "missing params.value", None),
    };

    state.session.set_mark(slot, value);
    ok(&req.id, state.session.view(&state.store))
}

fn handle_submit(state: &mut AppState, req: &Request) -> serde_json::Value {
    match state.session.submit(&mut state.store) {
        Ok(()) => ok(&req.id, state.session.view(&state.store)),
        Err(SubmitError::Invalid(e)) => err(&req.id, e.code(), e.to_string(), None),
        Err(e @ SubmitError::EditTargetGone) => err(&req.id, "not_found", e.to_string(), None),
    }
}

fn handle_clear(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.session.clear();
    ok(&req.id, state.session.view(&state.store))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "form.setField" => Some(handle_set_field(state, req)),
        "form.setMark" => Some(handle_set_mark(state, req)),
        "form.submit" => Some(handle_submit(state, req)),
        "form.clear" => Some(handle_clear(state, req)),
        _ => None,
    }
}
