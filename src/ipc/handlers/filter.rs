use serde_json::json;

use crate::calc::Division;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};

fn handle_set_name_query(state: &mut AppState, req: &Request) -> serde_json::Value {
    let text = match req.params.get("text").and_then(|v| v.as_str()) {
        Some(v) => v,
        None => return err(&req.id, "bad_params", "missing params.text", None),
    };
    state.session.set_name_query(text);
    ok(&req.id, state.session.view(&state.store))
}

fn handle_set_division(state: &mut AppState, req: &Request) -> serde_json::Value {
    // Empty string, null, or an absent param is the all-divisions sentinel.
    let division = match req.params.get("division").and_then(|v| v.as_str()) {
        None | Some("") => None,
        Some(label) => match Division::from_label(label) {
            Some(d) => Some(d),
            None => {
                return err(
                    &req.id,
                    "bad_params",
                    "unknown division",
                    Some(json!({ "division": label })),
                )
            }
        },
    };
    state.session.set_division_filter(division);
    ok(&req.id, state.session.view(&state.store))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "filter.setNameQuery" => Some(handle_set_name_query(state, req)),
        "filter.setDivision" => Some(handle_set_division(state, req)),
        _ => None,
    }
}
