//! State handlers

use crate::{views, AppState};
use axum::{extract::State, http::StatusCode, response::Html};
use hbnb_core::{Record, RecordKind, Store};

/// All states, sorted by name.
pub async fn list(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let objects = match state.storage.all(Some(RecordKind::State)).await {
        Ok(objects) => objects,
        Err(e) => {
            tracing::error!("Failed to list states: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let mut states: Vec<_> = objects
        .into_values()
        .filter_map(|record| match record {
            Record::State(s) => Some(s),
            _ => None,
        })
        .collect();
    states.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(Html(views::states_list(&states)))
}
