//! # Resource Recipe Demo
//!
//! Wires the sample comment resource into a [`Store`] and runs its thunks, once
//! against a healthy backend and once against an offline one.

use resource_recipe::domain::{self, Comment, InMemoryCommentApi};
use resource_recipe::lifecycle::setup_tracing;
use resource_recipe::store::Store;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let api = Arc::new(InMemoryCommentApi::new(vec![
        Comment::new(1, "ada", "Lovely post."),
        Comment::new(2, "grace", "Found a bug in the second example."),
    ]));
    let comments = domain::comment::resource(api.clone()).map_err(|e| e.to_string())?;
    let store = Arc::new(Store::builder().slice("comments", comments.reducer()).build());

    let fetch_all = comments.thunk("fetchAll").map_err(|e| e.to_string())?;
    let outcome = fetch_all
        .call(store.clone(), vec![])
        .instrument(tracing::info_span!("initial_load"))
        .await;
    let slice = store.slice("comments").unwrap_or_default();
    info!(?outcome, count = slice.collection("comments").len(), "Comments loaded");

    let set_page = comments.action("setPage").map_err(|e| e.to_string())?;
    store.dispatch(set_page.with(json!(2)));

    api.set_offline(true);
    let fetch_one = comments.thunk("fetchOne").map_err(|e| e.to_string())?;
    let outcome = fetch_one
        .call(store.clone(), vec![json!(2)])
        .instrument(tracing::info_span!("offline_load"))
        .await;
    let slice = store.slice("comments").unwrap_or_default();
    warn!(?outcome, problem = %slice.problem(), loading = slice.is_loading(), "Offline fetch finished");

    info!(dispatched = store.history().len(), state = %store.state().into_value(), "Done");
    Ok(())
}
