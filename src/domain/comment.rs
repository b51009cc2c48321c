//! # Comments
//!
//! A complete resource built with the factory: blog comments fetched through an
//! asynchronous [`CommentApi`]. The API is a trait so the in-memory implementation
//! used by the demo and tests can stand in for a real backend.

use crate::framework::{problem, Resource, ResourceError, ResourceOptions, ThunkContext};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use tracing::{debug, instrument};

/// A comment on a blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub author: String,
    pub body: String,
}

impl Comment {
    pub fn new(id: u64, author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            body: body.into(),
        }
    }
}

/// Errors that can occur while talking to the comment backend.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CommentError {
    /// The requested comment was not found.
    #[error("Comment not found: {0}")]
    NotFound(u64),

    /// The backend could not be reached.
    #[error("Comment backend unavailable: {0}")]
    Unavailable(String),

    /// The backend returned something that is not a comment.
    #[error("Invalid comment data: {0}")]
    InvalidData(String),
}

/// Backend the comment thunks read from.
#[async_trait]
pub trait CommentApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Comment>, CommentError>;

    async fn get(&self, id: u64) -> Result<Comment, CommentError>;
}

/// In-memory [`CommentApi`] that can be switched into a failing mode.
#[derive(Debug, Default)]
pub struct InMemoryCommentApi {
    comments: Mutex<Vec<Comment>>,
    offline: AtomicBool,
}

impl InMemoryCommentApi {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self {
            comments: Mutex::new(comments),
            offline: AtomicBool::new(false),
        }
    }

    /// While offline every call fails with [`CommentError::Unavailable`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<(), CommentError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(CommentError::Unavailable("backend is offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CommentApi for InMemoryCommentApi {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Comment>, CommentError> {
        self.check_online()?;
        let comments = self.comments.lock().unwrap_or_else(PoisonError::into_inner).clone();
        debug!(count = comments.len(), "Listed comments");
        Ok(comments)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: u64) -> Result<Comment, CommentError> {
        self.check_online()?;
        self.comments
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(CommentError::NotFound(id))
    }
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, Value> {
    serde_json::to_value(value).map_err(|e| problem(CommentError::InvalidData(e.to_string())))
}

/// Builds the `blog/comment` resource.
///
/// Besides the defaults it registers:
/// - `setPage`: stores the page number in `page`
/// - `clear` / `discard`: one handler emptying `comments` and `comment`
/// - `fetchAll` thunk: loads every comment into `comments` and marks `success`
/// - `fetchOne` thunk: takes an id argument and loads that comment into `comment`
pub fn resource(api: Arc<dyn CommentApi>) -> Result<Resource, ResourceError> {
    let mut resource = Resource::new(ResourceOptions::new("blog", "comments").with_state(json!({ "page": 1 })))?;
    let many = resource.many_name();
    let single = resource.single_name();

    let list_api = api.clone();
    resource
        .add_method("setPage", |state, action| state.with("page", action.payload_or(json!(1))))?
        .add_method(["clear", "discard"], move |state, _| {
            state.with(&many, json!([])).with(&single, Value::Null)
        })?
        .add_thunk("fetchAll", move |_args: Vec<Value>, ctx: ThunkContext| {
            let api = list_api.clone();
            async move {
                let comments = api.list().await.map_err(problem)?;
                ctx.dispatch("set", Some(to_value(&comments)?))?;
                ctx.dispatch("success", None)?;
                Ok::<(), Value>(())
            }
        })?
        .add_thunk("fetchOne", move |args: Vec<Value>, ctx: ThunkContext| {
            let api = api.clone();
            async move {
                let id = args
                    .first()
                    .and_then(Value::as_u64)
                    .ok_or_else(|| problem(CommentError::InvalidData("expected a numeric id".to_string())))?;
                let comment = api.get(id).await.map_err(problem)?;
                ctx.dispatch("current", Some(to_value(&comment)?))?;
                Ok::<(), Value>(())
            }
        })?;

    Ok(resource)
}
