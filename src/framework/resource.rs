//! # Resource Factory
//!
//! [`Resource`] generates the reducer and action helpers for one CRUD-like entity.
//! Given a scope, a name and optional extra state it derives:
//!
//! - the initial state `{ <many>: [], <single>: null, problem: null, loading: false, success: null }`
//!   merged with the caller's overrides,
//! - a handler table seeded with the nine defaults from [`handlers`](crate::framework::handlers),
//! - an empty thunk table.
//!
//! Both tables can be extended before the reducer is wired into a store.
//!
//! ```rust
//! use resource_recipe::framework::{Resource, ResourceOptions};
//! use serde_json::json;
//!
//! let mut comments = Resource::new(ResourceOptions::new("blog", "comments")).unwrap();
//! comments
//!     .add_method("setPage", |state, action| state.with("page", action.payload_or(json!(1))))
//!     .unwrap();
//!
//! let reducer = comments.reducer();
//! let state = reducer.reduce(None, &comments.action("add").unwrap().with(json!({ "id": 1 })));
//! assert_eq!(state.get("comments"), Some(&json!([{ "id": 1 }])));
//! ```

use crate::framework::action::{ActionCreator, ActionMatcher, MatcherPart, MethodType};
use crate::framework::error::ResourceError;
use crate::framework::handlers::{self, Handler};
use crate::framework::naming::Names;
use crate::framework::reducer::Reducer;
use crate::framework::state::{ResourceOptions, State};
use crate::framework::thunk::{Thunk, Work};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Reducer and action factory for one named resource.
#[derive(Clone)]
pub struct Resource {
    names: Names,
    initial_state: State,
    /// Kept in registration order; the reducer applies matching entries in this order.
    methods: Vec<(ActionMatcher, Handler)>,
    thunks: HashMap<String, Arc<dyn Work>>,
}

impl Resource {
    /// Builds a resource from its options.
    ///
    /// # Errors
    ///
    /// [`ResourceError::InvalidArgument`] when `scope` or `name` is blank, or when
    /// `state` is neither `null` nor an object.
    pub fn new(options: ResourceOptions) -> Result<Self, ResourceError> {
        let names = Names::new(&options.scope, &options.name)?;
        let overrides = match options.state {
            Value::Null => State::new(),
            other => State::from_value(other)?,
        };

        let mut initial_state = State::new();
        initial_state.insert(names.many_name(), json!([]));
        initial_state.insert(names.single_name(), Value::Null);
        initial_state.insert("problem", Value::Null);
        initial_state.insert("loading", Value::Bool(false));
        initial_state.insert("success", Value::Null);
        initial_state.merge(overrides);

        let mut methods = Vec::with_capacity(handlers::DEFAULT_TYPES.len());
        for (kind, handler) in handlers::defaults(&names.many_name(), &names.single_name(), &initial_state) {
            methods.push((ActionMatcher::Single(names.localise(kind)?), handler));
        }

        info!(scope = names.scope(), name = names.name(), "Resource created");
        Ok(Self {
            names,
            initial_state,
            methods,
            thunks: HashMap::new(),
        })
    }

    pub fn scope(&self) -> &str {
        self.names.scope()
    }

    pub fn name(&self) -> &str {
        self.names.name()
    }

    /// Name of the state field holding the collection, e.g. `comments`.
    pub fn many_name(&self) -> String {
        self.names.many_name()
    }

    /// Name of the state field holding the current item, e.g. `comment`.
    pub fn single_name(&self) -> String {
        self.names.single_name()
    }

    pub fn initial_state(&self) -> &State {
        &self.initial_state
    }

    /// `"<scope>/<name>/<CONSTANT_CASE(kind)>"`.
    pub fn localise(&self, kind: &str) -> Result<String, ResourceError> {
        self.names.localise(kind)
    }

    /// Localises a list of short types (or already combined matchers) into one matcher.
    pub fn combine<T: Into<MatcherPart>>(
        &self,
        parts: impl IntoIterator<Item = T>,
    ) -> Result<ActionMatcher, ResourceError> {
        let mut matchers = Vec::new();
        for part in parts {
            match part.into() {
                MatcherPart::Type(kind) => {
                    if kind.trim().is_empty() {
                        return Err(ResourceError::invalid(
                            "type",
                            "Resource::add_method",
                            "a non-empty string or list of non-empty strings",
                        ));
                    }
                    matchers.push(ActionMatcher::Single(self.localise(&kind)?));
                }
                MatcherPart::Matcher(ActionMatcher::Any(set)) if set.is_empty() => {
                    return Err(ResourceError::invalid(
                        "type",
                        "Resource::add_method",
                        "a list of non-empty matchers",
                    ));
                }
                MatcherPart::Matcher(matcher) => matchers.push(matcher),
            }
        }
        if matchers.is_empty() {
            return Err(ResourceError::invalid(
                "type",
                "Resource::add_method",
                "a non-empty list of types",
            ));
        }
        Ok(ActionMatcher::combine(matchers))
    }

    fn matcher_for(&self, kind: MethodType) -> Result<ActionMatcher, ResourceError> {
        match kind {
            MethodType::Single(kind) => {
                if kind.trim().is_empty() {
                    return Err(ResourceError::invalid("type", "Resource::add_method", "a non-empty string"));
                }
                Ok(ActionMatcher::Single(self.localise(&kind)?))
            }
            MethodType::Combined(parts) => self.combine(parts),
        }
    }

    /// Registers `handler` for one type, or for several types at once.
    ///
    /// Registering under a key that already exists replaces the old handler in place.
    ///
    /// ```rust
    /// # use resource_recipe::framework::{Resource, ResourceOptions};
    /// # use serde_json::json;
    /// let mut resource = Resource::new(ResourceOptions::new("app", "example")).unwrap();
    /// resource
    ///     .add_method(["clear", "discard"], |state, _| state.with("examples", json!([])))
    ///     .unwrap()
    ///     .add_method("touch", |state, _| state.with("touched", json!(true)))
    ///     .unwrap();
    /// assert!(resource.action("discard").is_ok());
    /// ```
    pub fn add_method<F>(&mut self, kind: impl Into<MethodType>, handler: F) -> Result<&mut Self, ResourceError>
    where
        F: Fn(&State, &crate::framework::Action) -> State + Send + Sync + 'static,
    {
        let matcher = self.matcher_for(kind.into())?;
        let handler: Handler = Arc::new(handler);
        debug!(%matcher, "Method registered");
        match self.methods.iter_mut().find(|(existing, _)| *existing == matcher) {
            Some(entry) => entry.1 = handler,
            None => self.methods.push((matcher, handler)),
        }
        Ok(self)
    }

    /// Registers an asynchronous work unit, replacing any earlier one with the same name.
    pub fn add_thunk<W>(&mut self, name: &str, work: W) -> Result<&mut Self, ResourceError>
    where
        W: Work + 'static,
    {
        if name.trim().is_empty() {
            return Err(ResourceError::invalid("name", "Resource::add_thunk", "a non-empty string"));
        }
        let kind = self.localise(name)?;
        debug!(%kind, "Thunk registered");
        self.thunks.insert(kind, Arc::new(work));
        Ok(self)
    }

    /// Returns an action creator for a type the reducer handles.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotFound`] when no registered handler responds to the type.
    pub fn action(&self, kind: &str) -> Result<ActionCreator, ResourceError> {
        if kind.trim().is_empty() {
            return Err(ResourceError::invalid("type", "Resource::action", "a non-empty string"));
        }
        let kind = self.localise(kind)?;
        if !self.methods.iter().any(|(matcher, _)| matcher.matches(&kind)) {
            return Err(ResourceError::NotFound(format!(
                "Action \"{kind}\" does not exist on the resource."
            )));
        }
        Ok(ActionCreator::new(kind))
    }

    /// Returns the named work unit wrapped in the loading/error lifecycle.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotFound`] when no thunk was registered under `name`.
    pub fn thunk(&self, name: &str) -> Result<Thunk, ResourceError> {
        if name.trim().is_empty() {
            return Err(ResourceError::invalid("name", "Resource::thunk", "a non-empty string"));
        }
        let kind = self.localise(name)?;
        let work = self.thunks.get(&kind).cloned().ok_or_else(|| {
            ResourceError::NotFound(format!("Thunk \"{kind}\" does not exist on the resource."))
        })?;
        Ok(Thunk::new(
            kind,
            self.localise("loading")?,
            self.localise("errored")?,
            work,
            self.clone(),
        ))
    }

    /// Assembles the current handler table into a reducer.
    pub fn reducer(&self) -> Reducer {
        Reducer::new(self.initial_state.clone(), self.methods.clone())
    }
}

impl std::fmt::Debug for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resource")
            .field("scope", &self.names.scope())
            .field("name", &self.names.name())
            .field("methods", &self.methods.iter().map(|(m, _)| m).collect::<Vec<_>>())
            .field("thunks", &self.thunks.keys().collect::<Vec<_>>())
            .finish()
    }
}
