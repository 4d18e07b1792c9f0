// File: src/controller.rs
// Purpose: Controller registry used by the router to resolve controller#action targets

use simplemvc_router::{to_camel_case, ControllerResolver, Params};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Action handler: receives the placeholders captured by the matched route
pub type Handler = Arc<dyn Fn(&Params) -> anyhow::Result<String> + Send + Sync>;

/// Failure to turn a resolved target into a handler
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("uninitialized controller {0}")]
    ControllerNotFound(String),

    #[error("undefined action `{action}` for {controller}")]
    ActionNotFound { controller: String, action: String },
}

/// A named table of action handlers
#[derive(Clone, Default)]
pub struct Controller {
    actions: HashMap<String, Handler>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an action handler (functional builder)
    ///
    /// # Examples
    ///
    /// ```
    /// use simplemvc::Controller;
    ///
    /// let posts = Controller::new()
    ///     .action("index", |_| Ok("all posts".to_string()))
    ///     .action("show", |params| Ok(format!("post {}", params["id"])));
    ///
    /// assert!(posts.has_action("show"));
    /// ```
    pub fn action<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Params) -> anyhow::Result<String> + Send + Sync + 'static,
    {
        self.actions.insert(name.into(), Arc::new(handler));
        self
    }

    pub fn has_action(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Action names, sorted
    pub fn action_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn handler(&self, name: &str) -> Option<Handler> {
        self.actions.get(name).cloned()
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("actions", &self.action_names())
            .finish()
    }
}

/// Maps controller class names (`PostsController`) to controllers
///
/// Controllers are registered by base name; the name is camel-cased the same
/// way the router camel-cases `:controller` values, so `"posts"`,
/// `"Posts"` and the router's `"Posts"` all land on `PostsController`.
#[derive(Clone, Default, Debug)]
pub struct ControllerRegistry {
    controllers: HashMap<String, Controller>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a controller (functional builder)
    pub fn with_controller(mut self, base_name: &str, controller: Controller) -> Self {
        self.register(base_name, controller);
        self
    }

    /// Registers a controller, replacing any previous one with the same name
    pub fn register(&mut self, base_name: &str, controller: Controller) {
        let class_name = class_name(base_name);
        debug!(controller = %class_name, actions = ?controller.action_names(), "registered controller");
        self.controllers.insert(class_name, controller);
    }

    /// Looks up a controller by base name
    pub fn get(&self, base_name: &str) -> Option<&Controller> {
        self.controllers.get(&class_name(base_name))
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}

impl ControllerResolver for ControllerRegistry {
    type Action = BoundAction;
    type Error = DispatchError;

    fn resolve(&self, controller: &str, action: &str) -> Result<BoundAction, DispatchError> {
        let class_name = class_name(controller);
        let found = self
            .controllers
            .get(&class_name)
            .ok_or_else(|| DispatchError::ControllerNotFound(class_name.clone()))?;

        let handler = found
            .handler(action)
            .ok_or_else(|| DispatchError::ActionNotFound {
                controller: class_name.clone(),
                action: action.to_string(),
            })?;

        Ok(BoundAction {
            controller: class_name,
            action: action.to_string(),
            handler,
        })
    }
}

/// `posts` -> `PostsController`
fn class_name(base_name: &str) -> String {
    format!("{}Controller", to_camel_case(base_name))
}

/// A handler bound to its controller and action names
#[derive(Clone)]
pub struct BoundAction {
    controller: String,
    action: String,
    handler: Handler,
}

impl BoundAction {
    /// Controller class name, e.g. `PostsController`
    pub fn controller(&self) -> &str {
        &self.controller
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// Invokes the handler
    pub fn call(&self, params: &Params) -> anyhow::Result<String> {
        (self.handler)(params)
    }
}

impl fmt::Debug for BoundAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundAction")
            .field("controller", &self.controller)
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}
