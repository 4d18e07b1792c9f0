//! # SimpleMVC Router
//!
//! An ordered routing table that maps request paths onto `controller#action`
//! targets:
//! - Literal segments (`/ping`)
//! - Placeholders (`/users/:id`), each capturing `[A-Za-z0-9_]+`
//! - Static targets (`"/ping" => "health#check"`)
//! - Dynamic targets built from `:controller` and `:action`
//! - Default-action routes (`":controller"` with default `index`)
//!
//! ## Matching
//!
//! Routes are tried in registration order and the first pattern that matches
//! wins. Once a route has matched, its target either resolves or the lookup
//! ends with no result; later routes are not consulted.
//!
//! ## Example
//!
//! ```
//! use simplemvc_router::Router;
//!
//! let resolver = |controller: &str, action: &str| -> Result<String, String> {
//!     Ok(format!("{controller}Controller#{action}"))
//! };
//!
//! let router = Router::draw(resolver, |map| {
//!     map.static_route("/ping", "health#check");
//!     map.default_route(":controller", "home", "index");
//!     map.route("/:controller/:action");
//! })
//! .unwrap();
//!
//! assert_eq!(router.lookup("/ping").unwrap(), Some("HealthController#check".to_string()));
//! assert_eq!(router.lookup("/posts").unwrap(), Some("PostsController#index".to_string()));
//! assert_eq!(router.lookup("/posts/show").unwrap(), Some("PostsController#show".to_string()));
//! assert_eq!(router.lookup("/a/b/c").unwrap(), None);
//! ```

mod error;
mod resolver;
mod target;
pub mod path;
pub mod route;

pub use error::RouteError;
pub use resolver::ControllerResolver;
pub use route::{CompileMode, DefaultTarget, Params, Route, RouteSpec, RouteTarget};
pub use target::{to_camel_case, Target};

use tracing::{debug, trace, warn};

// ============================================================================
// Match Result
// ============================================================================

/// Result of matching a path against the table
#[derive(Debug, Clone)]
pub struct RouteMatch<'a> {
    /// The first route whose pattern matched
    pub route: &'a Route,
    /// Placeholder values captured from the (possibly rewritten) path
    pub params: Params,
    /// Parsed target, `None` when the resolved string is not `controller#action`
    pub target: Option<Target>,
}

impl RouteMatch<'_> {
    /// Whether the matched route produced a usable target
    pub fn is_resolved(&self) -> bool {
        self.target.is_some()
    }
}

// ============================================================================
// Router
// ============================================================================

/// Ordered route table with an injected controller resolver
///
/// Registration takes `&mut self`; once built, the table is only read, so a
/// `Router` shared behind an `Arc` can serve lookups from any number of
/// threads when the resolver is `Sync`.
pub struct Router<R> {
    routes: Vec<Route>,
    resolver: R,
    mode: CompileMode,
}

impl<R> Router<R> {
    /// Creates an empty, permissive router
    pub fn new(resolver: R) -> Self {
        Self {
            routes: Vec::new(),
            resolver,
            mode: CompileMode::Permissive,
        }
    }

    /// Sets the compile mode used by [`Router::map`] and the builder
    pub fn with_mode(mut self, mode: CompileMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builds a router from a route-drawing closure
    ///
    /// Declarations are registered in the order they are made. The first
    /// template that fails to compile aborts the build.
    pub fn draw<F>(resolver: R, block: F) -> Result<Self, RouteError>
    where
        F: FnOnce(&mut RouteMapper),
    {
        Self::draw_with_mode(resolver, CompileMode::Permissive, block)
    }

    /// [`Router::draw`] with an explicit compile mode
    pub fn draw_with_mode<F>(resolver: R, mode: CompileMode, block: F) -> Result<Self, RouteError>
    where
        F: FnOnce(&mut RouteMapper),
    {
        let mut mapper = RouteMapper::default();
        block(&mut mapper);
        Self::from_specs(resolver, mapper.into_specs(), mode)
    }

    /// Builds a router from a declarative list, preserving its order
    pub fn from_specs<I>(resolver: R, specs: I, mode: CompileMode) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = RouteSpec>,
    {
        let mut router = Self::new(resolver).with_mode(mode);
        for spec in specs {
            router.map(&spec)?;
        }
        Ok(router)
    }

    /// Compiles a declaration and appends it
    pub fn map(&mut self, spec: &RouteSpec) -> Result<&Route, RouteError> {
        let route = spec.compile(self.mode)?;
        Ok(self.register(route))
    }

    /// Appends an already compiled route
    pub fn register(&mut self, route: Route) -> &Route {
        debug!(
            template = route.template(),
            pattern = route.pattern(),
            placeholders = ?route.placeholders(),
            static_target = route.static_target(),
            default_suffix = route.default_suffix(),
            "registered route"
        );
        self.routes.push(route);
        &self.routes[self.routes.len() - 1]
    }

    /// Finds the first route matching `path` and resolves its target
    ///
    /// Returns `None` only when no route matches. A matched route whose
    /// target does not parse is still returned, with `target: None`.
    pub fn match_route(&self, path: &str) -> Option<RouteMatch<'_>> {
        self.routes.iter().find_map(|route| {
            trace!(path, pattern = route.pattern(), "trying route");
            let params = route.matches(path)?;
            let target_str = route.target_for(&params);
            let target = Target::parse(&target_str);

            match &target {
                Some(target) => debug!(path, template = route.template(), %target, "route matched"),
                None => warn!(
                    path,
                    template = route.template(),
                    target = %target_str,
                    "route matched but target is not controller#action"
                ),
            }

            Some(RouteMatch {
                route,
                params,
                target,
            })
        })
    }

    /// Registered routes in match order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn mode(&self) -> CompileMode {
        self.mode
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }
}

impl<R: ControllerResolver> Router<R> {
    /// Looks up the action for `path`
    ///
    /// - `Ok(None)`: nothing matched, or the matched route had no usable target
    /// - `Ok(Some(action))`: the resolver's invocable
    /// - `Err(e)`: the resolver failed; passed through as-is
    pub fn lookup(&self, path: &str) -> Result<Option<R::Action>, R::Error> {
        let Some(target) = self.match_route(path).and_then(|m| m.target) else {
            return Ok(None);
        };

        self.resolver
            .resolve(&target.controller_name(), target.action())
            .map(Some)
    }
}

impl<R> std::fmt::Debug for Router<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Route Mapper
// ============================================================================

/// Collects route declarations inside [`Router::draw`]
#[derive(Debug, Default)]
pub struct RouteMapper {
    specs: Vec<RouteSpec>,
}

impl RouteMapper {
    /// Declares a route resolved from `:controller` and `:action`
    pub fn route(&mut self, template: impl Into<String>) -> &mut Self {
        self.push(RouteSpec::new(template))
    }

    /// Declares a route with a fixed `controller#action` target
    pub fn static_route(&mut self, template: impl Into<String>, target: impl Into<String>) -> &mut Self {
        self.push(RouteSpec::new(template).to(target))
    }

    /// Declares a default-action route
    pub fn default_route(
        &mut self,
        template: impl Into<String>,
        controller: impl Into<String>,
        action: impl Into<String>,
    ) -> &mut Self {
        self.push(RouteSpec::new(template).with_default(controller, action))
    }

    /// Adds a prepared declaration
    pub fn push(&mut self, spec: RouteSpec) -> &mut Self {
        self.specs.push(spec);
        self
    }

    pub fn into_specs(self) -> Vec<RouteSpec> {
        self.specs
    }
}
