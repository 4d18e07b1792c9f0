// File: src/app.rs
// Purpose: Route table + controller registry wired together from configuration

use crate::config::Config;
use crate::controller::{BoundAction, ControllerRegistry, DispatchError};
use anyhow::{Context, Result};
use simplemvc_router::{ControllerResolver, Router};
use std::path::Path;
use tracing::{debug, info};

/// Application: configuration, route table and controllers
#[derive(Debug)]
pub struct Application {
    config: Config,
    router: Router<ControllerRegistry>,
}

impl Application {
    /// Builds the route table from `config.routes`, in file order
    pub fn new(config: Config, registry: ControllerRegistry) -> Result<Self> {
        let specs = config.route_specs()?;
        let router = Router::from_specs(registry, specs, config.routing.compile_mode())
            .context("Failed to build route table")?;

        info!(
            routes = router.len(),
            controllers = router.resolver().len(),
            "route table ready"
        );

        Ok(Self { config, router })
    }

    /// Loads configuration from `path` and builds the application
    pub fn from_config_file(path: impl AsRef<Path>, registry: ControllerRegistry) -> Result<Self> {
        let config = Config::load(path)?;
        Self::new(config, registry)
    }

    /// Resolves `path` to a bound action without invoking it
    ///
    /// `Ok(None)` means not found; `Err` means the route resolved to a
    /// controller or action the registry does not know.
    pub fn dispatch(&self, path: &str) -> Result<Option<BoundAction>, DispatchError> {
        self.router.lookup(path)
    }

    /// Resolves `path` and invokes the action with the matched placeholders
    pub fn handle(&self, path: &str) -> Result<Option<String>> {
        let Some(matched) = self.router.match_route(path) else {
            debug!(path, "no route matched");
            return Ok(None);
        };
        let Some(target) = matched.target else {
            return Ok(None);
        };

        let action = self
            .router
            .resolver()
            .resolve(&target.controller_name(), target.action())?;

        action
            .call(&matched.params)
            .with_context(|| format!("{}#{} failed", action.controller(), action.action()))
            .map(Some)
    }

    pub fn router(&self) -> &Router<ControllerRegistry> {
        &self.router
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
