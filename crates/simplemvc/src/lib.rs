// SimpleMVC - controller#action dispatch for Rust web apps
// Route table lives in simplemvc-router; this crate supplies controllers, config and logging

pub mod app;
pub mod config;
pub mod controller;
pub mod logging;

// Re-export framework types
pub use app::Application;
pub use config::{Config, DefaultActionConfig, LoggingConfig, RouteConfig, RoutingConfig};
pub use controller::{BoundAction, Controller, ControllerRegistry, DispatchError, Handler};

// Re-export the router
pub use simplemvc_router as router;
pub use simplemvc_router::{Params, RouteSpec, Router};
