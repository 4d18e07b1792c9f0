// File: src/config.rs
// Purpose: Configuration and route declarations parsed from simplemvc.toml

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use simplemvc_router::{CompileMode, RouteSpec};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub routing: RoutingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Route declarations, tried in file order
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Reject empty placeholder names and regex syntax in literal segments
    #[serde(default = "default_false")]
    pub strict_templates: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Maximum level: trace, debug, info, warn or error
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default = "default_true")]
    pub ansi: bool,
}

/// A single `[[routes]]` entry
///
/// `to` and `default` are mutually exclusive; with neither, the target comes
/// from the `:controller` and `:action` placeholders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RouteConfig {
    pub path: String,

    /// Fixed `controller#action`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,

    /// Default action for paths that omit it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultActionConfig>,
}

/// `default = { controller = "...", action = "..." }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultActionConfig {
    #[serde(default)]
    pub controller: String,

    pub action: String,
}

// Default values
fn default_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

// Default implementations
impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            strict_templates: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            ansi: true,
        }
    }
}

impl RoutingConfig {
    pub fn compile_mode(&self) -> CompileMode {
        if self.strict_templates {
            CompileMode::Strict
        } else {
            CompileMode::Permissive
        }
    }
}

impl RouteConfig {
    /// Converts the entry into a route declaration
    pub fn to_spec(&self) -> Result<RouteSpec> {
        let spec = RouteSpec::new(self.path.clone());

        match (&self.to, &self.default) {
            (Some(_), Some(_)) => bail!(
                "route `{}` declares both `to` and `default`; pick one",
                self.path
            ),
            (Some(target), None) => Ok(spec.to(target.clone())),
            (None, Some(default)) => {
                Ok(spec.with_default(default.controller.clone(), default.action.clone()))
            }
            (None, None) => Ok(spec),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./simplemvc.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("simplemvc.toml")
    }

    /// Parse configuration from TOML text; blank text yields the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        Ok(toml::from_str(content)?)
    }

    /// Route declarations in file order
    pub fn route_specs(&self) -> Result<Vec<RouteSpec>> {
        self.routes.iter().map(RouteConfig::to_spec).collect()
    }
}
