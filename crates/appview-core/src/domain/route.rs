use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{RouteGuid, StackGuid};

/// A route mapped to an application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub guid: RouteGuid,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl Route {
    pub fn new(guid: impl Into<RouteGuid>, host: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            host: host.into(),
            ..Self::default()
        }
    }
}

/// `host.domain[:port][/path]`
impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.host.is_empty(), self.domain.is_empty()) {
            (false, false) => write!(f, "{}.{}", self.host, self.domain)?,
            (false, true) => f.write_str(&self.host)?,
            (true, _) => f.write_str(&self.domain)?,
        }
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        if !self.path.is_empty() {
            if !self.path.starts_with('/') {
                f.write_str("/")?;
            }
            f.write_str(&self.path)?;
        }
        Ok(())
    }
}

/// The runtime image an application's instances run on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<StackGuid>,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Stack {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
