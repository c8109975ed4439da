//! Application model: what the control plane returns for an app lookup.

use serde::{Deserialize, Serialize};

use super::ids::{ApplicationGuid, SpaceGuid, StackGuid};

/// Desired lifecycle state of an application.
///
/// Any value the platform adds later deserializes as `Unknown` instead of
/// failing the whole lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationState {
    Started,
    Stopped,
    #[default]
    #[serde(other)]
    Unknown,
}

/// An application as returned by the lookup endpoint.
///
/// Only `guid`, `name` and `state` drive aggregation. The rest is passed
/// through verbatim for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub guid: ApplicationGuid,
    pub name: String,
    #[serde(default)]
    pub state: ApplicationState,

    #[serde(default)]
    pub space_guid: SpaceGuid,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_guid: Option<StackGuid>,

    /// Desired instance count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instances: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_mb: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_quota_mb: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buildpack: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_buildpack: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_start_command: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_check_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staging_failed_reason: Option<String>,
}

impl Application {
    /// Minimal application with just identity and state.
    pub fn new(guid: impl Into<ApplicationGuid>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_state(mut self, state: ApplicationState) -> Self {
        self.state = state;
        self
    }

    pub fn is_started(&self) -> bool {
        self.state == ApplicationState::Started
    }
}
