//! ApplicationSummary: the aggregate returned to the CLI.

use serde::{Deserialize, Serialize};

use super::application::Application;
use super::instance::ApplicationInstanceWithStats;
use super::route::{Route, Stack};

/// Everything `app <name>` shows about one application.
///
/// Built fresh per aggregation. `isolation_segment` always equals the
/// segment of the lowest-ID entry in `running_instances` (empty if none).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSummary {
    #[serde(flatten)]
    pub application: Application,

    /// Ordered by ascending instance ID.
    #[serde(default)]
    pub running_instances: Vec<ApplicationInstanceWithStats>,

    #[serde(default)]
    pub routes: Vec<Route>,

    #[serde(default)]
    pub stack: Stack,

    #[serde(default)]
    pub isolation_segment: String,
}

impl ApplicationSummary {
    pub fn new(application: Application) -> Self {
        Self {
            application,
            ..Self::default()
        }
    }

    /// Number of instances in STARTING or RUNNING.
    pub fn starting_or_running_instance_count(&self) -> usize {
        self.running_instances
            .iter()
            .filter(|instance| instance.state.is_starting_or_running())
            .count()
    }

    /// Installs the merged instances and derives the isolation segment.
    pub(crate) fn set_running_instances(&mut self, instances: Vec<ApplicationInstanceWithStats>) {
        self.isolation_segment = instances
            .iter()
            .min_by_key(|instance| instance.id)
            .map(|instance| instance.isolation_segment.clone())
            .unwrap_or_default();
        self.running_instances = instances;
    }

    pub fn route_urls(&self) -> Vec<String> {
        self.routes.iter().map(ToString::to_string).collect()
    }
}
