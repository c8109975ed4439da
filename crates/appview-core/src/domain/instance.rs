//! Instance model: the two per-instance datasets and their merged view.
//!
//! - `InstanceStatus`: usage stats + isolation segment（主データセット）
//! - `InstanceRuntimeInfo`: state / since / details（副データセット）
//! - `ApplicationInstanceWithStats`: 両者を instance ID で結合したもの

use serde::{Deserialize, Serialize};

/// State of one application instance as reported by the platform.
///
/// `Absent` marks an instance present in the status dataset but missing
/// from the runtime dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationInstanceState {
    Starting,
    Running,
    Crashed,
    Down,
    Flapping,
    Unknown,
    #[default]
    Absent,
}

impl ApplicationInstanceState {
    /// 起動中または稼働中か
    pub fn is_starting_or_running(self) -> bool {
        matches!(self, Self::Starting | Self::Running)
    }
}

/// Per-instance usage stats (the authoritative dataset for which IDs exist).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceStatus {
    pub id: u32,
    pub cpu: f64,
    pub memory: u64,
    pub memory_quota: u64,
    pub disk: u64,
    pub disk_quota: u64,
    pub isolation_segment: String,
    pub uptime_secs: u64,
}

impl InstanceStatus {
    pub fn new(id: u32, isolation_segment: impl Into<String>) -> Self {
        Self {
            id,
            isolation_segment: isolation_segment.into(),
            ..Self::default()
        }
    }
}

/// Per-instance runtime info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceRuntimeInfo {
    pub id: u32,
    pub state: ApplicationInstanceState,
    /// Unix seconds since the instance entered `state`.
    pub since: f64,
    pub details: String,
}

impl InstanceRuntimeInfo {
    pub fn new(id: u32, state: ApplicationInstanceState) -> Self {
        Self {
            id,
            state,
            ..Self::default()
        }
    }
}

/// One instance with stats and runtime info merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationInstanceWithStats {
    pub id: u32,
    pub state: ApplicationInstanceState,
    pub cpu: f64,
    pub memory: u64,
    pub memory_quota: u64,
    pub disk: u64,
    pub disk_quota: u64,
    pub isolation_segment: String,
    pub uptime_secs: u64,
    pub since: f64,
    pub details: String,
}

impl ApplicationInstanceWithStats {
    /// status を正とし、runtime info があればそこから state 等を補う
    ///
    /// `id` は両データセット共通のキー。
    pub fn merge(id: u32, status: InstanceStatus, runtime: Option<&InstanceRuntimeInfo>) -> Self {
        let (state, since, details) = match runtime {
            Some(info) => (info.state, info.since, info.details.clone()),
            None => (ApplicationInstanceState::Absent, 0.0, String::new()),
        };
        Self {
            id,
            state,
            cpu: status.cpu,
            memory: status.memory,
            memory_quota: status.memory_quota,
            disk: status.disk,
            disk_quota: status.disk_quota,
            isolation_segment: status.isolation_segment,
            uptime_secs: status.uptime_secs,
            since,
            details,
        }
    }
}
